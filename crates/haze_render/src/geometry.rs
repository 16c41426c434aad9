//! Cube mesh for particle instances

use crate::pipeline::Vertex;

/// Edge length of a particle cube before instance scaling
pub const CUBE_SIZE: f32 = 0.5;

/// 36 vertices (two triangles per face), counter-clockwise from outside
pub fn cube_vertices() -> Vec<Vertex> {
    let h = CUBE_SIZE / 2.0;
    // (normal, four corners in CCW order seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]]),
        ([0.0, 0.0, -1.0], [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]]),
        ([1.0, 0.0, 0.0], [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]]),
        ([-1.0, 0.0, 0.0], [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]]),
        ([0.0, 1.0, 0.0], [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]]),
        ([0.0, -1.0, 0.0], [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]]),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        for index in [0, 1, 2, 0, 2, 3] {
            vertices.push(Vertex {
                position: corners[index],
                normal,
            });
        }
    }
    vertices
}
