//! Per-instance transform storage
//!
//! One record per particle, indexed by particle id. The buffer is allocated
//! once when the intro mounts and rewritten in place every frame.

use bytemuck::{Pod, Zeroable};

use haze_math::mat4;

use crate::motion::ParticleTransform;
use crate::particle::ParticleField;

/// GPU instance record: model matrix plus color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    /// RGBA color
    pub color: [f32; 4],
}

impl Default for InstanceData {
    fn default() -> Self {
        Self {
            model: mat4::IDENTITY,
            color: [1.0; 4],
        }
    }
}

/// Preallocated array of instance records
#[derive(Clone, Debug, Default)]
pub struct InstanceBuffer {
    instances: Vec<InstanceData>,
}

impl InstanceBuffer {
    /// Allocate one record per particle with its palette color
    pub fn for_field(field: &ParticleField) -> Self {
        let instances = field
            .iter()
            .map(|p| InstanceData {
                model: mat4::IDENTITY,
                color: p.color.to_rgba(),
            })
            .collect();
        Self { instances }
    }

    /// Overwrite the transform for particle `index`
    ///
    /// Out-of-range indices are ignored.
    #[inline]
    pub fn write(&mut self, index: usize, transform: &ParticleTransform) {
        if let Some(slot) = self.instances.get_mut(index) {
            slot.model = transform.to_matrix();
        }
    }

    /// Number of instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Get an instance record
    pub fn get(&self, index: usize) -> Option<&InstanceData> {
        self.instances.get(index)
    }

    /// Records as a slice
    pub fn as_slice(&self) -> &[InstanceData] {
        &self.instances
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
