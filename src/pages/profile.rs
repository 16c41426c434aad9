//! "about me" profile card

use haze_content::{Profile, Remote};

use super::{remote_blocks, Block};

/// Profile card: name, `age pronouns`, bio lines and likes
pub fn profile_card(profile: &Remote<Profile>) -> Vec<Block> {
    let mut blocks = vec![Block::Section {
        title: "about me".to_string(),
        refreshing: profile.is_refreshing() && !profile.is_loading(),
    }];

    blocks.extend(remote_blocks(profile, |p| {
        vec![
            Block::Heading(p.name.clone()),
            Block::Text(format!("{} {}", p.age, p.pronouns)),
            Block::Heading("Bio".to_string()),
            Block::List(p.bio.clone()),
            Block::Heading("likes".to_string()),
            Block::List(p.likes.clone()),
        ]
    }));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze_content::DocumentKind;

    #[test]
    fn test_ready_profile() {
        let mut remote = Remote::new(DocumentKind::Profile);
        let generation = remote.begin_refresh();
        remote.apply(
            generation,
            Ok(Profile {
                name: "Haze".to_string(),
                age: 25,
                pronouns: "she/her".to_string(),
                bio: vec!["line1".to_string()],
                likes: vec!["metal".to_string()],
                ..Default::default()
            }),
        );

        let blocks = profile_card(&remote);
        assert!(blocks.contains(&Block::Heading("Haze".to_string())));
        assert!(blocks.contains(&Block::Text("25 she/her".to_string())));
        assert!(blocks.contains(&Block::List(vec!["line1".to_string()])));
        assert!(blocks.contains(&Block::List(vec!["metal".to_string()])));
        assert!(!blocks.iter().any(|b| matches!(b, Block::Placeholder(_))));
    }

    #[test]
    fn test_refresh_keeps_content_and_marks_section() {
        let mut remote = Remote::new(DocumentKind::Profile);
        let generation = remote.begin_refresh();
        remote.apply(generation, Ok(Profile::default()));
        remote.begin_refresh();

        let blocks = profile_card(&remote);
        assert_eq!(
            blocks[0],
            Block::Section {
                title: "about me".to_string(),
                refreshing: true
            }
        );
        assert!(!blocks.iter().any(|b| matches!(b, Block::Placeholder(_))));
    }
}
