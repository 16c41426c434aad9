//! End-to-end document loading: source -> worker -> view state

use std::time::Duration;

use haze_content::{
    ContentError, ContentLoader, DirSource, DocumentKind, LoadedDocument, MemorySource, Profile,
    Remote, RemoteState,
};

const WAIT: Duration = Duration::from_secs(2);

const HAZE_PROFILE: &str =
    r#"{"name":"Haze","age":25,"pronouns":"she/her","bio":["line1"],"likes":["metal"]}"#;

fn apply_profile(remote: &mut Remote<Profile>, loader: &ContentLoader) {
    let loaded = loader.wait(WAIT).expect("load result");
    assert_eq!(loaded.kind, DocumentKind::Profile);
    let result = loaded.result.and_then(|document| match document {
        LoadedDocument::Profile(profile) => Ok(profile),
        other => Err(ContentError::NotFound(format!("{:?}", other.kind()))),
    });
    remote.apply(loaded.generation, result);
}

#[test]
fn test_profile_scenario_ready() {
    let loader = ContentLoader::new(
        MemorySource::new().with_document("/profile.json", HAZE_PROFILE),
        "/",
    );
    let mut remote = Remote::new(DocumentKind::Profile);
    loader.request::<Profile>(remote.begin_refresh());
    apply_profile(&mut remote, &loader);

    assert!(!remote.is_loading());
    let profile = remote.data().expect("profile loaded");
    assert_eq!(profile.name, "Haze");
    assert_eq!(profile.bio.len(), 1);
    assert_eq!(profile.likes.len(), 1);
}

#[test]
fn test_profile_scenario_rejected() {
    let source = MemorySource::new();
    source.fail("/profile.json", 503);
    let loader = ContentLoader::new(source, "/");
    let mut remote = Remote::new(DocumentKind::Profile);
    loader.request::<Profile>(remote.begin_refresh());
    apply_profile(&mut remote, &loader);

    match remote.state() {
        RemoteState::Failed(message) => assert!(message.contains("503")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_rapid_refresh_keeps_latest() {
    let source = std::sync::Arc::new(MemorySource::new().with_document("/profile.json", HAZE_PROFILE));
    let loader = ContentLoader::with_shared(source.clone(), "/");
    let mut remote = Remote::new(DocumentKind::Profile);

    for _ in 0..5 {
        loader.request::<Profile>(remote.begin_refresh());
    }
    for _ in 0..5 {
        apply_profile(&mut remote, &loader);
    }

    assert_eq!(remote.generation(), 5);
    assert!(!remote.is_refreshing());
    assert_eq!(remote.data().map(|p| p.name.as_str()), Some("Haze"));
}

#[test]
fn test_dir_source_through_loader() {
    let root = std::env::temp_dir().join(format!("haze_content_it_{}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("profile.json"), HAZE_PROFILE).unwrap();

    let loader = ContentLoader::new(DirSource::new(&root), "/repo/");
    let mut remote = Remote::new(DocumentKind::Profile);
    loader.request::<Profile>(remote.begin_refresh());
    apply_profile(&mut remote, &loader);
    assert_eq!(remote.data().map(|p| p.age), Some(25));

    std::fs::remove_dir_all(&root).ok();
}
