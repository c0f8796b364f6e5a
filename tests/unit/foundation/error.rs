use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoryError::geography("x")
            .to_string()
            .contains("geography load error:")
    );
    assert!(
        StoryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StoryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(StoryError::render("x").to_string().contains("render error:"));
}

#[test]
fn invalid_scene_names_the_index() {
    let msg = StoryError::InvalidScene(7).to_string();
    assert!(msg.contains("invalid scene: 7"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
