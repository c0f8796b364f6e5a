use super::*;

const ONE_SQUARE: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"name":"A"},
   "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
]}"#;

#[test]
fn inline_source_loads() {
    let src = InlineSource::new(ONE_SQUARE.as_bytes());
    let geo = load_geography(&src).unwrap();
    assert_eq!(geo.features.len(), 1);
    assert!(src.describe().starts_with("inline"));
}

#[test]
fn file_source_reads_from_disk() {
    let dir = std::env::temp_dir().join(format!("climate_story_src_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("world.geojson");
    std::fs::write(&path, ONE_SQUARE).unwrap();

    let geo = load_geography(&FileSource::new(&path)).unwrap();
    assert_eq!(geo.features[0].name.as_deref(), Some("A"));
}

#[test]
fn missing_file_is_a_geography_error() {
    let err = load_geography(&FileSource::new("does/not/exist.geojson")).unwrap_err();
    assert!(matches!(err, StoryError::GeographyLoad(_)));
}

#[test]
fn plain_path_is_a_file() {
    let src = source_from_spec("  maps/world.geojson ").unwrap();
    assert_eq!(src.describe(), "file 'maps/world.geojson'");
}

#[test]
fn blank_source_is_rejected() {
    assert!(matches!(
        source_from_spec("   "),
        Err(StoryError::Validation(_))
    ));
}

#[cfg(not(feature = "http"))]
#[test]
fn url_without_http_feature_fails_at_fetch_time() {
    let src = source_from_spec("https://example.com/world.geojson").unwrap();
    assert!(src.describe().starts_with("unavailable"));
    let err = load_geography(src.as_ref()).unwrap_err();
    assert!(matches!(err, StoryError::GeographyLoad(_)));
    assert!(err.to_string().contains("`http` feature"));
}

#[cfg(feature = "http")]
#[test]
fn url_builds_http_source() {
    let src = source_from_spec("https://example.com/world.geojson").unwrap();
    assert_eq!(src.describe(), "url 'https://example.com/world.geojson'");
}
