use super::*;

#[test]
fn default_config_validates_and_carries_five_records() {
    let cfg = StoryConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.dataset.len(), 5);
    assert_eq!(cfg.dataset[0], Observation::new(2000, 14.29));
    assert_eq!(cfg.dataset[4], Observation::new(2020, 14.89));
    assert_eq!(cfg.focus_year, 2010);
}

#[test]
fn scales_follow_margins() {
    let cfg = StoryConfig::default();
    let x = cfg.x_scale();
    let y = cfg.y_scale();
    assert_eq!(x.map(2000.0), 50.0);
    assert_eq!(x.map(2020.0), 910.0);
    assert_eq!(y.map(14.0), 450.0);
    assert_eq!(y.map(15.0), 50.0);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg = StoryConfig::from_json_str(
        r#"{
            "focus_year": 2015,
            "dataset": [
                { "year": 2015, "temperature": 14.69, "lat": 51.5, "lon": -0.12 }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.focus_year, 2015);
    assert_eq!(cfg.dataset.len(), 1);
    assert_eq!(cfg.dataset[0].latitude, 51.5);
    assert_eq!(cfg.dataset[0].longitude, -0.12);
    assert_eq!(cfg.canvas, Canvas::default());
    assert_eq!(cfg.year_focus_text().title, "Focus on the Year 2015");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StoryConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, StoryError::Serde(_)));
}

#[test]
fn empty_dataset_is_rejected() {
    let cfg = StoryConfig {
        dataset: vec![],
        ..StoryConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(StoryError::Validation(_))));
}

#[test]
fn degenerate_domain_is_rejected() {
    let cfg = StoryConfig {
        temperature_domain: [14.0, 14.0],
        ..StoryConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("temperature_domain"));
}

#[test]
fn non_finite_observation_is_rejected() {
    let mut cfg = StoryConfig::default();
    cfg.dataset[2].temperature = f64::NAN;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("year 2010"));
}

#[test]
fn oversized_margin_is_rejected() {
    let cfg = StoryConfig {
        margin: 250.0,
        ..StoryConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn default_projection_centers_on_surface() {
    let cfg = StoryConfig::default();
    let p = cfg.mercator().project(0.0, 0.0);
    assert!((p.x - 480.0).abs() < 1e-9);
    assert!((p.y - 500.0 / 1.5).abs() < 1e-9);
}

#[test]
fn tick_counts_are_bounded() {
    let err = StoryConfig::from_json_str(r#"{"temperature_ticks": 5000000}"#).unwrap_err();
    assert!(matches!(err, StoryError::Validation(_)));
    assert!(err.to_string().contains("temperature_ticks"));

    let cfg = StoryConfig {
        year_ticks: MAX_TICKS,
        ..StoryConfig::default()
    };
    assert!(cfg.validate().is_ok());
    let cfg = StoryConfig {
        year_ticks: MAX_TICKS + 1,
        ..StoryConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn domain_whose_span_overflows_is_rejected() {
    let err =
        StoryConfig::from_json_str(r#"{"temperature_domain": [-1e308, 1e308]}"#).unwrap_err();
    assert!(matches!(err, StoryError::Validation(_)));
    assert!(err.to_string().contains("temperature_domain"));
}
