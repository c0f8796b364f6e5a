use super::*;
use crate::{
    compile::draw::Role,
    foundation::error::StoryError,
    geo::source::{InlineSource, UnavailableSource},
};
use std::sync::{Mutex, mpsc};

const ONE_COUNTRY: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"name":"A"},
   "geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,0]]]}}
]}"#;

/// Never resolves unless the test sends on the gate.
struct GatedSource {
    gate: Mutex<mpsc::Receiver<()>>,
}

impl GeographySource for GatedSource {
    fn describe(&self) -> String {
        "gated".to_string()
    }

    fn fetch_bytes(&self) -> StoryResult<Vec<u8>> {
        let gate = self.gate.lock().expect("gate lock");
        let _ = gate.recv();
        Ok(ONE_COUNTRY.as_bytes().to_vec())
    }
}

fn inline_session() -> Session {
    Session::new(
        StoryConfig::default(),
        Arc::new(InlineSource::new(ONE_COUNTRY.as_bytes())),
    )
    .unwrap()
}

#[test]
fn starts_on_overview_without_fetching() {
    let s = inline_session();
    assert_eq!(s.active_scene(), Scene::Overview);
    assert_eq!(s.generation(), Generation(0));
    assert!(!s.is_fetch_pending());
    assert!(s.geography().is_none());
}

#[test]
fn invalid_scene_leaves_state_alone() {
    let mut s = inline_session();
    s.select_scene(2).unwrap();
    let before = s.generation();
    assert!(matches!(s.select_scene(0), Err(StoryError::InvalidScene(0))));
    assert!(matches!(s.select_scene(4), Err(StoryError::InvalidScene(4))));
    assert_eq!(s.active_scene(), Scene::YearFocus);
    assert_eq!(s.generation(), before);
}

#[test]
fn every_selection_bumps_generation() {
    let mut s = inline_session();
    s.select_scene(1).unwrap();
    s.select_scene(1).unwrap();
    assert_eq!(s.generation(), Generation(2));
}

#[test]
fn map_scene_picks_up_geography() {
    let mut s = inline_session();
    let first = s.select_scene(3).unwrap();
    assert_eq!(first.count(Role::Land), 0);
    assert!(s.is_fetch_pending());

    assert!(s.wait_for_geography(Duration::from_secs(5)));
    assert!(!s.is_fetch_pending());
    assert_eq!(s.redraw().count(Role::Land), 1);
}

#[test]
fn stale_outcome_is_discarded() {
    let mut s = inline_session();
    s.select_scene(3).unwrap();
    let old = s.generation();
    s.select_scene(3).unwrap();

    let geo = crate::geo::geojson::parse_geojson(ONE_COUNTRY.as_bytes()).unwrap();
    assert!(!s.apply_fetch(FetchOutcome {
        generation: old,
        result: Ok(geo),
    }));
    assert!(s.geography().is_none());
}

#[test]
fn outcome_for_other_scene_is_discarded() {
    let mut s = inline_session();
    s.select_scene(1).unwrap();
    let geo = crate::geo::geojson::parse_geojson(ONE_COUNTRY.as_bytes()).unwrap();
    assert!(!s.apply_fetch(FetchOutcome {
        generation: s.generation(),
        result: Ok(geo),
    }));
    assert!(s.geography().is_none());
}

#[test]
fn failed_fetch_still_draws_markers() {
    let mut s = Session::new(
        StoryConfig::default(),
        Arc::new(UnavailableSource::new("offline")),
    )
    .unwrap();
    s.select_scene(3).unwrap();
    assert!(!s.wait_for_geography(Duration::from_secs(5)));
    assert!(!s.is_fetch_pending());
    let list = s.redraw();
    assert_eq!(list.count(Role::Land), 0);
    assert_eq!(list.marker_count(), 5);
}

#[test]
fn leaving_map_cancels_hanging_fetch() {
    let (release, gate) = mpsc::channel::<()>();
    let mut s = Session::new(
        StoryConfig::default(),
        Arc::new(GatedSource {
            gate: Mutex::new(gate),
        }),
    )
    .unwrap();
    s.select_scene(3).unwrap();
    assert!(!s.poll());
    assert!(s.is_fetch_pending());

    s.select_scene(1).unwrap();
    assert!(!s.is_fetch_pending());
    drop(release);
    assert!(!s.poll());
    assert_eq!(s.active_scene(), Scene::Overview);
}

#[test]
fn pointer_only_counts_on_map() {
    let mut s = inline_session();
    assert!(!s.pointer(PointerEvent::Click(Point::new(480.0, 333.0))));
    assert!(!s.hover_marker(0));
    assert!(!s.click_marker(0));

    s.select_scene(3).unwrap();
    assert!(s.hover_marker(1));
    assert_eq!(s.map_state().hover().map(|h| h.marker), Some(1));
    assert!(s.click_marker(2));
    assert!(s.redraw().text(Role::Info).is_some());
    assert!(!s.click_marker(99));
}

#[test]
fn scene_change_clears_pointer_state() {
    let mut s = inline_session();
    s.select_scene(3).unwrap();
    s.hover_marker(0);
    s.click_marker(0);
    s.select_scene(3).unwrap();
    assert_eq!(*s.map_state(), MapState::IDLE);
}

#[cfg(feature = "http")]
#[test]
fn default_config_fetches_geography_over_http() {
    let s = Session::from_config(StoryConfig::default()).unwrap();
    assert_eq!(
        s.source.describe(),
        format!("url '{}'", crate::config::story::DEFAULT_GEOGRAPHY_URL)
    );
}
