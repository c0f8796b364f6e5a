use super::*;
use crate::{foundation::error::StoryError, geo::source::InlineSource};
use std::sync::Mutex;

const EMPTY_COLLECTION: &str = r#"{"type":"FeatureCollection","features":[]}"#;

/// Blocks until the test releases it.
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
        Ok(EMPTY_COLLECTION.as_bytes().to_vec())
    }
}

#[test]
fn delivers_result_tagged_with_generation() {
    let src: Arc<dyn GeographySource> = Arc::new(InlineSource::new(EMPTY_COLLECTION.as_bytes()));
    let handle = spawn_fetch(src, Generation(7)).unwrap();
    assert_eq!(handle.generation(), Generation(7));

    match handle.wait(Duration::from_secs(5)) {
        FetchPoll::Ready(outcome) => {
            assert_eq!(outcome.generation, Generation(7));
            assert!(outcome.result.unwrap().features.is_empty());
        }
        other => panic!("expected ready, got {other:?}"),
    }
}

#[test]
fn load_failure_is_delivered_not_lost() {
    let src: Arc<dyn GeographySource> = Arc::new(InlineSource::new(&b"nope"[..]));
    let handle = spawn_fetch(src, Generation(1)).unwrap();
    match handle.wait(Duration::from_secs(5)) {
        FetchPoll::Ready(outcome) => {
            assert!(matches!(outcome.result, Err(StoryError::GeographyLoad(_))));
        }
        other => panic!("expected ready, got {other:?}"),
    }
}

#[test]
fn pending_until_source_resolves() {
    let (release, gate) = mpsc::channel();
    let src: Arc<dyn GeographySource> = Arc::new(GatedSource {
        gate: Mutex::new(gate),
    });
    let handle = spawn_fetch(src, Generation(2)).unwrap();
    assert!(matches!(handle.poll(), FetchPoll::Pending));

    release.send(()).unwrap();
    assert!(matches!(
        handle.wait(Duration::from_secs(5)),
        FetchPoll::Ready(_)
    ));
}

#[test]
fn cancelled_fetch_never_delivers() {
    let (release, gate) = mpsc::channel();
    let src: Arc<dyn GeographySource> = Arc::new(GatedSource {
        gate: Mutex::new(gate),
    });
    let handle = spawn_fetch(src, Generation(3)).unwrap();
    handle.cancel();
    release.send(()).unwrap();

    assert!(matches!(
        handle.wait(Duration::from_secs(5)),
        FetchPoll::Lost
    ));
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let a = CancelToken::default();
    let b = a.clone();
    assert!(!b.is_cancelled());
    a.cancel();
    assert!(b.is_cancelled());
}
