use std::{sync::Arc, time::Duration};

use crate::{
    compile::draw::DrawList,
    config::story::StoryConfig,
    foundation::core::{Generation, Point},
    foundation::error::StoryResult,
    geo::fetch::{FetchHandle, FetchOutcome, FetchPoll, spawn_fetch},
    geo::geojson::Geography,
    geo::source::{GeographySource, source_from_spec},
    scenes::map::{MARKER_RADIUS, marker_positions},
    scenes::{Scene, SceneInputs, render},
    session::interaction::{MapState, PointerEvent},
};

/// Host-side state of the story: the active scene and everything tied to it.
///
/// The session owns the only mutable scene state. Rendering itself is the pure
/// [`crate::render`]; the session just decides what to feed it.
pub struct Session {
    config: Arc<StoryConfig>,
    source: Arc<dyn GeographySource>,
    active: Scene,
    generation: Generation,
    geography: Option<Arc<Geography>>,
    map: MapState,
    pending: Option<FetchHandle>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("source", &self.source.describe())
            .field("active", &self.active)
            .field("generation", &self.generation)
            .field("has_geography", &self.geography.is_some())
            .field("map", &self.map)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

impl Session {
    /// Start on the overview scene. Nothing is drawn or fetched until the first redraw or scene
    /// change.
    pub fn new(config: StoryConfig, source: Arc<dyn GeographySource>) -> StoryResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            source,
            active: Scene::Overview,
            generation: Generation::default(),
            geography: None,
            map: MapState::default(),
            pending: None,
        })
    }

    /// Session whose geography source comes from `config.geography`.
    pub fn from_config(config: StoryConfig) -> StoryResult<Self> {
        let source = source_from_spec(&config.geography)?;
        Self::new(config, source)
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn active_scene(&self) -> Scene {
        self.active
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Base map for the current generation, if it arrived.
    pub fn geography(&self) -> Option<&Geography> {
        self.geography.as_deref()
    }

    pub fn map_state(&self) -> &MapState {
        &self.map
    }

    /// `true` while a geography fetch for the current generation is outstanding.
    pub fn is_fetch_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Switch to scene `n` (1-based) and return the fresh surface.
    ///
    /// An index outside `{1, 2, 3}` fails with [`crate::StoryError::InvalidScene`] and leaves the
    /// session untouched. Otherwise the generation advances, any outstanding fetch is cancelled,
    /// pointer state is reset, and entering the map scene starts a new geography fetch.
    #[tracing::instrument(skip(self), fields(from = self.active.index()))]
    pub fn select_scene(&mut self, n: u8) -> StoryResult<DrawList> {
        let scene = Scene::from_index(n)?;
        self.enter(scene);
        Ok(self.redraw())
    }

    fn enter(&mut self, scene: Scene) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.generation = self.generation.next();
        self.active = scene;
        self.geography = None;
        self.map = MapState::default();

        if scene == Scene::InteractiveMap {
            match spawn_fetch(self.source.clone(), self.generation) {
                Ok(handle) => self.pending = Some(handle),
                Err(err) => {
                    tracing::warn!(error = %err, "could not start geography fetch; drawing markers only");
                }
            }
        }
    }

    /// Full surface for the active scene.
    pub fn redraw(&self) -> DrawList {
        let inputs = SceneInputs::new(&self.config)
            .with_geography(self.geography.as_deref())
            .with_map_state(&self.map);
        render(self.active, &inputs)
    }

    /// Check the outstanding fetch without blocking. Returns `true` when the surface needs a
    /// redraw.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        let poll = pending.poll();
        self.settle(poll)
    }

    /// Block up to `timeout` for the outstanding fetch. Returns `true` when the surface needs a
    /// redraw.
    pub fn wait_for_geography(&mut self, timeout: Duration) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        let poll = pending.wait(timeout);
        self.settle(poll)
    }

    fn settle(&mut self, poll: FetchPoll) -> bool {
        match poll {
            FetchPoll::Ready(outcome) => {
                self.pending = None;
                self.apply_fetch(outcome)
            }
            FetchPoll::Pending => false,
            FetchPoll::Lost => {
                self.pending = None;
                tracing::warn!("geography fetch ended without a result; drawing markers only");
                false
            }
        }
    }

    /// Accept a fetch result. Results from an older generation, or arriving while another scene
    /// is active, are dropped. Load failures are logged and leave the map without land.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation || self.active != Scene::InteractiveMap {
            tracing::debug!(
                fetched = outcome.generation.0,
                current = self.generation.0,
                "discarding stale geography"
            );
            return false;
        }
        match outcome.result {
            Ok(geo) => {
                self.geography = Some(Arc::new(geo));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "geography unavailable; drawing markers only");
                false
            }
        }
    }

    /// Feed pointer input to the map scene. Ignored on other scenes. Returns `true` when the
    /// surface needs a redraw.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        if self.active != Scene::InteractiveMap {
            return false;
        }
        let markers = marker_positions(&self.config);
        self.map.apply(event, &markers, MARKER_RADIUS)
    }

    /// Hover the marker for dataset index `index` with the pointer at its center. Unlike a
    /// pointer move this targets `index` even when other markers are stacked above it.
    pub fn hover_marker(&mut self, index: usize) -> bool {
        match self.marker_center(index) {
            Some(center) => self.map.hover_enter(index, center),
            None => false,
        }
    }

    /// Click the marker for dataset index `index`.
    pub fn click_marker(&mut self, index: usize) -> bool {
        if self.active != Scene::InteractiveMap || index >= self.config.dataset.len() {
            return false;
        }
        self.map.click(index)
    }

    fn marker_center(&self, index: usize) -> Option<Point> {
        if self.active != Scene::InteractiveMap {
            return None;
        }
        marker_positions(&self.config).get(index).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/session.rs"]
mod tests;
