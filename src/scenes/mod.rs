pub(crate) mod chart;
pub(crate) mod map;
pub(crate) mod overview;
pub(crate) mod year_focus;

use crate::{
    compile::draw::DrawList,
    config::story::StoryConfig,
    foundation::error::{StoryError, StoryResult},
    geo::geojson::Geography,
    session::interaction::MapState,
};

/// One of the three fixed presentations.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Scene {
    /// Scene 1: line chart of the whole series.
    Overview,
    /// Scene 2: the series muted, the focus year emphasized.
    YearFocus,
    /// Scene 3: markers on a world map with hover and click.
    InteractiveMap,
}

impl Scene {
    /// All scenes in story order.
    pub const ALL: [Scene; 3] = [Scene::Overview, Scene::YearFocus, Scene::InteractiveMap];

    /// Scene for a 1-based index.
    pub fn from_index(n: u8) -> StoryResult<Self> {
        match n {
            1 => Ok(Scene::Overview),
            2 => Ok(Scene::YearFocus),
            3 => Ok(Scene::InteractiveMap),
            other => Err(StoryError::InvalidScene(other)),
        }
    }

    /// 1-based index.
    pub fn index(self) -> u8 {
        match self {
            Scene::Overview => 1,
            Scene::YearFocus => 2,
            Scene::InteractiveMap => 3,
        }
    }
}

impl TryFrom<u8> for Scene {
    type Error = StoryError;

    fn try_from(n: u8) -> StoryResult<Self> {
        Scene::from_index(n)
    }
}

/// Everything a scene reads besides its own index.
#[derive(Clone, Copy, Debug)]
pub struct SceneInputs<'a> {
    pub config: &'a StoryConfig,
    /// Base map, once loaded. `None` draws the map scene without land.
    pub geography: Option<&'a Geography>,
    /// Pointer state of the map scene.
    pub map: &'a MapState,
}

impl<'a> SceneInputs<'a> {
    /// No geography, no pointer interaction.
    pub fn new(config: &'a StoryConfig) -> Self {
        Self {
            config,
            geography: None,
            map: &MapState::IDLE,
        }
    }

    pub fn with_geography(mut self, geography: Option<&'a Geography>) -> Self {
        self.geography = geography;
        self
    }

    pub fn with_map_state(mut self, map: &'a MapState) -> Self {
        self.map = map;
        self
    }
}

/// Draw one scene from scratch.
///
/// The result describes the whole surface; nothing from earlier renders carries over.
#[tracing::instrument(skip(inputs))]
pub fn render(scene: Scene, inputs: &SceneInputs<'_>) -> DrawList {
    let list = match scene {
        Scene::Overview => overview::render_overview(inputs.config),
        Scene::YearFocus => year_focus::render_year_focus(inputs.config),
        Scene::InteractiveMap => map::render_map(inputs.config, inputs.geography, inputs.map),
    };
    tracing::debug!(ops = list.ops.len(), "scene rendered");
    list
}
