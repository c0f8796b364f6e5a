//! A three-scene temperature story.
//!
//! The story walks a reader through a small series of yearly global temperature observations:
//!
//! - Scene 1 draws the series as a line chart with annotated endpoints
//! - Scene 2 mutes the chart and emphasizes one focus year
//! - Scene 3 places every observation on a Mercator world map with hover and click details
//!
//! Rendering is a pure function, [`render`], from a [`Scene`] and its [`SceneInputs`] to a
//! [`DrawList`]. A [`Session`] hosts the mutable part: the active scene, pointer state and the
//! background geography fetch, tagged with a [`Generation`] so late results never reach the wrong
//! scene. Draw lists are written out as SVG, PNG or JSON.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod compile;
pub(crate) mod config;
pub(crate) mod geo;
pub(crate) mod render;
pub(crate) mod scale;
pub(crate) mod scenes;
pub(crate) mod session;

pub use crate::foundation::core::{BezPath, Canvas, Color, Generation, Point, Vec2};
pub use crate::foundation::error::{StoryError, StoryResult};

pub use crate::compile::annotation::Annotation;
pub use crate::compile::axis::{Axis, AxisOrient, TickFormat};
pub use crate::compile::draw::{
    DrawList, DrawOp, FontWeight, Role, Stroke, TextAnchor, TextStyle,
};
pub use crate::config::story::{
    DEFAULT_GEOGRAPHY_URL, MAX_TICKS, Observation, Palette, ProjectionConfig, SceneText, SceneTexts,
    StoryConfig, default_dataset,
};
#[cfg(feature = "http")]
pub use crate::geo::source::HttpSource;
pub use crate::geo::fetch::{CancelToken, FetchHandle, FetchOutcome, FetchPoll, spawn_fetch};
pub use crate::geo::geojson::{GeoFeature, Geography, Polygon, Ring, parse_geojson};
pub use crate::geo::source::{
    FileSource, GeographySource, InlineSource, UnavailableSource, load_geography,
    source_from_spec,
};
pub use crate::render::export::{Exporter, OutputFormat, export_story, scene_file_name};
pub use crate::render::raster::{FrameRGBA, RasterOptions, Rasterizer, write_png};
pub use crate::render::svg::to_svg;
pub use crate::scale::linear::{LinearScale, format_fixed};
pub use crate::scale::projection::{MAX_MERCATOR_LAT, Mercator};
pub use crate::scenes::map::{MARKER_RADIUS, info_text, marker_positions, tooltip_text};
pub use crate::scenes::{Scene, SceneInputs, render};
pub use crate::session::interaction::{Hover, MapState, PointerEvent, hit_test};
pub use crate::session::session::Session;
