use crate::{
    compile::draw::{DrawList, DrawOp, Role, Stroke, TextStyle},
    config::story::{Observation, StoryConfig},
    foundation::core::{Point, Vec2},
    geo::geojson::Geography,
    scenes::Scene,
    session::interaction::MapState,
};

/// Radius of a map marker; also its hit-test radius.
pub const MARKER_RADIUS: f64 = 5.0;
const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, -10.0);
const TOOLTIP_FONT_PX: f64 = 12.0;
const INFO_ORIGIN: Point = Point::new(10.0, 20.0);
const INFO_FONT_PX: f64 = 14.0;

/// Floating label shown while a marker is hovered.
pub fn tooltip_text(obs: &Observation) -> String {
    // `+ 0.0` folds negative zero.
    format!("{}: {}°C", obs.year, obs.temperature + 0.0)
}

/// Persistent line shown after a marker is clicked.
pub fn info_text(obs: &Observation) -> String {
    format!(
        "Year: {}, Temperature: {}°C, Location: ({}, {})",
        obs.year,
        obs.temperature + 0.0,
        obs.latitude + 0.0,
        obs.longitude + 0.0
    )
}

/// Projected marker centers, in dataset order.
pub fn marker_positions(cfg: &StoryConfig) -> Vec<Point> {
    let projection = cfg.mercator();
    cfg.dataset
        .iter()
        .map(|obs| projection.project(obs.longitude, obs.latitude))
        .collect()
}

/// Scene 3: base map (when loaded), one marker per observation, then the hover label and info
/// line from `state`.
pub(crate) fn render_map(
    cfg: &StoryConfig,
    geography: Option<&Geography>,
    state: &MapState,
) -> DrawList {
    let palette = cfg.palette;
    let mut list = DrawList::new(Scene::InteractiveMap, cfg.canvas, &cfg.texts.map);

    if let Some(geo) = geography {
        let projection = cfg.mercator();
        let outline = Stroke {
            color: palette.land_stroke,
            width: 1.0,
        };
        for feature in &geo.features {
            let path = feature.to_path(&projection);
            if path.elements().is_empty() {
                continue;
            }
            list.push(DrawOp::Path {
                role: Role::Land,
                path,
                fill: Some(palette.land_fill),
                stroke: Some(outline),
            });
        }
    }

    let hovered = state.hover().map(|h| h.marker);
    for (i, center) in marker_positions(cfg).into_iter().enumerate() {
        let fill = if hovered == Some(i) {
            palette.marker_hover
        } else {
            palette.marker
        };
        list.push(DrawOp::Circle {
            role: Role::Marker(i),
            center,
            radius: MARKER_RADIUS,
            fill,
        });
    }

    if let Some(hover) = state.hover()
        && let Some(obs) = cfg.dataset.get(hover.marker)
    {
        list.push(DrawOp::Text {
            role: Role::Tooltip,
            origin: hover.cursor + TOOLTIP_OFFSET,
            content: tooltip_text(obs),
            style: TextStyle::plain(TOOLTIP_FONT_PX, palette.ink).bold(),
        });
    }

    if let Some(i) = state.info()
        && let Some(obs) = cfg.dataset.get(i)
    {
        list.push(DrawOp::Text {
            role: Role::Info,
            origin: INFO_ORIGIN,
            content: info_text(obs),
            style: TextStyle::plain(INFO_FONT_PX, palette.ink).bold(),
        });
    }

    list
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/map.rs"]
mod tests;
