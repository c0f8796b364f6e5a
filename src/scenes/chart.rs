//! Pieces shared by the two line-chart scenes.

use crate::{
    compile::annotation::Annotation,
    compile::axis::{Axis, TickFormat},
    compile::draw::{DrawOp, Role, Stroke},
    config::story::{Observation, StoryConfig},
    foundation::core::{BezPath, Color, Point},
};

pub(crate) const DOT_RADIUS: f64 = 5.0;
pub(crate) const SERIES_WIDTH: f64 = 1.5;

/// Scaled position of an observation.
pub(crate) fn plot_point(cfg: &StoryConfig, obs: &Observation) -> Point {
    Point::new(
        cfg.x_scale().map(f64::from(obs.year)),
        cfg.y_scale().map(obs.temperature),
    )
}

/// Year axis along the bottom margin and temperature axis along the left margin.
pub(crate) fn axes(cfg: &StoryConfig) -> Vec<DrawOp> {
    let ink = cfg.palette.ink;
    let mut ops = Axis::bottom(cfg.x_scale(), cfg.canvas.h() - cfg.margin, cfg.year_ticks)
        .with_format(TickFormat::Integer)
        .with_ink(ink)
        .draw_ops();
    ops.extend(
        Axis::left(cfg.y_scale(), cfg.margin, cfg.temperature_ticks)
            .with_ink(ink)
            .draw_ops(),
    );
    ops
}

/// One unfilled polyline through every observation, in dataset order.
pub(crate) fn series(cfg: &StoryConfig, color: Color) -> DrawOp {
    let mut path = BezPath::new();
    for (i, obs) in cfg.dataset.iter().enumerate() {
        let p = plot_point(cfg, obs);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    DrawOp::Path {
        role: Role::Series,
        path,
        fill: None,
        stroke: Some(Stroke {
            color,
            width: SERIES_WIDTH,
        }),
    }
}

/// One circle per observation matching `keep`.
pub(crate) fn dots<'a>(
    cfg: &'a StoryConfig,
    role: Role,
    radius: f64,
    fill: Color,
    keep: impl Fn(&Observation) -> bool + 'a,
) -> impl Iterator<Item = DrawOp> + 'a {
    cfg.dataset
        .iter()
        .filter(move |obs| keep(*obs))
        .map(move |obs| DrawOp::Circle {
            role,
            center: plot_point(cfg, obs),
            radius,
            fill,
        })
}

/// "Temperature in <year>" callout pointing at `obs`.
pub(crate) fn year_callout(cfg: &StoryConfig, obs: &Observation, dx: f64, dy: f64) -> Annotation {
    Annotation::new(
        plot_point(cfg, obs),
        dx,
        dy,
        obs.year.to_string(),
        format!("Temperature in {}", obs.year),
    )
}
