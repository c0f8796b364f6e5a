use crate::{
    compile::draw::{DrawList, Role},
    config::story::StoryConfig,
    scenes::{Scene, chart},
};

pub(crate) const FOCUS_RADIUS: f64 = 8.0;
const CALLOUT_OFFSET: f64 = 50.0;

/// Scene 2: the overview chart muted, with every observation of the focus year emphasized and
/// annotated. No matching observation means no emphasis at all.
pub(crate) fn render_year_focus(cfg: &StoryConfig) -> DrawList {
    let palette = cfg.palette;
    let target = cfg.focus_year;
    let mut list = DrawList::new(Scene::YearFocus, cfg.canvas, &cfg.year_focus_text());

    list.extend(chart::axes(cfg));
    list.push(chart::series(cfg, palette.muted));
    list.extend(chart::dots(
        cfg,
        Role::Dot,
        chart::DOT_RADIUS,
        palette.muted,
        |_| true,
    ));
    list.extend(chart::dots(
        cfg,
        Role::FocusDot,
        FOCUS_RADIUS,
        palette.focus,
        move |obs| obs.year == target,
    ));

    for obs in cfg.dataset.iter().filter(|obs| obs.year == target) {
        list.annotate(
            chart::year_callout(cfg, obs, CALLOUT_OFFSET, -CALLOUT_OFFSET),
            palette.ink,
        );
    }

    if list.count(Role::FocusDot) == 0 {
        tracing::debug!(year = target, "no observation for focus year");
    }

    list
}
