use crate::{
    compile::draw::{DrawList, Role},
    config::story::StoryConfig,
    scenes::{Scene, chart},
};

const CALLOUT_OFFSET: f64 = 50.0;

/// Scene 1: axes, the series line, one dot per observation and callouts on the first and last
/// observation.
pub(crate) fn render_overview(cfg: &StoryConfig) -> DrawList {
    let palette = cfg.palette;
    let mut list = DrawList::new(Scene::Overview, cfg.canvas, &cfg.texts.overview);

    list.extend(chart::axes(cfg));
    list.push(chart::series(cfg, palette.series));
    list.extend(chart::dots(
        cfg,
        Role::Dot,
        chart::DOT_RADIUS,
        palette.dot,
        |_| true,
    ));

    if let (Some(first), Some(last)) = (cfg.dataset.first(), cfg.dataset.last()) {
        list.annotate(
            chart::year_callout(cfg, first, CALLOUT_OFFSET, -CALLOUT_OFFSET),
            palette.ink,
        );
        list.annotate(
            chart::year_callout(cfg, last, -CALLOUT_OFFSET, -CALLOUT_OFFSET),
            palette.ink,
        );
    }

    list
}
