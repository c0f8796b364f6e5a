use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    compile::draw::DrawList,
    config::story::StoryConfig,
    foundation::error::{StoryError, StoryResult},
    geo::geojson::Geography,
    render::raster::{RasterOptions, Rasterizer, write_png},
    render::svg::to_svg,
    scenes::{Scene, SceneInputs, render},
};

/// File format for a rendered surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Standalone SVG document.
    Svg,
    /// Rasterized PNG.
    Png,
    /// The draw list itself, pretty-printed.
    Json,
}

impl OutputFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> StoryResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "json" => Ok(Self::Json),
            _ => Err(StoryError::validation(format!(
                "cannot infer output format from '{}' (expected .svg, .png or .json)",
                path.display()
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Json => "json",
        }
    }
}

/// Writes draw lists in one format. PNG output shares a single [`Rasterizer`].
#[derive(Clone, Debug)]
pub struct Exporter {
    format: OutputFormat,
    rasterizer: Option<Rasterizer>,
}

impl Exporter {
    pub fn new(format: OutputFormat, raster: &RasterOptions) -> StoryResult<Self> {
        let rasterizer = match format {
            OutputFormat::Png => Some(Rasterizer::new(raster)?),
            OutputFormat::Svg | OutputFormat::Json => None,
        };
        Ok(Self { format, rasterizer })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write `list` to `path`, creating parent directories.
    pub fn write(&self, list: &DrawList, path: &Path) -> StoryResult<()> {
        match (self.format, &self.rasterizer) {
            (OutputFormat::Png, Some(rasterizer)) => {
                let frame = rasterizer.rasterize(list)?;
                write_png(&frame, path)
            }
            (OutputFormat::Png, None) => Err(StoryError::render("png exporter has no rasterizer")),
            (OutputFormat::Svg, _) => write_text(path, &to_svg(list)?),
            (OutputFormat::Json, _) => {
                let json = serde_json::to_string_pretty(list)
                    .map_err(|e| StoryError::serde(format!("encode draw list: {e}")))?;
                write_text(path, &json)
            }
        }
    }
}

fn write_text(path: &Path, text: &str) -> StoryResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

/// File name used for `scene` by [`export_story`].
pub fn scene_file_name(scene: Scene, format: OutputFormat) -> String {
    format!("scene-{}.{}", scene.index(), format.extension())
}

/// Render all three scenes into `out_dir`, in parallel.
///
/// The map scene is drawn with `geography` when given and without land otherwise; no pointer
/// interaction is applied. Returns the written paths in story order.
#[tracing::instrument(skip(config, geography, raster), fields(out_dir = %out_dir.display()))]
pub fn export_story(
    config: &StoryConfig,
    geography: Option<&Geography>,
    out_dir: &Path,
    format: OutputFormat,
    raster: &RasterOptions,
    threads: Option<usize>,
) -> StoryResult<Vec<PathBuf>> {
    config.validate()?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let exporter = Exporter::new(format, raster)?;
    let pool = build_thread_pool(threads)?;
    let inputs = SceneInputs::new(config).with_geography(geography);

    let paths = pool.install(|| {
        Scene::ALL
            .par_iter()
            .map(|&scene| {
                let list = render(scene, &inputs);
                let path = out_dir.join(scene_file_name(scene, format));
                exporter.write(&list, &path)?;
                tracing::debug!(path = %path.display(), "scene written");
                Ok(path)
            })
            .collect::<StoryResult<Vec<_>>>()
    })?;

    tracing::info!(scenes = paths.len(), "story exported");
    Ok(paths)
}

fn build_thread_pool(threads: Option<usize>) -> StoryResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StoryError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StoryError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
