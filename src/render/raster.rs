use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::{
    compile::draw::DrawList,
    foundation::core::Color,
    foundation::error::{StoryError, StoryResult},
    render::svg::to_svg,
};

const MAX_DIM: u32 = 16_384;

/// How draw lists are turned into pixels.
#[derive(Clone, Debug)]
pub struct RasterOptions {
    /// Device pixels per surface unit.
    pub scale: f32,
    /// Opaque backdrop. `None` keeps the surface transparent.
    pub background: Option<Color>,
    /// Extra `.ttf`/`.otf`/`.ttc` files loaded on top of the system fonts.
    pub font_dir: Option<PathBuf>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: Some(Color::rgb(255, 255, 255)),
            font_dir: None,
        }
    }
}

/// Straight (non-premultiplied) RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// CPU rasterizer backed by resvg.
///
/// The font database is built once and shared; cloning a rasterizer is cheap.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    scale: f32,
    background: Option<Color>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("font_faces", &self.font_faces())
            .field("scale", &self.scale)
            .field("background", &self.background)
            .finish()
    }
}

impl Rasterizer {
    pub fn new(opts: &RasterOptions) -> StoryResult<Self> {
        if !opts.scale.is_finite() || opts.scale <= 0.0 {
            return Err(StoryError::validation(format!(
                "raster scale must be finite and > 0, got {}",
                opts.scale
            )));
        }
        Ok(Self {
            fontdb: build_fontdb(opts.font_dir.as_deref()),
            scale: opts.scale,
            background: opts.background,
        })
    }

    /// Number of font faces available to text.
    pub fn font_faces(&self) -> usize {
        self.fontdb.faces().count()
    }

    /// Rasterize one scene surface.
    #[tracing::instrument(skip(self, list), fields(scene = list.scene.index()))]
    pub fn rasterize(&self, list: &DrawList) -> StoryResult<FrameRGBA> {
        let svg = to_svg(list)?;
        self.rasterize_svg(&svg)
    }

    /// Rasterize an SVG document produced by [`crate::to_svg`].
    pub fn rasterize_svg(&self, svg: &str) -> StoryResult<FrameRGBA> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| StoryError::render(format!("parse svg tree: {e}")))?;

        let width = to_px(tree.size().width() * self.scale)?;
        let height = to_px(tree.size().height() * self.scale)?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| StoryError::render("failed to allocate pixmap"))?;
        if let Some(bg) = self.background {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
        }

        let xform = resvg::tiny_skia::Transform::from_scale(self.scale, self.scale);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(FrameRGBA {
            width,
            height,
            data,
        })
    }
}

fn to_px(v: f32) -> StoryResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(StoryError::render("surface has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(StoryError::render(format!(
            "raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn build_fontdb(font_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = font_dir {
        load_fonts_from_dir(&mut db, dir);
    }
    tracing::debug!(faces = db.faces().count(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font dir not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "skipping font");
        }
    }
}

/// Write `frame` as a PNG, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> StoryResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
