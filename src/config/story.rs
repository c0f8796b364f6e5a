use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Color},
    foundation::error::{StoryError, StoryResult},
    scale::linear::LinearScale,
    scale::projection::Mercator,
};

/// Default world-boundaries resource loaded by the map scene.
pub const DEFAULT_GEOGRAPHY_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

/// Upper bound on requested ticks per axis.
pub const MAX_TICKS: usize = 1000;

/// One data record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Observation {
    /// Calendar year.
    pub year: i32,
    /// Global mean temperature in degrees Celsius.
    pub temperature: f64,
    /// Latitude in degrees.
    #[serde(alias = "lat", default)]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(alias = "lon", default)]
    pub longitude: f64,
}

impl Observation {
    /// Build an observation located at `(0, 0)`.
    pub fn new(year: i32, temperature: f64) -> Self {
        Self {
            year,
            temperature,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Same observation placed at `(latitude, longitude)`.
    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}

/// The five records the story ships with.
pub fn default_dataset() -> Vec<Observation> {
    vec![
        Observation::new(2000, 14.29),
        Observation::new(2005, 14.39),
        Observation::new(2010, 14.49),
        Observation::new(2015, 14.69),
        Observation::new(2020, 14.89),
    ]
}

/// Colors used by the three scenes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Overview series line.
    pub series: Color,
    /// Overview point markers.
    pub dot: Color,
    /// De-emphasized series in the year-focus scene.
    pub muted: Color,
    /// Emphasized marker in the year-focus scene.
    pub focus: Color,
    /// Base map polygon fill.
    pub land_fill: Color,
    /// Base map polygon outline.
    pub land_stroke: Color,
    /// Map markers at rest.
    pub marker: Color,
    /// Map marker under the pointer.
    pub marker_hover: Color,
    /// Axis, annotation and label ink.
    pub ink: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            series: Color::STEELBLUE,
            dot: Color::BLACK,
            muted: Color::LIGHTGRAY,
            focus: Color::RED,
            land_fill: Color::LIGHTGRAY,
            land_stroke: Color::BLACK,
            marker: Color::BLUE,
            marker_hover: Color::ORANGE,
            ink: Color::BLACK,
        }
    }
}

/// Title and description shown next to the surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneText {
    /// Heading text.
    pub title: String,
    /// One-sentence description.
    pub description: String,
}

impl SceneText {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Per-scene texts. `{year}` in the year-focus texts is replaced by the focus year.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneTexts {
    /// Scene 1.
    pub overview: SceneText,
    /// Scene 2.
    pub year_focus: SceneText,
    /// Scene 3.
    pub map: SceneText,
}

impl Default for SceneTexts {
    fn default() -> Self {
        Self {
            overview: SceneText::new(
                "Global Temperature Changes (2000-2020)",
                "This overview shows the global average temperatures from 2000 to 2020.",
            ),
            year_focus: SceneText::new(
                "Focus on the Year {year}",
                "This section highlights the temperature for the year {year} with additional details.",
            ),
            map: SceneText::new(
                "Interactive Map of Temperature Changes",
                "Explore global temperature changes by interacting with the map.",
            ),
        }
    }
}

/// Mercator projection parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Projection scale (pixels per radian).
    pub scale: f64,
    /// Pixel position of `(0, 0)`. Defaults to `(width / 2, height / 1.5)`.
    pub translate: Option<[f64; 2]>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            scale: 150.0,
            translate: None,
        }
    }
}

/// Everything the renderer treats as configuration rather than logic.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Drawing surface size.
    pub canvas: Canvas,
    /// Margin between the surface edge and the plot area, on every side.
    pub margin: f64,
    /// Year axis domain `[min, max]`.
    pub year_domain: [f64; 2],
    /// Temperature axis domain `[min, max]`.
    pub temperature_domain: [f64; 2],
    /// Requested tick count on the year axis.
    pub year_ticks: usize,
    /// Requested tick count on the temperature axis.
    pub temperature_ticks: usize,
    /// The observations, in drawing order.
    pub dataset: Vec<Observation>,
    /// Year highlighted by the year-focus scene.
    pub focus_year: i32,
    /// Scene colors.
    pub palette: Palette,
    /// Scene titles and descriptions.
    pub texts: SceneTexts,
    /// Map projection.
    pub projection: ProjectionConfig,
    /// Geography source: an `http(s)://` URL or a file path.
    pub geography: String,
    /// Extra directory scanned for fonts when rasterizing.
    pub font_dir: Option<PathBuf>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            margin: 50.0,
            year_domain: [2000.0, 2020.0],
            temperature_domain: [14.0, 15.0],
            year_ticks: 5,
            temperature_ticks: 10,
            dataset: default_dataset(),
            focus_year: 2010,
            palette: Palette::default(),
            texts: SceneTexts::default(),
            projection: ProjectionConfig::default(),
            geography: DEFAULT_GEOGRAPHY_URL.to_string(),
            font_dir: None,
        }
    }
}

impl StoryConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> StoryResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| StoryError::serde(format!("parse story config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> StoryResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read story config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check invariants the renderer relies on.
    pub fn validate(&self) -> StoryResult<()> {
        self.canvas.validate()?;

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(StoryError::validation("margin must be finite and >= 0"));
        }
        if 2.0 * self.margin >= self.canvas.w().min(self.canvas.h()) {
            return Err(StoryError::validation(
                "margin leaves no room for the plot area",
            ));
        }

        validate_domain("year_domain", self.year_domain)?;
        validate_domain("temperature_domain", self.temperature_domain)?;

        for (name, ticks) in [
            ("year_ticks", self.year_ticks),
            ("temperature_ticks", self.temperature_ticks),
        ] {
            if ticks == 0 || ticks > MAX_TICKS {
                return Err(StoryError::validation(format!(
                    "{name} must be in 1..={MAX_TICKS}, got {ticks}"
                )));
            }
        }

        if self.dataset.is_empty() {
            return Err(StoryError::validation("dataset must not be empty"));
        }
        for (idx, obs) in self.dataset.iter().enumerate() {
            if !obs.temperature.is_finite()
                || !obs.latitude.is_finite()
                || !obs.longitude.is_finite()
            {
                return Err(StoryError::validation(format!(
                    "observation {idx} (year {}) has a non-finite field",
                    obs.year
                )));
            }
        }

        if !self.projection.scale.is_finite() || self.projection.scale <= 0.0 {
            return Err(StoryError::validation("projection scale must be > 0"));
        }
        if let Some([tx, ty]) = self.projection.translate
            && (!tx.is_finite() || !ty.is_finite())
        {
            return Err(StoryError::validation("projection translate must be finite"));
        }

        if self.geography.trim().is_empty() {
            return Err(StoryError::validation("geography source must not be empty"));
        }

        Ok(())
    }

    /// Year -> horizontal position.
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(
            self.year_domain,
            [self.margin, self.canvas.w() - self.margin],
        )
    }

    /// Temperature -> vertical position (larger values drawn higher).
    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(
            self.temperature_domain,
            [self.canvas.h() - self.margin, self.margin],
        )
    }

    /// Map projection for the interactive scene.
    pub fn mercator(&self) -> Mercator {
        let [tx, ty] = self
            .projection
            .translate
            .unwrap_or([self.canvas.w() / 2.0, self.canvas.h() / 1.5]);
        Mercator::new(self.projection.scale, [tx, ty])
    }

    /// Texts for the year-focus scene with `{year}` substituted.
    pub fn year_focus_text(&self) -> SceneText {
        let year = self.focus_year.to_string();
        SceneText {
            title: self.texts.year_focus.title.replace("{year}", &year),
            description: self.texts.year_focus.description.replace("{year}", &year),
        }
    }
}

fn validate_domain(name: &str, [lo, hi]: [f64; 2]) -> StoryResult<()> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(StoryError::validation(format!("{name} must be finite")));
    }
    if lo == hi {
        return Err(StoryError::validation(format!("{name} must not be empty")));
    }
    if !(hi - lo).is_finite() {
        return Err(StoryError::validation(format!(
            "{name} span overflows: [{lo}, {hi}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/story.rs"]
mod tests;
