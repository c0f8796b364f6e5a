use std::{path::PathBuf, sync::Arc};

use crate::{
    foundation::error::{StoryError, StoryResult},
    geo::geojson::{Geography, parse_geojson},
};

/// Somewhere the base map can be read from.
///
/// Implementations block; the session runs them off the host loop (see
/// [`crate::spawn_fetch`]).
pub trait GeographySource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Read the raw GeoJSON document.
    fn fetch_bytes(&self) -> StoryResult<Vec<u8>>;
}

/// GeoJSON file on local disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Read from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GeographySource for FileSource {
    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }

    fn fetch_bytes(&self) -> StoryResult<Vec<u8>> {
        std::fs::read(&self.path)
            .map_err(|e| StoryError::geography(format!("read '{}': {e}", self.path.display())))
    }
}

/// GeoJSON document already held in memory.
#[derive(Clone, Debug)]
pub struct InlineSource {
    bytes: Arc<[u8]>,
}

impl InlineSource {
    /// Serve `bytes` on every fetch.
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl GeographySource for InlineSource {
    fn describe(&self) -> String {
        format!("inline ({} bytes)", self.bytes.len())
    }

    fn fetch_bytes(&self) -> StoryResult<Vec<u8>> {
        Ok(self.bytes.to_vec())
    }
}

/// Source that always fails with a fixed reason.
///
/// Stands in for a source that cannot be built in this configuration, so the map scene still
/// draws its markers.
#[derive(Clone, Debug)]
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl GeographySource for UnavailableSource {
    fn describe(&self) -> String {
        format!("unavailable ({})", self.reason)
    }

    fn fetch_bytes(&self) -> StoryResult<Vec<u8>> {
        Err(StoryError::geography(self.reason.clone()))
    }
}

/// GeoJSON served over HTTP(S).
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    timeout: std::time::Duration,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Fetch `url` with a 30 second timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: std::time::Duration::from_secs(30),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(feature = "http")]
impl GeographySource for HttpSource {
    fn describe(&self) -> String {
        format!("url '{}'", self.url)
    }

    fn fetch_bytes(&self) -> StoryResult<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| StoryError::geography(format!("build http client: {e}")))?;
        let resp = client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| StoryError::geography(format!("GET {}: {e}", self.url)))?;
        let body = resp
            .bytes()
            .map_err(|e| StoryError::geography(format!("read body of {}: {e}", self.url)))?;
        Ok(body.to_vec())
    }
}

/// Build a source from a config string: `http(s)://` URLs go over the network, anything else is
/// a file path. Without the `http` feature a URL yields an [`UnavailableSource`].
pub fn source_from_spec(spec: &str) -> StoryResult<Arc<dyn GeographySource>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(StoryError::validation("geography source must not be empty"));
    }
    if spec.starts_with("http://") || spec.starts_with("https://") {
        return url_source(spec);
    }
    Ok(Arc::new(FileSource::new(spec)))
}

#[cfg(feature = "http")]
fn url_source(url: &str) -> StoryResult<Arc<dyn GeographySource>> {
    Ok(Arc::new(HttpSource::new(url)))
}

#[cfg(not(feature = "http"))]
fn url_source(url: &str) -> StoryResult<Arc<dyn GeographySource>> {
    Ok(Arc::new(UnavailableSource::new(format!(
        "'{url}' is a URL but the `http` feature is disabled"
    ))))
}

/// Fetch and decode the base map.
#[tracing::instrument(skip(source), fields(source = %source.describe()))]
pub fn load_geography(source: &dyn GeographySource) -> StoryResult<Geography> {
    let bytes = source.fetch_bytes()?;
    let geo = parse_geojson(&bytes)?;
    tracing::info!(
        features = geo.features.len(),
        polygons = geo.polygon_count(),
        "geography loaded"
    );
    Ok(geo)
}

#[cfg(test)]
#[path = "../../tests/unit/geo/source.rs"]
mod tests;
