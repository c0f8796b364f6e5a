use crate::{
    foundation::core::BezPath,
    foundation::error::{StoryError, StoryResult},
    scale::projection::Mercator,
};

/// A closed ring of `[longitude, latitude]` positions.
pub type Ring = Vec<[f64; 2]>;

/// Polygon: one exterior ring followed by its holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    /// Exterior ring first, then holes.
    pub rings: Vec<Ring>,
}

/// One feature of the base map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
    /// `properties.name`, when present.
    pub name: Option<String>,
    /// Polygons making up the feature.
    pub polygons: Vec<Polygon>,
}

/// Polygon features decoded from a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geography {
    /// Features in document order.
    pub features: Vec<GeoFeature>,
}

#[derive(serde::Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(serde::Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Unsupported,
}

/// Decode a GeoJSON `FeatureCollection`.
///
/// Only `Polygon` and `MultiPolygon` geometries are kept; features with other or null
/// geometries are skipped. Extra ordinates (altitude) are ignored.
pub fn parse_geojson(bytes: &[u8]) -> StoryResult<Geography> {
    let raw: RawCollection = serde_json::from_slice(bytes)
        .map_err(|e| StoryError::geography(format!("decode geojson: {e}")))?;
    if raw.kind != "FeatureCollection" {
        return Err(StoryError::geography(format!(
            "expected a FeatureCollection, got '{}'",
            raw.kind
        )));
    }

    let mut features = Vec::with_capacity(raw.features.len());
    for f in raw.features {
        let polygons = match f.geometry {
            Some(RawGeometry::Polygon { coordinates }) => vec![polygon_from_raw(coordinates)],
            Some(RawGeometry::MultiPolygon { coordinates }) => {
                coordinates.into_iter().map(polygon_from_raw).collect()
            }
            Some(RawGeometry::Unsupported) | None => continue,
        };
        let name = f
            .properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string);
        features.push(GeoFeature { name, polygons });
    }

    Ok(Geography { features })
}

fn polygon_from_raw(rings: Vec<Vec<Vec<f64>>>) -> Polygon {
    Polygon {
        rings: rings
            .into_iter()
            .map(|ring| {
                ring.into_iter()
                    .filter_map(|pos| match pos.as_slice() {
                        [lon, lat, ..] => Some([*lon, *lat]),
                        _ => None,
                    })
                    .collect()
            })
            .collect(),
    }
}

impl Geography {
    /// Total number of polygons across all features.
    pub fn polygon_count(&self) -> usize {
        self.features.iter().map(|f| f.polygons.len()).sum()
    }
}

impl GeoFeature {
    /// Project every ring of the feature into one path.
    ///
    /// A ring is split into a new subpath wherever two consecutive positions are more than 180
    /// degrees of longitude apart, so shapes crossing the antimeridian do not streak across the
    /// map.
    pub fn to_path(&self, projection: &Mercator) -> BezPath {
        let mut path = BezPath::new();
        for polygon in &self.polygons {
            for ring in &polygon.rings {
                let mut prev_lon: Option<f64> = None;
                let mut split = false;
                for &[lon, lat] in ring {
                    let p = projection.project(lon, lat);
                    match prev_lon {
                        Some(prev) if (lon - prev).abs() <= 180.0 => path.line_to(p),
                        Some(_) => {
                            split = true;
                            path.move_to(p);
                        }
                        None => path.move_to(p),
                    }
                    prev_lon = Some(lon);
                }
                if prev_lon.is_some() && !split {
                    path.close_path();
                }
            }
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/geojson.rs"]
mod tests;
