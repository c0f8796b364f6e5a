use crate::foundation::core::Point;

/// Latitude where the square Mercator world ends.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Spherical Mercator projection from `(longitude, latitude)` degrees to surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mercator {
    /// Pixels per radian.
    pub scale: f64,
    /// Pixel position of `(0, 0)`.
    pub translate: [f64; 2],
}

impl Mercator {
    /// Build a projection.
    pub fn new(scale: f64, translate: [f64; 2]) -> Self {
        Self { scale, translate }
    }

    /// Project a position. Latitudes clamp to [`MAX_MERCATOR_LAT`] so poles stay finite.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Point {
        let lambda = lon_deg.to_radians();
        let phi = lat_deg
            .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
            .to_radians();
        let y = (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan().ln();
        Point::new(
            self.translate[0] + self.scale * lambda,
            self.translate[1] - self.scale * y,
        )
    }
}
