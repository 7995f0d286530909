use nalgebra::Vector3;
use rayon::prelude::*;
use crate::geometry::Point3D;

/// A single sensor reading. Angles are in radians, the range in metres.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct SphericalReading {
    pub elevation: f64,
    pub azimuth: f64,
    pub range: f64,
}

/// Transform a sensor reading to Cartesian coordinates in the sensor frame.
///
/// `epsilon` is the elevation angle and `alpha` the azimuth angle (in the
/// x,y plane), both in radians; `r` is the range in metres. Any real input
/// is accepted: a negative range gives the point mirrored through the
/// origin, and NaN or infinite values carry through to the output.
pub fn sph_to_cart(epsilon: f64, alpha: f64, r: f64) -> Vector3<f64> {
    let horizontal = r * f64::cos(epsilon);
    Vector3::new(
        horizontal * f64::cos(alpha),
        horizontal * f64::sin(alpha),
        r * f64::sin(epsilon),
    )
}

impl SphericalReading {
    pub fn new(elevation: f64, azimuth: f64, range: f64) -> SphericalReading {
        SphericalReading { elevation, azimuth, range }
    }

    pub fn from_degrees(elevation: f64, azimuth: f64, range: f64) -> SphericalReading {
        SphericalReading { elevation: elevation.to_radians(), azimuth: azimuth.to_radians(), range }
    }

    pub fn to_cartesian(&self) -> Point3D {
        Point3D::from(sph_to_cart(self.elevation, self.azimuth, self.range))
    }
}

impl From<&SphericalReading> for Point3D {
    fn from(reading: &SphericalReading) -> Self { reading.to_cartesian() }
}

// Order is preserved.
pub fn points_from_readings(readings: &[SphericalReading]) -> Vec<Point3D> {
    readings.par_iter().map(|r| r.to_cartesian()).collect()
}
