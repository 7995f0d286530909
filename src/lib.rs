//! Spherical-to-Cartesian conversion of lidar readings and least-squares
//! fitting of the plane z = a + b·x + c·y.

pub mod error;
pub mod geometry;
pub mod input;
pub mod linear_regression;
pub mod spherical;

pub use error::{FitError, FitResult};
pub use geometry::{Point3D, PointMatrix};
pub use linear_regression::{estimate_params, estimate_params_from_rows, Plane};
pub use spherical::{sph_to_cart, SphericalReading};
