use nalgebra::{Matrix3, Vector3};
use crate::error::{FitError, FitResult};
use crate::geometry::{Point3D, PointMatrix};

/*  β1 + β2x + β3y = z

    | 1 x1 y1 |
    | 1 x2 y2 |
A = | 1 x3 y3 |  (M = number of points, N = 3)
    | 1 x4 y4 |
    | 1 x5 y5 |
    | z1 |
    | z2 |
Z = | z3 | (M = number of points, N = 1)
    | z4 |
    | z5 |
    | a |
β = | b | (M = 3, N = 1)
    | c |
Z = Aβ
OLS: (AT A) β = AT Z
3xM * Mx3 => 3x3
3xM * Mx1 => 3x1

The rows of A and Z are taken relative to the centroid of the points, so
AT A does not depend on how far the points are from the origin.
*/

// Ratio of smallest to largest eigenvalue of the centred AT A at which the
// system is treated as singular.
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// The plane z = a + b·x + c·y.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Plane {
    pub fn z_at(&self, x: f64, y: f64) -> f64 {
        self.a + self.b * x + self.c * y
    }

    /// Vertical distance from the plane to `p`, positive above.
    pub fn residual(&self, p: &Point3D) -> f64 {
        p.z - self.z_at(p.x, p.y)
    }

    pub fn rms_residual(&self, points: &PointMatrix) -> f64 {
        let sum: f64 = points.iter().map(|p| self.residual(p).powi(2)).sum();
        f64::sqrt(sum / points.len() as f64)
    }

    pub fn as_array(&self) -> [f64;3] { [self.a, self.b, self.c] }
}

impl From<Vector3<f64>> for Plane {
    fn from(v: Vector3<f64>) -> Self { Plane { a: v[0], b: v[1], c: v[2] } }
}

/// Estimate plane parameters from points in the Cartesian frame, in the
/// least-squares sense.
///
/// Returns `FitError::SingularSystem` when the (x, y) projections of the
/// points are collinear or coincide, since no unique plane exists then.
pub fn estimate_params(points: &PointMatrix) -> FitResult<Plane> {
    let sum = points.iter().fold(Point3D::new(0.0, 0.0, 0.0), |sum, p| sum + *p);
    let centroid = sum * (1.0 / points.len() as f64);

    let mut ata = Matrix3::<f64>::zeros();
    let mut atz = Vector3::<f64>::zeros();
    for p in points.iter() {
        let r = *p - centroid;
        let row = Vector3::new(1.0, r.x, r.y);
        ata += row * row.transpose();
        atz += row * r.z;
    }

    let eigenvalues = ata.symmetric_eigenvalues();
    let largest = eigenvalues.max();
    let smallest = eigenvalues.min();
    if !(smallest > largest * SINGULARITY_TOLERANCE) {
        return Err(FitError::SingularSystem);
    }

    let cholesky = ata.cholesky().ok_or(FitError::SingularSystem)?;
    let centred = Plane::from(cholesky.solve(&atz));
    Ok(Plane {
        a: centred.a + centroid.z - centred.b * centroid.x - centred.c * centroid.y,
        b: centred.b,
        c: centred.c,
    })
}

/// Validates rows of arbitrary shape as an n x 3 point matrix, then fits.
pub fn estimate_params_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FitResult<Plane> {
    estimate_params(&PointMatrix::from_rows(rows)?)
}
