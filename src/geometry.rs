use nalgebra::Vector3;
use std::ops::{Add, Sub, Mul};
use crate::error::{FitError, FitResult};

/// Columns in a point row: x, y and z.
pub const COLUMNS: usize = 3;

/// Least number of rows that gives a well-posed system for three unknowns.
pub const MIN_POINTS: usize = 3;

#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Point3D { Point3D { x, y, z } }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3D {
    type Output = Point3D;
    fn add(self, other: Point3D) -> Point3D {
        Point3D { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl Sub for Point3D {
    type Output = Point3D;
    fn sub(self, other: Point3D) -> Point3D {
        Point3D { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f64> for Point3D {
    type Output = Point3D;
    fn mul(self, f: f64) -> Point3D {
        Point3D { x: self.x * f, y: self.y * f, z: self.z * f }
    }
}

impl From<Vector3<f64>> for Point3D {
    fn from(v: Vector3<f64>) -> Self { Point3D { x: v[0], y: v[1], z: v[2] } }
}

impl From<&Point3D> for Vector3<f64> {
    fn from(p: &Point3D) -> Self { Vector3::new(p.x, p.y, p.z) }
}

impl From<[f64;3]> for Point3D {
    fn from(a: [f64;3]) -> Self { Point3D { x: a[0], y: a[1], z: a[2] } }
}

/// An n x 3 matrix of measured points, one (x, y, z) per row.
///
/// Construction checks that there are at least `MIN_POINTS` rows and that
/// every value is finite, so a `PointMatrix` can always be handed to the
/// plane estimator. Collinear or coincident points are still accepted;
/// the estimator reports those as a singular system.
#[derive(Clone,Debug)]
pub struct PointMatrix {
    points: Vec<Point3D>,
}

impl PointMatrix {

    pub fn new(points: Vec<Point3D>) -> FitResult<PointMatrix> {
        if points.len() < MIN_POINTS {
            return Err(FitError::TooFewPoints { required: MIN_POINTS, actual: points.len() });
        }
        if let Some(row) = points.iter().position(|p| !p.is_finite()) {
            return Err(FitError::NonFiniteValue { row });
        }
        Ok(PointMatrix { points })
    }

    /// Builds a matrix from loosely shaped rows, checking the column count
    /// of each row before anything else.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FitResult<PointMatrix> {
        let points = rows.iter()
            .enumerate()
            .map(|(row, r)| match r.as_ref() {
                &[x, y, z] => Ok(Point3D { x, y, z }),
                other => Err(FitError::WrongColumnCount { row, expected: COLUMNS, actual: other.len() }),
            })
            .collect::<FitResult<Vec<Point3D>>>()?;
        PointMatrix::new(points)
    }

    pub fn points(&self) -> &[Point3D] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> { self.points.iter() }
}
