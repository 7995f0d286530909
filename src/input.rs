use std::fs;
use std::path::Path;
use crate::error::{FitError, FitResult};
use crate::geometry::{PointMatrix, Point3D, COLUMNS};
use crate::spherical::{SphericalReading, points_from_readings};

// Rows are separated by newlines, values by whitespace and/or commas.
// Empty lines and lines starting with '#' are skipped.
pub fn parse_rows(text: &str) -> FitResult<Vec<[f64;3]>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| parse_row(line_number, line))
        .collect()
}

fn parse_row(line: usize, text: &str) -> FitResult<[f64;3]> {
    let values = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().map_err(|e| FitError::Parse { line, reason: format!("'{}': {}", s, e) }))
        .collect::<FitResult<Vec<f64>>>()?;

    match values[..] {
        [a, b, c] => Ok([a, b, c]),
        _ => Err(FitError::Parse { line, reason: format!("expected {} values, found {}", COLUMNS, values.len()) }),
    }
}

pub fn cartesian_points(text: &str) -> FitResult<PointMatrix> {
    PointMatrix::new(parse_rows(text)?.into_iter().map(Point3D::from).collect())
}

/// Rows are elevation, azimuth, range. Angles are radians unless `degrees` is set.
pub fn spherical_points(text: &str, degrees: bool) -> FitResult<PointMatrix> {
    let readings: Vec<SphericalReading> = parse_rows(text)?.into_iter()
        .map(|[e, a, r]| match degrees {
            true => SphericalReading::from_degrees(e, a, r),
            false => SphericalReading::new(e, a, r),
        })
        .collect();
    PointMatrix::new(points_from_readings(&readings))
}

pub fn load_points(path: &Path, spherical: bool, degrees: bool) -> FitResult<PointMatrix> {
    let text = fs::read_to_string(path)?;
    if spherical { spherical_points(&text, degrees) } else { cartesian_points(&text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let rows = parse_rows("# x y z\n0 0 1\n\n1.5,0, 2\n  0\t1\t2  \n").unwrap();
        assert_eq!(rows, vec![[0.0, 0.0, 1.0], [1.5, 0.0, 2.0], [0.0, 1.0, 2.0]]);
    }

    #[test]
    fn test_parse_reports_line_number() {
        match parse_rows("0 0 1\n1 0\n") {
            Err(FitError::Parse { line: 2, .. }) => {},
            other => panic!("Unexpected result {:?}", other),
        }
        match parse_rows("# header\n0 0 1\n1 zero 2\n") {
            Err(FitError::Parse { line: 3, reason }) => assert!(reason.contains("zero")),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_spherical_points_in_degrees() {
        let m = spherical_points("0 0 1\n0 90 2\n90 0 3\n", true).unwrap();
        let p = m.points();
        assert!((p[0].x - 1.0).abs() < 1e-10);
        assert!((p[1].y - 2.0).abs() < 1e-10);
        assert!((p[2].z - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("no_such_points.txt");
        match load_points(&path, false, false) {
            Err(FitError::Io(_)) => {},
            other => panic!("Expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_demo_ground_scan() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("ground.txt");
        let m = load_points(&path, true, true).unwrap();
        assert_eq!(m.len(), 8);
        // Sensor about 1.5 m above flat ground.
        assert!(m.iter().all(|p| (p.z + 1.5).abs() < 0.01));
        let plane = crate::linear_regression::estimate_params(&m).unwrap();
        assert!((plane.a + 1.5).abs() < 0.01);
        assert!(plane.b.abs() < 1e-6 && plane.c.abs() < 1e-6);
    }

    #[test]
    fn test_load_cartesian_file() {
        let path = std::env::temp_dir().join(format!("lidarfit-points-{}.txt", std::process::id()));
        fs::write(&path, "0 0 1\n1 0 3\n0 1 4\n1 1 6\n").unwrap();
        let loaded = load_points(&path, false, false);
        fs::remove_file(&path).unwrap();
        let m = loaded.unwrap();
        assert_eq!(m.len(), 4);
        assert_eq!(m.points()[3], Point3D::new(1.0, 1.0, 6.0));
    }

    #[test]
    fn test_too_few_rows() {
        match cartesian_points("0 0 1\n1 0 2\n") {
            Err(FitError::TooFewPoints { actual: 2, .. }) => {},
            other => panic!("Unexpected result {:?}", other),
        }
    }
}
