//! Reading translations back out of computed transform strings.
//!
//! Hosts report transforms the way CSS does, e.g. `matrix(1, 0, 0, 1, -1194.5, -1135)`.
//! This is the only place that knows that format.

use shared::Vector;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Unrecognised transform: {0:?}")]
    Unrecognized(String),
    #[error("Invalid matrix component {index}: {value:?}")]
    InvalidComponent { index: usize, value: String },
    #[error("Expected {expected} matrix components, found {found}")]
    Arity { expected: usize, found: usize },
}

/// A 2D `matrix(a, b, c, d, e, f)` or a 3D `matrix3d(...)` in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub enum Matrix {
    Affine([f64; 6]),
    Affine3d([f64; 16]),
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::Affine([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn translate(x: f64, y: f64) -> Self {
        Matrix::Affine([1.0, 0.0, 0.0, 1.0, x, y])
    }

    pub fn parse(input: &str) -> Result<Self, TransformError> {
        let input = input.trim();
        if input == "none" {
            return Ok(Self::IDENTITY);
        }

        if let Some(args) = arguments(input, "matrix3d") {
            return parse_components::<16>(args).map(Matrix::Affine3d);
        }
        if let Some(args) = arguments(input, "matrix") {
            return parse_components::<6>(args).map(Matrix::Affine);
        }

        Err(TransformError::Unrecognized(input.to_string()))
    }

    /// Raw component by position in the argument list.
    pub fn translation(&self) -> Vector {
        match self {
            Matrix::Affine(v) => Vector::new(v[4], v[5]),
            Matrix::Affine3d(v) => Vector::new(v[12], v[13]),
        }
    }
}

impl FromStr for Matrix {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, values): (&str, &[f64]) = match self {
            Matrix::Affine(values) => ("matrix", values.as_slice()),
            Matrix::Affine3d(values) => ("matrix3d", values.as_slice()),
        };

        write!(f, "{name}(")?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

fn arguments<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components<const N: usize>(args: &str) -> Result<[f64; N], TransformError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(TransformError::Arity {
            expected: N,
            found: parts.len(),
        });
    }

    let mut values = [0.0; N];
    for (index, part) in parts.iter().enumerate() {
        values[index] = part
            .parse::<f64>()
            .map_err(|_| TransformError::InvalidComponent {
                index,
                value: part.to_string(),
            })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_affine() {
        let matrix = Matrix::parse("matrix(1, 0, 0, 1, -1194.5, -1135)").unwrap();
        assert_eq!(matrix.translation(), Vector::new(-1194.5, -1135.0));
    }

    #[test]
    fn test_parse_affine3d() {
        let matrix = Matrix::parse(
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 25, -40.25, 0, 1)",
        )
        .unwrap();
        assert_eq!(matrix.translation(), Vector::new(25.0, -40.25));
    }

    #[test]
    fn test_none_is_identity() {
        assert_eq!(Matrix::parse("none").unwrap(), Matrix::IDENTITY);
        assert_eq!(Matrix::IDENTITY.translation(), Vector::ZERO);
    }

    #[test]
    fn test_display_roundtrip() {
        let matrix = Matrix::translate(-600.25, 12.0);
        let text = matrix.to_string();
        assert_eq!(text, "matrix(1, 0, 0, 1, -600.25, 12)");
        assert_eq!(text.parse::<Matrix>().unwrap(), matrix);
    }

    #[test]
    fn test_malformed_transforms() {
        assert!(matches!(
            Matrix::parse("translate(10px, 20px)"),
            Err(TransformError::Unrecognized(_))
        ));
        assert_eq!(
            Matrix::parse("matrix(1, 0, 0, 1, 5)"),
            Err(TransformError::Arity {
                expected: 6,
                found: 5
            })
        );
        assert!(matches!(
            Matrix::parse("matrix(1, 0, 0, 1, 5px, 0)"),
            Err(TransformError::InvalidComponent { index: 4, .. })
        ));
    }
}
