//! Point-cloud text format.
//!
//! Each line is `TAG x y z`. The tag's *length* selects the record type: a
//! one-character tag is a position, a two-character tag is a normal (the tag
//! letters themselves are not inspected). Positions and normals are paired
//! up positionally into `(position, normal)` records, truncating to the
//! shorter of the two streams.

use std::fs;
use std::path::Path;

use nalgebra::{Point3, Vector3};

use crate::error::{GeomError, Result};

/// An ordered set of oriented points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    /// Paired position and normal records.
    pub points: Vec<(Point3<f64>, Vector3<f64>)>,
}

impl PointCloud {
    /// Number of paired records.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud holds no records.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Parse a point cloud from text.
pub fn parse(input: &str) -> Result<PointCloud> {
    let mut positions = Vec::new();
    let mut normals = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };

        let rest: Vec<&str> = tokens.collect();
        if rest.len() != 3 {
            return Err(GeomError::Dimension {
                expected: 3,
                actual: rest.len(),
                line,
            });
        }

        let mut xyz = [0.0; 3];
        for (slot, token) in xyz.iter_mut().zip(&rest) {
            *slot = token.parse().map_err(|_| GeomError::Parse {
                line,
                message: format!("malformed number `{token}`"),
            })?;
        }

        match tag.chars().count() {
            1 => positions.push(Point3::from(xyz)),
            2 => normals.push(Vector3::from(xyz)),
            n => {
                return Err(GeomError::Parse {
                    line,
                    message: format!("tag `{tag}` has {n} characters, expected 1 or 2"),
                })
            }
        }
    }

    let points = positions.into_iter().zip(normals).collect();
    Ok(PointCloud { points })
}

/// Load a point cloud from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}
