//! OBJ-like mesh text format.
//!
//! Line-oriented, whitespace-separated records:
//!
//! | Record | Meaning |
//! |--------|---------|
//! | `v x y z` | vertex position |
//! | `vn x y z` | normal |
//! | `vt u v` | texture coordinate |
//! | `f i[/t[/n]] ...` | face of ≥3 vertex-uses, 1-based indices |
//!
//! In a face triple the texture-coordinate and normal slots may be empty
//! (`1//2` means "vertex 1, no texcoord, normal 2"); the absence markers are
//! preserved exactly on serialization. Lines starting with `#` and blank
//! lines are ignored. A line with an unknown leading keyword is skipped with
//! a [`log::warn`]; malformed numbers and face records are hard errors.
//!
//! Serialization writes vertices, texture coordinates, normals, then faces,
//! with floats in Rust's shortest-roundtrip form, so parse → write → parse
//! reproduces the mesh index-for-index.
//!
//! # Example
//!
//! ```
//! use sliver::io::obj;
//!
//! let mesh = obj::parse("
//!     v 0 0 0
//!     v 1 0 0
//!     v 0 1 0
//!     f 1 2 3
//! ").unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.num_faces(), 1);
//! ```

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::warn;
use nalgebra::{Point2, Point3, Vector3};

use crate::error::{GeomError, Result};
use crate::mesh::{Face, FaceVertex, Mesh};

/// Parse a mesh from text.
///
/// The index-range invariant is checked after parsing: a face referencing a
/// vertex, texcoord, or normal that the file never declared is rejected.
pub fn parse(input: &str) -> Result<Mesh> {
    let mut mesh = Mesh::new();

    for (number, raw) in input.lines().enumerate() {
        let line = number + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let rest: Vec<&str> = tokens.collect();

        match keyword {
            "v" => mesh.vertices.push(Point3::from(floats::<3>(&rest, line)?)),
            "vn" => mesh.normals.push(Vector3::from(floats::<3>(&rest, line)?)),
            "vt" => mesh.texcoords.push(Point2::from(floats::<2>(&rest, line)?)),
            "f" => mesh.faces.push(face(&rest, line)?),
            other => warn!("line {line}: skipping unknown keyword `{other}`"),
        }
    }

    mesh.validate()?;
    Ok(mesh)
}

/// Load a mesh from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Serialize a mesh to a writer.
pub fn write<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for t in &mesh.texcoords {
        writeln!(writer, "vt {} {}", t.x, t.y)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for face in &mesh.faces {
        write!(writer, "f")?;
        for corner in &face.corners {
            let v = corner.vertex + 1;
            match (corner.texcoord, corner.normal) {
                (None, None) => write!(writer, " {v}")?,
                (Some(t), None) => write!(writer, " {v}/{}", t + 1)?,
                (None, Some(n)) => write!(writer, " {v}//{}", n + 1)?,
                (Some(t), Some(n)) => write!(writer, " {v}/{}/{}", t + 1, n + 1)?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Serialize a mesh to a string.
pub fn to_text(mesh: &Mesh) -> Result<String> {
    let mut buffer = Vec::new();
    write(mesh, &mut buffer)?;
    // The serializer only emits ASCII.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Save a mesh to a file.
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Parse exactly `N` floats from the record's remaining tokens.
fn floats<const N: usize>(tokens: &[&str], line: usize) -> Result<[f64; N]> {
    if tokens.len() != N {
        return Err(GeomError::Dimension {
            expected: N,
            actual: tokens.len(),
            line,
        });
    }

    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| GeomError::Parse {
            line,
            message: format!("malformed number `{token}`"),
        })?;
    }
    Ok(out)
}

/// Parse a face record: at least three `v[/t[/n]]` triples.
fn face(tokens: &[&str], line: usize) -> Result<Face> {
    if tokens.len() < 3 {
        return Err(GeomError::Parse {
            line,
            message: format!("face needs at least 3 vertices, found {}", tokens.len()),
        });
    }

    let mut corners = Vec::with_capacity(tokens.len());
    for token in tokens {
        let fields: Vec<&str> = token.split('/').collect();
        if fields.len() > 3 {
            return Err(GeomError::Parse {
                line,
                message: format!("malformed face triple `{token}`"),
            });
        }

        let vertex = index(fields[0], token, line)?;
        let texcoord = optional_index(fields.get(1), token, line)?;
        let normal = optional_index(fields.get(2), token, line)?;
        corners.push(FaceVertex::new(vertex, texcoord, normal));
    }

    Ok(Face::new(corners))
}

/// Parse a 1-based index field into its 0-based form.
fn index(field: &str, token: &str, line: usize) -> Result<usize> {
    let raw: usize = field.parse().map_err(|_| GeomError::Parse {
        line,
        message: format!("malformed index in face triple `{token}`"),
    })?;
    raw.checked_sub(1).ok_or_else(|| GeomError::Parse {
        line,
        message: format!("face triple `{token}` uses index 0, indices are 1-based"),
    })
}

/// Parse an optional index field; an absent or empty field is `None`.
fn optional_index(field: Option<&&str>, token: &str, line: usize) -> Result<Option<usize>> {
    match field {
        None => Ok(None),
        Some(f) if f.is_empty() => Ok(None),
        Some(f) => index(f, token, line).map(Some),
    }
}
