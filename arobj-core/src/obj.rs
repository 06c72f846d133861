/// Parser for the simplified Wavefront OBJ subset
///
/// Recognized records: `o <name>`, `v <x> <y> <z>`, `f <ref> <ref> <ref>...`
/// where `<ref>` is `int`, `int/int`, or `int/int/int` (only the leading
/// integer is used). `#` comments, blank lines, and unrecognized record
/// keywords are skipped, so richer OBJ files still load their geometry.
use nom::{character::complete::i64 as integer, combinator::all_consuming, number::complete::float, IResult};

use nalgebra::Point3;

use crate::error::ParseError;
use crate::geometry::ObjectDescription;

/// Parse an object description from a raw text payload.
///
/// Face references are validated against the final vertex count, so a face
/// may reference vertices declared later in the file.
pub fn parse(text: &str) -> Result<ObjectDescription, ParseError> {
    let mut name = None;
    let mut vertices: Vec<Point3<f32>> = Vec::new();
    // 1-based references, already fan-triangulated, pending range validation
    let mut face_references: Vec<i64> = Vec::new();

    for (line_index, raw_line) in logical_lines(text).enumerate() {
        let line = line_index + 1;
        let trimmed = raw_line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let Some((&keyword, rest)) = tokens.split_first() else {
            continue;
        };

        match keyword {
            "o" => {
                // Last occurrence wins; a bare `o` leaves the name unchanged
                if let Some(&candidate) = rest.first() {
                    name = Some(candidate.to_string());
                }
            }
            "v" => {
                if rest.len() < 3 {
                    return Err(ParseError::MalformedVertex { line });
                }
                let x = parse_coordinate(rest[0], line)?;
                let y = parse_coordinate(rest[1], line)?;
                let z = parse_coordinate(rest[2], line)?;
                // A fourth `w` component, if present, is ignored
                vertices.push(Point3::new(x, y, z));
            }
            "f" => {
                if rest.len() < 3 {
                    return Err(ParseError::DegenerateFace {
                        line,
                        count: rest.len(),
                    });
                }
                let mut references = Vec::with_capacity(rest.len());
                for &token in rest {
                    references.push(parse_reference(token, line)?);
                }
                for triangle in triangulate(&references) {
                    face_references.extend(triangle);
                }
            }
            // Unrecognized record types (vt, vn, s, usemtl, ...) are skipped
            _ => {}
        }
    }

    let mut face_indices = Vec::with_capacity(face_references.len());
    for &reference in &face_references {
        if reference < 1 || reference as usize > vertices.len() {
            return Err(ParseError::IndexOutOfRange {
                reference,
                vertex_count: vertices.len(),
            });
        }
        face_indices.push((reference - 1) as u32);
    }

    Ok(ObjectDescription {
        name,
        vertices,
        face_indices,
    })
}

/// Fan-triangulate a polygon given as an ordered reference list.
///
/// Produces `refs.len() - 2` triangles `(refs[0], refs[i], refs[i + 1])`,
/// anchored at the first reference and preserving the input winding. A
/// triangle passes through unchanged.
pub fn triangulate<T: Copy>(refs: &[T]) -> Vec<[T; 3]> {
    debug_assert!(refs.len() >= 3);

    let mut triangles = Vec::with_capacity(refs.len().saturating_sub(2));
    for i in 1..refs.len().saturating_sub(1) {
        triangles.push([refs[0], refs[i], refs[i + 1]]);
    }
    triangles
}

/// Split raw text into logical lines on `\r\n`, `\r`, or `\n`.
fn logical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(['\r', '\n']))
}

/// Parse one vertex coordinate token. The decimal separator is always `.`,
/// independent of any host locale.
fn parse_coordinate(token: &str, line: usize) -> Result<f32, ParseError> {
    let parsed: IResult<&str, f32> = all_consuming(float)(token);
    match parsed {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(ParseError::MalformedVertex { line }),
    }
}

/// Parse one face reference token, keeping only the vertex index before any
/// `/texture/normal` suffix. Returned references are still 1-based.
fn parse_reference(token: &str, line: usize) -> Result<i64, ParseError> {
    let head = token.split('/').next().unwrap_or_default();
    let parsed: IResult<&str, i64> = all_consuming(integer)(head);
    match parsed {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(ParseError::MalformedFace {
            line,
            token: token.to_string(),
        }),
    }
}
