// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of SVG numbers, point lists, transform lists and basic-shape bounds.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Vec2};

/// Formats a number for an SVG attribute.
///
/// Uses the shortest representation that parses back to the same `f64`, so
/// values written by a controller can be measured again without drift.
/// Negative zero is written as `0`.
#[must_use]
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".into();
    }
    alloc::format!("{v}")
}

/// Parses an SVG length as user units.
///
/// Accepts plain numbers and a `px` suffix. Percentages and other units need
/// a layout context and return `None`.
#[must_use]
pub fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value);
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn numbers(list: &str) -> Option<Vec<f64>> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok())
        .collect()
}

/// Parses a `points` list (`"x1,y1 x2,y2 ..."`).
///
/// Returns `None` for malformed lists or an odd number of coordinates.
#[must_use]
pub fn parse_points(list: &str) -> Option<Vec<Point>> {
    let nums = numbers(list)?;
    if nums.len() % 2 != 0 {
        return None;
    }
    Some(nums.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

/// Parses an SVG `transform` attribute into an affine map.
///
/// Supports `matrix`, `translate`, `scale` and `rotate` (with optional
/// center). Functions compose left to right, as in SVG. Returns `None` for
/// anything it does not understand.
///
/// ```
/// use kurbo::{Affine, Point};
/// use blueprint_svg::parse_transform;
///
/// let t = parse_transform("translate(10 20) scale(2)").unwrap();
/// assert_eq!(t * Point::new(1.0, 1.0), Point::new(12.0, 22.0));
/// assert_eq!(parse_transform("").unwrap(), Affine::IDENTITY);
/// ```
#[must_use]
pub fn parse_transform(value: &str) -> Option<Affine> {
    let mut rest = value.trim();
    let mut out = Affine::IDENTITY;
    while !rest.is_empty() {
        let open = rest.find('(')?;
        let close = rest[open..].find(')')? + open;
        let name = rest[..open].trim().trim_start_matches(',').trim();
        let args = numbers(&rest[open + 1..close])?;
        let step = match (name, args.as_slice()) {
            ("matrix", &[a, b, c, d, e, f]) => Affine::new([a, b, c, d, e, f]),
            ("translate", &[tx]) => Affine::translate(Vec2::new(tx, 0.0)),
            ("translate", &[tx, ty]) => Affine::translate(Vec2::new(tx, ty)),
            ("scale", &[s]) => Affine::scale(s),
            ("scale", &[sx, sy]) => Affine::scale_non_uniform(sx, sy),
            ("rotate", &[deg]) => Affine::rotate(deg.to_radians()),
            ("rotate", &[deg, cx, cy]) => {
                Affine::rotate_about(deg.to_radians(), Point::new(cx, cy))
            }
            _ => return None,
        };
        out *= step;
        rest = rest[close + 1..].trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    }
    Some(out)
}

/// Local-space bounds of a basic shape given an attribute lookup.
///
/// Handles `rect`, `circle`, `ellipse`, `line`, `polyline` and `polygon`.
/// Other tags, and shapes with missing or non-numeric geometry, have no
/// bounds.
pub fn shape_bounds<'a>(tag: &str, attr: impl Fn(&str) -> Option<&'a str>) -> Option<Rect> {
    let num = |name: &str| attr(name).and_then(parse_length);
    let num_or_zero = |name: &str| match attr(name) {
        Some(v) => parse_length(v),
        None => Some(0.0),
    };
    match tag {
        "rect" => {
            let (x, y) = (num_or_zero("x")?, num_or_zero("y")?);
            let (w, h) = (num("width")?, num("height")?);
            (w >= 0.0 && h >= 0.0).then(|| Rect::new(x, y, x + w, y + h))
        }
        "circle" => {
            let (cx, cy, r) = (num_or_zero("cx")?, num_or_zero("cy")?, num("r")?);
            (r >= 0.0).then(|| Rect::new(cx - r, cy - r, cx + r, cy + r))
        }
        "ellipse" => {
            let (cx, cy) = (num_or_zero("cx")?, num_or_zero("cy")?);
            let (rx, ry) = (num("rx")?, num("ry")?);
            (rx >= 0.0 && ry >= 0.0).then(|| Rect::new(cx - rx, cy - ry, cx + rx, cy + ry))
        }
        "line" => {
            let p0 = Point::new(num_or_zero("x1")?, num_or_zero("y1")?);
            let p1 = Point::new(num_or_zero("x2")?, num_or_zero("y2")?);
            Some(Rect::from_points(p0, p1))
        }
        "polyline" | "polygon" => {
            let points = parse_points(attr("points")?)?;
            let (first, rest) = points.split_first()?;
            Some(
                rest.iter()
                    .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
            )
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_is_shortest_roundtrip() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.1), "1.1");
        assert_eq!(format_number(0.000_000_1), "0.0000001");
        let v = 0.1 + 0.2;
        assert_eq!(format_number(v).parse::<f64>().unwrap(), v);
    }

    #[test]
    fn parse_length_units() {
        assert_eq!(parse_length(" 12.5 "), Some(12.5));
        assert_eq!(parse_length("4px"), Some(4.0));
        assert_eq!(parse_length("100%"), None);
        assert_eq!(parse_length("NaN"), None);
    }

    #[test]
    fn transform_list_composes_left_to_right() {
        let t = parse_transform("scale(2), translate(5,0)").unwrap();
        assert_eq!(t * Point::ZERO, Point::new(10.0, 0.0));
    }

    #[test]
    fn transform_rejects_garbage() {
        assert!(parse_transform("skewX(3)").is_none());
        assert!(parse_transform("translate(1 2").is_none());
        assert!(parse_transform("scale()").is_none());
    }

    #[test]
    fn matrix_transform() {
        let t = parse_transform("matrix(1 0 0 1 3 4)").unwrap();
        assert_eq!(t * Point::ZERO, Point::new(3.0, 4.0));
    }

    #[test]
    fn basic_shape_bounds() {
        let rect = [("x", "1"), ("y", "2"), ("width", "10"), ("height", "5")];
        let lookup = |n: &str| rect.iter().find(|(k, _)| *k == n).map(|(_, v)| *v);
        assert_eq!(shape_bounds("rect", lookup), Some(Rect::new(1.0, 2.0, 11.0, 7.0)));

        let circle = [("cx", "5"), ("r", "2")];
        let lookup = |n: &str| circle.iter().find(|(k, _)| *k == n).map(|(_, v)| *v);
        assert_eq!(shape_bounds("circle", lookup), Some(Rect::new(3.0, -2.0, 7.0, 2.0)));

        let poly = [("points", "0,0 10,-4 3,8")];
        let lookup = |n: &str| poly.iter().find(|(k, _)| *k == n).map(|(_, v)| *v);
        assert_eq!(shape_bounds("polygon", lookup), Some(Rect::new(0.0, -4.0, 10.0, 8.0)));
    }

    #[test]
    fn shapes_without_geometry_have_no_bounds() {
        assert_eq!(shape_bounds("rect", |_| None), None);
        assert_eq!(shape_bounds("g", |_| Some("1")), None);
        let pct = |n: &str| (n == "width" || n == "height").then_some("100%");
        assert_eq!(shape_bounds("rect", pct), None);
    }
}
