// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=blueprint_svg --heading-base-level=0

//! Blueprint SVG: a small headless element tree for SVG scaffolding.
//!
//! This crate models just enough of a DOM for a controller to build and
//! drive an SVG subtree without a browser:
//!
//! - [`Document`]: an arena of elements with ordered attributes and inline
//!   styles, simple selector lookup, and host-supplied layout boxes.
//! - [`AttributeSpec`]: structured attribute/style writes, where
//!   [`AttrValue::Unset`] explicitly removes an attribute or property.
//! - Measurement: [`Document::bounding_client_rect`] unions the transformed
//!   bounds of basic shapes (`rect`, `circle`, `ellipse`, `line`,
//!   `polyline`, `polygon`) the way a browser reports them.
//! - Export: [`Document::to_svg_string`] writes the subtree as markup.
//!
//! It does **not** render anything, run a cascade, or lay out boxes; the host
//! reports layout with [`Document::set_layout_rect`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use blueprint_svg::{AttributeSpec, Document};
//!
//! let mut doc = Document::new();
//! let svg = doc.create_element("svg", &AttributeSpec::new().attr("class", "canvas"));
//! doc.append_child(doc.root(), svg);
//! doc.set_layout_rect(svg, Rect::new(0.0, 0.0, 300.0, 200.0));
//!
//! let dot = doc.create_element(
//!     "circle",
//!     &AttributeSpec::new().attr("cx", "10").attr("cy", "10").attr("r", "5"),
//! );
//! doc.append_child(svg, dot);
//!
//! assert_eq!(doc.bounding_client_rect(dot), Rect::new(5.0, 5.0, 15.0, 15.0));
//! assert_eq!(
//!     doc.to_svg_string(svg),
//!     r#"<svg class="canvas"><circle cx="10" cy="10" r="5"/></svg>"#
//! );
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod attributes;
mod document;
mod geometry;

pub use attributes::{AttrValue, AttributeSpec};
pub use document::{Document, ElementId};
pub use geometry::{format_number, parse_length, parse_points, parse_transform, shape_bounds};
