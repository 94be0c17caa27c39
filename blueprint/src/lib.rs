// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=blueprint --heading-base-level=0

//! Blueprint: a pannable, zoomable SVG drawing canvas.
//!
//! A blueprint is an `<svg>` subtree with a tiling background grid, a pair of
//! axis lines through the content origin, and a workspace group that holds
//! user content. [`ViewportController`] mounts that subtree into a
//! [`Document`](blueprint_svg::Document) and keeps the three layers in sync
//! as the view pans and zooms:
//!
//! - Pan and move: [`ViewportController::pan`], [`ViewportController::move_to`].
//! - Zoom about a fixed screen point, clamped to [`ZoomLimit`]:
//!   [`ViewportController::zoom`].
//! - Centering and fit-to-content: [`ViewportController::center`],
//!   [`ViewportController::fit`].
//! - Element creation with workspace paint defaults:
//!   [`ViewportController::create_element`], [`ViewportController::append`].
//!
//! The grid spacing follows the scale's decimal mantissa (see [`grid_size`]),
//! so the grid looks the same at every power of ten.
//!
//! Input comes from [`blueprint_pointer::PointerTracker`]: subscribe to its
//! gestures and forward them to [`ViewportController::apply_gesture`], or
//! bind them yourself.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use blueprint::{Settings, ViewportController, Zoom};
//! use blueprint_svg::{AttributeSpec, Document};
//!
//! let mut doc = Document::new();
//! doc.set_layout_rect(doc.root(), Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let mut view = ViewportController::mount(doc, Settings::default()).unwrap();
//! view.append(
//!     "rect",
//!     AttributeSpec::new()
//!         .attr("width", "100")
//!         .attr("height", "50"),
//! );
//!
//! // Fit leaves 20px of padding: 760 / 100 is the limiting ratio, clamped to 7.6.
//! view.fit();
//! assert!((view.scale() - 7.6).abs() < 1e-12);
//!
//! // Zooming about a point keeps that point fixed on screen.
//! let anchor = Point::new(10.0, 10.0);
//! let before = view.view_to_content(anchor);
//! view.zoom(Zoom::delta(1.0).at(anchor));
//! let after = view.view_to_content(anchor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`Settings`] from partial configuration maps.

mod controller;
mod error;
mod grid;
mod settings;
mod template;
mod uid;

pub use controller::{Move, Pan, ViewportController, Zoom};
pub use error::ConfigurationError;
pub use grid::{grid_size, mantissa};
pub use settings::{Settings, SettingsError, ZoomDirection, ZoomLimit};
pub use template::{BlueprintElements, build_blueprint_elements};
pub use uid::Uid;
