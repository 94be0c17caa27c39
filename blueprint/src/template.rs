// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed element subtree every blueprint is built from.

use blueprint_svg::{AttributeSpec, Document, ElementId, format_number};

use crate::grid::grid_size;
use crate::settings::Settings;
use crate::uid::Uid;

/// Half-length of the axis lines, in screen pixels.
const AXIS_EXTENT: f64 = 100_000.0;

/// Handles to the elements of a blueprint subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlueprintElements {
    /// The outer `<svg>` container; mounted under the configured parent.
    pub blueprint: ElementId,
    /// The `<pattern>` tiling the background grid.
    pub grid_pattern: ElementId,
    /// The cell drawn inside the grid pattern.
    pub grid10: ElementId,
    /// The full-size `<rect>` filled with the grid pattern.
    pub grid: ElementId,
    /// The `<g>` holding the x and y axis lines.
    pub axis: ElementId,
    /// The `<g>` holding user content; carries the pan+zoom transform.
    pub workspace: ElementId,
}

/// Builds a detached blueprint subtree in `document`.
///
/// The caller is responsible for attaching [`BlueprintElements::blueprint`].
/// Element ids are namespaced with `uid` so several blueprints can share a
/// document.
pub fn build_blueprint_elements(
    document: &mut Document,
    settings: &Settings,
    uid: Uid,
) -> BlueprintElements {
    let id = format!("blueprint-{uid}");
    let pattern_id = format!("{id}-grid");
    let size = format_number(grid_size(1.0));

    let blueprint = document.create_element(
        "svg",
        &AttributeSpec::new()
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("id", id.as_str())
            .attr("class", "blueprint")
            .attr("width", "100%")
            .attr("height", "100%"),
    );

    let defs = document.create_element("defs", &AttributeSpec::new());
    let grid_pattern = document.create_element(
        "pattern",
        &AttributeSpec::new()
            .attr("id", pattern_id.as_str())
            .attr("class", "grid-pattern")
            .attr("patternUnits", "userSpaceOnUse")
            .attr("x", "0")
            .attr("y", "0")
            .attr("width", size.as_str())
            .attr("height", size.as_str()),
    );
    let grid10 = document.create_element(
        "rect",
        &AttributeSpec::new()
            .attr("class", "grid10")
            .attr("width", size.as_str())
            .attr("height", size.as_str())
            .attr("fill", "none")
            .attr("stroke", settings.grid_color.as_str())
            .attr("stroke-width", "1"),
    );
    document.append_child(grid_pattern, grid10);
    document.append_child(defs, grid_pattern);
    document.append_child(blueprint, defs);

    let grid = document.create_element(
        "rect",
        &AttributeSpec::new()
            .attr("class", "grid")
            .attr("width", "100%")
            .attr("height", "100%")
            .attr("fill", format!("url(#{pattern_id})")),
    );
    document.append_child(blueprint, grid);

    let axis = document.create_element(
        "g",
        &AttributeSpec::new()
            .attr("class", "axis")
            .attr("stroke", settings.axis_color.as_str())
            .attr("stroke-width", "1"),
    );
    let extent = format_number(AXIS_EXTENT);
    let neg_extent = format_number(-AXIS_EXTENT);
    for (class, x1, y1, x2, y2) in [
        ("axis-x", neg_extent.as_str(), "0", extent.as_str(), "0"),
        ("axis-y", "0", neg_extent.as_str(), "0", extent.as_str()),
    ] {
        let line = document.create_element(
            "line",
            &AttributeSpec::new()
                .attr("class", class)
                .attr("x1", x1)
                .attr("y1", y1)
                .attr("x2", x2)
                .attr("y2", y2),
        );
        document.append_child(axis, line);
    }
    document.append_child(blueprint, axis);

    let workspace = document.create_element(
        "g",
        &AttributeSpec::new()
            .attr("class", "workspace")
            .attr("stroke", settings.stroke.as_str())
            .attr("fill", settings.fill.as_str()),
    );
    document.append_child(blueprint, workspace);

    BlueprintElements {
        blueprint,
        grid_pattern,
        grid10,
        grid,
        axis,
        workspace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtree_shape() {
        let mut doc = Document::new();
        let e = build_blueprint_elements(&mut doc, &Settings::default(), Uid::new(7));

        assert_eq!(doc.tag(e.blueprint), "svg");
        assert_eq!(doc.attribute(e.blueprint, "id"), Some("blueprint-7"));
        assert_eq!(doc.parent(e.blueprint), None);
        assert_eq!(doc.parent(e.grid10), Some(e.grid_pattern));
        assert_eq!(doc.attribute(e.grid, "fill"), Some("url(#blueprint-7-grid)"));
        assert_eq!(doc.children(e.axis).len(), 2);
        assert_eq!(doc.parent(e.workspace), Some(e.blueprint));
        assert!(doc.children(e.workspace).is_empty());
        assert_eq!(doc.attribute(e.grid_pattern, "width"), Some("100"));
    }

    #[test]
    fn uid_namespaces_ids() {
        let mut doc = Document::new();
        let a = build_blueprint_elements(&mut doc, &Settings::default(), Uid::new(1));
        let b = build_blueprint_elements(&mut doc, &Settings::default(), Uid::new(2));
        assert_ne!(
            doc.attribute(a.grid_pattern, "id"),
            doc.attribute(b.grid_pattern, "id")
        );
    }
}
