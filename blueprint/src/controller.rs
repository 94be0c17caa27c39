// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use blueprint_pointer::{GestureEvent, GestureKind};
use blueprint_svg::{AttributeSpec, Document, ElementId, format_number};
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::ConfigurationError;
use crate::grid::grid_size;
use crate::settings::Settings;
use crate::template::{BlueprintElements, build_blueprint_elements};
use crate::uid::Uid;

/// Arguments to [`ViewportController::move_to`].
///
/// `None` coordinates keep their current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    /// New horizontal position, or `None` to keep it.
    pub x: Option<f64>,
    /// New vertical position, or `None` to keep it.
    pub y: Option<f64>,
    /// Write the new transform to the elements immediately.
    pub draw: bool,
}

impl Default for Move {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            draw: true,
        }
    }
}

impl Move {
    /// Move both coordinates.
    #[must_use]
    pub fn to(position: Point) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            draw: true,
        }
    }

    /// Move horizontally only.
    #[must_use]
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    /// Move vertically only.
    #[must_use]
    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    /// Skip the redraw; the caller will draw later.
    #[must_use]
    pub fn without_draw(mut self) -> Self {
        self.draw = false;
        self
    }
}

/// Arguments to [`ViewportController::pan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pan {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Write the new transform to the elements immediately.
    pub draw: bool,
}

impl Default for Pan {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            draw: true,
        }
    }
}

impl Pan {
    /// Pan by `offset`.
    #[must_use]
    pub fn by(offset: Vec2) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            draw: true,
        }
    }

    /// Skip the redraw; the caller will draw later.
    #[must_use]
    pub fn without_draw(mut self) -> Self {
        self.draw = false;
        self
    }
}

/// Arguments to [`ViewportController::zoom`].
///
/// The anchor `target` is a view-space point that stays put across the zoom;
/// `None` anchors at the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zoom {
    /// Relative zoom, typically one wheel step: the scale grows by
    /// `delta * zoom_direction * zoom_factor` of itself.
    Delta {
        /// Wheel delta.
        delta: f64,
        /// Anchor point in view space.
        target: Option<Point>,
    },
    /// Absolute zoom to `scale`.
    Scale {
        /// Requested scale (clamped to the zoom limits).
        scale: f64,
        /// Anchor point in view space.
        target: Option<Point>,
    },
}

impl Default for Zoom {
    fn default() -> Self {
        Self::Scale {
            scale: 1.0,
            target: None,
        }
    }
}

impl Zoom {
    /// Relative zoom by `delta` about the viewport center.
    #[must_use]
    pub fn delta(delta: f64) -> Self {
        Self::Delta {
            delta,
            target: None,
        }
    }

    /// Absolute zoom to `scale` about the viewport center.
    #[must_use]
    pub fn scale(scale: f64) -> Self {
        Self::Scale {
            scale,
            target: None,
        }
    }

    /// Anchors the zoom at `target` instead of the viewport center.
    #[must_use]
    pub fn at(self, target: Point) -> Self {
        match self {
            Self::Delta { delta, .. } => Self::Delta {
                delta,
                target: Some(target),
            },
            Self::Scale { scale, .. } => Self::Scale {
                scale,
                target: Some(target),
            },
        }
    }

    fn target(&self) -> Option<Point> {
        match *self {
            Self::Delta { target, .. } | Self::Scale { target, .. } => target,
        }
    }
}

/// Pan/zoom controller for one mounted blueprint.
///
/// The controller owns the [`Document`] it was mounted into and is the only
/// writer of its blueprint subtree. Its state is a uniform `scale` and a
/// view-space `position` (where content-space `(0, 0)` appears), related by
///
/// ```text
/// view = content * scale + position
/// ```
///
/// Every mutating call that draws writes the transform to the grid pattern,
/// the axis group and the workspace group before returning.
///
/// ```
/// use kurbo::{Point, Rect};
/// use blueprint::{Settings, ViewportController, Zoom};
/// use blueprint_svg::Document;
///
/// let mut doc = Document::new();
/// doc.set_layout_rect(doc.root(), Rect::new(0.0, 0.0, 800.0, 600.0));
///
/// let mut view = ViewportController::mount(doc, Settings::default()).unwrap();
/// assert_eq!(view.position(), Point::new(400.0, 300.0));
///
/// view.zoom(Zoom::scale(2.0).at(Point::new(400.0, 300.0)));
/// assert_eq!(view.scale(), 2.0);
/// assert_eq!(view.position(), Point::new(400.0, 300.0));
/// ```
#[derive(Clone, Debug)]
pub struct ViewportController {
    uid: Uid,
    scale: f64,
    position: Point,
    grid_size: f64,
    settings: Settings,
    parent: ElementId,
    elements: BlueprintElements,
    document: Document,
}

impl ViewportController {
    /// Mounts a new blueprint into `document` using a fresh [`Uid`].
    ///
    /// See [`mount_with_uid`](Self::mount_with_uid).
    pub fn mount(document: Document, settings: Settings) -> Result<Self, ConfigurationError> {
        Self::mount_with_uid(document, settings, Uid::next())
    }

    /// Mounts a new blueprint into `document` under the element matching
    /// `settings.parent_selector`, then centers the view.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::InvalidSettings`] if the settings do not validate.
    /// - [`ConfigurationError::MissingParent`] if the selector matches nothing.
    pub fn mount_with_uid(
        mut document: Document,
        settings: Settings,
        uid: Uid,
    ) -> Result<Self, ConfigurationError> {
        settings.validate()?;
        let parent = document
            .query_selector(&settings.parent_selector)
            .ok_or_else(|| ConfigurationError::MissingParent {
                selector: settings.parent_selector.clone(),
            })?;

        let elements = build_blueprint_elements(&mut document, &settings, uid);
        document.append_child(parent, elements.blueprint);

        let scale = settings.zoom_limit.clamp(1.0);
        let mut controller = Self {
            uid,
            scale,
            position: Point::ZERO,
            grid_size: grid_size(scale),
            settings,
            parent,
            elements,
            document,
        };
        controller.update_grid_size();
        controller.center();
        tracing::debug!(
            uid = uid.get(),
            selector = %controller.settings.parent_selector,
            size = ?controller.view_size(),
            "blueprint mounted"
        );
        Ok(controller)
    }

    /// The id this blueprint was mounted with.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Current scale, always within the configured zoom limits.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current view-space position of the content origin.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current major grid spacing in screen pixels.
    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// The settings this blueprint was mounted with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handles to the blueprint's elements.
    pub fn elements(&self) -> &BlueprintElements {
        &self.elements
    }

    /// The element the blueprint is mounted under.
    pub fn parent(&self) -> ElementId {
        self.parent
    }

    /// The owned document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Gives the document back, unmounting nothing.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Rendered size of the blueprint container.
    pub fn view_size(&self) -> Size {
        self.document.layout_rect(self.elements.blueprint).size()
    }

    /// Records a new rendered size for the blueprint container.
    ///
    /// The view is not moved; call [`center`](Self::center) or
    /// [`fit`](Self::fit) afterwards if desired.
    pub fn resize(&mut self, size: Size) {
        let origin = self.document.layout_rect(self.elements.blueprint).origin();
        self.document
            .set_layout_rect(self.elements.blueprint, Rect::from_origin_size(origin, size));
    }

    /// The geometric center of the viewport, in view space.
    pub fn center_coords(&self) -> Point {
        let size = self.view_size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    /// The content-to-view transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::scale(self.scale)
    }

    /// Converts a content-space point to view space.
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Converts a view-space point to content space.
    pub fn view_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.position.x) / self.scale,
            (pt.y - self.position.y) / self.scale,
        )
    }

    /// Writes position, scale and stroke width to the elements.
    pub fn draw(&mut self) {
        self.update_positions();
    }

    /// Sets the position; `None` coordinates keep their current value.
    pub fn move_to(&mut self, args: Move) {
        self.position = Point::new(
            args.x.unwrap_or(self.position.x),
            args.y.unwrap_or(self.position.y),
        );
        if args.draw {
            self.draw();
        }
    }

    /// Moves the position by an offset.
    pub fn pan(&mut self, args: Pan) {
        self.move_to(Move {
            x: Some(self.position.x + args.x),
            y: Some(self.position.y + args.y),
            draw: args.draw,
        });
    }

    /// Changes the scale while keeping the anchor point fixed on screen.
    ///
    /// The resulting scale is clamped to the zoom limits; a non-finite result
    /// leaves the scale unchanged. The grid size follows the new scale, and
    /// the view is redrawn.
    pub fn zoom(&mut self, args: Zoom) {
        let old_scale = self.scale;
        let requested = match args {
            Zoom::Delta { delta, .. } => {
                let delta = delta * self.settings.zoom_direction.sign();
                old_scale + delta * self.settings.zoom_factor * old_scale
            }
            Zoom::Scale { scale, .. } => scale,
        };
        if requested.is_finite() {
            self.scale = self.settings.zoom_limit.clamp(requested);
        } else {
            tracing::trace!(requested, "ignored non-finite scale");
        }

        self.grid_size = grid_size(self.scale);
        self.update_grid_size();

        // Keep the content point under `target` where it is.
        let target = args.target().unwrap_or_else(|| self.center_coords());
        let content = (target - self.position) / old_scale;
        let position = target - content * self.scale;
        tracing::trace!(old_scale, scale = self.scale, ?target, "zoom");
        self.move_to(Move::to(position));
    }

    /// Moves the content origin to the center of the viewport.
    pub fn center(&mut self) {
        self.move_to(Move::to(self.center_coords()));
    }

    /// Scales and centers the workspace content to fill the viewport,
    /// leaving `fit_padding` on every side.
    ///
    /// An empty workspace just [`center`](Self::center)s.
    pub fn fit(&mut self) {
        let workspace = self.document.bounding_client_rect(self.elements.workspace);
        let width = workspace.width() / self.scale;
        let height = workspace.height() / self.scale;

        if width == 0.0 || height == 0.0 || width.is_nan() || height.is_nan() {
            tracing::debug!("fit on empty workspace, centering");
            self.center();
            return;
        }

        let padding = self.settings.fit_padding * 2.0;
        let view = self.view_size();
        let scale_x = (view.width - padding) / width;
        let scale_y = (view.height - padding) / height;
        self.zoom(Zoom::scale(scale_x.min(scale_y)));

        // Zooming moved the content; measure again before centering it.
        let blueprint = self.document.bounding_client_rect(self.elements.blueprint);
        let workspace = self.document.bounding_client_rect(self.elements.workspace);
        let dx = (blueprint.width() - workspace.width()) / 2.0;
        let dy = (blueprint.height() - workspace.height()) / 2.0;
        self.pan(Pan::by(Vec2::new(
            -workspace.x0 + blueprint.x0 + dx,
            -workspace.y0 + blueprint.y0 + dy,
        )));
        tracing::debug!(scale = self.scale, position = ?self.position, "fit");
    }

    /// Creates a detached element with the workspace paint defaults.
    ///
    /// Defaults: no `stroke-width` attribute, `stroke`/`fill` from the
    /// settings, and no inline `stroke-width`/`stroke`/`fill` so the
    /// workspace's non-scaling stroke applies. Entries in `attributes` win.
    pub fn create_element(&mut self, tag: &str, attributes: AttributeSpec) -> ElementId {
        let defaults = AttributeSpec::new()
            .unset("stroke-width")
            .attr("stroke", self.settings.stroke.as_str())
            .attr("fill", self.settings.fill.as_str())
            .unset_style("stroke-width")
            .unset_style("stroke")
            .unset_style("fill");
        self.document
            .create_element(tag, &defaults.merge(attributes))
    }

    /// Creates an element like [`create_element`](Self::create_element) and
    /// appends it to the workspace.
    pub fn append(&mut self, tag: &str, attributes: AttributeSpec) -> ElementId {
        let element = self.create_element(tag, attributes);
        self.document.append_child(self.elements.workspace, element);
        element
    }

    /// Default gesture binding: pans on `pan.move` and zooms on `wheel.move`
    /// anchored at the pointer. Other gestures are ignored.
    ///
    /// Gesture positions are taken to be relative to the blueprint container.
    pub fn apply_gesture(&mut self, event: &GestureEvent) {
        match event.kind {
            GestureKind::PanMove => self.pan(Pan::by(event.movement)),
            GestureKind::WheelMove => {
                self.zoom(Zoom::delta(f64::from(event.wheel_delta)).at(event.position));
            }
            GestureKind::Move
            | GestureKind::PanStart
            | GestureKind::PanEnd
            | GestureKind::WheelStart
            | GestureKind::WheelEnd => {}
        }
    }

    /// Serializes the blueprint subtree as SVG markup.
    pub fn to_svg(&self) -> String {
        self.document.to_svg_string(self.elements.blueprint)
    }

    fn update_positions(&mut self) {
        let x = format_number(self.position.x);
        let y = format_number(self.position.y);
        let doc = &mut self.document;

        doc.set_attribute(self.elements.grid_pattern, "x", &x);
        doc.set_attribute(self.elements.grid_pattern, "y", &y);

        doc.set_attribute(self.elements.axis, "transform", &format!("translate({x} {y})"));

        let scale = format_number(self.scale);
        doc.set_attribute(
            self.elements.workspace,
            "transform",
            &format!("translate({x} {y}) scale({scale})"),
        );
        if self.settings.non_scaling_stroke {
            let width = format_number(self.settings.stroke_width / self.scale);
            doc.set_style(self.elements.workspace, "stroke-width", &width);
        } else {
            doc.remove_style(self.elements.workspace, "stroke-width");
        }
    }

    fn update_grid_size(&mut self) {
        let size = format_number(self.grid_size);
        for element in [self.elements.grid10, self.elements.grid_pattern] {
            self.document.set_attribute(element, "width", &size);
            self.document.set_attribute(element, "height", &size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ZoomDirection, ZoomLimit};

    fn mounted(settings: Settings) -> ViewportController {
        let mut doc = Document::new();
        doc.set_layout_rect(doc.root(), Rect::new(0.0, 0.0, 800.0, 600.0));
        ViewportController::mount_with_uid(doc, settings, Uid::new(1)).unwrap()
    }

    #[test]
    fn mount_centers_and_draws() {
        let view = mounted(Settings::default());
        assert_eq!(view.position(), Point::new(400.0, 300.0));
        assert_eq!(view.scale(), 1.0);

        let doc = view.document();
        let e = view.elements();
        assert_eq!(doc.parent(e.blueprint), Some(doc.root()));
        assert_eq!(doc.attribute(e.grid_pattern, "x"), Some("400"));
        assert_eq!(doc.attribute(e.grid_pattern, "y"), Some("300"));
        assert_eq!(doc.attribute(e.axis, "transform"), Some("translate(400 300)"));
        assert_eq!(
            doc.attribute(e.workspace, "transform"),
            Some("translate(400 300) scale(1)")
        );
        assert_eq!(doc.style(e.workspace, "stroke-width"), Some("1"));
    }

    #[test]
    fn initial_scale_respects_limits() {
        let view = mounted(Settings::default().with_zoom_limit(ZoomLimit::new(2.0, 4.0)));
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.grid_size(), 200.0);
    }

    #[test]
    fn move_without_draw_defers_writes() {
        let mut view = mounted(Settings::default());
        view.move_to(Move::to(Point::new(1.0, 2.0)).without_draw());
        assert_eq!(view.position(), Point::new(1.0, 2.0));
        let axis = view.elements().axis;
        assert_eq!(view.document().attribute(axis, "transform"), Some("translate(400 300)"));

        view.draw();
        assert_eq!(view.document().attribute(axis, "transform"), Some("translate(1 2)"));
    }

    #[test]
    fn zoom_writes_grid_size_and_stroke() {
        let mut view = mounted(
            Settings::default()
                .with_zoom_direction(ZoomDirection::Natural)
                .with_stroke_width(2.0, true),
        );
        view.zoom(Zoom::scale(4.0));
        let e = *view.elements();
        assert_eq!(view.grid_size(), 400.0);
        assert_eq!(view.document().attribute(e.grid10, "width"), Some("400"));
        assert_eq!(view.document().attribute(e.grid_pattern, "height"), Some("400"));
        assert_eq!(view.document().style(e.workspace, "stroke-width"), Some("0.5"));
    }

    #[test]
    fn scaling_stroke_clears_inline_width() {
        let mut view = mounted(Settings::default().with_stroke_width(1.0, false));
        view.zoom(Zoom::scale(2.0));
        let ws = view.elements().workspace;
        assert_eq!(view.document().style(ws, "stroke-width"), None);
    }

    #[test]
    fn non_finite_zoom_keeps_scale() {
        let mut view = mounted(Settings::default());
        view.zoom(Zoom::scale(f64::NAN));
        assert_eq!(view.scale(), 1.0);
        view.zoom(Zoom::delta(f64::INFINITY));
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.position(), Point::new(400.0, 300.0));
    }

    #[test]
    fn resize_changes_center_coords() {
        let mut view = mounted(Settings::default());
        view.resize(Size::new(200.0, 100.0));
        assert_eq!(view.center_coords(), Point::new(100.0, 50.0));
        assert_eq!(view.position(), Point::new(400.0, 300.0));
        view.center();
        assert_eq!(view.position(), Point::new(100.0, 50.0));
    }

    #[test]
    fn content_view_conversion() {
        let mut view = mounted(Settings::default());
        view.zoom(Zoom::scale(2.0).at(Point::new(0.0, 0.0)));
        let p = Point::new(3.0, -4.0);
        let v = view.content_to_view(p);
        let back = view.view_to_content(v);
        assert!((back - p).hypot() < 1e-12);
    }
}
