// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element tree: creation, attributes, selectors, layout boxes and measurement.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{Affine, Point, Rect};
use smallvec::SmallVec;

use crate::attributes::{AttrValue, AttributeSpec};
use crate::geometry::{parse_transform, shape_bounds};

/// Handle to an element in a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    /// Index of the element in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 4]>,
    layout: Option<Rect>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            style: Vec::new(),
            parent: None,
            children: SmallVec::new(),
            layout: None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        get(&self.attributes, name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }
}

/// An in-memory element tree standing in for the host DOM.
///
/// Elements are never freed; ids stay valid for the life of the document.
/// The document starts with a single `<body>` root.
///
/// Layout is supplied by the host: [`Document::set_layout_rect`] records the
/// page-space box of an element (what a browser's layout pass would
/// produce). Elements without an explicit box fill their nearest laid-out
/// ancestor, which matches `width="100%" height="100%"` containers.
///
/// ```
/// use kurbo::Rect;
/// use blueprint_svg::{AttributeSpec, Document};
///
/// let mut doc = Document::new();
/// let host = doc.create_element("div", &AttributeSpec::new().attr("id", "host"));
/// doc.append_child(doc.root(), host);
/// doc.set_layout_rect(host, Rect::new(0.0, 0.0, 800.0, 600.0));
///
/// assert_eq!(doc.query_selector("#host"), Some(host));
/// assert_eq!(doc.query_selector("div"), Some(host));
/// assert_eq!(doc.layout_rect(host).width(), 800.0);
/// ```
#[derive(Clone, Debug)]
pub struct Document {
    elements: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with an empty `<body>` root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: alloc::vec![Element::new("body")],
        }
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements ever created, including detached ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: the root element exists for the document's lifetime.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn node(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.index()]
    }

    /// Creates a detached element and applies `spec` to it.
    pub fn create_element(&mut self, tag: &str, spec: &AttributeSpec) -> ElementId {
        let id = ElementId(
            u32::try_from(self.elements.len()).expect("Document: too many elements for u32 ElementId"),
        );
        self.elements.push(Element::new(tag));
        self.apply(id, spec);
        id
    }

    /// Applies attribute and style writes; [`AttrValue::Unset`] removes.
    pub fn apply(&mut self, id: ElementId, spec: &AttributeSpec) {
        for (name, value) in spec.attributes() {
            match value {
                AttrValue::Set(v) => self.set_attribute(id, name, v),
                AttrValue::Unset => {
                    self.remove_attribute(id, name);
                }
            }
        }
        for (name, value) in spec.styles() {
            match value {
                AttrValue::Set(v) => self.set_style(id, name, v),
                AttrValue::Unset => {
                    self.remove_style(id, name);
                }
            }
        }
    }

    /// Appends `child` as the last child of `parent`, detaching it from any previous parent.
    ///
    /// # Panics
    ///
    /// Panics if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        assert!(
            !self.ancestors(parent).any(|a| a == child),
            "Document: appending {child:?} under {parent:?} would create a cycle"
        );
        if let Some(old) = self.node(child).parent {
            self.node_mut(old).children.retain(|c| *c != child);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Detaches `id` from its parent. The element (and its subtree) stays alive.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self, id: ElementId) -> &str {
        &self.node(id).tag
    }

    /// The element's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).parent
    }

    /// The element's children in document order.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.node(id).children
    }

    /// Iterates `id` and then each of its ancestors up to the root.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        core::iter::successors(Some(id), |id| self.parent(*id))
    }

    /// Sets (or replaces) an attribute.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        set(&mut self.node_mut(id).attributes, name, value);
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Option<String> {
        remove(&mut self.node_mut(id).attributes, name)
    }

    /// Reads an attribute.
    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id).attribute(name)
    }

    /// Sets (or replaces) an inline style property.
    pub fn set_style(&mut self, id: ElementId, name: &str, value: &str) {
        set(&mut self.node_mut(id).style, name, value);
    }

    /// Removes an inline style property, returning its previous value.
    pub fn remove_style(&mut self, id: ElementId, name: &str) -> Option<String> {
        remove(&mut self.node_mut(id).style, name)
    }

    /// Reads an inline style property.
    #[must_use]
    pub fn style(&self, id: ElementId, name: &str) -> Option<&str> {
        get(&self.node(id).style, name)
    }

    /// First element, in document order, matching a simple selector.
    ///
    /// Supported: a compound of an optional tag name, an optional `#id` and
    /// any number of `.class` parts, e.g. `svg`, `#app`, `.blueprint`,
    /// `g.workspace`. Combinators are not supported and never match.
    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let selector = Selector::parse(selector)?;
        self.descendants(self.root())
            .find(|id| selector.matches(self.node(*id)))
    }

    /// Pre-order traversal of `id` and its subtree.
    pub fn descendants(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        let mut stack: Vec<ElementId> = alloc::vec![id];
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }

    /// Records the page-space layout box of an element.
    pub fn set_layout_rect(&mut self, id: ElementId, rect: Rect) {
        self.node_mut(id).layout = Some(rect);
    }

    /// Clears an explicit layout box so the element fills its ancestor again.
    pub fn clear_layout_rect(&mut self, id: ElementId) {
        self.node_mut(id).layout = None;
    }

    /// The element's layout box: its own, or that of the nearest laid-out
    /// ancestor. Zero when nothing in the chain has one.
    #[must_use]
    pub fn layout_rect(&self, id: ElementId) -> Rect {
        self.ancestors(id)
            .find_map(|a| self.node(a).layout)
            .unwrap_or(Rect::ZERO)
    }

    /// The element's own `transform` attribute, identity if absent or unparsable.
    #[must_use]
    pub fn transform(&self, id: ElementId) -> Affine {
        self.attribute(id, "transform")
            .and_then(parse_transform)
            .unwrap_or(Affine::IDENTITY)
    }

    /// Bounds of the geometry in `id`'s subtree, in `id`'s own user space
    /// (before its `transform`). `None` when the subtree draws nothing measurable.
    ///
    /// Definitions (`defs`, `pattern`, ...) are skipped.
    #[must_use]
    pub fn content_bounds(&self, id: ElementId) -> Option<Rect> {
        let node = self.node(id);
        let own = shape_bounds(&node.tag, |name| node.attribute(name));
        node.children
            .iter()
            .filter(|child| !is_definition(&self.node(**child).tag))
            .filter_map(|child| {
                self.content_bounds(*child)
                    .map(|b| self.transform(*child).transform_rect_bbox(b))
            })
            .fold(own, |acc, b| Some(acc.map_or(b, |a| a.union(b))))
    }

    /// Page-space bounding box of an element.
    ///
    /// Box elements (`svg` and any non-SVG tag such as `div`) report their
    /// layout box. Graphics elements report their transformed geometry
    /// relative to the nearest box ancestor, or a zero-size rect at their
    /// transformed origin when they draw nothing.
    #[must_use]
    pub fn bounding_client_rect(&self, id: ElementId) -> Rect {
        if !is_graphics(self.tag(id)) {
            return self.layout_rect(id);
        }
        let mut ctm = Affine::IDENTITY;
        let mut origin = Point::ZERO;
        for a in self.ancestors(id) {
            if !is_graphics(self.tag(a)) {
                origin = self.layout_rect(a).origin();
                break;
            }
            ctm = self.transform(a) * ctm;
        }
        let to_page = Affine::translate(origin.to_vec2()) * ctm;
        match self.content_bounds(id) {
            Some(bounds) => to_page.transform_rect_bbox(bounds),
            None => {
                let p = to_page * Point::ZERO;
                Rect::from_points(p, p)
            }
        }
    }

    /// Serializes `id` and its subtree as markup.
    #[must_use]
    pub fn to_svg_string(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.write_element(&mut out, id);
        out
    }

    fn write_element(&self, out: &mut String, id: ElementId) {
        let node = self.node(id);
        let _ = write!(out, "<{}", node.tag);
        for (name, value) in &node.attributes {
            let _ = write!(out, " {name}=\"");
            escape_into(out, value);
            out.push('"');
        }
        if !node.style.is_empty() {
            out.push_str(" style=\"");
            for (i, (name, value)) in node.style.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{name}: ");
                escape_into(out, value);
                out.push(';');
            }
            out.push('"');
        }
        if node.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &node.children {
            self.write_element(out, *child);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

fn is_graphics(tag: &str) -> bool {
    matches!(
        tag,
        "g" | "a" | "use" | "rect" | "circle" | "ellipse" | "line" | "polyline" | "polygon" | "path" | "text" | "image"
    )
}

fn is_definition(tag: &str) -> bool {
    matches!(
        tag,
        "defs" | "pattern" | "clipPath" | "mask" | "marker" | "symbol" | "linearGradient" | "radialGradient" | "style"
    )
}

fn get<'a>(table: &'a [(String, String)], name: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

fn set(table: &mut Vec<(String, String)>, name: &str, value: &str) {
    match table.iter_mut().find(|(k, _)| k == name) {
        Some(entry) => {
            entry.1.clear();
            entry.1.push_str(value);
        }
        None => table.push((name.into(), value.into())),
    }
}

fn remove(table: &mut Vec<(String, String)>, name: &str) -> Option<String> {
    let index = table.iter().position(|(k, _)| k == name)?;
    Some(table.remove(index).1)
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[derive(Debug, Default)]
struct Selector<'a> {
    tag: Option<&'a str>,
    id: Option<&'a str>,
    classes: SmallVec<[&'a str; 2]>,
}

impl<'a> Selector<'a> {
    fn parse(selector: &'a str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() || selector.contains(|c: char| c.is_whitespace() || "+>~[:*".contains(c)) {
            return None;
        }
        let mut out = Self::default();
        let mut rest = selector;
        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            out.tag = Some(&rest[..tag_end]);
        }
        rest = &rest[tag_end..];
        while let Some(sigil) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let part = &body[..end];
            if part.is_empty() {
                return None;
            }
            match sigil {
                '#' => out.id = Some(part),
                _ => out.classes.push(part),
            }
            rest = &body[end..];
        }
        Some(out)
    }

    fn matches(&self, element: &Element) -> bool {
        self.tag.is_none_or(|t| element.tag == t)
            && self.id.is_none_or(|id| element.attribute("id") == Some(id))
            && self.classes.iter().all(|c| element.has_class(c))
    }
}
