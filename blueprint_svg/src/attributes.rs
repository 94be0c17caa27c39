// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute specifications: ordered attribute and inline-style writes with an unset sentinel.

use alloc::string::String;
use alloc::vec::Vec;

/// A value in an [`AttributeSpec`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttrValue {
    /// Write this value.
    Set(String),
    /// Remove the attribute (or style property) if present.
    Unset,
}

impl AttrValue {
    /// The value to write, or `None` for [`AttrValue::Unset`].
    #[must_use]
    pub fn as_set(&self) -> Option<&str> {
        match self {
            Self::Set(v) => Some(v),
            Self::Unset => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Set(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Set(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

/// Ordered attribute and inline-style writes to apply to an element.
///
/// Each name appears at most once per table; writing a name again replaces
/// the earlier entry in place. [`AttributeSpec::merge`] layers one spec over
/// another with the overriding spec's entries winning.
///
/// ```
/// use blueprint_svg::{AttrValue, AttributeSpec};
///
/// let defaults = AttributeSpec::new()
///     .attr("stroke", "#000")
///     .unset("stroke-width")
///     .unset_style("stroke");
/// let spec = defaults.merge(AttributeSpec::new().attr("stroke", "red").attr("r", "4"));
///
/// assert_eq!(spec.get_attr("stroke"), Some(&AttrValue::from("red")));
/// assert_eq!(spec.get_attr("stroke-width"), Some(&AttrValue::Unset));
/// assert_eq!(spec.get_style("stroke"), Some(&AttrValue::Unset));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSpec {
    attributes: Vec<(String, AttrValue)>,
    style: Vec<(String, AttrValue)>,
}

impl AttributeSpec {
    /// An empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of `set_attr(name, AttrValue::Unset)`.
    #[must_use]
    pub fn unset(self, name: impl Into<String>) -> Self {
        self.attr(name, AttrValue::Unset)
    }

    /// Builder form of [`set_style`](Self::set_style).
    #[must_use]
    pub fn style(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_style(name, value);
        self
    }

    /// Builder form of `set_style(name, AttrValue::Unset)`.
    #[must_use]
    pub fn unset_style(self, name: impl Into<String>) -> Self {
        self.style(name, AttrValue::Unset)
    }

    /// Adds or replaces an attribute entry.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        upsert(&mut self.attributes, name.into(), value.into());
    }

    /// Adds or replaces an inline-style entry.
    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        upsert(&mut self.style, name.into(), value.into());
    }

    /// The entry for attribute `name`, if any.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        lookup(&self.attributes, name)
    }

    /// The entry for style property `name`, if any.
    #[must_use]
    pub fn get_style(&self, name: &str) -> Option<&AttrValue> {
        lookup(&self.style, name)
    }

    /// Attribute entries in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Style entries in insertion order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.style.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if the spec writes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.style.is_empty()
    }

    /// Layers `overrides` on top of `self`; entries in `overrides` win.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        for (name, value) in overrides.attributes {
            upsert(&mut self.attributes, name, value);
        }
        for (name, value) in overrides.style {
            upsert(&mut self.style, name, value);
        }
        self
    }
}

fn upsert(table: &mut Vec<(String, AttrValue)>, name: String, value: AttrValue) {
    match table.iter_mut().find(|(k, _)| *k == name) {
        Some(entry) => entry.1 = value,
        None => table.push((name, value)),
    }
}

fn lookup<'a>(table: &'a [(String, AttrValue)], name: &str) -> Option<&'a AttrValue> {
    table.iter().find(|(k, _)| k == name).map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_names_replace_in_place() {
        let spec = AttributeSpec::new()
            .attr("a", "1")
            .attr("b", "2")
            .attr("a", "3");
        let names: Vec<_> = spec.attributes().map(|(k, _)| k).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(spec.get_attr("a"), Some(&AttrValue::from("3")));
    }

    #[test]
    fn option_none_is_unset() {
        let spec = AttributeSpec::new().attr("fill", None::<&str>);
        assert_eq!(spec.get_attr("fill"), Some(&AttrValue::Unset));
        assert_eq!(spec.get_attr("fill").and_then(AttrValue::as_set), None);
    }

    #[test]
    fn merge_keeps_base_entries_not_overridden() {
        let base = AttributeSpec::new().attr("fill", "none").style("fill", "blue");
        let merged = base.merge(AttributeSpec::new().unset_style("fill"));
        assert_eq!(merged.get_attr("fill"), Some(&AttrValue::from("none")));
        assert_eq!(merged.get_style("fill"), Some(&AttrValue::Unset));
    }

    #[test]
    fn empty_spec() {
        assert!(AttributeSpec::new().is_empty());
        assert!(!AttributeSpec::new().unset("x").is_empty());
    }
}
