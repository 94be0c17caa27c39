// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use std::fmt;

use crate::settings::SettingsError;

/// Error returned when a [`ViewportController`](crate::ViewportController) cannot be mounted.
#[derive(Clone, PartialEq)]
pub enum ConfigurationError {
    /// No element matched the configured parent selector.
    MissingParent {
        /// The selector that matched nothing.
        selector: String,
    },
    /// The settings failed [`Settings::validate`](crate::Settings::validate).
    InvalidSettings(SettingsError),
}

impl fmt::Debug for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParent { selector } => {
                write!(f, "ConfigurationError::MissingParent {{ selector: {selector:?} }}")
            }
            Self::InvalidSettings(err) => write!(f, "ConfigurationError::InvalidSettings({err:?})"),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParent { selector } => {
                write!(f, "no parent found with the selector [{selector}]")
            }
            Self::InvalidSettings(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingParent { .. } => None,
            Self::InvalidSettings(err) => Some(err),
        }
    }
}

impl From<SettingsError> for ConfigurationError {
    fn from(err: SettingsError) -> Self {
        Self::InvalidSettings(err)
    }
}
