//! Interface configuration.
//!
//! Every class resolves three settings. A class may set any of them through
//! [`ConfigOverrides`]; unset values come from the nearest ancestor that set
//! them, then from the registry defaults. Defaults can be read from an
//! `imeta.json` file.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Name exempted from override checks unless configured otherwise.
pub const CONSTRUCTOR_NAME: &str = "__init__";

/// Fully resolved settings for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Shadowing an ancestor member requires an explicit override tag.
    #[serde(default = "default_true")]
    pub explicit_overrides: bool,
    /// Violations abort registration instead of logging a warning.
    #[serde(default)]
    pub raise_on_violation: bool,
    /// Names exempt from the override declaration checks.
    #[serde(default = "default_skipped_names")]
    pub skipped_names: BTreeSet<String>,
}

/// Per-class settings; `None` means inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_overrides: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raise_on_violation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_names: Option<BTreeSet<String>>,
}

fn default_true() -> bool {
    true
}

fn default_skipped_names() -> BTreeSet<String> {
    BTreeSet::from([CONSTRUCTOR_NAME.to_string()])
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            explicit_overrides: true,
            raise_on_violation: false,
            skipped_names: default_skipped_names(),
        }
    }
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.explicit_overrides.is_none()
            && self.raise_on_violation.is_none()
            && self.skipped_names.is_none()
    }
}

impl InterfaceConfig {
    /// Load defaults from `imeta.json` inside the given directory.
    /// Returns built-in defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        Self::load_file(&dir.join("imeta.json"))
    }

    /// Load defaults from an explicit file path.
    pub fn load_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse interface config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Resolve settings for a class: its own overrides first, then each
    /// ancestor's overrides nearest-first, then `self`.
    pub fn resolve<'a, I>(&self, own: &ConfigOverrides, ancestors: I) -> InterfaceConfig
    where
        I: IntoIterator<Item = &'a ConfigOverrides>,
    {
        let mut explicit_overrides = own.explicit_overrides;
        let mut raise_on_violation = own.raise_on_violation;
        let mut skipped_names = own.skipped_names.clone();

        for overrides in ancestors {
            if explicit_overrides.is_none() {
                explicit_overrides = overrides.explicit_overrides;
            }
            if raise_on_violation.is_none() {
                raise_on_violation = overrides.raise_on_violation;
            }
            if skipped_names.is_none() {
                skipped_names = overrides.skipped_names.clone();
            }
        }

        InterfaceConfig {
            explicit_overrides: explicit_overrides.unwrap_or(self.explicit_overrides),
            raise_on_violation: raise_on_violation.unwrap_or(self.raise_on_violation),
            skipped_names: skipped_names.unwrap_or_else(|| self.skipped_names.clone()),
        }
    }

    /// Apply overrides on top of these settings.
    pub fn merged(&self, overrides: &ConfigOverrides) -> InterfaceConfig {
        self.resolve(overrides, std::iter::empty())
    }
}
