use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{fmt::Precision, prelude::*};

/// Persisted display preferences.
///
/// Read once at startup, written on every change. A missing file, an unreadable
/// file, or an out-of-range precision all fall back to the defaults: the
/// calculator keeps working without its preferences.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Preferences {
    pub precision: Precision,
}

impl Preferences {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Self {
        Self::read_fallibly_from(path).unwrap_or_else(|error| {
            error!(error = %format!("{error:#}"), "failed to load the preferences");
            Self::default()
        })
    }

    fn read_fallibly_from(path: &Path) -> Result<Self> {
        if path.is_file() {
            Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
        } else {
            Ok(Self::default())
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(self, path: &Path) {
        if let Err(error) = self.write_fallibly_to(path) {
            error!(error = %format!("{error:#}"), "failed to save the preferences");
        }
    }

    fn write_fallibly_to(self, path: &Path) -> Result {
        Ok(std::fs::write(path, toml::to_string(&self)?)?)
    }
}
