//! Mapping from host mode names to the syntax names the engine understands.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Identifier returned for modes the map does not know.
pub const PLAIN_SYNTAX: &str = "plain";

const DEFAULT_MODES: &[(&str, &str)] = &[
    ("css", "css"),
    ("html", "html"),
    ("xml", "xml"),
    ("less", "css"),
    ("scss", "css"),
];

#[derive(Debug, Error)]
pub enum SyntaxMapError {
    #[error("failed to read syntax map: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid syntax map: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("syntax map fallback is empty")]
    EmptyFallback,

    #[error("syntax map contains an empty mode name")]
    EmptyMode,

    #[error("mode `{mode}` maps to an empty syntax name")]
    EmptySyntax { mode: String },
}

/// On-disk shape of a syntax map override.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SyntaxMapConfig {
    #[serde(default)]
    fallback: Option<String>,
    #[serde(default)]
    modes: HashMap<String, String>,
}

/// Read-only lookup table from host mode to engine syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxMap {
    modes: HashMap<String, String>,
    fallback: String,
}

impl Default for SyntaxMap {
    fn default() -> Self {
        let modes = DEFAULT_MODES
            .iter()
            .map(|(mode, syntax)| (mode.to_string(), syntax.to_string()))
            .collect();
        Self {
            modes,
            fallback: PLAIN_SYNTAX.to_string(),
        }
    }
}

impl SyntaxMap {
    /// A map with no entries; every lookup resolves to `fallback`.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            modes: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Parses a JSON override and layers it over the default table.
    ///
    /// ```json
    /// { "fallback": "plain", "modes": { "sass": "css" } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SyntaxMapError> {
        let config: SyntaxMapConfig = serde_json::from_str(json)?;
        let mut map = Self::default();
        if let Some(fallback) = config.fallback {
            if fallback.is_empty() {
                return Err(SyntaxMapError::EmptyFallback);
            }
            map.fallback = fallback;
        }
        for (mode, syntax) in config.modes {
            if mode.is_empty() {
                return Err(SyntaxMapError::EmptyMode);
            }
            if syntax.is_empty() {
                return Err(SyntaxMapError::EmptySyntax { mode });
            }
            map.modes.insert(mode, syntax);
        }
        Ok(map)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SyntaxMapError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let map = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), entries = map.len(), "syntax map loaded");
        Ok(map)
    }

    pub fn insert(&mut self, mode: impl Into<String>, syntax: impl Into<String>) {
        self.modes.insert(mode.into(), syntax.into());
    }

    /// The mapped syntax for `mode`, if the table has one.
    pub fn lookup(&self, mode: &str) -> Option<&str> {
        self.modes.get(mode).map(String::as_str)
    }

    /// The mapped syntax for `mode`, or the fallback.
    pub fn resolve(&self, mode: &str) -> &str {
        match self.lookup(mode) {
            Some(syntax) => syntax,
            None => {
                tracing::trace!(mode, fallback = %self.fallback, "unmapped mode");
                &self.fallback
            }
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modes.iter().map(|(m, s)| (m.as_str(), s.as_str()))
    }
}
