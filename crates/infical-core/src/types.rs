use serde::{Deserialize, Serialize};

/// Granularity at which dates are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// A single day replaces the selection on every click.
    #[default]
    Single,
    /// Two clicks build a `{start, end}` range.
    Range,
    /// Whole calendar weeks; partial weeks at the bounds are never selectable.
    Weekly,
}

impl SelectionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Range => "range",
            Self::Weekly => "weekly",
        }
    }

    #[must_use]
    pub const fn is_weekly(self) -> bool {
        matches!(self, Self::Weekly)
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format of the demo renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
