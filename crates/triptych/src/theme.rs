//! Theme resolution for diagram colors
//!
//! Every color the library emits is looked up through a [`ThemeResolver`],
//! so the palette can follow whatever theming system hosts the diagram. Each
//! lookup names a theme variable and carries a fallback color used when the
//! variable is not defined.

use std::fmt;

/// Default node fill color when the theme defines nothing better
pub const DEFAULT_NODE_COLOR: &str = "#38bdf8";

/// Default canvas background color, used behind exported snapshots
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0f172a";

/// Default edge and edge-label color
pub const DEFAULT_EDGE_COLOR: &str = "#facc15";

/// Theme variable holding the canvas background color
pub const BACKGROUND_VAR: &str = "--bg";

/// Theme variable holding the edge color
pub const EDGE_VAR: &str = "--edge";

/// Resolves theme variables to concrete colors
///
/// Implementations should treat an unset or empty variable as missing and
/// return `fallback` instead. Any function with the right shape works:
///
/// ```rust
/// use triptych::theme::{color_for, ThemeResolver};
///
/// let theme = |variable: &str, fallback: &str| -> String {
///     if variable == "--human" {
///         "#f472b6".to_string()
///     } else {
///         fallback.to_string()
///     }
/// };
///
/// assert_eq!(theme.resolve("--human", "#38bdf8"), "#f472b6");
/// assert_eq!(color_for(&theme, "person"), "#f472b6");
/// assert_eq!(color_for(&theme, "city"), "#38bdf8");
/// ```
pub trait ThemeResolver {
    /// Resolve `variable` to a color, returning `fallback` when unset
    fn resolve(&self, variable: &str, fallback: &str) -> String;
}

impl<F> ThemeResolver for F
where
    F: Fn(&str, &str) -> String,
{
    fn resolve(&self, variable: &str, fallback: &str) -> String {
        self(variable, fallback)
    }
}

/// Theme resolver that defines no variables
///
/// Every lookup falls through to its fallback, which yields the built-in
/// palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTheme;

impl ThemeResolver for DefaultTheme {
    fn resolve(&self, _variable: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// Semantic grouping of entity types for color assignment
///
/// Entity types arrive as free-form strings from the extraction pipeline;
/// this folds the known spellings into a handful of color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SemanticCategory {
    /// People: `human`, `person`
    Human,
    /// Places: `country`, `gpe`
    Country,
    /// Organizations: `organisation`, `organization`, `org`
    Organization,
    /// Everything else
    #[default]
    Generic,
}

impl SemanticCategory {
    /// Categorize an entity type string, case-insensitively
    pub fn from_entity_type(entity_type: &str) -> Self {
        match entity_type.to_lowercase().as_str() {
            "human" | "person" => SemanticCategory::Human,
            "country" | "gpe" => SemanticCategory::Country,
            "organisation" | "organization" | "org" => SemanticCategory::Organization,
            _ => SemanticCategory::Generic,
        }
    }

    /// The theme variable holding this category's fill color
    pub fn variable(&self) -> &'static str {
        match self {
            SemanticCategory::Human => "--human",
            SemanticCategory::Country => "--country",
            SemanticCategory::Organization => "--org",
            SemanticCategory::Generic => "--node",
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticCategory::Human => write!(f, "human"),
            SemanticCategory::Country => write!(f, "country"),
            SemanticCategory::Organization => write!(f, "organization"),
            SemanticCategory::Generic => write!(f, "generic"),
        }
    }
}

/// Resolve the fill color for an entity type
///
/// The type is folded into a [`SemanticCategory`] and its theme variable is
/// resolved with the shared node fallback, so unthemed graphs render every
/// node in [`DEFAULT_NODE_COLOR`].
pub fn color_for(theme: &dyn ThemeResolver, entity_type: &str) -> String {
    let category = SemanticCategory::from_entity_type(entity_type);
    theme.resolve(category.variable(), DEFAULT_NODE_COLOR)
}
