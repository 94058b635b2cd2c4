//! Diagram styling
//!
//! Fixed node and edge styling with themed colors resolved when the
//! stylesheet is built. Node fill colors are not part of the stylesheet
//! because every node carries its own resolved color; everything here applies
//! uniformly to the whole diagram.

use serde::{Deserialize, Serialize};

use crate::theme::{DefaultTheme, ThemeResolver, DEFAULT_EDGE_COLOR, EDGE_VAR};

/// Styling applied to every entity node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    /// Node width in pixels
    pub width: u32,
    /// Node height in pixels
    pub height: u32,
    /// Border thickness in pixels
    pub border_width: u32,
    /// Border color
    pub border_color: String,
    /// Caption text color
    pub label_color: String,
    /// Wrap captions beyond this width in pixels
    pub text_max_width: u32,
    /// Caption font size
    pub font_size: u32,
    /// Caption font weight
    pub font_weight: u32,
    /// Outline color behind caption text, for contrast on any fill
    pub text_outline_color: String,
    /// Outline thickness in pixels
    pub text_outline_width: u32,
    /// Line height for the two-line caption
    pub line_height: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            width: 84,
            height: 84,
            border_width: 2,
            border_color: "rgba(14, 116, 144, 0.55)".to_string(),
            label_color: "#e2e8f0".to_string(),
            text_max_width: 90,
            font_size: 12,
            font_weight: 600,
            text_outline_color: "rgba(15, 23, 42, 0.7)".to_string(),
            text_outline_width: 3,
            line_height: 1.2,
        }
    }
}

/// Styling applied to every relation edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Line thickness in pixels
    pub width: u32,
    /// Curve style between endpoints
    pub curve_style: String,
    /// Line color
    pub line_color: String,
    /// Arrowhead color
    pub arrow_color: String,
    /// Arrowhead shape at the target end
    pub arrow_shape: String,
    /// Arrowhead size relative to the line width
    pub arrow_scale: f64,
    /// Label font size
    pub font_size: u32,
    /// Label text color
    pub label_color: String,
    /// Backdrop color behind edge labels
    pub text_background_color: String,
    /// Backdrop opacity
    pub text_background_opacity: f64,
    /// Backdrop padding in pixels
    pub text_background_padding: u32,
    /// Backdrop shape
    pub text_background_shape: String,
    /// Rotate labels to follow their edge
    pub text_rotation: String,
}

impl EdgeStyle {
    /// Edge styling with line, arrowhead, and label colors from the theme
    pub fn themed(theme: &dyn ThemeResolver) -> Self {
        let edge_color = theme.resolve(EDGE_VAR, DEFAULT_EDGE_COLOR);
        Self {
            width: 2,
            curve_style: "bezier".to_string(),
            line_color: edge_color.clone(),
            arrow_color: edge_color.clone(),
            arrow_shape: "triangle".to_string(),
            arrow_scale: 1.1,
            font_size: 11,
            label_color: edge_color,
            text_background_color: "rgba(15, 23, 42, 0.75)".to_string(),
            text_background_opacity: 0.9,
            text_background_padding: 3,
            text_background_shape: "roundrectangle".to_string(),
            text_rotation: "autorotate".to_string(),
        }
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::themed(&DefaultTheme)
    }
}

/// Complete diagram stylesheet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Styling for entity nodes
    pub node: NodeStyle,
    /// Styling for relation edges
    pub edge: EdgeStyle,
}

impl StyleSheet {
    /// Stylesheet with fixed node styling and themed edge colors
    pub fn themed(theme: &dyn ThemeResolver) -> Self {
        Self {
            node: NodeStyle::default(),
            edge: EdgeStyle::themed(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_style_defaults() {
        let node = NodeStyle::default();
        assert_eq!(node.width, 84);
        assert_eq!(node.height, 84);
        assert_eq!(node.border_width, 2);
        assert_eq!(node.font_weight, 600);
        assert_eq!(node.text_outline_width, 3);
        assert_eq!(node.label_color, "#e2e8f0");
    }

    #[test]
    fn test_unthemed_edges_use_fallback_color() {
        let edge = EdgeStyle::default();
        assert_eq!(edge.line_color, DEFAULT_EDGE_COLOR);
        assert_eq!(edge.arrow_color, DEFAULT_EDGE_COLOR);
        assert_eq!(edge.label_color, DEFAULT_EDGE_COLOR);
        assert_eq!(edge.arrow_shape, "triangle");
        assert_eq!(edge.curve_style, "bezier");
    }

    #[test]
    fn test_themed_edges_share_one_resolved_color() {
        let theme = |variable: &str, fallback: &str| -> String {
            if variable == EDGE_VAR {
                "#22d3ee".to_string()
            } else {
                fallback.to_string()
            }
        };

        let style = StyleSheet::themed(&theme);
        assert_eq!(style.edge.line_color, "#22d3ee");
        assert_eq!(style.edge.arrow_color, "#22d3ee");
        assert_eq!(style.edge.label_color, "#22d3ee");
        // Node styling is independent of the theme
        assert_eq!(style.node, NodeStyle::default());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_string(&StyleSheet::default()).unwrap();
        assert!(json.contains("borderColor"));
        assert!(json.contains("textOutlineWidth"));
        assert!(json.contains("curveStyle"));
        assert!(json.contains("textBackgroundShape"));
        assert!(!json.contains("border_color"));
    }
}
