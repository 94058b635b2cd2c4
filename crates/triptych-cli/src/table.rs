//! Terminal table rendering for graph elements
//!
//! Formats built graph elements as aligned text tables, tinting each node
//! row with its resolved color when colors are enabled.

use crossterm::style::{Color, Stylize};
use triptych::GraphElements;
use unicode_width::UnicodeWidthStr;

/// Render nodes and edges as aligned text tables
pub fn render_elements(elements: &GraphElements, colorize: bool) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Nodes ({})", elements.node_count()));
    let node_rows: Vec<([String; 4], Option<Color>)> = elements
        .nodes
        .iter()
        .map(|node| {
            let tint = if colorize {
                color_from_hex(&node.color)
            } else {
                None
            };
            (
                [
                    node.id.clone(),
                    node.label.clone(),
                    node.entity_type.clone(),
                    node.color.clone(),
                ],
                tint,
            )
        })
        .collect();
    push_table(&mut lines, ["ID", "LABEL", "TYPE", "COLOR"], &node_rows);

    lines.push(String::new());

    lines.push(format!("Edges ({})", elements.edge_count()));
    let edge_rows: Vec<([String; 4], Option<Color>)> = elements
        .edges
        .iter()
        .map(|edge| {
            (
                [
                    edge.id.clone(),
                    edge.source.clone(),
                    edge.target.clone(),
                    edge.label.clone(),
                ],
                None,
            )
        })
        .collect();
    push_table(&mut lines, ["ID", "SOURCE", "TARGET", "LABEL"], &edge_rows);

    lines.join("\n")
}

/// Parse a `#rrggbb` hex color into a terminal color
pub fn color_from_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

fn push_table(
    lines: &mut Vec<String>,
    headers: [&str; 4],
    rows: &[([String; 4], Option<Color>)],
) {
    if rows.is_empty() {
        return;
    }

    let mut widths = [0usize; 4];
    for (width, header) in widths.iter_mut().zip(headers) {
        *width = UnicodeWidthStr::width(header);
    }
    for (cells, _) in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header_cells: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(header, width)| pad(header, width))
        .collect();
    lines.push(format!("  {}", header_cells.join("  ")).trim_end().to_string());

    for (cells, tint) in rows {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .collect();
        let row = format!("  {}", padded.join("  ")).trim_end().to_string();
        match tint {
            Some(color) => lines.push(format!("{}", row.with(*color))),
            None => lines.push(row),
        }
    }
}

/// Pad to a display width, counting wide characters properly
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}
