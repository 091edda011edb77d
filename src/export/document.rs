//! HTML serialization of a [`TableDocument`].
//!
//! The output is a single self-contained file: stylesheet, data snapshot and
//! interaction script are all inlined, so the page works offline.

use super::grid_renderer::{ElementCell, GridCell, Quarter, TableDocument};
use crate::models::LegendEntry;
use std::fmt::Write as _;

const STYLESHEET: &str = include_str!("assets/style.css");
const INTERACTIONS: &str = include_str!("assets/interactions.js");

impl TableDocument {
    /// Serializes the document to a complete HTML page.
    ///
    /// Identical documents always produce identical output.
    pub fn to_html(&self) -> serde_json::Result<String> {
        let snapshot = snapshot_json(self)?;
        let title = escape_html(&self.title);

        Ok(format!(
            r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
{css}</style>
</head>
<body>
  <h1>{title}</h1>
  <div class="table">
{cells}  </div>
  <div class="legend">
{legend}  </div>
  <div id="overlay" class="overlay"></div>
  <div id="popup" class="popup"></div>
  <script id="elements-data" type="application/json">{snapshot}</script>
  <script>
{js}</script>
</body>
</html>
"#,
            css = STYLESHEET,
            cells = render_cells(&self.rows),
            legend = render_legend(&self.legend),
            js = INTERACTIONS,
        ))
    }
}

fn render_cells(rows: &[Vec<GridCell>]) -> String {
    let mut output = String::new();
    for cell in rows.iter().flatten() {
        output.push_str("    ");
        match cell {
            GridCell::Empty => output.push_str(r#"<div class="cell empty"></div>"#),
            GridCell::Spacer => output.push_str(r#"<div class="cell spacer empty"></div>"#),
            GridCell::Element(element) => write_element(&mut output, element),
        }
        output.push('\n');
    }
    output
}

fn write_element(output: &mut String, cell: &ElementCell) {
    let _ = write!(
        output,
        r#"<div class="cell element" title="{tip}" data-z="{z}"><div class="number">{z}</div><div class="symbol">{symbol}</div><div class="samples">"#,
        tip = escape_html(&cell.tooltip),
        z = cell.number,
        symbol = escape_html(&cell.symbol),
    );
    for quarter in &cell.quarters {
        write_quarter(output, quarter);
    }
    output.push_str("</div></div>");
}

fn write_quarter(output: &mut String, quarter: &Quarter) {
    let _ = write!(
        output,
        r#"<div class="quarter" style="background:{bg}" data-state="{tag}" title="{tip}"><span class="sidx">{idx}</span></div>"#,
        bg = escape_html(&quarter.background),
        tag = escape_html(&quarter.filter_tag),
        tip = escape_html(&quarter.tooltip),
        idx = quarter.index,
    );
}

fn render_legend(entries: &[LegendEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        let _ = writeln!(
            output,
            r#"    <div class="legend-item" data-state="{tag}"><span class="legend-colour" style="background:{color}"></span>{label}</div>"#,
            tag = escape_html(&entry.filter_tag),
            color = escape_html(&entry.color),
            label = escape_html(&entry.label),
        );
    }
    output
}

/// Encodes the detail-view snapshot so it cannot close its script element.
fn snapshot_json(document: &TableDocument) -> serde_json::Result<String> {
    let json = serde_json::to_string(&document.snapshot)?;
    Ok(json.replace('<', "\\u003c"))
}

/// Escapes HTML special characters for text and attribute content.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
