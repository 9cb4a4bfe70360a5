// Summary reporting: the tabular listing of everything chosen, the
// totals, and the product-page link. Rendering is a pure function over
// the trail so the output can be asserted on in tests; `report` just
// prints it.

use crate::currency::format_currency;
use crate::model::CatalogNode;

/// Base of the generated product summary link; the ordered ids are
/// appended comma-joined, without escaping.
const PRODUCT_PAGE_BASE: &str = "https://www.example.com/products?ids=";

/// Fixed column order for the selections table.
const COLUMNS: [&str; 4] = ["id", "name", "description", "price"];

fn row_cells(node: &CatalogNode) -> [String; 4] {
    [
        node.id.to_string(),
        node.name.clone(),
        node.description.clone().unwrap_or_default(),
        format_currency(node.price),
    ]
}

/// Render the trail as a left-aligned table with the fixed column list,
/// each column padded to its widest cell.
pub fn render_table(trail: &[CatalogNode]) -> String {
    let rows: Vec<[String; 4]> = trail.iter().map(row_cells).collect();

    let mut widths: [usize; 4] = [0; 4];
    for (w, header) in widths.iter_mut().zip(COLUMNS) {
        *w = header.len();
    }
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let render_row = |cells: &[String; 4]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = w))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let headers = COLUMNS.map(String::from);
    out.push_str(&render_row(&headers));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 2 * (COLUMNS.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

/// Build the product summary link from the ordered ids of the trail.
pub fn summary_link(trail: &[CatalogNode]) -> String {
    let ids: Vec<String> = trail.iter().map(|n| n.id.to_string()).collect();
    format!("{}{}", PRODUCT_PAGE_BASE, ids.join(","))
}

/// Render the whole post-selection summary. Expects a non-empty trail;
/// callers branch on emptiness first (and print "No selections made").
pub fn render_summary(trail: &[CatalogNode]) -> String {
    let Some(last) = trail.last() else {
        return String::new();
    };

    // Total over the raw prices, formatted once at the end.
    let total: f64 = trail.iter().map(|n| n.price).sum();

    let mut out = String::new();
    out.push_str("\nAll selections:\n");
    out.push_str(&render_table(trail));
    out.push_str(&format!(
        "The final selection made was {} for {}\n",
        last.name,
        format_currency(last.price)
    ));
    out.push_str(&format!("Total selections: {}\n", trail.len()));
    out.push_str(&format!("Final price: {}\n", format_currency(total)));
    out.push_str(&format!("\nProduct Summary Page: {}\n", summary_link(trail)));
    out
}

/// Print the summary for a completed session.
pub fn report(trail: &[CatalogNode]) {
    print!("{}", render_summary(trail));
}
