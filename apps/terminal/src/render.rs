//! # Product Table Rendering
//!
//! Pure string rendering for the Products screen. No terminal calls here;
//! the functions take data and return text, which keeps the layout
//! testable without a TTY.

use stockbook_core::{Money, Product};

/// Shown instead of a table when the user has no products yet.
const EMPTY_PLACEHOLDER: &str = "No products registered.";

/// Shown in the description column when a product has none.
const NO_DESCRIPTION: &str = "-";

/// Renders the product list as an aligned text table.
///
/// Columns: Name, Description, Price, Quantity, Id. Column widths are
/// computed from the content, prices render through [`Money`], and a
/// missing description shows as `-`. An empty list renders a one-line
/// placeholder instead of an empty table.
pub fn product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", EMPTY_PLACEHOLDER);
    }

    let headers = ["Name", "Description", "Price", "Quantity", "Id"];

    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.name.clone(),
                p.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                p.price().to_string(),
                p.quantity.to_string(),
                p.id.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &headers.map(str::to_string), &widths);
    render_separator(&mut out, &widths);
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out.push_str(&footer(products));
    out
}

/// One-line summary: item count and total inventory value
/// (price x quantity summed over every row).
fn footer(products: &[Product]) -> String {
    let total = products
        .iter()
        .fold(Money::zero(), |acc, p| acc + p.line_value());
    let label = if products.len() == 1 { "product" } else { "products" };
    format!("{} {}, total value {}\n", products.len(), label, total)
}

fn render_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Pad every column but the last to its width.
        if i < cells.len() - 1 {
            for _ in cell.chars().count()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

fn render_separator(out: &mut String, widths: &[usize; 5]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push('\n');
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: i64, name: &str, description: Option<&str>, price_cents: i64, quantity: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            price_cents,
            quantity,
            owner_email: "demo@email.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        assert_eq!(product_table(&[]), "No products registered.\n");
    }

    #[test]
    fn test_single_product_row() {
        let table = product_table(&[product(1, "X", None, 999, 3)]);

        let rows: Vec<&str> = table
            .lines()
            .filter(|l| l.contains("R$ 9.99"))
            .collect();
        assert_eq!(rows.len(), 1, "exactly one row for the product:\n{}", table);
        let row = rows[0];
        assert!(row.starts_with('X'));
        assert!(row.contains('3'));
        // Absent description renders as a dash.
        assert!(row.contains('-'));
    }

    #[test]
    fn test_header_and_alignment() {
        let table = product_table(&[
            product(1, "Keyboard", Some("Mechanical, ABNT2"), 35_000, 10),
            product(2, "Mouse", None, 9_990, 25),
        ]);

        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("Name"));
        assert!(lines[0].contains("Description"));
        assert!(lines[0].contains("Price"));
        assert!(lines[0].contains("Quantity"));
        assert!(lines[0].contains("Id"));

        // Header, separator, two rows, footer.
        assert_eq!(lines.len(), 5);

        // The Id column lines up across header and rows.
        let id_col = lines[0].find("Id").unwrap();
        assert_eq!(&lines[2][id_col..id_col + 1], "1");
        assert_eq!(&lines[3][id_col..id_col + 1], "2");
    }

    #[test]
    fn test_footer_totals() {
        let table = product_table(&[
            product(1, "A", None, 1_000, 2), // R$ 20.00
            product(2, "B", None, 550, 1),   // R$ 5.50
        ]);
        assert!(table.contains("2 products, total value R$ 25.50"));
    }

    #[test]
    fn test_footer_singular() {
        let table = product_table(&[product(1, "A", None, 100, 1)]);
        assert!(table.contains("1 product, total value R$ 1.00"));
    }
}
