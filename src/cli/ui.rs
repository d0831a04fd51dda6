use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned count cell.
pub fn count_cell(count: u32) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}

/// Green when `balance` has at least recovered `initial_balance`, red for a loss.
pub fn balance_color(balance: f64, initial_balance: f64) -> Color {
    if balance >= initial_balance {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn balance_cell(balance: f64, initial_balance: f64) -> Cell {
    Cell::new(balance)
        .fg(balance_color(balance, initial_balance))
        .set_alignment(CellAlignment::Right)
}
