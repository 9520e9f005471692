//! Terminal rendering of the display table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use evr_model::DisplayCell;
use evr_table::{DisplayTable, LinkTemplates, capture_link};

/// Options for the rendered action column.
pub struct ActionRender<'a> {
    pub program: &'a str,
    pub program_type: evr_model::ProgramType,
    pub links: bool,
}

pub fn print_display_table(display: &DisplayTable, action: &ActionRender<'_>) {
    let mut table = Table::new();
    table.set_header(display.headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    let templates = LinkTemplates::default();
    for row in &display.rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|cell| match cell {
                DisplayCell::Plain(plain) => {
                    let text = plain.display();
                    if text.is_empty() {
                        dim_cell("-")
                    } else {
                        Cell::new(text)
                    }
                }
                DisplayCell::Action(payload) => {
                    if action.links {
                        match capture_link(payload, action.program, action.program_type, &templates)
                        {
                            Some(link) => Cell::new(link).fg(Color::Blue),
                            None => dim_cell("-"),
                        }
                    } else {
                        dim_cell(payload.event.as_deref().unwrap_or("-"))
                    }
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
    println!(
        "Page {} of {} ({} rows)",
        display.pager.page, display.pager.page_count, display.pager.total
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
