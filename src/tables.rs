use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    engine::{
        outcome::Outcome,
        vat::{VatBreakdown, VatLine, VatMode},
    },
    fmt::NumberFormat,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_outcome_table(outcome: &Outcome) -> Table {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Résultat").add_attribute(Attribute::Bold),
        Cell::new(&outcome.display).set_alignment(CellAlignment::Right).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Détail").add_attribute(Attribute::Dim),
        Cell::new(&outcome.phrase).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
    ]);
    table
}

#[must_use]
pub fn build_vat_table(breakdown: &VatBreakdown, mode: VatMode, format: &NumberFormat) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Montant", "Valeur"]);
    for line in VatLine::ALL {
        let mut value_cell =
            Cell::new(format.format(breakdown.line(line))).set_alignment(CellAlignment::Right);
        // The user-supplied amount is dimmed; the derived ones carry the line colors.
        value_cell = if mode.knows(line) {
            value_cell.add_attribute(Attribute::Dim)
        } else {
            value_cell.fg(line.color())
        };
        table.add_row(vec![Cell::new(line.label()), value_cell]);
    }
    table
}
