//! Table body with a Typora-like style: thin outer border, shaded header.

use egui::{Color32, Frame, InnerResponse, Margin, RichText, ScrollArea, Stroke, Ui};
use registrar_business::{Cell, ColumnDescriptor, DisplayState, Row, Tone, render_grid};

/// Border color (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Body text when there are no rows.
pub const EMPTY_MESSAGE: &str = "No records found.";

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders whichever of the four body states applies.
pub(super) fn show<T: Row>(ui: &mut Ui, columns: &[ColumnDescriptor<T>], state: &DisplayState<'_, T>) {
    match state {
        DisplayState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        DisplayState::Failed(reason) => {
            ui.colored_label(Color32::RED, format!("Error: {reason}"));
        }
        DisplayState::Empty => {
            ui.label(EMPTY_MESSAGE);
        }
        DisplayState::Populated(rows) => populated(ui, columns, rows),
    }
}

fn populated<T: Row>(ui: &mut Ui, columns: &[ColumnDescriptor<T>], rows: &[T]) {
    let grid = render_grid(columns, rows);

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::both().auto_shrink([false, true]).show(ui, |ui| {
                egui::Grid::new("rows")
                    .num_columns(grid.column_count())
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        for header in &grid.headers {
                            header_cell(ui, |ui| {
                                ui.strong(header);
                            });
                        }
                        ui.end_row();

                        for row in &grid.rows {
                            for cell in row {
                                data_cell(ui, |ui| render_cell(ui, cell));
                            }
                            ui.end_row();
                        }
                    });
            });
        });
}

fn render_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Value(value) => {
            ui.label(value.to_string());
        }
        Cell::Badge { label, tone } => {
            ui.label(RichText::new(label).color(tone_color(*tone)).strong());
        }
        Cell::Monospace(text) => {
            ui.label(RichText::new(text).monospace());
        }
    }
}

fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Neutral => Color32::GRAY,
        Tone::Positive => Color32::from_rgb(34, 139, 34),
        Tone::Warning => Color32::from_rgb(255, 165, 0),
        Tone::Critical => Color32::RED,
    }
}
