//! Search box, filter options and export button above the table.

use egui::{Key, TextEdit, Ui};
use registrar_business::{FilterController, Row, SearchController, TableIntent};

use super::TableProps;

const SEARCH_WIDTH: f32 = 220.0;

/// Renders the toolbar and returns the intents it produced this frame.
pub(super) fn show<T: Row>(
    ui: &mut Ui,
    props: &TableProps<'_, T>,
    search: &mut SearchController,
) -> Vec<TableIntent> {
    let mut intents = Vec::new();

    ui.horizontal(|ui| {
        if props.searchable {
            let response = ui.add(
                TextEdit::singleline(search.draft_mut())
                    .hint_text("Search…")
                    .desired_width(SEARCH_WIDTH),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if ui.button("Search").clicked() || entered {
                intents.push(search.submit());
            }
        }

        if let Some(filter) = props.filter {
            ui.separator();
            for option in filter.display_options() {
                let selected = option.selection == filter.selected;
                if ui.selectable_label(selected, &option.label).clicked() {
                    intents.push(FilterController::select(&option));
                }
            }
        }

        if props.shows_export() {
            ui.separator();
            if ui.button("Export").on_hover_text("Export current rows").clicked() {
                intents.push(TableIntent::ExportRequested);
            }
        }
    });

    intents
}
