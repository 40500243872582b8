//! Previous / page window / Next controls and the item range line.

use egui::{Button, Ui};
use registrar_business::{PaginationState, TableIntent};

pub(super) fn show(
    ui: &mut Ui,
    pagination: &PaginationState,
    window_size: u32,
) -> Option<TableIntent> {
    let current = pagination.current_page();
    let mut target: Option<i64> = None;

    ui.horizontal(|ui| {
        ui.label(pagination.display_range().to_string());
        ui.separator();

        if ui
            .add_enabled(pagination.has_previous(), Button::new("Previous"))
            .clicked()
        {
            target = Some(i64::from(current) - 1);
        }

        for page in pagination.window(window_size) {
            let button = Button::new(page.to_string()).selected(page == current);
            if ui.add(button).clicked() && page != current {
                target = Some(i64::from(page));
            }
        }

        if ui
            .add_enabled(pagination.has_next(), Button::new("Next"))
            .clicked()
        {
            target = Some(i64::from(current) + 1);
        }
    });

    target.map(|target| TableIntent::PageChanged(pagination.request_page_change(target)))
}
