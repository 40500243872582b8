//! Side navigation between record pages.

use egui::Ui;
use registrar_business::Route;

/// Lists every route; returns the one clicked, if it differs from `current`.
pub fn nav_panel(current: Route, ui: &mut Ui) -> Option<Route> {
    let mut next = None;

    ui.vertical(|ui| {
        ui.add_space(8.0);
        for route in Route::ALL {
            if ui.selectable_label(route == current, route.title()).clicked() && route != current {
                next = Some(route);
            }
        }
    });

    next
}
