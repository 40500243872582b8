//! Screen shown after logging out.

use egui::Ui;

/// Returns `true` when "Sign back in" was clicked.
pub fn signed_out_page(ui: &mut Ui) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("You are signed out.");
        ui.add_space(16.0);
        ui.button("Sign back in").clicked()
    })
    .inner
}
