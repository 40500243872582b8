//! Session chrome for the top bar: who is signed in, and a way out.

use egui::{Color32, Frame, Margin, RichText, Ui};
use registrar_business::Session;

/// What the user asked the session chrome to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    LogOut,
}

/// Renders "Full Name · Role" and a "Log out" button.
///
/// Renders nothing when no one is signed in.
pub fn session_bar(session: Option<&Session>, ui: &mut Ui) -> Option<SessionAction> {
    let session = session?;
    let mut action = None;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("Log out").clicked() {
            action = Some(SessionAction::LogOut);
        }

        Frame::NONE
            .fill(Color32::from_rgb(34, 139, 34)) // Forest green
            .inner_margin(Margin::symmetric(12, 4))
            .outer_margin(Margin::symmetric(0, 4))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.label(RichText::new(session.display_line()).color(Color32::WHITE));
            });
    });

    action
}
