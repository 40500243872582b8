use egui::Ui;
use registrar_business::{Route, SessionProvider as _};

use crate::pages::signed_out_page;
use crate::state::State;
use crate::widgets::{SessionAction, nav_panel, session_bar};

pub struct RegistrarApp {
    state: State,
}

impl RegistrarApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Renders the whole console inside `ui`.
    pub fn ui(&mut self, ui: &mut Ui) {
        egui::TopBottomPanel::top("top_panel").show_inside(ui, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Registrar Console");
                if session_bar(self.state.session.session(), ui) == Some(SessionAction::LogOut) {
                    self.log_out(ui.ctx());
                }
            });
        });

        if !self.state.session.is_signed_in() {
            egui::CentralPanel::default().show_inside(ui, |ui| {
                if signed_out_page(ui) {
                    self.state.session.sign_in();
                }
            });
            return;
        }

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(140.0)
            .show_inside(ui, |ui| {
                if let Some(route) = nav_panel(self.state.route, ui) {
                    self.navigate(route, ui.ctx());
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| match self.state.route {
            Route::Students => self.state.students.show(ui),
            Route::Lecturers => self.state.lecturers.show(ui),
        });
    }

    fn navigate(&mut self, route: Route, ctx: &egui::Context) {
        log::info!("navigating to {}", route.title());
        self.unmount_current(ctx);
        self.state.route = route;
    }

    fn log_out(&mut self, ctx: &egui::Context) {
        self.unmount_current(ctx);
        self.state.session.logout();
    }

    fn unmount_current(&mut self, ctx: &egui::Context) {
        match self.state.route {
            Route::Students => self.state.students.unmount(ctx),
            Route::Lecturers => self.state.lecturers.unmount(ctx),
        }
    }
}

impl eframe::App for RegistrarApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.ui(ui));
    }
}
