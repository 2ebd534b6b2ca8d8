use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RustyFrameApp {
    pub state: AppState,
}

impl eframe::App for RustyFrameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: columns + statistics ----
        egui::SidePanel::left("column_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot or table ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Plot => plot::frame_plot(ui, &self.state),
            View::Table => panels::table_view(ui, &self.state),
        });
    }
}
