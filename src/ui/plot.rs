use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Column plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected numeric columns as lines over the row labels.
pub fn frame_plot(ui: &mut Ui, state: &AppState) {
    let frame = match &state.frame {
        Some(df) => df,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view data  (File → Open…)");
            });
            return;
        }
    };

    Plot::new("frame_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("row")
        .y_axis_label("value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for col in frame.columns() {
                if !state.plotted.contains(col.name()) {
                    continue;
                }

                // Missing values leave a gap by simply being skipped.
                let points: PlotPoints = frame
                    .index()
                    .iter()
                    .zip(col.values())
                    .filter_map(|(&label, value)| {
                        value.as_f64().map(|y| [label as f64, y])
                    })
                    .collect();

                let line = Line::new(points)
                    .name(col.name())
                    .color(state.colors.color_for(col.name()))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
