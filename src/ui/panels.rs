use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::loader::{read_table, ReadOptions};
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – column list and statistics
// ---------------------------------------------------------------------------

/// Render the left column panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    let frame = match &state.frame {
        Some(df) => df,
        None => {
            ui.label("No data loaded.");
            return;
        }
    };

    // Clone the bits we show so we can mutate state inside the loop.
    let columns: Vec<(String, String, bool)> = frame
        .columns()
        .iter()
        .map(|c| (c.name().to_string(), c.dtype().to_string(), c.dtype().is_numeric()))
        .collect();
    let describe = frame.describe(&[]);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (name, dtype, numeric) in &columns {
                ui.horizontal(|ui: &mut Ui| {
                    if *numeric {
                        let mut checked = state.plotted.contains(name);
                        let color = state.colors.color_for(name);
                        if ui
                            .checkbox(&mut checked, RichText::new(name).color(color))
                            .changed()
                        {
                            state.toggle_plotted(name);
                        }
                    } else {
                        ui.label(name);
                    }
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui: &mut Ui| {
                            ui.weak(dtype);
                        },
                    );
                });
            }

            ui.separator();

            // ---- Descriptive statistics ----
            egui::CollapsingHeader::new(RichText::new("Statistics").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    egui::Grid::new("describe_grid")
                        .striped(true)
                        .show(ui, |ui: &mut Ui| {
                            // first column holds the statistic labels
                            for (i, col) in describe.columns().iter().enumerate() {
                                ui.strong(if i == 0 { "" } else { col.name() });
                            }
                            ui.end_row();
                            for row in 0..describe.len() {
                                for col in describe.columns() {
                                    let text = col
                                        .get(row)
                                        .map(|v| match v.as_f64() {
                                            Some(x) => format!("{x:.2}"),
                                            None => v.to_string(),
                                        })
                                        .unwrap_or_default();
                                    ui.monospace(text);
                                }
                                ui.end_row();
                            }
                        });
                });
        });
}

// ---------------------------------------------------------------------------
// Central panel – raw data table
// ---------------------------------------------------------------------------

/// Render the frame as a scrollable grid, row labels first.
pub fn table_view(ui: &mut Ui, state: &AppState) {
    let frame = match &state.frame {
        Some(df) => df,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to view data  (File → Open…)");
            });
            return;
        }
    };

    let n_cols = frame.columns().len();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(TableColumn::auto().at_least(40.0))
        .columns(TableColumn::auto().at_least(70.0), n_cols)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("");
            });
            for col in frame.columns() {
                header.col(|ui| {
                    ui.strong(col.name());
                    ui.weak(col.dtype().to_string());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, frame.len(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.monospace(frame.index()[i].to_string());
                });
                for col in frame.columns() {
                    row.col(|ui| {
                        let text = col.get(i).map(|v| v.to_string()).unwrap_or_default();
                        ui.monospace(text);
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                if let Some(path) = state.source_path.clone() {
                    load_into_state(state, path);
                }
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("skip rows:");
        ui.add(egui::DragValue::new(&mut state.skip_rows).range(0..=99));

        ui.separator();

        if let Some(df) = &state.frame {
            let (rows, cols) = df.shape();
            ui.label(format!("{rows} rows × {cols} columns"));
            ui.separator();
        }

        if ui
            .selectable_label(state.view == View::Plot, "Plot")
            .clicked()
        {
            state.view = View::Plot;
        }
        if ui
            .selectable_label(state.view == View::Table, "Table")
            .clicked()
        {
            state.view = View::Table;
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open delimited text data")
        .add_filter("Delimited text", &["txt", "csv", "tsv"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(state, path);
    }
}

fn load_into_state(state: &mut AppState, path: PathBuf) {
    // Tab-separated files get their delimiter from the extension,
    // everything else is read as comma-separated.
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    };
    let opts = ReadOptions::default()
        .delimiter(delimiter)
        .skip_rows(state.skip_rows);

    match read_table(&path, &opts) {
        Ok(frame) => {
            log::info!(
                "Loaded {} rows with columns {:?}",
                frame.len(),
                frame.column_names()
            );
            state.set_frame(frame, Some(path));
        }
        Err(e) => {
            log::error!("Failed to load file: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
