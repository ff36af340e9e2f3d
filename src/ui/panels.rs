use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::smooth::WindowSize;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – moving-average control
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Moving Average");
    ui.separator();

    ui.label("Select window size for moving average");
    let mut size = state.window.get();
    let slider = egui::Slider::new(&mut size, WindowSize::MIN..=WindowSize::MAX).integer();
    if ui.add(slider).changed() {
        if let Err(e) = state.set_window_size(size) {
            log::warn!("{e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }

    ui.add_space(8.0);
    ui.separator();

    let Some(loaded) = &state.log else {
        ui.label("No log loaded.");
        return;
    };

    egui::Grid::new("log_summary").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("File");
        ui.label(&loaded.source);
        ui.end_row();

        ui.label("Records");
        ui.label(loaded.table.len().to_string());
        ui.end_row();

        ui.label("Skipped lines");
        ui.label(loaded.skipped_lines().to_string());
        ui.end_row();

        let iterations = loaded.table.iterations();
        if let (Some(first), Some(last)) = (iterations.first(), iterations.last()) {
            ui.label("Iterations");
            ui.label(format!("{first} … {last}"));
            ui.end_row();
        }
    });

    if loaded.table.is_empty() {
        ui.add_space(4.0);
        ui.label(RichText::new("No line in this file matched the metrics format.").weak());
    }
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
            let has_log = state.log.is_some();
            if ui.add_enabled(has_log, egui::Button::new("Export CSV…")).clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
            if ui.add_enabled(has_log, egui::Button::new("Close")).clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(loaded) = &state.log {
            ui.label(format!(
                "{}: {} records, window {}",
                loaded.source,
                loaded.table.len(),
                state.window
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File selection
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload your log file")
        .add_filter("Training log", &["log"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(loaded) => state.set_log(loaded),
            Err(e) => state.set_load_error(&e),
        }
    }
}

fn export_file_dialog(state: &mut AppState) {
    let stem = state
        .log
        .as_ref()
        .and_then(|l| l.source.rsplit_once('.').map(|(stem, _)| stem.to_string()))
        .unwrap_or_else(|| "metrics".to_string());

    let file = rfd::FileDialog::new()
        .set_title("Export metrics")
        .set_file_name(format!("{stem}.csv"))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match state.export_csv(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export CSV: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Load the first file dropped onto the window, if any.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.first() else {
        return;
    };
    if dropped.len() > 1 {
        log::warn!("{} files dropped, loading only the first", dropped.len());
    }

    let result = match (&file.path, &file.bytes) {
        (Some(path), _) => loader::load_file(path),
        (None, Some(bytes)) => loader::load_bytes(&file.name, bytes),
        (None, None) => return,
    };
    match result {
        Ok(loaded) => state.set_log(loaded),
        Err(e) => state.set_load_error(&e),
    }
}
