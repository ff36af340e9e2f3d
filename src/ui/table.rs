use eframe::egui::{self, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Column;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Parsed value as written in the log, without rounding.
fn cell_text(value: f64) -> String {
    value.to_string()
}

/// Collapsible listing of every parsed record.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let Some(loaded) = &state.log else {
        return;
    };
    let records = loaded.table.records();

    egui::CollapsingHeader::new(format!("Parsed records ({})", records.len()))
        .id_salt("records_table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(320.0)
                .columns(TableColumn::auto().at_least(90.0), Column::ALL.len())
                .header(ROW_HEIGHT + 2.0, |mut header| {
                    for name in loaded.table.column_names() {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, records.len(), |mut row| {
                        let rec = &records[row.index()];
                        row.col(|ui| {
                            ui.label(rec.iteration.to_string());
                        });
                        for col in &Column::ALL[1..] {
                            row.col(|ui| {
                                ui.label(cell_text(rec.value(*col)));
                            });
                        }
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_keep_full_precision() {
        assert_eq!(cell_text(12345.678901), "12345.678901");
        assert_eq!(cell_text(-0.000125), "-0.000125");
        assert_eq!(cell_text(100.0), "100");
    }
}
