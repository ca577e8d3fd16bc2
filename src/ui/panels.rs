use eframe::egui::{self, RichText, Ui};

use crate::state::HistogramState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title and the window summary.
pub fn top_bar(ui: &mut Ui, state: &mut HistogramState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&state.labels.title).strong().size(16.0));
    });

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{}  |  {} values, {} bins, tallest {}",
            state.window,
            state.total,
            state.bins.len(),
            state.max_count()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_counts, "Bin counts")
            .clicked()
        {
            state.toggle_counts();
        }
    });
}
