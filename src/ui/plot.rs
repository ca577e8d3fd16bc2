use eframe::egui::{Align2, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotPoint, Text};

use crate::state::HistogramState;

// ---------------------------------------------------------------------------
// Histogram plot (central panel)
// ---------------------------------------------------------------------------

/// Render the binned counts as a bar chart with a count under each bar.
pub fn histogram_plot(ui: &mut Ui, state: &HistogramState) {
    if state.bins.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No values in window");
        });
        return;
    }

    let bars: Vec<Bar> = state
        .bins
        .iter()
        .zip(state.colors.iter())
        .map(|(bin, &color)| {
            Bar::new(bin.center(), bin.count as f64)
                .width(1.0)
                .fill(color)
                .name(format!("[{}, {})", bin.lower, bin.upper))
        })
        .collect();

    // One tick per bin edge.
    let edges: Vec<f64> = state.edges.iter().map(|&e| e as f64).collect();

    Plot::new("histogram")
        .x_axis_label(state.labels.x_label.clone())
        .y_axis_label(state.labels.y_label.clone())
        .x_grid_spacer(move |_input| {
            edges
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("entries"));

            if state.show_counts {
                for bin in &state.bins {
                    let label = Text::new(PlotPoint::new(bin.center(), 0.0), bin.count.to_string())
                        .anchor(Align2::CENTER_TOP);
                    plot_ui.text(label);
                }
            }
        });
}
