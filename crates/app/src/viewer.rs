//! Interactive chart window

use egui::Color32;
use egui_plot::{AxisHints, Corner, GridInput, GridMark, Legend, Line, LineStyle, Plot, PlotPoints};
use triphase::{find_tick_label, Chart, LegendCorner, SeriesColor, Stroke};

const WINDOW_SIZE: [f32; 2] = [1100.0, 700.0];
const DASH_LENGTH: f32 = 8.0;
const DOT_SPACING: f32 = 4.0;

/// Open the window and block until it is closed
pub fn show(chart: Chart) -> eframe::Result<()> {
    let title = chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(&title),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            // black curves need a light background
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ChartViewer { chart }))
        }),
    )
}

struct ChartViewer {
    chart: Chart,
}

fn color(color: SeriesColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

fn line_style(stroke: Stroke) -> LineStyle {
    match stroke {
        Stroke::Solid => LineStyle::Solid,
        Stroke::Dashed => LineStyle::Dashed {
            length: DASH_LENGTH,
        },
        Stroke::Dotted => LineStyle::Dotted {
            spacing: DOT_SPACING,
        },
    }
}

fn corner(corner: LegendCorner) -> Corner {
    match corner {
        LegendCorner::UpperRight => Corner::RightTop,
        LegendCorner::LowerRight => Corner::RightBottom,
    }
}

/// Grid marks at the chart ticks that fall inside the visible range
fn tick_marks(positions: &[f64], step_size: f64, input: &GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    positions
        .iter()
        .copied()
        .filter(|&value| value >= min && value <= max)
        .map(|value| GridMark { value, step_size })
        .collect()
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.chart.title);

            let ticks = self.chart.ticks.clone();
            let x_axis = AxisHints::new_x()
                .label(self.chart.x_label.clone())
                .formatter(move |mark, _range| {
                    find_tick_label(&ticks, mark.value).unwrap_or_default().to_string()
                });

            let positions = self.chart.tick_positions();
            let step_size = match positions.as_slice() {
                [first, second, ..] => second - first,
                _ => 1.0,
            };
            let (y_min, y_max) = self.chart.y_bounds();

            Plot::new("triphase_chart")
                .legend(Legend::default().position(corner(self.chart.legend_corner)))
                .show_grid(true)
                .custom_x_axes(vec![x_axis])
                .x_grid_spacer(move |input| tick_marks(&positions, step_size, &input))
                .include_y(y_min)
                .include_y(y_max)
                .show(ui, |plot_ui| {
                    for series in &self.chart.series {
                        // unnamed lines stay out of the legend
                        let name = if series.in_legend {
                            series.name.clone()
                        } else {
                            String::new()
                        };
                        let points = PlotPoints::from_iter(
                            self.chart.points(series).map(|(x, y)| [x, y]),
                        );
                        plot_ui.line(
                            Line::new(name, points)
                                .color(color(series.style.color))
                                .width(series.style.width)
                                .style(line_style(series.style.stroke)),
                        );
                    }
                });
        });
    }
}
