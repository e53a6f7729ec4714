//! PNG export of the chart

use plotters::prelude::*;
use std::path::{Path, PathBuf};
use triphase::{Chart, LegendCorner, Series, Stroke};

const FIGURE_SIZE: (u32, u32) = (1024, 768);

/// File name indexed by the firing angle, in units of π
pub fn figure_path(psi: f64) -> PathBuf {
    PathBuf::from(format!("rectifier_psi_{:.2}pi.png", psi * 2.0))
}

fn shape_style(series: &Series) -> ShapeStyle {
    let (r, g, b) = series.style.color.rgb();
    RGBColor(r, g, b).stroke_width(series.style.width.round().max(1.0) as u32)
}

fn label_position(corner: LegendCorner) -> SeriesLabelPosition {
    match corner {
        LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
        LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

pub fn save_png(chart: &Chart, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = chart.x_bounds();
    let (y_min, y_max) = chart.y_bounds();

    let mut plot = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min..x_max).with_key_points(chart.tick_positions()),
            y_min..y_max,
        )?;

    plot.configure_mesh()
        .x_labels(chart.ticks.len())
        .x_label_formatter(&|x| chart.tick_label(*x).unwrap_or_default().to_string())
        .x_desc(chart.x_label.as_str())
        .draw()?;

    for series in &chart.series {
        let style = shape_style(series);
        let points = chart.points(series);
        let anno = match series.style.stroke {
            Stroke::Solid => plot.draw_series(LineSeries::new(points, style))?,
            Stroke::Dashed => plot.draw_series(DashedLineSeries::new(points, 10, 6, style))?,
            Stroke::Dotted => plot.draw_series(DashedLineSeries::new(points, 2, 4, style))?,
        };
        if series.in_legend {
            anno.label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    plot.configure_series_labels()
        .position(label_position(chart.legend_corner))
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
