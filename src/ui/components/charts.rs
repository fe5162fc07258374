//! Hand-rolled SVG charts. Small enough that a charting crate would be
//! heavier than drawing the shapes ourselves; geometry is precomputed in
//! plain Rust and the rsx only places shapes.

use dioxus::prelude::*;

use crate::domain::PriceBar;
use crate::util::currency::format_inr;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

const PLOT_WIDTH: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_HEIGHT: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

const GRID_COLOR: &str = "#d1fae5";
const AXIS_TEXT_COLOR: &str = "#64748b";
const BAR_COLOR: &str = "#059669";

const GRID_RIGHT: f64 = WIDTH - MARGIN_RIGHT;
const AXIS_LABEL_X: f64 = MARGIN_LEFT - 6.0;

/// One line of the trend chart.
#[derive(Clone, PartialEq)]
pub struct TrendSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Clone, PartialEq)]
struct BarGeometry {
    x: String,
    y: String,
    width: String,
    height: String,
    label_x: String,
    label: String,
}

#[derive(Clone, PartialEq)]
struct GridLine {
    y: String,
    label_y: String,
    label: String,
}

#[derive(Clone, PartialEq)]
struct LineGeometry {
    color: &'static str,
    points: String,
    markers: Vec<(String, String)>,
}

#[component]
pub fn PriceBarChart(bars: Vec<PriceBar>) -> Element {
    if bars.is_empty() {
        return rsx! {
            div { class: "flex h-48 items-center justify-center text-sm text-slate-500",
                "No data to chart."
            }
        };
    }

    let ceiling = nice_ceiling(bars.iter().map(|bar| bar.price).fold(0.0, f64::max));
    let slot = PLOT_WIDTH / bars.len() as f64;
    let bar_width = slot * 0.6;

    let geometry: Vec<BarGeometry> = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let height = (bar.price / ceiling) * PLOT_HEIGHT;
            BarGeometry {
                x: format!("{:.1}", MARGIN_LEFT + index as f64 * slot + slot * 0.2),
                y: format!("{:.1}", MARGIN_TOP + PLOT_HEIGHT - height),
                width: format!("{bar_width:.1}"),
                height: format!("{height:.1}"),
                label_x: format!("{:.1}", MARGIN_LEFT + index as f64 * slot + slot / 2.0),
                label: bar.label.clone(),
            }
        })
        .collect();

    let grid = grid_lines(ceiling);
    let label_y = format!("{:.1}", HEIGHT - 8.0);

    rsx! {
        svg {
            class: "h-auto w-full",
            view_box: "0 0 640 280",
            for line in grid {
                line {
                    x1: "{MARGIN_LEFT}",
                    y1: "{line.y}",
                    x2: "{GRID_RIGHT}",
                    y2: "{line.y}",
                    stroke: GRID_COLOR,
                    stroke_width: "1",
                }
                text {
                    x: "{AXIS_LABEL_X}",
                    y: "{line.label_y}",
                    fill: AXIS_TEXT_COLOR,
                    font_size: "11",
                    text_anchor: "end",
                    "{line.label}"
                }
            }
            for bar in geometry {
                rect {
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    rx: "4",
                    fill: BAR_COLOR,
                }
                text {
                    x: "{bar.label_x}",
                    y: "{label_y}",
                    fill: AXIS_TEXT_COLOR,
                    font_size: "11",
                    text_anchor: "middle",
                    "{bar.label}"
                }
            }
        }
    }
}

#[component]
pub fn TrendLineChart(labels: Vec<&'static str>, series: Vec<TrendSeries>) -> Element {
    let ceiling = nice_ceiling(
        series
            .iter()
            .flat_map(|line| line.values.iter().copied())
            .fold(0.0, f64::max),
    );

    let lines: Vec<LineGeometry> = series
        .iter()
        .map(|line| LineGeometry {
            color: line.color,
            points: polyline_points(&line.values, ceiling),
            markers: line
                .values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    (
                        format!("{:.1}", x_position(index, line.values.len())),
                        format!("{:.1}", y_position(*value, ceiling)),
                    )
                })
                .collect(),
        })
        .collect();

    let month_labels: Vec<(String, &'static str)> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| (format!("{:.1}", x_position(index, labels.len())), *label))
        .collect();

    let grid = grid_lines(ceiling);
    let label_y = format!("{:.1}", HEIGHT - 8.0);

    rsx! {
        div {
            svg {
                class: "h-auto w-full",
                view_box: "0 0 640 280",
                for line in grid {
                    line {
                        x1: "{MARGIN_LEFT}",
                        y1: "{line.y}",
                        x2: "{GRID_RIGHT}",
                        y2: "{line.y}",
                        stroke: GRID_COLOR,
                        stroke_width: "1",
                    }
                    text {
                        x: "{AXIS_LABEL_X}",
                        y: "{line.label_y}",
                        fill: AXIS_TEXT_COLOR,
                        font_size: "11",
                        text_anchor: "end",
                        "{line.label}"
                    }
                }
                for geometry in lines {
                    polyline {
                        points: "{geometry.points}",
                        fill: "none",
                        stroke: geometry.color,
                        stroke_width: "2",
                    }
                    for (cx, cy) in geometry.markers {
                        circle { cx: "{cx}", cy: "{cy}", r: "3.5", fill: geometry.color }
                    }
                }
                for (x, label) in month_labels {
                    text {
                        x: "{x}",
                        y: "{label_y}",
                        fill: AXIS_TEXT_COLOR,
                        font_size: "11",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
            div { class: "mt-2 flex justify-center gap-6 text-xs text-slate-600",
                for line in series {
                    span { class: "flex items-center gap-1",
                        span {
                            class: "inline-block h-2 w-2 rounded-full",
                            style: "background-color: {line.color}",
                        }
                        "{line.name}"
                    }
                }
            }
        }
    }
}

fn grid_lines(ceiling: f64) -> Vec<GridLine> {
    (0..=4u32)
        .map(|step| {
            let value = ceiling * f64::from(step) / 4.0;
            let y = y_position(value, ceiling);
            GridLine {
                y: format!("{y:.1}"),
                label_y: format!("{:.1}", y + 4.0),
                label: format_inr(value),
            }
        })
        .collect()
}

/// Smallest "round" value at or above `max`, so the top gridline lands on a
/// clean number. Non-positive input falls back to 1.
fn nice_ceiling(max: f64) -> f64 {
    if !(max > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    (max / magnitude).ceil() * magnitude
}

fn x_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return MARGIN_LEFT + PLOT_WIDTH / 2.0;
    }
    MARGIN_LEFT + index as f64 * (PLOT_WIDTH / (count as f64 - 1.0))
}

fn y_position(value: f64, ceiling: f64) -> f64 {
    MARGIN_TOP + PLOT_HEIGHT - (value / ceiling) * PLOT_HEIGHT
}

fn polyline_points(values: &[f64], ceiling: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            format!(
                "{:.1},{:.1}",
                x_position(index, values.len()),
                y_position(*value, ceiling)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_rounds_up_to_clean_numbers() {
        assert_eq!(nice_ceiling(7_200.0), 8_000.0);
        assert_eq!(nice_ceiling(7_000.0), 7_000.0);
        assert_eq!(nice_ceiling(350.0), 400.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-5.0), 1.0);
    }

    #[test]
    fn polyline_spans_the_plot_area() {
        let points = polyline_points(&[0.0, 1_000.0], 1_000.0);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].starts_with(&format!("{MARGIN_LEFT:.1}")));
        assert!(pairs[1].starts_with(&format!("{:.1}", WIDTH - MARGIN_RIGHT)));
    }

    #[test]
    fn zero_value_sits_on_the_baseline() {
        let baseline = MARGIN_TOP + PLOT_HEIGHT;
        assert!((y_position(0.0, 500.0) - baseline).abs() < 1e-9);
        assert!((y_position(500.0, 500.0) - MARGIN_TOP).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_centered() {
        let x = x_position(0, 1);
        assert!((x - (MARGIN_LEFT + PLOT_WIDTH / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn grid_has_five_lines_with_rupee_labels() {
        let grid = grid_lines(8_000.0);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].label, "₹0");
        assert_eq!(grid[4].label, "₹8,000");
    }
}
