use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use netgrow_core::rng::RngHandle;
use netgrow_core::{fraction_to_f64, GrowthStatistics};
use serde::{Deserialize, Serialize};

use crate::style::{Style, StylePicker};
use crate::PlotError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub marker_size: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 900,
            margin: 60,
            marker_size: 3.0,
        }
    }
}

/// File name of a figure rendered at `now`: `result-YYYYmmddHHMMSS.svg`.
pub fn figure_file_name(now: &NaiveDateTime) -> String {
    format!("result-{}.svg", now.format("%Y%m%d%H%M%S"))
}

struct Series {
    style: Style,
    legend: String,
    distribution: Vec<(f64, f64)>,
    history: Vec<(f64, f64)>,
}

/// Plot area of one panel and the data range mapped onto it.
struct Panel {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Panel {
    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let (x_min, x_max) = self.x_range;
        let (y_min, y_max) = self.y_range;
        let px = self.left + (x - x_min) / (x_max - x_min) * self.width;
        let py = self.top + self.height - (y - y_min) / (y_max - y_min) * self.height;
        (px, py)
    }
}

/// Renders the degree distribution panel above the average degree panel.
///
/// Every network gets a colour and marker drawn from `rng`; at most seven
/// networks fit in one figure. Degree ticks are the union of the degree
/// values of all networks.
pub fn render_growth_figure(
    networks: &[&dyn GrowthStatistics],
    config: &FigureConfig,
    rng: &mut RngHandle,
) -> Result<String, PlotError> {
    if networks.is_empty() {
        return Err(PlotError::NoNetworks);
    }
    let mut picker = StylePicker::new();
    if networks.len() > picker.remaining() {
        return Err(PlotError::StylesExhausted {
            requested: networks.len(),
            available: picker.remaining(),
        });
    }

    let mut degree_ticks: BTreeSet<usize> = BTreeSet::new();
    let mut series = Vec::with_capacity(networks.len());
    for network in networks {
        let style = picker.next_style(rng)?;
        let distribution = network.degree_distribution()?;
        degree_ticks.extend(distribution.keys().copied());
        series.push(Series {
            style,
            legend: format!("m0={}", network.m0()),
            distribution: distribution
                .iter()
                .map(|(degree, share)| (*degree as f64, fraction_to_f64(share)))
                .collect(),
            history: network
                .average_degree_history()
                .iter()
                .map(|(t, average)| (*t as f64, fraction_to_f64(average)))
                .collect(),
        });
    }
    let iterations = networks[0]
        .average_degree_history()
        .keys()
        .next_back()
        .copied()
        .unwrap_or(0);

    let width = config.width as f64;
    let height = config.height as f64;
    let margin = config.margin as f64;
    let panel_height = (height - 3.0 * margin) / 2.0;
    let ticks: Vec<f64> = degree_ticks.iter().map(|degree| *degree as f64).collect();

    let max_share = max_of(series.iter().flat_map(|s| s.distribution.iter().map(|p| p.1)));
    let top = Panel {
        left: margin,
        top: margin,
        width: width - 2.0 * margin,
        height: panel_height,
        x_range: padded(bounds(ticks.iter().copied())),
        y_range: padded((0.0, max_share)),
    };
    let time_range = bounds(series.iter().flat_map(|s| s.history.iter().map(|p| p.0)));
    let max_average = max_of(series.iter().flat_map(|s| s.history.iter().map(|p| p.1)));
    let bottom = Panel {
        left: margin,
        top: 2.0 * margin + panel_height,
        width: width - 2.0 * margin,
        height: panel_height,
        x_range: padded(time_range),
        y_range: padded((0.0, max_average)),
    };

    let mut parts = vec![format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'>",
        w = config.width,
        h = config.height
    )];
    parts.push(format!(
        "<rect x='0' y='0' width='{}' height='{}' fill='#ffffff' />",
        config.width, config.height
    ));
    parts.push(text(
        width / 2.0,
        margin / 2.0,
        "middle",
        14,
        &format!("Parameters: Iterations {iterations}"),
    ));

    draw_frame(&mut parts, &top, "degree distribution");
    for tick in &ticks {
        let (px, py) = top.project(*tick, top.y_range.0);
        parts.push(text(px, py + 14.0, "middle", 9, &format!("{tick}")));
    }
    for entry in &series {
        for (x, y) in &entry.distribution {
            let (px, py) = top.project(*x, *y);
            parts.push(entry.style.marker.svg(px, py, config.marker_size, entry.style.color));
        }
    }
    draw_legend(&mut parts, &top, &series, config.marker_size);

    draw_frame(&mut parts, &bottom, "Average degree over time");
    for entry in &series {
        for (x, y) in &entry.history {
            let (px, py) = bottom.project(*x, *y);
            parts.push(entry.style.marker.svg(px, py, config.marker_size, entry.style.color));
        }
    }
    draw_legend(&mut parts, &bottom, &series, config.marker_size);

    parts.push("</svg>".into());
    Ok(parts.join(""))
}

fn draw_frame(parts: &mut Vec<String>, panel: &Panel, title: &str) {
    parts.push(format!(
        "<rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='none' stroke='#333333' />",
        panel.left, panel.top, panel.width, panel.height
    ));
    parts.push(text(
        panel.left + panel.width / 2.0,
        panel.top - 8.0,
        "middle",
        12,
        title,
    ));
    let (y_min, y_max) = panel.y_range;
    for value in [y_min, (y_min + y_max) / 2.0, y_max] {
        let (px, py) = panel.project(panel.x_range.0, value);
        parts.push(text(px - 6.0, py + 3.0, "end", 9, &format!("{value:.3}")));
    }
}

/// Legend in the lower-left corner, three entries per row.
fn draw_legend(parts: &mut Vec<String>, panel: &Panel, series: &[Series], marker_size: f64) {
    let rows = series.len().div_ceil(3);
    let base_y = panel.top + panel.height - 12.0 * rows as f64;
    for (idx, entry) in series.iter().enumerate() {
        let x = panel.left + 10.0 + 70.0 * (idx % 3) as f64;
        let y = base_y + 12.0 * (idx / 3) as f64;
        parts.push(entry.style.marker.svg(x, y, marker_size, entry.style.color));
        parts.push(text(x + 8.0, y + 3.0, "start", 8, &entry.legend));
    }
}

fn text(x: f64, y: f64, anchor: &str, size: u32, content: &str) -> String {
    format!(
        "<text x='{x:.2}' y='{y:.2}' text-anchor='{anchor}' font-size='{size}' font-family='sans-serif'>{content}</text>"
    )
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

/// Widens a range by five percent on each side; degenerate ranges get a unit span.
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * 0.05, hi + span * 0.05)
}
