use netgrow_core::rng::RngHandle;
use rand::Rng;

use crate::PlotError;

/// Colours available to the networks of one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    Blue,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Green,
        Color::Red,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Black,
        Color::Blue,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            Color::Green => "#008000",
            Color::Red => "#ff0000",
            Color::Cyan => "#00bfbf",
            Color::Magenta => "#bf00bf",
            Color::Yellow => "#bfbf00",
            Color::Black => "#000000",
            Color::Blue => "#0000ff",
        }
    }
}

/// Scatter marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Octagon,
    Circle,
    TriangleDown,
    Square,
    Star,
    Plus,
    Cross,
}

impl Marker {
    pub const ALL: [Marker; 7] = [
        Marker::Octagon,
        Marker::Circle,
        Marker::TriangleDown,
        Marker::Square,
        Marker::Star,
        Marker::Plus,
        Marker::Cross,
    ];

    /// SVG element drawing the marker centred on `(x, y)`.
    pub fn svg(&self, x: f64, y: f64, size: f64, color: Color) -> String {
        let fill = color.hex();
        match self {
            Marker::Circle => format!(
                "<circle cx='{x:.2}' cy='{y:.2}' r='{size:.2}' fill='{fill}' />"
            ),
            Marker::Square => format!(
                "<rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='{fill}' />",
                x - size,
                y - size,
                size * 2.0,
                size * 2.0
            ),
            Marker::Octagon => polygon(&regular_points(x, y, size, 8, 22.5), fill),
            Marker::TriangleDown => polygon(&regular_points(x, y, size, 3, 90.0), fill),
            Marker::Star => polygon(&star_points(x, y, size), fill),
            Marker::Plus => format!(
                "<path d='M{:.2} {y:.2} H{:.2} M{x:.2} {:.2} V{:.2}' stroke='{fill}' stroke-width='1.5' />",
                x - size,
                x + size,
                y - size,
                y + size
            ),
            Marker::Cross => format!(
                "<path d='M{:.2} {:.2} L{:.2} {:.2} M{:.2} {:.2} L{:.2} {:.2}' stroke='{fill}' stroke-width='1.5' />",
                x - size,
                y - size,
                x + size,
                y + size,
                x - size,
                y + size,
                x + size,
                y - size
            ),
        }
    }
}

fn regular_points(x: f64, y: f64, radius: f64, sides: usize, offset_deg: f64) -> Vec<(f64, f64)> {
    (0..sides)
        .map(|idx| {
            let angle = (offset_deg + 360.0 * idx as f64 / sides as f64).to_radians();
            (x + radius * angle.cos(), y + radius * angle.sin())
        })
        .collect()
}

fn star_points(x: f64, y: f64, radius: f64) -> Vec<(f64, f64)> {
    (0..10)
        .map(|idx| {
            let r = if idx % 2 == 0 { radius } else { radius * 0.45 };
            let angle = (-90.0 + 36.0 * idx as f64).to_radians();
            (x + r * angle.cos(), y + r * angle.sin())
        })
        .collect()
}

fn polygon(points: &[(f64, f64)], fill: &str) -> String {
    let coords: Vec<String> = points
        .iter()
        .map(|(px, py)| format!("{px:.2},{py:.2}"))
        .collect();
    format!("<polygon points='{}' fill='{fill}' />", coords.join(" "))
}

/// Colour and marker pair identifying one network in a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub marker: Marker,
}

/// Hands out colour/marker combinations without ever repeating a colour or a marker.
#[derive(Debug, Clone)]
pub struct StylePicker {
    colors: Vec<Color>,
    markers: Vec<Marker>,
}

impl StylePicker {
    pub fn new() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
            markers: Marker::ALL.to_vec(),
        }
    }

    /// Number of styles still available.
    pub fn remaining(&self) -> usize {
        self.colors.len().min(self.markers.len())
    }

    /// Draws a random unused colour and a random unused marker.
    pub fn next_style(&mut self, rng: &mut RngHandle) -> Result<Style, PlotError> {
        if self.remaining() == 0 {
            return Err(PlotError::StylesExhausted {
                requested: Color::ALL.len() + 1,
                available: Color::ALL.len(),
            });
        }
        let color = self.colors.remove(rng.gen_range(0..self.colors.len()));
        let marker = self.markers.remove(rng.gen_range(0..self.markers.len()));
        Ok(Style { color, marker })
    }
}

impl Default for StylePicker {
    fn default() -> Self {
        Self::new()
    }
}
