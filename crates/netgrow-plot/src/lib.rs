//! Rendering collaborator for grown networks.
//!
//! Consumes anything implementing [`netgrow_core::GrowthStatistics`] and draws
//! the degree distribution and the average degree history of every network
//! as two scatter panels of one SVG document.

use netgrow_core::NetError;
use thiserror::Error;

pub mod figure;
pub mod style;

pub use figure::{figure_file_name, render_growth_figure, FigureConfig};
pub use style::{Color, Marker, Style, StylePicker};

/// Errors raised while rendering figures.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no networks to draw")]
    NoNetworks,
    #[error("requested {requested} plot styles but only {available} are available")]
    StylesExhausted { requested: usize, available: usize },
    #[error(transparent)]
    Statistics(#[from] NetError),
}
