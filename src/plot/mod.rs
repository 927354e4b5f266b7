//! Plot model and styling configuration for the rendering collaborator.

pub mod model;
pub mod style;

pub use model::{AxisConfig, AxisScale, FigureSize, Series, SeriesPlotModel};
pub use style::{LineStyle, LineStyleKind};
