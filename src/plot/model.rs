//! Multi-series plot model.
//!
//! Holds computed series plus axis and styling configuration, and hands
//! plain numeric arrays to the rendering collaborator. No drawing happens
//! here; the model is the last in-process stop before serialization.

use super::style::{LineStyle, LineStyleKind};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Axis scale selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
}

/// One axis of the plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisConfig {
    pub label: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub scale: AxisScale,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            label: None,
            min: None,
            max: None,
            scale: AxisScale::Linear,
        }
    }
}

/// Figure dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 6.0,
        }
    }
}

/// One plotted series: a label and y-values over the shared x-axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub ydata: Vec<f64>,
}

/// The full model handed to a rendering collaborator
///
/// Construction follows a builder pattern; styles are resolved once from
/// an enumerated [`LineStyleKind`], never from mutable global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPlotModel {
    pub title: Option<String>,
    pub xaxis: AxisConfig,
    pub yaxis: AxisConfig,
    pub show_grid: bool,
    pub figure_size: FigureSize,
    pub xdata: Vec<f64>,
    pub series: Vec<Series>,
    pub styles: Vec<LineStyle>,
}

impl SeriesPlotModel {
    pub fn new(xdata: Vec<f64>) -> Self {
        Self {
            title: None,
            xaxis: AxisConfig::default(),
            yaxis: AxisConfig::default(),
            show_grid: true,
            figure_size: FigureSize::default(),
            xdata,
            series: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// Append one series; its length must match the x-axis
    pub fn add_series(&mut self, label: impl Into<String>, ydata: Vec<f64>) -> &mut Self {
        debug_assert_eq!(ydata.len(), self.xdata.len());
        self.series.push(Series {
            label: label.into(),
            ydata,
        });
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.xaxis.label = Some(label.into());
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.yaxis.label = Some(label.into());
        self
    }

    /// Resolve per-series styles from an enumerated kind
    pub fn resolve_styles(&mut self, kind: LineStyleKind) -> &mut Self {
        self.styles = kind.generate(self.series.len());
        self
    }
}
