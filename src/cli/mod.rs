//! Command-line parsing for the trendline fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting/plotting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ModelFamily;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "trend", version, about = "Scatter + trendline fitting in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a trendline, print the statistics report, and optionally plot/export.
    Fit(FitArgs),
    /// Print the statistics report only (useful for scripting).
    Report(FitArgs),
    /// Plot a previously exported trend JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying fit pipeline as `trend fit`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(FitArgs),
}

/// Common options for fitting and reporting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Model family to fit.
    #[arg(short = 'f', long, value_enum, default_value_t = ModelFamily::Linear)]
    pub family: ModelFamily,

    /// X values, whitespace-separated (e.g. -x "0 3 5 6").
    #[arg(short = 'x', long = "x-values", value_name = "VALUES")]
    pub x_values: Option<String>,

    /// Y values, whitespace-separated; count must match the X values.
    #[arg(short = 'y', long = "y-values", value_name = "VALUES")]
    pub y_values: Option<String>,

    /// Read samples from a CSV file with `x` and `y` columns.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Use the built-in demo dataset for the chosen family.
    #[arg(long)]
    pub use_default: bool,

    /// Floor/ceil the padded axis bounds to whole numbers.
    #[arg(long)]
    pub whole_number_axes: bool,

    /// Round report values to 2 decimals.
    #[arg(long)]
    pub round: bool,

    /// X axis label.
    #[arg(long, default_value = "X")]
    pub x_label: String,

    /// Y axis label.
    #[arg(long, default_value = "Y")]
    pub y_label: String,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the trend (model + axis + samples + curve) to JSON.
    #[arg(long = "export-trend")]
    pub export_trend: Option<PathBuf>,
}

/// Options for plotting a saved trend.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Trend JSON file produced by `trend fit --export-trend`.
    #[arg(long, value_name = "JSON")]
    pub trend: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
