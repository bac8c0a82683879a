//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the sample set (CSV / text fields / built-in dataset)
//! - runs the fit pipeline (fit → axis range → curve sampling)
//! - prints the report and plot
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, PlotArgs};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `trend` binary.
pub fn run() -> Result<(), AppError> {
    // We want `trend` and `trend -f power` to behave like `trend tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args, OutputMode::Full),
        Command::Report(args) => handle_fit(args, OutputMode::ReportOnly),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    ReportOnly,
}

fn handle_fit(args: FitArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    for warning in &run.warnings {
        eprintln!("warning: {warning}");
    }

    println!("{}", run.report);

    if mode == OutputMode::Full && config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.samples,
            &run.curve,
            &run.axis,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export_results_csv(path, &run.residuals)?;
    }
    if let Some(path) = &config.export_trend {
        let trend = pipeline::build_trend_file(&config, &run);
        crate::io::write_trend_file(path, &trend)?;
    }

    Ok(())
}

fn handle_tui(args: FitArgs) -> Result<(), AppError> {
    crate::tui::run(fit_config_from_args(&args))
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let trend = crate::io::read_trend_file(&args.trend)?;

    let plot = crate::plot::render_ascii_plot(
        &trend.samples,
        &trend.curve.to_points(),
        &trend.axis,
        args.width,
        args.height,
    );

    println!("{plot}");
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        family: args.family,
        use_default: args.use_default,
        x_text: args.x_values.clone(),
        y_text: args.y_values.clone(),
        csv_path: args.csv.clone(),
        whole_number_axes: args.whole_number_axes,
        use_rounding: args.round,
        x_label: args.x_label.clone(),
        y_label: args.y_label.clone(),
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_trend: args.export_trend.clone(),
    }
}

/// Rewrite argv so `trend` defaults to `trend tui`.
///
/// Rules:
/// - `trend`                      -> `trend tui`
/// - `trend -f power ...`         -> `trend tui -f power ...`
/// - `trend --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "report" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["trend"])), args(&["trend", "tui"]));
    }

    #[test]
    fn leading_flag_routes_to_tui() {
        assert_eq!(
            rewrite_args(args(&["trend", "-f", "power"])),
            args(&["trend", "tui", "-f", "power"])
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        for sub in ["fit", "report", "plot", "tui"] {
            assert_eq!(rewrite_args(args(&["trend", sub])), args(&["trend", sub]));
        }
    }

    #[test]
    fn help_and_version_stay_top_level() {
        for flag in ["-h", "--help", "-V", "--version", "help"] {
            assert_eq!(rewrite_args(args(&["trend", flag])), args(&["trend", flag]));
        }
    }
}
