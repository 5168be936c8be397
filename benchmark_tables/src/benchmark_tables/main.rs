//!
//! The benchmark tables binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::io::Write;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();

    let exit_code = match main_inner(&arguments) {
        Ok(()) => benchmark_tables::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error}", "Error:".bright_red().bold());
            benchmark_tables::EXIT_CODE_FAILURE
        }
    };
    if arguments.is_pause_required() {
        pause();
    }
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: &Arguments) -> anyhow::Result<()> {
    let mut selector = selector(arguments)?;

    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let input_path = match selector.select() {
        Some(input_path) => input_path,
        None => {
            if !arguments.quiet {
                println!("   {} no file selected", "Cancelled".bright_yellow().bold());
            }
            return Ok(());
        }
    };
    let output_directory = arguments.output_directory.clone().unwrap_or_default();
    let output_path =
        benchmark_tables::Output::path(input_path.as_path(), output_directory.as_path())?;

    if !arguments.quiet {
        println!("     {} {input_path:?}", "Loading".bright_green().bold());
    }
    let (input, output) =
        benchmark_tables::convert(input_path.as_path(), output_path.as_path())?;
    if arguments.verbose {
        println!(
            "       {} {}",
            "Found".bright_white().bold(),
            report_summary(&input.report),
        );
        for table in output.tables.iter() {
            println!(
                "    {} {} with {} measurements",
                "Rendered".bright_white().bold(),
                table.title,
                table.rows.len(),
            );
        }
        println!("{output}");
    }
    if !arguments.quiet {
        println!("     {} {output_path:?}", "Written".bright_green().bold());
    }

    Ok(())
}

///
/// Describes the sizes of the report collections before and after merging.
///
fn report_summary(report: &benchmark_tables::Report) -> String {
    format!(
        "{} in all_results, {} in most_efficient, {} in top_performers, {} after merging",
        report.all_results.len(),
        report.most_efficient.len(),
        report.top_performers.len(),
        report.merged().len(),
    )
}

///
/// Creates the input file selector.
///
/// The dialog is used only if no path is passed on the command line.
///
fn selector(arguments: &Arguments) -> anyhow::Result<Box<dyn benchmark_tables::Selector>> {
    if let Some(input_path) = arguments.input_path.as_ref() {
        return Ok(Box::new(benchmark_tables::PathSelector::new(
            input_path.to_owned(),
        )));
    }
    dialog_selector()
}

#[cfg(feature = "dialog")]
fn dialog_selector() -> anyhow::Result<Box<dyn benchmark_tables::Selector>> {
    Ok(Box::new(benchmark_tables::DialogSelector::new()))
}

#[cfg(not(feature = "dialog"))]
fn dialog_selector() -> anyhow::Result<Box<dyn benchmark_tables::Selector>> {
    anyhow::bail!("No input file provided, and the file dialog is not available in this build")
}

///
/// Waits for Enter to be pressed.
///
fn pause() {
    print!("\nPress Enter to exit...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}

