//! Panic handling for the list browser
//!
//! A panic while a list view is mounted leaves the terminal in raw mode on the
//! alternate screen. The hook restores it first, then writes the report to the
//! log file in the data directory and exits with a failure status.

use std::fmt::Display;
use std::panic;
use std::process;

use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use tracing::error;

use crate::infrastructure::tui::real;

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Please report it along with the log file in {}",
            super::get_data_dir().display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = real::restore() {
            error!("Unable to restore terminal: {e:?}");
        }

        let report = panic_hook.panic_report(panic_info);
        log::error!("list browser panicked: {}", plain_report(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let file_path = handle_dump(&meta, panic_info);
            if let Err(e) = print_msg(file_path, &meta) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// A color-eyre report without its terminal colour codes, for the log file
fn plain_report(report: impl Display) -> String {
    strip_ansi_escapes::strip_str(report.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_plain_report_drops_colour_codes() {
        let coloured = "\u{1b}[31mThe application panicked\u{1b}[0m: index out of bounds";
        assert_eq!(
            plain_report(coloured),
            "The application panicked: index out of bounds"
        );
    }

    #[test]
    fn test_plain_report_keeps_plain_text() {
        assert_eq!(plain_report("page 3 of 2"), "page 3 of 2");
    }
}
