// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Syllabus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Syllabus CLI entrypoint.
//!
//! By default this runs the interactive course viewer. `--print` writes the selected lesson as
//! plain text and `--json` writes the whole page view as JSON; both exit immediately.

use std::io::{self, Write};

use thiserror::Error;

use syllabus::model::{CourseError, SectionId};
use syllabus::page::PageComposer;
use syllabus::render::content_view_to_text;
use syllabus::tui::TuiTheme;
use syllabus::{catalog, logging};

const PRINT_MIN_WIDTH: usize = 40;
const PRINT_MAX_WIDTH: usize = 100;
const PRINT_FALLBACK_WIDTH: usize = 80;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--section <id>]\n  {program} --print [--section <id>]\n  {program} --json [--section <id>]\n\nWithout --print/--json the interactive viewer starts on the given section\n(default: {}). Any id is accepted; sections without content show a placeholder.\n--print writes the lesson as plain text, --json writes the full page view.\n\nEnvironment:\n  {}     log filter (default: info)\n  {} log file directory (default: system temp dir)",
        catalog::DEFAULT_SECTION_ID,
        logging::LOG_FILTER_ENV,
        logging::LOG_DIR_ENV,
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    section: Option<String>,
    print: bool,
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Tui,
    Print,
    Json,
}

impl CliOptions {
    fn mode(&self) -> OutputMode {
        if self.print {
            OutputMode::Print
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Tui
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--section" => {
                if options.section.is_some() {
                    return Err(());
                }
                let section = args.next().ok_or(())?;
                options.section = Some(section);
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            _ => return Err(()),
        }
    }

    if options.print && options.json {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error("failed to encode page view: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("terminal error: {0}")]
    Terminal(String),
}

/// `--section` is taken verbatim; unknown or odd ids render the placeholder.
fn initial_section(section: Option<String>) -> Result<SectionId, CourseError> {
    match section {
        Some(value) => Ok(SectionId::new(value)),
        None => catalog::default_section_id(),
    }
}

fn print_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .unwrap_or(PRINT_FALLBACK_WIDTH)
        .clamp(PRINT_MIN_WIDTH, PRINT_MAX_WIDTH)
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "syllabus".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    let result = (|| -> Result<(), CliError> {
        let mode = options.mode();
        let _log_guard = match mode {
            OutputMode::Tui => logging::init_tui(),
            OutputMode::Print | OutputMode::Json => {
                logging::init_stderr();
                None
            }
        };

        let course = catalog::digital_marketing()?;
        let section_id = initial_section(options.section)?;
        tracing::info!(section = %section_id, mode = ?mode, "starting");
        let composer = PageComposer::new(course, section_id);

        match mode {
            OutputMode::Tui => {
                syllabus::tui::run(composer, TuiTheme::default())
                    .map_err(|err| CliError::Terminal(err.to_string()))?;
            }
            OutputMode::Print => {
                let text = content_view_to_text(&composer.content_view(), print_width());
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}")?;
            }
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(&composer.page_view())?;
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("syllabus: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{initial_section, parse_options, CliOptions, OutputMode};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.mode(), OutputMode::Tui);
    }

    #[test]
    fn parses_section() {
        let options = parse_options(["--section".to_owned(), "on-page-seo".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.section.as_deref(), Some("on-page-seo"));
        assert_eq!(options.mode(), OutputMode::Tui);
    }

    #[test]
    fn parses_print_with_section_in_any_order() {
        let options = parse_options(
            ["--print".to_owned(), "--section".to_owned(), "evolution".to_owned()].into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.mode(), OutputMode::Print);
        assert_eq!(options.section.as_deref(), Some("evolution"));

        let options = parse_options(
            ["--section".to_owned(), "evolution".to_owned(), "--print".to_owned()].into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.mode(), OutputMode::Print);
    }

    #[test]
    fn parses_json_flag() {
        let options = parse_options(["--json".to_owned()].into_iter()).expect("parse options");
        assert!(options.json);
        assert_eq!(options.mode(), OutputMode::Json);
    }

    #[test]
    fn section_value_is_not_validated_by_the_parser() {
        let options = parse_options(["--section".to_owned(), "".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.section.as_deref(), Some(""));
    }

    #[test]
    fn section_values_are_used_verbatim() {
        for value in ["", "on page seo", "not-in-the-catalog"] {
            let options = parse_options(["--section".to_owned(), value.to_owned()].into_iter())
                .expect("parse options");
            let section_id = initial_section(options.section).expect("section id");
            assert_eq!(section_id.as_str(), value);
        }

        let section_id = initial_section(None).expect("default section");
        assert_eq!(section_id.as_str(), "what-is-digital-marketing");
    }

    #[test]
    fn rejects_print_with_json() {
        parse_options(["--print".to_owned(), "--json".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_positional_args() {
        parse_options(["evolution".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--print".to_owned(), "--print".to_owned()].into_iter()).unwrap_err();

        parse_options(["--json".to_owned(), "--json".to_owned()].into_iter()).unwrap_err();

        parse_options(
            ["--section".to_owned(), "a".to_owned(), "--section".to_owned(), "b".to_owned()]
                .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_missing_section_value() {
        parse_options(["--section".to_owned()].into_iter()).unwrap_err();
    }
}
