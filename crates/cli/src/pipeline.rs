// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record-to-badge pipeline behind the binary.
//!
//! Settings are layered config file < environment < flags, then records are
//! read, classified and written one at a time.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{Cli, InputFormat, OutputFormat};
use crate::config::{BadgeConfig, ConfigError, MIN_MAX_WIDTH};
use crate::env;
use crate::input::{parse_document, parse_line, InputError};
use crate::invocation::ToolInvocation;
use crate::output::OutputWriter;
use crate::output_diagnostic::{print_info, print_warning};
use crate::render::{BadgeView, GlyphSet, RenderOptions};

/// Process exit codes
pub mod exit_codes {
    /// Successful execution
    pub const SUCCESS: i32 = 0;
    /// Invalid arguments, config, or input
    pub const ERROR: i32 = 1;
}

/// Errors surfaced by the binary
#[derive(Debug, Error)]
pub enum RunError {
    #[error("CLI validation failed: {0}")]
    Validation(String),

    #[error("Failed to load config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("Failed to open input '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl RunError {
    /// Downstream closed the pipe (e.g. `| head`); not worth reporting.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Facts about the terminal that feed setting resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalInfo {
    pub is_tty: bool,
    pub no_color: bool,
    pub width: Option<usize>,
}

impl TerminalInfo {
    pub fn detect() -> Self {
        let is_tty = io::stdout().is_terminal();
        let width = if is_tty {
            crossterm::terminal::size()
                .ok()
                .map(|(cols, _)| usize::from(cols))
        } else {
            None
        };
        Self {
            is_tty,
            no_color: env::no_color(),
            width,
        }
    }
}

/// Fully resolved run settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub render: RenderOptions,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &BadgeConfig, terminal: TerminalInfo) -> Self {
        let color = cli
            .color
            .unwrap_or(config.color)
            .enabled(terminal.is_tty, terminal.no_color);
        let glyphs = if cli.ascii {
            GlyphSet::Ascii
        } else {
            config.glyphs
        };
        // Terminal width only clamps text going to a terminal.
        let terminal_width = terminal
            .width
            .filter(|w| *w >= MIN_MAX_WIDTH && cli.output_format == OutputFormat::Text);
        let max_width = cli.max_width.or(config.max_width).or(terminal_width);

        Self {
            input_format: cli.input_format,
            output_format: cli.output_format,
            render: RenderOptions {
                color: color && cli.output_format == OutputFormat::Text,
                glyphs,
                show_title: config.show_title && !cli.no_title,
                max_width,
                tick: cli.tick,
            },
            verbose: cli.verbose,
        }
    }
}

/// Counts reported by `--verbose`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rendered: usize,
    pub in_progress: usize,
}

impl Summary {
    fn record(&mut self, view: &BadgeView) {
        self.rendered += 1;
        if view.busy {
            self.in_progress += 1;
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.rendered == 1 { "badge" } else { "badges" };
        write!(
            f,
            "Rendered {} {} ({} in progress)",
            self.rendered, noun, self.in_progress
        )
    }
}

/// Load the config file named by `--config` or `TOOLBADGE_CONFIG`.
pub fn load_config(cli: &Cli) -> Result<BadgeConfig, RunError> {
    match cli.config.clone().or_else(env::config_path) {
        Some(path) => BadgeConfig::load(&path).map_err(|source| RunError::Config { path, source }),
        None => Ok(BadgeConfig::default()),
    }
}

/// Run the binary against real stdin/stdout.
pub fn execute(cli: &Cli) -> Result<Summary, RunError> {
    cli.validate().map_err(RunError::Validation)?;
    let ignored = cli.ignored_render_flags();
    if !ignored.is_empty() {
        print_warning(format_args!(
            "{} ignored for non-text output",
            ignored.join(", ")
        ));
    }
    let config = load_config(cli)?;
    let settings = Settings::resolve(cli, &config, TerminalInfo::detect());

    let stdout = io::stdout();
    match cli.input_path() {
        Some(path) => {
            let file = File::open(path).map_err(|source| RunError::OpenInput {
                path: path.clone(),
                source,
            })?;
            run(&settings, BufReader::new(file), stdout.lock())
        }
        None => {
            if settings.verbose && io::stdin().is_terminal() {
                print_info("Reading invocations from stdin");
            }
            run(&settings, io::stdin().lock(), stdout.lock())
        }
    }
}

/// Classify every record from `reader` and write badges to `writer`.
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    mut reader: R,
    writer: W,
) -> Result<Summary, RunError> {
    let mut out = OutputWriter::new(writer, settings.output_format, settings.render.clone());
    let mut summary = Summary::default();

    match settings.input_format {
        InputFormat::Json => {
            let mut content = String::new();
            reader
                .read_to_string(&mut content)
                .map_err(InputError::from)?;
            for invocation in parse_document(&content)? {
                emit(&mut out, &invocation, &mut summary, settings.verbose)?;
            }
        }
        InputFormat::StreamJson => {
            for (idx, line) in reader.lines().enumerate() {
                let line = line.map_err(InputError::from)?;
                if let Some(invocation) = parse_line(&line, idx + 1)? {
                    emit(&mut out, &invocation, &mut summary, settings.verbose)?;
                }
            }
        }
    }

    out.finish().map_err(RunError::Output)?;
    Ok(summary)
}

fn emit<W: Write>(
    out: &mut OutputWriter<W>,
    invocation: &ToolInvocation,
    summary: &mut Summary,
    verbose: bool,
) -> Result<(), RunError> {
    let view = BadgeView::from_invocation(invocation);
    if verbose {
        let id = if invocation.tool_call_id.is_empty() {
            "<no id>"
        } else {
            invocation.tool_call_id.as_str()
        };
        print_info(format_args!(
            "{} {} [{}] -> {}",
            id,
            invocation.tool_name,
            invocation.state.as_str(),
            view.icon
        ));
    }
    summary.record(&view);
    out.write_badge(view).map_err(RunError::Output)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
