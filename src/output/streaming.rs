//! Streaming output formatter
//!
//! This module provides `TreeFormatter` which writes every entry the moment
//! the walker hands it over, for use with `walk`.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{StreamingOutput, WalkStats};

use super::config::OutputConfig;

/// Writes `<prefix><name>` lines, coloring directory names when enabled.
pub struct TreeFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> StreamingOutput for TreeFormatter<W> {
    fn output_entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()> {
        write!(self.out, "{}", prefix)?;
        if is_dir && self.config.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", name)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", name)?;
        }
        writeln!(self.out)
    }

    fn finish(&mut self, stats: &WalkStats) -> io::Result<()> {
        if self.config.show_summary {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} directories, {} files",
                stats.directories, stats.files
            )?;
        }
        self.out.flush()
    }
}
