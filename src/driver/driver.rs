//! Front end for parsing source text and writing its derivation trace.
use std::fs;
use std::io::{self, Read, Stderr, Stdout, Write};

use crate::config::Config;
use crate::grammar;
use crate::parser::{parse_text, render};
use crate::scanner::scan_text;

use super::result::{DriverErr, DriverErrKind, DriverResult};

/// Text that's parsed when no other source is specified.
pub const DEFAULT_SOURCE: &str = "(1+2+(3+4))+5";

/// Runs parses and writes the results. The trace goes to `out` and
/// errors go to `err`, one line each.
pub struct Driver<W: Write, E: Write> {
    config: Config,
    out: W,
    err: E,
}

impl Driver<Stdout, Stderr> {
    pub fn new(config: Config) -> Self {
        Self::with_writers(config, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> Driver<W, E> {
    pub fn with_writers(config: Config, out: W, err: E) -> Self {
        Self { config, out, err }
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    // Execute ---------------------------------------------------------

    /// Parse the built-in default text.
    pub fn execute_default(&mut self) -> DriverResult {
        self.execute_text(DEFAULT_SOURCE)
    }

    /// Read and parse file.
    pub fn execute_file(&mut self, file_path: &str) -> DriverResult {
        log::debug!("Reading source from file: {file_path}");
        let text = fs::read_to_string(file_path).map_err(|err| {
            DriverErr::new(DriverErrKind::CouldNotReadSourceFile(
                file_path.to_owned(),
                err.to_string(),
            ))
        })?;
        self.execute_text(&text)
    }

    /// Read and parse stdin.
    pub fn execute_stdin(&mut self) -> DriverResult {
        log::debug!("Reading source from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(|err| {
            DriverErr::new(DriverErrKind::CouldNotReadStdin(err.to_string()))
        })?;
        self.execute_text(&text)
    }

    /// Parse text, write its trace and any errors, and return the exit
    /// code.
    pub fn execute_text(&mut self, text: &str) -> DriverResult {
        grammar::check_rules()
            .map_err(|err| DriverErr::new(DriverErrKind::Grammar(err)))?;

        if self.config.debug {
            self.dump_tokens(text)?;
        }

        log::debug!("BEGIN: parse (max depth = {})", self.config.max_depth);
        let output = parse_text(text, self.config.max_depth);
        log::debug!(
            "END: parse ({} line(s), {} error(s))",
            output.trace.len(),
            output.errors.len()
        );

        self.out.write_all(render(&output.trace).as_bytes()).map_err(write_err)?;
        self.out.flush().map_err(write_err)?;

        for err in output.errors.iter() {
            writeln!(self.err, "{err}").map_err(write_err)?;
        }
        self.err.flush().map_err(write_err)?;

        if output.is_ok() || !self.config.fail_on_error {
            Ok(0)
        } else {
            Ok(1)
        }
    }

    fn dump_tokens(&mut self, text: &str) -> Result<(), DriverErr> {
        writeln!(self.err, "# Source: {text:?}").map_err(write_err)?;
        for token in scan_text(text) {
            writeln!(self.err, "# {token}").map_err(write_err)?;
        }
        Ok(())
    }
}

fn write_err(err: io::Error) -> DriverErr {
    DriverErr::new(DriverErrKind::CouldNotWriteOutput(err.to_string()))
}
