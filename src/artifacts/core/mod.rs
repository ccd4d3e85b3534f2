//! Output destination for rendered commands
//!
//! Long listings go through the minus pager when stdout is an interactive
//! terminal. Setting `NO_PAGER` (to any value) or redirecting stdout disables
//! paging and writes straight to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapter giving the minus pager a `std::io::Write` interface
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command writes its output
pub enum Output {
    Stdout,
    Pager(Pager),
}

impl Output {
    /// Page only for an interactive terminal, and only if `NO_PAGER` is unset
    pub fn detect() -> Self {
        if std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal() {
            Output::Pager(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout().lock()),
            Output::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Hand the collected text to the pager; a no-op for stdout
    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Stdout => Ok(()),
            Output::Pager(pager) => Ok(minus::page_all(pager)?),
        }
    }
}
