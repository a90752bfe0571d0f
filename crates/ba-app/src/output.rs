use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ba_core::frame::AsciiGrid;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Destination des frames rendues.
pub trait FrameSink {
    /// Émet une frame. `frame_number` est 1-based dans la passe courante.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    fn emit(&mut self, frame_number: usize, animated: bool, grid: &AsciiGrid) -> Result<()>;

    /// Commit everything emitted so far.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn finish(&mut self) -> Result<()>;

    /// True when frames reach a terminal as they are emitted.
    fn is_console(&self) -> bool;

    /// Efface l'écran avant une frame (lecture interactive). No-op par défaut.
    ///
    /// # Errors
    /// Returns an error if the clear sequence cannot be written.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Streams frames to a writer (stdout in production) as they are rendered.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for ConsoleSink<W> {
    fn emit(&mut self, _frame_number: usize, _animated: bool, grid: &AsciiGrid) -> Result<()> {
        write!(self.out, "{grid}").context("Écriture sur la sortie standard")?;
        self.out.flush().context("Écriture sur la sortie standard")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("Écriture sur la sortie standard")
    }

    fn is_console(&self) -> bool {
        true
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .context("Effacement du terminal")?;
        Ok(())
    }
}

/// Accumulates the whole conversion and writes the file once, on `finish`.
///
/// Animated frames are framed as `=== FRAME n ===\n<art>\n`; a still image
/// is written bare.
pub struct FileSink {
    path: PathBuf,
    buffer: String,
}

impl FileSink {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl FrameSink for FileSink {
    fn emit(&mut self, frame_number: usize, animated: bool, grid: &AsciiGrid) -> Result<()> {
        use std::fmt::Write as _;
        if animated {
            writeln!(self.buffer, "=== FRAME {frame_number} ===")?;
            writeln!(self.buffer, "{grid}")?;
        } else {
            write!(self.buffer, "{grid}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        log::debug!("Écriture de la sortie : {}", self.path.display());
        std::fs::write(&self.path, self.buffer.as_bytes())
            .with_context(|| format!("Impossible d'écrire {}", self.path.display()))
    }

    fn is_console(&self) -> bool {
        false
    }
}

/// File sink when an output path is given, stdout otherwise.
#[must_use]
pub fn sink_for(output: Option<&Path>) -> Box<dyn FrameSink> {
    match output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(ConsoleSink::stdout()),
    }
}
