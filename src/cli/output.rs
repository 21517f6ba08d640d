//! Coloured terminal output for analysis reports.
//!
//! Each message is rendered into a termcolor buffer and printed in one call.
//! Quiet mode silences everything except errors and machine-readable documents.

use std::io::{self, Write};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Colour role of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Terminal default
    Plain,
    /// The reference being reported (green)
    Subject,
    /// A project that already provides something (cyan)
    Provider,
    /// Something worth a second look (yellow)
    Attention,
    /// Secondary detail (dimmed)
    Muted,
}

impl Tone {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Tone::Plain => {}
            Tone::Subject => {
                spec.set_fg(Some(Color::Green));
            }
            Tone::Provider => {
                spec.set_fg(Some(Color::Cyan));
            }
            Tone::Attention => {
                spec.set_fg(Some(Color::Yellow));
            }
            Tone::Muted => {
                spec.set_dimmed(true);
            }
        }
        spec
    }
}

/// A left-aligned table with a dimmed header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<&'static str>,
    tones: Vec<Tone>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from `(title, tone)` columns
    pub fn new<const N: usize>(columns: [(&'static str, Tone); N]) -> Self {
        Self {
            header: columns.iter().map(|(title, _)| *title).collect(),
            tones: columns.iter().map(|(_, tone)| *tone).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; it must have one cell per column
    pub fn push<const N: usize>(&mut self, cells: [String; N]) {
        debug_assert_eq!(N, self.header.len());
        self.rows.push(cells.into());
    }

    /// Rows without the header
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|title| title.chars().count())
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Render the table, indented, one line per row
    pub fn write_to<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let muted = Tone::Muted.spec();

        write_row(out, &self.header, &widths, |_| &muted)?;

        let tones: Vec<ColorSpec> = self.tones.iter().map(|tone| tone.spec()).collect();
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(out, &cells, &widths, |column| &tones[column])?;
        }
        Ok(())
    }
}

fn write_row<'s, W: WriteColor>(
    out: &mut W,
    cells: &[&str],
    widths: &[usize],
    spec: impl Fn(usize) -> &'s ColorSpec,
) -> io::Result<()> {
    write!(out, "    ")?;
    for (column, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if column > 0 {
            write!(out, "  ")?;
        }
        out.set_color(spec(column))?;
        if column + 1 == cells.len() {
            write!(out, "{}", cell)?;
        } else {
            write!(out, "{:<width$}", cell, width = width)?;
        }
        out.reset()?;
    }
    writeln!(out)
}

/// Section heading: yellow title, optionally followed by the project it is about
fn write_heading<W: WriteColor>(
    out: &mut W,
    title: &str,
    project: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, " {}", title)?;
    if let Some(project) = project {
        out.reset()?;
        write!(out, " ")?;
        out.set_color(&Tone::Provider.spec())?;
        write!(out, "{}", project)?;
    }
    out.reset()?;
    writeln!(out, ":")
}

fn write_marked<W: WriteColor>(
    out: &mut W,
    mark: &str,
    color: Color,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", mark)?;
    out.reset()?;
    writeln!(out, " {}", message)
}

/// Output manager for the text report and diagnostics
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            quiet,
        }
    }

    fn emit(&self, render: impl FnOnce(&mut Buffer) -> io::Result<()>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut buffer = self.stdout.buffer();
        render(&mut buffer)?;
        self.stdout.print(&buffer)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.emit(|out| write_marked(out, "✓", Color::Green, message))
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.emit(|out| write_marked(out, "⚠", Color::Yellow, message))
    }

    /// Print a section heading
    pub fn heading(&self, title: &str, project: Option<&str>) -> io::Result<()> {
        self.emit(|out| write_heading(out, title, project))
    }

    /// Print a table
    pub fn table(&self, table: &Table) -> io::Result<()> {
        self.emit(|out| table.write_to(out))
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.emit(|out| writeln!(out, "    {}", message))
    }

    /// Print a plain message
    pub fn println(&self, message: &str) -> io::Result<()> {
        self.emit(|out| writeln!(out, "{}", message))
    }

    /// Print a document regardless of quiet mode
    pub fn document(&self, content: &str) -> io::Result<()> {
        let mut buffer = self.stdout.buffer();
        writeln!(buffer, "{}", content)?;
        self.stdout.print(&buffer)
    }

    /// Print an error message on stderr (never quiet)
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let printed = write_marked(&mut buffer, "✗", Color::Red, message)
            .and_then(|()| stderr.print(&buffer));

        if printed.is_err() {
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }
}
