use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::io::Write;
use std::path::PathBuf;

use varlint_core::diagnostic::Diagnostic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Print diagnostics with their rule name and location on separate lines
    #[default]
    Full,
    /// Print diagnostics in a concise format, one per line
    Concise,
    /// Print diagnostics as JSON
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Concise => write!(f, "concise"),
            Self::Json => write!(f, "json"),
        }
    }
}

pub trait Emitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
    ) -> anyhow::Result<()>;
}

pub struct FullEmitter;

impl Emitter for FullEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
    ) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            writeln!(
                writer,
                "{}: {}\n {} {}:{}\n{}\n",
                "warning".yellow().bold(),
                diagnostic.message.name.bold(),
                "-->".blue().bold(),
                diagnostic.filename.display(),
                diagnostic.location,
                diagnostic.message.body
            )?;
        }

        print_errors(writer, errors)?;
        print_summary(writer, diagnostics, errors)
    }
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
    ) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            writeln!(
                writer,
                "{} [{}] {} {}",
                diagnostic.filename.display().to_string().white(),
                diagnostic.location,
                diagnostic.message.name.red(),
                diagnostic.message.body
            )?;
        }

        print_errors(writer, errors)?;
        print_summary(writer, diagnostics, errors)
    }
}

pub struct JsonEmitter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: &'a [&'a Diagnostic],
    errors: Vec<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    file: PathBuf,
    error: String,
}

impl Emitter for JsonEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(PathBuf, anyhow::Error)],
    ) -> anyhow::Result<()> {
        let errors = errors
            .iter()
            .map(|(path, err)| JsonError { file: path.clone(), error: format!("{err:#}") })
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &JsonOutput { diagnostics, errors })?;
        writeln!(writer)?;
        Ok(())
    }
}

fn print_errors<W: Write>(writer: &mut W, errors: &[(PathBuf, anyhow::Error)]) -> anyhow::Result<()> {
    for (_path, err) in errors {
        writeln!(writer, "{}: {err:#}", "Error".red().bold())?;
    }
    Ok(())
}

fn print_summary<W: Write>(
    writer: &mut W,
    diagnostics: &[&Diagnostic],
    errors: &[(PathBuf, anyhow::Error)],
) -> anyhow::Result<()> {
    match diagnostics.len() {
        0 if !errors.is_empty() => {}
        0 => writeln!(writer, "All checks passed!")?,
        1 => writeln!(writer, "Found 1 error.")?,
        n => writeln!(writer, "Found {n} errors.")?,
    }
    Ok(())
}
