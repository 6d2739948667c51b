//! Quill Sheets CLI - workbook style inspection tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};
use quill_sheets_core::{DateSystem, Style};
use quill_sheets_xlsx::{ResolverOptions, StyleResolver, XlsxPackage};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Workbook style inspection tool")]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every resolved cell style in a workbook
    Styles {
        /// Input .xlsx file
        input: PathBuf,
    },

    /// Check whether a style index denotes a date
    IsDate {
        /// Input .xlsx file
        input: PathBuf,

        /// Style index (the `s` attribute of a cell)
        style: u32,

        /// Serial cell value to convert when the style is a date
        #[arg(long)]
        value: Option<f64>,

        /// Workbook date system
        #[arg(long, value_enum, default_value = "1900")]
        date_system: DateSystemArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DateSystemArg {
    #[value(name = "1900")]
    Date1900,
    #[value(name = "1904")]
    Date1904,
}

impl From<DateSystemArg> for DateSystem {
    fn from(arg: DateSystemArg) -> Self {
        match arg {
            DateSystemArg::Date1900 => DateSystem::Date1900,
            DateSystemArg::Date1904 => DateSystem::Date1904,
        }
    }
}

/// Writes log records to stderr
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Route library `debug!` output to stderr
fn init_logging() -> Result<()> {
    log::set_logger(&LOGGER).context("Failed to install logger")?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging()?;
    }

    match cli.command {
        Commands::Styles { input } => list_styles(&input),
        Commands::IsDate {
            input,
            style,
            value,
            date_system,
        } => is_date(&input, style, value, date_system.into()),
    }
}

fn open(input: &Path, options: ResolverOptions) -> Result<StyleResolver<XlsxPackage<File>>> {
    let package = XlsxPackage::open_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    Ok(StyleResolver::with_options(package, options))
}

fn list_styles(input: &Path) -> Result<()> {
    let resolver = open(input, ResolverOptions::default())?;
    let count = resolver
        .style_count()
        .with_context(|| format!("Failed to read styles from '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Cell styles: {}", count);

    for index in 0..count as u32 {
        let style = resolver.resolve_style(index)?;
        let date = resolver.is_date_style(index)?;
        println!("{}\t{}{}", index, describe(style), if date { "\tdate" } else { "" });
    }

    if let Some(registry) = resolver.registry()? {
        println!(
            "Number formats: {}  Fonts: {}  Fills: {}  Borders: {}",
            registry.number_format_count(),
            registry.font_count(),
            registry.fill_count(),
            registry.border_count()
        );
    }

    Ok(())
}

fn is_date(input: &Path, style: u32, value: Option<f64>, date_system: DateSystem) -> Result<()> {
    let resolver = open(input, ResolverOptions::new().with_date_system(date_system))?;

    let date = resolver
        .is_date_style(style)
        .with_context(|| format!("Failed to read styles from '{}'", input.display()))?;
    println!("style {}: {}", style, if date { "date" } else { "not a date" });

    if let (true, Some(value)) = (date, value) {
        match resolver.date_value(style, value)? {
            Some(datetime) => println!("{} = {}", value, datetime),
            None => println!("{} has no calendar date", value),
        }
    }

    Ok(())
}

/// One-line summary of a resolved style
fn describe(style: &Style) -> String {
    if style.is_default() {
        return "default".to_string();
    }

    let font = &style.font;
    let mut parts = vec![format!("font={} {}pt {}", font.name, font.size, font.color)];
    for (set, flag) in [
        (font.bold, "bold"),
        (font.italic, "italic"),
        (font.underline, "underline"),
        (font.strikethrough, "strike"),
    ] {
        if set {
            parts.push(flag.to_string());
        }
    }
    if let Some(background) = &style.background {
        parts.push(format!("fill={}", background));
    }
    if let Some(code) = &style.format_code {
        parts.push(format!("format={:?}", code));
    }
    parts.join(" ")
}
