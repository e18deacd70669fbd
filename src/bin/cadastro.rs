//! Command-line front end for bulk CPF/CNPJ generation and validation.
//!
//! Reads one document per line in bulk mode, skipping blank lines and
//! `#` comments, and writes `valid\t<formatted>` or `invalid\t<line>`.
//! Invalid documents are reported, not treated as process errors.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result, bail};
use cadastro::{DocumentError, classify_and_validate, cnpj, cpf};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cadastro",
    version,
    about = "Generate and validate Brazilian documents (CPF/CNPJ)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate or validate CPF numbers
    Cpf {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Generate or validate CNPJ numbers
    Cnpj {
        #[command(flatten)]
        common: CommonArgs,

        /// When generating, output legacy numeric-only CNPJs
        #[arg(long)]
        legacy: bool,
    },
    /// Detect the document type of a value and validate it
    Classify {
        /// The document value, with or without formatting
        value: String,
    },
}

#[derive(Debug, clap::Args)]
struct CommonArgs {
    /// Generate valid documents
    #[arg(short, long)]
    generate: bool,

    /// Validate a single value
    #[arg(short, long, value_name = "VALUE")]
    validate: Option<String>,

    /// Validate many values from a file, or '-' for stdin
    #[arg(short, long, value_name = "PATH")]
    from: Option<String>,

    /// When generating, how many documents to output
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

impl CommonArgs {
    fn check(&self) -> Result<()> {
        if self.generate && (self.validate.is_some() || self.from.is_some()) {
            bail!("--generate cannot be used with --validate or --from");
        }
        if self.from.is_some() && self.validate.is_some() {
            bail!("--from and --validate are mutually exclusive");
        }
        if !self.generate && self.validate.is_none() && self.from.is_none() {
            bail!("either --generate, --validate, or --from must be provided");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Cpf { common } => {
            common.check()?;
            run(&common, &mut out, cpf::generate, cpf::validate, cpf::format)?;
        }
        Command::Cnpj { common, legacy } => {
            common.check()?;
            let generate = if legacy { cnpj::generate_legacy } else { cnpj::generate };
            run(&common, &mut out, generate, cnpj::validate, cnpj::format)?;
        }
        Command::Classify { value } => {
            let (kind, valid) = classify_and_validate(&value);
            let verdict = if valid { "valid" } else { "invalid" };
            writeln!(out, "{kind}\t{verdict}")?;
        }
    }

    out.flush()?;
    Ok(())
}

fn run<W: Write>(
    args: &CommonArgs,
    out: &mut W,
    generate: fn() -> String,
    validate: fn(&str) -> bool,
    format: fn(&str) -> Result<String, DocumentError>,
) -> Result<()> {
    if args.generate {
        for _ in 0..args.count.max(1) {
            writeln!(out, "{}", generate())?;
        }
        return Ok(());
    }

    if let Some(path) = &args.from {
        let reader = open_reader(path)?;
        return check_lines(reader, out, validate, format);
    }

    if let Some(value) = &args.validate {
        check_one(value, out, validate, format)?;
    }

    Ok(())
}

fn open_reader(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let file =
            File::open(path).with_context(|| format!("cannot open input file '{path}'"))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Validate one document per line: trims whitespace, skips blank lines
/// and `#` comments.
fn check_lines<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    validate: fn(&str) -> bool,
    format: fn(&str) -> Result<String, DocumentError>,
) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        check_one(line, out, validate, format)?;
    }
    Ok(())
}

fn check_one<W: Write>(
    value: &str,
    out: &mut W,
    validate: fn(&str) -> bool,
    format: fn(&str) -> Result<String, DocumentError>,
) -> Result<()> {
    if validate(value) {
        // a value that validates always has the right length to format
        match format(value) {
            Ok(formatted) => writeln!(out, "valid\t{formatted}")?,
            Err(_) => writeln!(out, "valid")?,
        }
    } else {
        writeln!(out, "invalid\t{value}")?;
    }
    Ok(())
}
