//! Command-line interface for the `cms-text` binary.
//!
//! The CLI runs one named helper over text given as arguments, read from a
//! file or piped on standard input, and prints the result as plain text or
//! JSON.

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Parser};
use cms_text::{
    DEFAULT_STYLE, Error, Operation, OperationOptions, TextHelpers, io_error,
    is_loosely_valid_utf8, is_valid_utf8,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Runs string helpers for content management text.
#[derive(Debug, Parser,)]
#[command(name = "cms-text", version, about = "Run content text helpers")]
struct Cli
{
    /// Helper to run, for example `slug`, `camel-case` or `clean-rich-text`.
    #[arg(value_name = "OPERATION")]
    operation: Operation,

    /// Input text, joined with single spaces. Read from --file or standard
    /// input when absent.
    #[arg(value_name = "TEXT")]
    text: Vec<String,>,

    /// Read the input from a file instead of standard input.
    #[arg(long = "file", value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf,>,

    /// Apply the helper to every input line separately.
    #[arg(long = "per-line", action = ArgAction::SetTrue)]
    per_line: bool,

    /// Print a JSON object instead of plain text.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Increment style (`default` or `dash`).
    #[arg(long = "style", env = "CMS_TEXT_INCREMENT_STYLE", default_value = DEFAULT_STYLE)]
    style: String,

    /// Explicit number used by `increment`; 0 picks the next number.
    #[arg(short = 'n', long = "number", value_name = "N", default_value_t = 0)]
    number: u64,

    /// Separator used by `join-list`.
    #[arg(long = "separator", env = "CMS_TEXT_SEPARATOR", default_value = ", ")]
    separator: String,
}

impl Cli
{
    fn options(&self,) -> OperationOptions
    {
        OperationOptions {
            style:     self.style.clone(),
            n:         self.number,
            separator: self.separator.clone(),
        }
    }
}

/// JSON document printed with `--json`.
#[derive(Debug, Serialize,)]
struct Report<'output,>
{
    operation: Operation,
    #[serde(flatten)]
    result:    ReportResult<'output,>,
}

#[derive(Debug, Serialize,)]
#[serde(rename_all = "snake_case")]
enum ReportResult<'output,>
{
    Output(&'output str,),
    Outputs(&'output [String],),
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Logs go to stderr so stdout carries results only.
fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates input, validation and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let input = read_input(&cli,)?;
    let outputs = render(&cli, &input,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_outputs(&mut handle, &cli, &outputs,)
}

/// Collects the raw input bytes from arguments, a file or standard input.
fn read_input(cli: &Cli,) -> Result<Vec<u8,>, Error,>
{
    if !cli.text.is_empty() {
        return Ok(cli.text.join(" ",).into_bytes(),);
    }

    let mut bytes = match &cli.file {
        Some(path,) => fs::read(path,).map_err(|source| io_error(path, source,),)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer,)
                .map_err(|source| Error::Stdin {
                    source,
                },)?;
            buffer
        }
    };

    if !cli.per_line {
        strip_trailing_newline(&mut bytes,);
    }
    Ok(bytes,)
}

fn strip_trailing_newline(bytes: &mut Vec<u8,>,)
{
    if bytes.last() == Some(&b'\n',) {
        bytes.pop();
        if bytes.last() == Some(&b'\r',) {
            bytes.pop();
        }
    }
}

/// Runs the selected helper over the input.
///
/// The UTF-8 checks inspect the raw bytes; every other helper needs the input
/// to be valid UTF-8.
fn render(cli: &Cli, input: &[u8],) -> Result<Vec<String,>, Error,>
{
    debug!("running {} (per line: {})", cli.operation, cli.per_line);

    let byte_check = match cli.operation {
        Operation::ValidUtf8 => Some(is_valid_utf8 as fn(&[u8],) -> bool,),
        Operation::CompliantUtf8 => Some(is_loosely_valid_utf8 as fn(&[u8],) -> bool,),
        _ => None,
    };

    if let Some(check,) = byte_check {
        let outputs = if cli.per_line {
            byte_lines(input,).into_iter().map(|line| check(line,).to_string(),).collect()
        } else {
            vec![check(input,).to_string()]
        };
        return Ok(outputs,);
    }

    let text = std::str::from_utf8(input,).map_err(|error| {
        Error::validation(format!(
            "input is not valid UTF-8 (byte {}); run `valid-utf8` to inspect it",
            error.valid_up_to()
        ),)
    },)?;

    let helpers = TextHelpers::new();
    let options = cli.options();

    if cli.per_line {
        let lines: Vec<&str,> = text.lines().collect();
        return Ok(lines.par_iter().map(|line| helpers.apply(cli.operation, line, &options,),).collect(),);
    }

    Ok(vec![helpers.apply(cli.operation, text, &options,)],)
}

/// Splits raw bytes into lines the way [`str::lines`] splits text.
fn byte_lines(input: &[u8],) -> Vec<&[u8],>
{
    let mut lines: Vec<&[u8],> = input
        .split(|byte| *byte == b'\n',)
        .map(|line| line.strip_suffix(b"\r",).unwrap_or(line,),)
        .collect();
    if input.is_empty() || input.ends_with(b"\n",) {
        lines.pop();
    }
    lines
}

fn write_outputs<W: Write,>(writer: &mut W, cli: &Cli, outputs: &[String],) -> Result<(), Error,>
{
    if cli.json {
        let result = match outputs {
            [single,] if !cli.per_line => ReportResult::Output(single,),
            _ => ReportResult::Outputs(outputs,),
        };
        serde_json::to_writer(
            &mut *writer,
            &Report {
                operation: cli.operation,
                result,
            },
        )?;
        writeln!(writer).map_err(|source| Error::Output {
            source,
        },)?;
        return Ok((),);
    }

    for output in outputs {
        writeln!(writer, "{output}").map_err(|source| Error::Output {
            source,
        },)?;
    }
    Ok((),)
}
