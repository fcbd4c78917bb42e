//! # cptranscode - Legacy Code Page Converter
//!
//! Command-line front end for converting text between UTF-8 and the
//! built-in single-byte code pages.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use codepage_transcode::{
    CodePageInfo, CodePageRegistry, CodePageTable, Error as TranscodeError, FallbackDecision,
    FallbackPolicy, Family, Fold,
};

/// cptranscode: convert text to and from legacy single-byte code pages
#[derive(Parser)]
#[command(name = "cptranscode")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode code page bytes to UTF-8
    Decode(DecodeArgs),

    /// Encode UTF-8 text into a code page
    Encode(EncodeArgs),

    /// Convert between two code pages through Unicode
    Convert(ConvertArgs),

    /// Count the bytes UTF-8 text needs in a code page
    Count(CountArgs),

    /// Check that UTF-8 text is representable in a code page
    Validate(ValidateArgs),

    /// List the built-in code pages
    List(ListArgs),

    /// Display detailed information about a code page
    Info(InfoArgs),
}

#[derive(Args)]
struct DecodeArgs {
    /// Source code page (name, alias or number)
    #[arg(short, long)]
    page: PageArg,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct EncodeArgs {
    /// Target code page (name, alias or number)
    #[arg(short, long)]
    page: PageArg,

    /// Fallback for unrepresentable characters: replace, strict, ignore, ncr or byte:<value>
    #[arg(long, default_value = "replace")]
    fallback: FallbackPolicy,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source code page
    #[arg(short = 'f', long = "from")]
    from: PageArg,

    /// Target code page
    #[arg(short = 't', long = "to")]
    to: PageArg,

    /// Fallback for characters the target page cannot represent
    #[arg(long, default_value = "replace")]
    fallback: FallbackPolicy,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CountArgs {
    /// Target code page
    #[arg(short, long)]
    page: PageArg,

    /// Fallback for unrepresentable characters
    #[arg(long, default_value = "replace")]
    fallback: FallbackPolicy,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct ValidateArgs {
    /// Target code page
    #[arg(short, long)]
    page: PageArg,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Show every unrepresentable character
    #[arg(long)]
    show_errors: bool,
}

#[derive(Args)]
struct ListArgs {
    /// Filter by family
    #[arg(long)]
    family: Option<FamilyArg>,

    /// Show aliases and descriptions
    #[arg(long)]
    details: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Code page to describe
    page: PageArg,

    /// Show byte mapping samples
    #[arg(long)]
    samples: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Ebcdic,
    Oem,
    Windows,
    Mac,
    Koi8,
    Iso,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Ebcdic => Family::Ebcdic,
            FamilyArg::Oem => Family::Oem,
            FamilyArg::Windows => Family::Windows,
            FamilyArg::Mac => Family::Mac,
            FamilyArg::Koi8 => Family::Koi8,
            FamilyArg::Iso => Family::Iso,
        }
    }
}

/// Code page resolved through the global registry at argument parse time
#[derive(Clone, Copy, Debug)]
struct PageArg(&'static CodePageTable);

impl std::str::FromStr for PageArg {
    type Err = TranscodeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CodePageRegistry::global().lookup(s).map(PageArg)
    }
}

#[derive(Serialize)]
struct TranscodeReport<'a> {
    success: bool,
    source: &'a str,
    target: &'a str,
    fallback: String,
    bytes_read: usize,
    bytes_written: usize,
    processing_time_ms: u64,
}

#[derive(Serialize)]
struct CountReport<'a> {
    page: &'a str,
    fallback: String,
    utf16_units: usize,
    bytes: usize,
}

#[derive(Serialize)]
struct Unmappable {
    position: usize,
    code_point: String,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    page: &'a str,
    valid: bool,
    errors: Vec<Unmappable>,
}

#[derive(Serialize)]
struct PageReport {
    #[serde(flatten)]
    info: CodePageInfo,
    substitute_byte: u8,
    identity_below: u16,
    folds: Vec<Fold>,
    unmapped_bytes: Vec<u8>,
    non_bijective_bytes: Vec<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    samples: Vec<Sample>,
}

#[derive(Serialize)]
struct Sample {
    byte: u8,
    code_point: String,
    character: char,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode(ref args) => decode_command(args, &cli)?,
        Commands::Encode(ref args) => encode_command(args, &cli)?,
        Commands::Convert(ref args) => convert_command(args, &cli)?,
        Commands::Count(ref args) => count_command(args, &cli)?,
        Commands::Validate(ref args) => validate_command(args, &cli)?,
        Commands::List(ref args) => list_command(args, &cli)?,
        Commands::Info(ref args) => info_command(args, &cli)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            log::info!("reading from {}", path.display());
            fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            log::info!("reading from stdin");
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn read_text(input: Option<&Path>) -> Result<String> {
    let bytes = read_input(input)?;
    String::from_utf8(bytes).context("Input is not valid UTF-8")
}

fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            log::info!("wrote {} bytes to {}", data.len(), path.display());
        }
        None => io::stdout()
            .write_all(data)
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

/// Encode with an exactly sized buffer: count first, then fill.
fn encode_presized(table: &CodePageTable, fallback: &FallbackPolicy, text: &str) -> Result<Vec<u8>> {
    let mut encoder = table.encoder(fallback.clone());
    let needed = encoder
        .byte_count(text)
        .with_context(|| format!("Cannot encode input as {table}"))?;
    let mut buffer = vec![0u8; needed];
    let written = encoder
        .encode(text, &mut buffer)
        .with_context(|| format!("Cannot encode input as {table}"))?;
    buffer.truncate(written);
    Ok(buffer)
}

fn print_report(cli: &Cli, report: &TranscodeReport<'_>, to_stdout: bool) -> Result<()> {
    if let OutputFormat::Json = cli.format {
        let json = serde_json::to_string_pretty(report)?;
        // keep transcoded data on stdout untouched
        if to_stdout {
            eprintln!("{json}");
        } else {
            println!("{json}");
        }
    }
    Ok(())
}

fn decode_command(args: &DecodeArgs, cli: &Cli) -> Result<()> {
    let start_time = std::time::Instant::now();
    let PageArg(table) = args.page;

    let input = read_input(args.input.as_deref())?;
    let text = table.decode(&input);
    write_output(args.output.as_deref(), text.as_bytes())?;

    log::info!("decoded {} bytes from {}", input.len(), table);
    print_report(
        cli,
        &TranscodeReport {
            success: true,
            source: table.name(),
            target: "UTF-8",
            fallback: "none".to_string(),
            bytes_read: input.len(),
            bytes_written: text.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        },
        args.output.is_none(),
    )
}

fn encode_command(args: &EncodeArgs, cli: &Cli) -> Result<()> {
    let start_time = std::time::Instant::now();
    let PageArg(table) = args.page;

    let text = read_text(args.input.as_deref())?;
    let encoded = encode_presized(table, &args.fallback, &text)?;
    write_output(args.output.as_deref(), &encoded)?;

    log::info!(
        "encoded {} bytes of UTF-8 into {} bytes of {}",
        text.len(),
        encoded.len(),
        table
    );
    print_report(
        cli,
        &TranscodeReport {
            success: true,
            source: "UTF-8",
            target: table.name(),
            fallback: args.fallback.to_string(),
            bytes_read: text.len(),
            bytes_written: encoded.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        },
        args.output.is_none(),
    )
}

fn convert_command(args: &ConvertArgs, cli: &Cli) -> Result<()> {
    let start_time = std::time::Instant::now();
    let PageArg(from) = args.from;
    let PageArg(to) = args.to;

    log::info!("converting from {from} to {to}");

    let input = read_input(args.input.as_deref())?;
    let text = from.decode(&input);
    let encoded = encode_presized(to, &args.fallback, &text)?;
    write_output(args.output.as_deref(), &encoded)?;

    print_report(
        cli,
        &TranscodeReport {
            success: true,
            source: from.name(),
            target: to.name(),
            fallback: args.fallback.to_string(),
            bytes_read: input.len(),
            bytes_written: encoded.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        },
        args.output.is_none(),
    )
}

fn count_command(args: &CountArgs, cli: &Cli) -> Result<()> {
    let PageArg(table) = args.page;

    let text = read_text(args.input.as_deref())?;
    let bytes = table
        .encoder(args.fallback.clone())
        .byte_count(&text)
        .with_context(|| format!("Cannot encode input as {table}"))?;

    match cli.format {
        OutputFormat::Json => {
            let report = CountReport {
                page: table.name(),
                fallback: args.fallback.to_string(),
                utf16_units: text.encode_utf16().count(),
                bytes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => println!("{bytes}"),
    }

    Ok(())
}

fn validate_command(args: &ValidateArgs, cli: &Cli) -> Result<()> {
    let PageArg(table) = args.page;
    let text = read_text(args.input.as_deref())?;

    // Record every failure instead of stopping at the first one
    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&failures);
    let policy = FallbackPolicy::custom(move |unit: u16, position: usize| {
        if let Ok(mut failures) = sink.lock() {
            failures.push(Unmappable {
                position,
                code_point: format!("U+{unit:04X}"),
            });
        }
        FallbackDecision::Substitute(Vec::new())
    });
    table
        .encoder(policy)
        .byte_count(&text)
        .with_context(|| format!("Cannot check input against {table}"))?;

    let errors = std::mem::take(
        &mut *failures
            .lock()
            .map_err(|_| anyhow::anyhow!("validation state poisoned"))?,
    );
    let valid = errors.is_empty();

    match cli.format {
        OutputFormat::Json => {
            let report = ValidationReport {
                page: table.name(),
                valid,
                errors,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if valid {
                println!("✓ Input is representable in {}", table.name());
            } else {
                println!(
                    "✗ Input is not representable in {} ({} characters)",
                    table.name(),
                    errors.len()
                );
                if args.show_errors {
                    for error in &errors {
                        println!(
                            "  Error at position {}: unmappable character {}",
                            error.position, error.code_point
                        );
                    }
                }
            }
        }
    }

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}

fn list_command(args: &ListArgs, cli: &Cli) -> Result<()> {
    let family = args.family.map(Family::from);
    let pages: Vec<CodePageInfo> = CodePageRegistry::global()
        .pages()
        .filter(|info| family.is_none_or(|family| info.family == family))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
        OutputFormat::Text => {
            println!("Supported Code Pages ({} total):", pages.len());
            println!();

            for info in &pages {
                println!(
                    "{:>5}  {:15} {:10} {}",
                    info.id,
                    info.name,
                    format!("[{}]", info.family),
                    info.description
                );
                if args.details && !info.aliases.is_empty() {
                    println!("{:22} Aliases: {}", "", info.aliases.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn info_command(args: &InfoArgs, cli: &Cli) -> Result<()> {
    let PageArg(table) = args.page;

    let samples = if args.samples {
        sample_bytes(table)
    } else {
        Vec::new()
    };
    let report = PageReport {
        info: table.info(),
        substitute_byte: table.substitute_byte(),
        identity_below: table.identity_below(),
        folds: table.folds().to_vec(),
        unmapped_bytes: table.unmapped_bytes().collect(),
        non_bijective_bytes: table.non_bijective_bytes(),
        samples,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("Code Page Information: {} ({})", table.name(), table.id());
            println!("Description: {}", table.description());
            println!("Family: {}", table.family());
            if !table.aliases().is_empty() {
                println!("Aliases: {}", table.aliases().join(", "));
            }
            println!("Substitute byte: 0x{:02X}", report.substitute_byte);
            println!("Identity below: 0x{:02X}", report.identity_below);

            if report.folds.is_empty() {
                println!("Fold ranges: None");
            } else {
                println!("Fold ranges:");
                for fold in &report.folds {
                    println!(
                        "  U+{:04X}..U+{:04X} -> U+{:04X}..U+{:04X}",
                        fold.first,
                        fold.last,
                        fold.first - fold.offset,
                        fold.last - fold.offset
                    );
                }
            }

            println!("Unassigned bytes: {}", format_bytes(&report.unmapped_bytes));
            println!(
                "Non-bijective bytes: {}",
                format_bytes(&report.non_bijective_bytes)
            );

            if args.samples {
                println!("\nByte Samples:");
                for sample in &report.samples {
                    println!(
                        "  0x{:02X} -> {} {}",
                        sample.byte,
                        sample.code_point,
                        sample.character.escape_debug()
                    );
                }
            }
        }
    }

    Ok(())
}

fn sample_bytes(table: &CodePageTable) -> Vec<Sample> {
    [0x41u8, 0x61, 0x30, 0x80, 0xA0, 0xC1, 0xE0, 0xFF]
        .into_iter()
        .map(|byte| Sample {
            byte,
            code_point: format!("U+{:04X}", table.decode_unit(byte)),
            character: table.decode_byte(byte),
        })
        .collect()
}

fn format_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "None".to_string();
    }
    bytes
        .iter()
        .map(|byte| format!("0x{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
