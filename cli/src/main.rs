//! textify CLI - HTML to plain text tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use textify::{
    convert_batch, CleanupPreset, ExtractionStats, ParseOptions, RenderOptions, Textify,
};

#[derive(Parser)]
#[command(name = "textify")]
#[command(version)]
#[command(about = "Render HTML documents as plain text", long_about = None)]
struct Cli {
    /// Input HTML file (stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Wrap width for layout tables
    #[arg(short, long, env = "TEXTIFY_WIDTH")]
    width: Option<usize>,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert HTML to plain text
    Text {
        /// Input HTML file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap width for layout tables
        #[arg(short, long, env = "TEXTIFY_WIDTH")]
        width: Option<usize>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        /// Do not repeat data table text after the drawn grid
        #[arg(long)]
        no_table_echo: bool,

        /// Fail on invalid UTF-8 instead of replacing it
        #[arg(long)]
        strict: bool,
    },

    /// Show conversion statistics
    Stats {
        /// Input HTML files (stdin if not specified)
        #[arg(value_name = "FILES")]
        inputs: Vec<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert many HTML files, writing a .txt file next to each
    Batch {
        /// Input HTML files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Wrap width for layout tables
        #[arg(short, long, env = "TEXTIFY_WIDTH")]
        width: Option<usize>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Blank-line collapsing only (default)
    Minimal,
    /// Unicode normalization and trailing whitespace removal
    Standard,
    /// Standard plus replacement character removal and single blank lines
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            width,
            cleanup,
            no_table_echo,
            strict,
        }) => cmd_text(
            input.as_deref(),
            output.as_deref(),
            width,
            cleanup,
            no_table_echo,
            strict,
        ),
        Some(Commands::Stats { inputs, json }) => cmd_stats(&inputs, json),
        Some(Commands::Batch {
            inputs,
            output,
            width,
            cleanup,
        }) => cmd_batch(&inputs, output.as_deref(), width, cleanup),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_text(
            cli.input.as_deref(),
            None,
            cli.width,
            cli.cleanup,
            false,
            false,
        ),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read the whole input file, or stdin when no file is given.
fn read_input(input: Option<&Path>) -> io::Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn render_options(width: Option<usize>, cleanup: Option<CleanupLevel>) -> RenderOptions {
    let mut options = RenderOptions::new().with_width_hint(width);
    if let Some(level) = cleanup {
        options = options.with_cleanup_preset(level.into());
    }
    options
}

fn cmd_text(
    input: Option<&Path>,
    output: Option<&Path>,
    width: Option<usize>,
    cleanup: Option<CleanupLevel>,
    no_table_echo: bool,
    strict: bool,
) -> CliResult {
    let data = read_input(input)?;

    let mut builder = if strict {
        Textify::new().strict()
    } else {
        Textify::new().lenient()
    };
    if let Some(width) = width {
        builder = builder.with_width(width);
    }
    if let Some(level) = cleanup {
        builder = builder.with_cleanup(level.into());
    }
    if no_table_echo {
        builder = builder.without_table_echo();
    }

    let text = builder.parse_bytes(&data)?.to_text()?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_stats(inputs: &[PathBuf], json: bool) -> CliResult {
    let sources: Vec<Option<&Path>> = if inputs.is_empty() {
        vec![None]
    } else {
        inputs.iter().map(|p| Some(p.as_path())).collect()
    };

    let mut total = ExtractionStats::new();
    let mut reports = Vec::with_capacity(sources.len());
    for input in sources {
        let data = read_input(input)?;
        let result = textify::convert_bytes_with_options(
            &data,
            &ParseOptions::default(),
            &RenderOptions::default(),
        )?;
        total.merge(&result.stats);
        let name = input.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
        reports.push((name, data.len(), result));
    }

    if json {
        let stats: &ExtractionStats = match reports.as_slice() {
            [(_, _, result)] => &result.stats,
            _ => &total,
        };
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    for (name, input_len, result) in &reports {
        print_stats(name, *input_len, result.content_len(), &result.stats);
    }
    if reports.len() > 1 {
        let input_len = reports.iter().map(|(_, len, _)| len).sum();
        let output_len = reports.iter().map(|(_, _, r)| r.content_len()).sum();
        print_stats("Total", input_len, output_len, &total);
    }

    Ok(())
}

fn print_stats(name: &str, input_len: usize, output_len: usize, stats: &ExtractionStats) {
    println!("{}", "Conversion Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), name);
    println!("{}: {} bytes", "Input".bold(), input_len);
    println!("{}: {} bytes", "Output".bold(), output_len);
    println!();
    println!(
        "{}: {} ({} data, {} layout)",
        "Tables".bold(),
        stats.table_count(),
        stats.data_table_count,
        stats.layout_table_count
    );
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Text nodes".bold(), stats.text_node_count);
    println!("{}: {}", "Suppressed".bold(), stats.suppressed_count);
    if stats.truncated_count > 0 {
        println!(
            "{}: {}",
            "Truncated".yellow().bold(),
            stats.truncated_count
        );
    }
    println!();
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!();
}

/// Path of the `.txt` file written for `input`.
fn batch_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let target = input.with_extension("txt");
    match (output_dir, target.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => target,
    }
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    width: Option<usize>,
    cleanup: Option<CleanupLevel>,
) -> CliResult {
    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading...");
    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        documents.push(fs::read(input)?);
        pb.inc(1);
    }

    pb.set_message("Converting...");
    log::debug!("converting {} documents", documents.len());
    let slices: Vec<&[u8]> = documents.iter().map(Vec::as_slice).collect();
    let results = convert_batch(&slices, &render_options(width, cleanup));

    let mut written = Vec::new();
    let mut failed = Vec::new();
    for (input, text) in inputs.iter().zip(results) {
        match text {
            Some(text) => {
                let path = batch_output_path(input, output);
                fs::write(&path, text)?;
                written.push(path);
            }
            None => failed.push(input),
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for path in &written {
        println!("  {} {}", "├─".dimmed(), path.display());
    }
    for input in &failed {
        println!("  {} {} {}", "├─".dimmed(), input.display(), "(no text)".yellow());
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {} files produced no text", failed.len(), inputs.len()).into())
    }
}

fn cmd_version() {
    println!("{} {}", "textify".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML to plain text tool");
    println!();
    println!("License: MIT");
}
