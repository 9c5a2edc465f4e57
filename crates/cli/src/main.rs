//! CLI tool for converting rich text into slide text runs.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use richtext_core::{FormatStyle, InputFormat, MarkdownNormalizer, RunFormatter, StyledRun};
use richtext_html::{HtmlConverter, MarkdownBridge};
use richtext_markdown::MarkdownConverter;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Convert Markdown-style text or editor HTML into styled slide text runs.
#[derive(Parser, Debug)]
#[command(name = "richtext-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s); `-` or none reads stdin
    input: Vec<PathBuf>,

    /// Input notation (default: detect from extension, then content)
    #[arg(short, long, value_enum, default_value_t = FromArg::Auto)]
    from: FromArg,

    /// Convert HTML through the Markdown bridge instead of the tree walker
    #[arg(long)]
    via_markdown: bool,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = EmitArg::Runs)]
    emit: EmitArg,

    /// Layout of emitted runs
    #[arg(short, long, value_enum, default_value_t = StyleArg::Json)]
    style: StyleArg,

    /// Apply Quill defaults (multi-script font fallback)
    #[arg(short, long)]
    quill: bool,

    /// Keep single line breaks when bridging HTML to Markdown
    #[arg(long)]
    preserve_line_breaks: bool,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FromArg {
    Auto,
    Markdown,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitArg {
    /// Styled runs
    Runs,
    /// Markdown bridged from HTML
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Json,
    Literal,
}

impl From<StyleArg> for FormatStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Json => FormatStyle::Json,
            StyleArg::Literal => FormatStyle::Literal,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let inputs = if args.input.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.input.clone()
    };
    let failures = convert_inputs(&inputs, &args);

    if failures > 0 {
        anyhow::bail!("{} of {} inputs failed", failures, inputs.len());
    }

    Ok(())
}

/// Convert every input, reporting failures on stderr. Returns the number of
/// inputs that failed.
fn convert_inputs(inputs: &[PathBuf], args: &Args) -> usize {
    let mut failures = 0;

    for input_path in inputs {
        if args.verbose && !is_stdin(input_path) {
            eprintln!("Processing: {}", input_path.display());
        }

        if let Err(e) = convert_input(input_path, args) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failures += 1;
        }
    }

    failures
}

/// Convert one input and deliver the output to stdout or a file.
fn convert_input(input_path: &Path, args: &Args) -> Result<()> {
    let output = process_input(input_path, args)?;

    if args.print || is_stdin(input_path) {
        print!("{}", output);
        return Ok(());
    }

    let output_path = get_output_path(input_path, args.output.as_ref(), args)?;
    write_output(&output_path, &output)?;
    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Convert a single input and render the requested output.
fn process_input(input_path: &Path, args: &Args) -> Result<String> {
    let content = read_input(input_path)?;
    let format = resolve_format(args.from, input_path, &content);
    log::debug!("Treating {} as {}", input_path.display(), format.as_str());

    match args.emit {
        EmitArg::Markdown => {
            if format != InputFormat::Html {
                anyhow::bail!("--emit markdown needs HTML input");
            }
            let markdown = bridge(args).convert(&content)?;
            Ok(format!("{}\n", markdown))
        }
        EmitArg::Runs => {
            let runs = convert_runs(&content, format, args)?;
            if args.verbose {
                eprintln!("  Produced {} runs", runs.len());
            }
            let formatter = RunFormatter::new().with_style(args.style.into());
            Ok(formatter.format_with_newline(&runs)?)
        }
    }
}

fn convert_runs(content: &str, format: InputFormat, args: &Args) -> Result<Vec<StyledRun>> {
    let runs = match format {
        InputFormat::Markdown => MarkdownConverter::new().convert(content),
        InputFormat::Html if args.via_markdown => {
            let markdown = bridge(args)
                .convert(content)
                .context("Failed to bridge HTML to Markdown")?;
            MarkdownConverter::new().convert(&markdown)
        }
        InputFormat::Html => {
            let converter = if args.quill {
                HtmlConverter::for_quill()
            } else {
                HtmlConverter::new()
            };
            converter.convert(content).context("Failed to convert HTML")?
        }
    };

    Ok(runs)
}

fn bridge(args: &Args) -> MarkdownBridge {
    MarkdownBridge::new().with_normalizer(
        MarkdownNormalizer::new().with_preserve_line_breaks(args.preserve_line_breaks),
    )
}

/// Pick the input notation: explicit flag, then extension, then content.
fn resolve_format(from: FromArg, input_path: &Path, content: &str) -> InputFormat {
    match from {
        FromArg::Markdown => InputFormat::Markdown,
        FromArg::Html => InputFormat::Html,
        FromArg::Auto => input_path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(InputFormat::from_extension)
            .unwrap_or_else(|| InputFormat::detect(content)),
    }
}

fn read_input(input_path: &Path) -> Result<String> {
    let mut content = String::new();
    if is_stdin(input_path) {
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
    } else {
        File::open(input_path)
            .with_context(|| format!("Failed to open {}", input_path.display()))?
            .read_to_string(&mut content)
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
    }
    Ok(content)
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, args: &Args) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let extension = match (args.emit, args.style) {
        (EmitArg::Markdown, _) => "md",
        (EmitArg::Runs, StyleArg::Json) => "json",
        (EmitArg::Runs, StyleArg::Literal) => "txt",
    };
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    if output_path == input_path {
        anyhow::bail!("Refusing to overwrite input {}", input_path.display());
    }

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
