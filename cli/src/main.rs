//! wordhtml CLI - HTML export tool for JSON document models

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use wordhtml::render::to_json;
use wordhtml::{load_document, Document, HtmlOptions, HtmlWriter, JsonFormat, RenderStats};

#[derive(Parser)]
#[command(name = "wordhtml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export word-processing documents to standalone HTML", long_about = None)]
struct Cli {
    /// Input document (JSON model)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Render for a PDF pipeline (images become placeholders)
    #[arg(long)]
    pdf: bool,

    /// Omit the generator comment
    #[arg(long)]
    no_comment: bool,

    /// Title used when the document has none
    #[arg(long, env = "WORDHTML_DEFAULT_TITLE")]
    default_title: Option<String>,

    /// Directory for temporary archive extraction
    #[arg(long, value_name = "DIR", env = "WORDHTML_TEMP_DIR")]
    temp_dir: Option<PathBuf>,
}

impl RenderArgs {
    fn options(&self) -> HtmlOptions {
        let mut options = HtmlOptions::new()
            .with_pdf_target(self.pdf)
            .with_generator_comment(!self.no_comment);
        if let Some(ref title) = self.default_title {
            options = options.with_default_title(title.clone());
        }
        if let Some(ref dir) = self.temp_dir {
            options = options.with_temp_dir(dir.clone());
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to HTML
    Convert {
        /// Input document (JSON model)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print render statistics
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert many documents in parallel
    Batch {
        /// Input documents (JSON models)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show document information
    Info {
        /// Input document (JSON model)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the normalized document model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            stats,
            render,
        }) => cmd_convert(&input, output.as_deref(), stats, &render.options()),
        Some(Commands::Batch {
            inputs,
            out_dir,
            render,
        }) => cmd_batch(&inputs, &out_dir, &render.options()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let output = cli
                    .output
                    .unwrap_or_else(|| input.with_extension("html"));
                cmd_convert(&input, Some(&output), false, &cli.render.options())
            } else {
                println!("{}", "Usage: wordhtml <FILE> [OUTPUT]".yellow());
                println!("       wordhtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    stats: bool,
    options: &HtmlOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let result = HtmlWriter::new(options.clone())
        .with_document(&doc)
        .render_with_stats()?;

    if let Some(path) = output {
        fs::write(path, &result.content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.content);
    }

    if stats {
        let stats = &result.stats;
        eprintln!();
        eprintln!("{}", "Render Statistics".cyan().bold());
        eprintln!("{}", "─".repeat(40).dimmed());
        eprintln!("{}: {}", "Sections".bold(), stats.section_count);
        eprintln!("{}: {}", "Elements".bold(), stats.element_count);
        eprintln!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
        eprintln!("{}: {}", "Titles".bold(), stats.title_count);
        eprintln!("{}: {}", "Tables".bold(), stats.table_count);
        eprintln!(
            "{}: {} embedded, {} replaced",
            "Images".bold(),
            stats.images_embedded,
            stats.images_replaced
        );
        eprintln!("{}: {}", "Placeholders".bold(), stats.unsupported_count);
        eprintln!("{}: {} bytes", "Output".bold(), result.content_len());
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    out_dir: &Path,
    options: &HtmlOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(out_dir)?;
    log::debug!(
        "Converting {} documents into {}",
        inputs.len(),
        out_dir.display()
    );

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let outcomes: Vec<Option<RenderStats>> = inputs
        .par_iter()
        .map(|input| {
            let target = out_dir.join(output_name(input));
            let outcome = match convert_one(input, &target, options) {
                Ok(stats) => {
                    pb.set_message(input.display().to_string());
                    Some(stats)
                }
                Err(e) => {
                    pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                    None
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Done!");

    let (totals, failed) = summarize(&outcomes);
    println!(
        "\n{} {} converted, {} failed",
        "Done!".green().bold(),
        inputs.len() - failed,
        failed
    );
    println!(
        "{} sections, {} elements, {} images ({} embedded)",
        totals.section_count,
        totals.element_count,
        totals.image_count(),
        totals.images_embedded
    );

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn convert_one(
    input: &Path,
    target: &Path,
    options: &HtmlOptions,
) -> Result<RenderStats, Box<dyn std::error::Error + Send + Sync>> {
    let doc = load_document(input)?;
    let result = HtmlWriter::new(options.clone())
        .with_document(&doc)
        .render_with_stats()?;
    fs::write(target, &result.content)?;
    Ok(result.stats)
}

/// Merge the stats of successful conversions and count the failures.
fn summarize(outcomes: &[Option<RenderStats>]) -> (RenderStats, usize) {
    let mut totals = RenderStats::new();
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            Some(stats) => totals.merge(stats),
            None => failed += 1,
        }
    }
    (totals, failed)
}

fn output_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}.html", stem))
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    if json {
        println!("{}", to_json(&doc, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    for (name, value) in doc.properties.meta_entries() {
        println!("{}: {}", capitalize(name).bold(), value);
    }
    if let Some(ref editor) = doc.properties.last_modified_by {
        println!("{}: {}", "Last Modified By".bold(), editor);
    }
    if let Some(ref created) = doc.properties.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.properties.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    print_content_stats(&doc);

    Ok(())
}

fn print_content_stats(doc: &Document) {
    let text = doc.plain_text();
    let words = text.split_whitespace().count();
    let images = doc
        .sections
        .iter()
        .flat_map(|s| s.elements.iter())
        .filter(|e| e.is_image())
        .count();
    let tables = doc
        .sections
        .iter()
        .flat_map(|s| s.elements.iter())
        .filter(|e| e.is_table())
        .count();

    println!("{}: {}", "Sections".bold(), doc.section_count());
    println!("{}: {}", "Elements".bold(), doc.element_count());
    println!("{}: {}", "Tables".bold(), tables);
    println!("{}: {}", "Images".bold(), images);
    println!("{}: {}", "Named Styles".bold(), doc.styles.len());
    println!("{}: {}", "Words".bold(), words);
    println!(
        "{}: {} {}pt",
        "Default Font".bold(),
        doc.default_font_name,
        doc.default_font_size
    );
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn cmd_version() {
    println!("{} {}", "wordhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word-processing document to HTML export tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/wordhtml".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name(Path::new("docs/report.json")),
            PathBuf::from("report.html")
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("author"), "Author");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_convert_one() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.json");
        let target = dir.path().join("doc.html");
        fs::write(
            &input,
            r#"{"sections": [{"elements": [{"type": "text", "text": "Hi"}]}]}"#,
        )
        .unwrap();

        let stats = convert_one(&input, &target, &HtmlOptions::default()).unwrap();
        let html = fs::read_to_string(&target).unwrap();
        assert!(html.contains("<p>Hi</p>"));
        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.paragraph_count, 1);
    }

    #[test]
    fn test_summarize_merges_successes() {
        let first = RenderStats {
            section_count: 1,
            images_embedded: 2,
            ..Default::default()
        };
        let second = RenderStats {
            section_count: 2,
            images_replaced: 1,
            ..Default::default()
        };

        let (totals, failed) = summarize(&[Some(first), None, Some(second)]);
        assert_eq!(failed, 1);
        assert_eq!(totals.section_count, 3);
        assert_eq!(totals.image_count(), 3);
    }

    #[test]
    fn test_render_args_options() {
        let args = RenderArgs {
            pdf: true,
            no_comment: true,
            default_title: Some("Draft".to_string()),
            temp_dir: None,
        };
        let options = args.options();
        assert!(options.pdf_target);
        assert!(!options.generator_comment);
        assert_eq!(options.default_title, "Draft");
    }
}
