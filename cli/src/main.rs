//! homework CLI - weekly spiritual homework generator

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use spiritual_homework::{
    render, DocumentStats, Error, JsonFormat, OutputFormat, RenderOptions, Worksheet,
    OUTPUT_FILE_NAME,
};

#[derive(Parser)]
#[command(name = "homework")]
#[command(version)]
#[command(about = "Generate the weekly spiritual homework worksheet as a Word document", long_about = None)]
struct Cli {
    /// Output file (defaults to the worksheet name in the current directory)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "docx")]
    format: Format,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the worksheet to stdout
    Preview {
        /// Preview format
        #[arg(long, value_enum, default_value = "markdown")]
        format: PreviewFormat,

        /// Include YAML frontmatter (Markdown only)
        #[arg(short, long)]
        frontmatter: bool,
    },

    /// Show worksheet statistics
    Info,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Word document
    Docx,
    /// Markdown
    Markdown,
    /// Plain text
    Text,
    /// JSON structure
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Docx => OutputFormat::Docx,
            Format::Markdown => OutputFormat::Markdown,
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PreviewFormat {
    /// Markdown
    Markdown,
    /// Plain text
    Text,
    /// JSON structure
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Preview {
            format,
            frontmatter,
        }) => cmd_preview(format, frontmatter),
        Some(Commands::Info) => cmd_info(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_generate(cli.output.as_deref(), cli.format.into()),
    };

    // Every outcome is reported on the console; the exit status stays 0.
    if let Some(message) = report(&result) {
        if result.as_ref().is_err_and(Error::is_missing_dependency) {
            println!("{}", message.yellow());
        } else {
            println!("{}", message.red());
        }
    }
}

/// Console message for the outcome of a command, if any.
fn report(result: &spiritual_homework::Result<()>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(Error::MissingDependency { library, install }) => {
            Some(format!("تحتاج إلى تثبيت مكتبة {}:\n{}", library, install))
        }
        Err(e) => Some(format!("حدث خطأ: {}", e)),
    }
}

/// Console message after a successful save.
fn saved_message(format: OutputFormat, path: &Path) -> String {
    match format {
        OutputFormat::Docx => format!("تم إنشاء ملف Word بنجاح: {}", path.display()),
        _ => format!("تم حفظ الملف بنجاح: {}", path.display()),
    }
}

fn default_output(format: OutputFormat) -> PathBuf {
    let path = PathBuf::from(OUTPUT_FILE_NAME);
    if format == OutputFormat::Docx {
        path
    } else {
        path.with_extension(format.extension())
    }
}

fn cmd_generate(output: Option<&Path>, format: OutputFormat) -> spiritual_homework::Result<()> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(format));
    log::debug!("generating {} to {}", format.name(), path.display());

    let saved = Worksheet::new().with_format(format).save(&path)?;

    println!("{}", saved_message(format, &saved).green());

    Ok(())
}

fn cmd_preview(format: PreviewFormat, frontmatter: bool) -> spiritual_homework::Result<()> {
    let doc = spiritual_homework::build();
    let options = RenderOptions::new().with_frontmatter(frontmatter);

    let output = match format {
        PreviewFormat::Markdown => render::to_markdown(&doc, &options)?,
        PreviewFormat::Text => render::to_text(&doc, &options)?,
        PreviewFormat::Json => render::to_json(&doc, JsonFormat::Pretty)?,
    };

    println!("{}", output);
    Ok(())
}

fn cmd_info() -> spiritual_homework::Result<()> {
    let doc = spiritual_homework::build();
    let stats = DocumentStats::from_document(&doc);

    println!("{}", "Worksheet Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Output".bold(), OUTPUT_FILE_NAME);
    println!(
        "{}: {} {}pt",
        "Font".bold(),
        doc.defaults().font_family,
        doc.defaults().font_size
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), doc.len());
    for level in 0..=4u8 {
        println!(
            "{}: {}",
            format!("Level {} headings", level).bold(),
            stats.headings_at(level)
        );
    }
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Separators".bold(), stats.rule_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "homework".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Weekly spiritual homework generator");
    println!(
        "DOCX support: {}",
        if cfg!(feature = "docx") { "yes" } else { "no" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_success_is_silent() {
        assert_eq!(report(&Ok(())), None);
    }

    #[test]
    fn test_report_missing_dependency() {
        let result = Err(Error::missing_dependency("zip", "cargo install x --features docx"));
        assert_eq!(
            report(&result).unwrap(),
            "تحتاج إلى تثبيت مكتبة zip:\ncargo install x --features docx"
        );
    }

    #[test]
    fn test_report_other_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let message = report(&Err(Error::Io(io))).unwrap();
        assert!(message.starts_with("حدث خطأ: "));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_saved_message() {
        let path = Path::new("out.docx");
        assert_eq!(
            saved_message(OutputFormat::Docx, path),
            "تم إنشاء ملف Word بنجاح: out.docx"
        );
        assert_eq!(
            saved_message(OutputFormat::Text, Path::new("out.txt")),
            "تم حفظ الملف بنجاح: out.txt"
        );
    }
}
