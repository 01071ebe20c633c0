use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use seo_scorecard::{AnalysisReport, Document, Language};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seo-scorecard",
    about = "Score content documents against SEO heuristics",
    version
)]
struct Cli {
    /// JSON document files to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Language hint for section-title vocabulary (auto, en, fa, fa-IR, ...)
    #[arg(long, default_value = "auto")]
    lang: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log rule evaluation to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn render_text(report: &AnalysisReport) -> String {
    let mut out = format!("SEO Score: {}/100\n", report.score);
    for check in &report.checks {
        let mark = if check.passed { '\u{2713}' } else { '\u{2717}' };
        out.push_str(&format!("[{mark}] {}: {}\n", check.title, check.message));
    }
    if !report.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for suggestion in &report.suggestions {
            out.push_str(&format!("  \u{2022} {suggestion}\n"));
        }
    }
    out
}

fn print_report(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => print!("{}", render_text(report)),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let language = Language::from_tag(&cli.lang);

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let document = Document::from_json(&input).context("stdin")?;
        print_report(&seo_scorecard::analyze(&document, language), cli.format)?;
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {path}"))?;
            let document = Document::from_json(&text).with_context(|| path.clone())?;
            print_report(&seo_scorecard::analyze(&document, language), cli.format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_scorecard::Section;

    #[test]
    fn text_lists_checks_then_suggestions() {
        let report = seo_scorecard::analyze(&Document::default(), Language::Auto);
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "SEO Score: 15/100");
        assert_eq!(lines[1], "[\u{2717}] Content Length: 0 words (minimum: 300, ideal: 1000)");
        assert_eq!(lines[4], "[\u{2713}] Keyword Density: Keywords are well distributed");
        assert_eq!(lines[7], "[\u{2717}] Reading Time: ~0 minutes (ideal: 3-15 minutes)");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Suggestions:");
        assert_eq!(
            lines[10],
            "  \u{2022} Add at least 300 more words to meet minimum length."
        );
        assert_eq!(lines.len(), 10 + report.suggestions.len());
    }

    #[test]
    fn text_omits_empty_suggestions() {
        let filler = vec!["word"; 500].join(" ");
        let body = format!("rust seo cache rust seo cache rust seo cache {filler}");
        let document = Document {
            topic: String::new(),
            sections: vec![
                Section::new("Intro", ""),
                Section::new("Body", body),
                Section::new("Conclusion", ""),
            ],
            meta_description: "m".repeat(150),
            keywords: vec!["rust".into(), "seo".into(), "cache".into()],
            seo_tags: vec!["a".into(), "b".into(), "c".into()],
        };
        let text = render_text(&seo_scorecard::analyze(&document, Language::English));
        assert!(text.starts_with("SEO Score: 100/100\n"));
        assert!(!text.contains("Suggestions:"));
        assert_eq!(text.lines().count(), 8);
    }
}
