//! Name Forge - procedural fantasy and isekai character name generation
//!
//! Generates characters, class / element themed names or category batches
//! and prints them as JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{CommandFactory, FromArgMatches, Parser};
use name_forge::{
    normalize_gender, normalize_style, styles::class, AnimeFlavor, BatchCategoryResult,
    CharacterDetail, ElementKey, GeneratorConfig, NameForgeError, NameGenerator,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "name-forge",
    version,
    about = "Fantasy & isekai character name generator"
)]
struct Cli {
    /// Generate isekai names, western names and noble families per category
    #[arg(long)]
    batch: bool,

    /// Number of names (per category with --batch)
    #[arg(short, long)]
    count: Option<usize>,

    /// male or female
    #[arg(short, long)]
    gender: Option<String>,

    /// isekai, western, composed, class, elemental, noble or mixed
    #[arg(short, long)]
    style: Option<String>,

    /// Generate names for one character class (e.g. 마법사, 기사)
    #[arg(long = "class", value_name = "CLASS")]
    character_class: Option<String>,

    /// Generate names for one element, English or Korean (e.g. fire, 불)
    #[arg(long)]
    element: Option<String>,

    /// Generate isekai names of one sub-genre: isekai, fantasy, school, magic
    #[arg(long)]
    flavor: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

/// JSON document written by the CLI
#[derive(Debug, Serialize)]
struct GenerationReport {
    generated_at: DateTime<Utc>,
    mode: &'static str,
    results: ReportResults,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ReportResults {
    Characters(Vec<CharacterDetail>),
    Categories(BatchCategoryResult),
    Names(Vec<String>),
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = Cli::command().after_help(help_footer()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    if let Err(e) = run(cli) {
        match e.downcast_ref::<NameForgeError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Known classes, elements and environment variables for `--help`
fn help_footer() -> String {
    let classes = class::known_classes().collect::<Vec<_>>().join(", ");
    let elements = ElementKey::ALL
        .iter()
        .map(|element| format!("{} ({})", element, element.korean_name()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "CLASSES:\n    {}\n\n\
         ELEMENTS:\n    {}\n\n\
         ENVIRONMENT VARIABLES:\n\
         \x20   NAME_FORGE_DEFAULT_STYLE   Style used when --style is omitted\n\
         \x20   NAME_FORGE_DEFAULT_GENDER  Gender used when --gender is omitted\n\
         \x20   NAME_FORGE_DEFAULT_COUNT   Count used when --count is omitted\n\
         \x20   NAME_FORGE_MAX_BATCH_SIZE  Upper bound for --count (default: 50)",
        classes, elements
    )
}

fn run(cli: Cli) -> Result<()> {
    name_forge::init()?;
    let config = GeneratorConfig::from_env().context("failed to load configuration")?;

    let generator = match cli.seed {
        Some(seed) => NameGenerator::with_seed(config, seed)?,
        None => NameGenerator::new(config)?,
    };

    let report = build_report(&cli, &generator)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(NameForgeError::from)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| {
                NameForgeError::io(e.to_string(), Some(path.display().to_string()))
            })?;
            eprintln!("💾 Results saved to '{}'", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn build_report(cli: &Cli, generator: &NameGenerator) -> name_forge::Result<GenerationReport> {
    let config = generator.config();
    let gender = cli
        .gender
        .as_deref()
        .map_or(config.default_gender, normalize_gender);

    let (mode, results) = if cli.batch {
        let count = cli.count.unwrap_or(config.default_batch_per_category);
        let batch = generator.batch_generate_by_categories(count)?;
        ("batch", ReportResults::Categories(batch))
    } else if let Some(character_class) = &cli.character_class {
        let count = cli.count.unwrap_or(config.default_count);
        let details = generator.generate_class_characters(count, character_class, gender)?;
        ("class", ReportResults::Characters(details))
    } else if let Some(element) = &cli.element {
        let count = cli.count.unwrap_or(config.default_count);
        let details = generator.generate_element_characters(count, element, gender)?;
        ("element", ReportResults::Characters(details))
    } else if let Some(flavor) = &cli.flavor {
        let count = cli.count.unwrap_or(config.default_count);
        let names = generator.generate_flavored_names(count, AnimeFlavor::parse(flavor), gender)?;
        ("flavor", ReportResults::Names(names))
    } else {
        let count = cli.count.unwrap_or(config.default_count);
        let style = cli
            .style
            .as_deref()
            .map_or(config.default_style, normalize_style);
        let details = generator.generate_multiple_names(count, gender, style)?;
        ("characters", ReportResults::Characters(details))
    };

    Ok(GenerationReport {
        generated_at: Utc::now(),
        mode,
        results,
    })
}
