use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use skillmatch_core::catalog::{default_roles, load_path, write_jsonl};
use skillmatch_core::keywords::{from_resume, DEFAULT_RESUME_KEYWORDS};
use skillmatch_core::settings::{DEFAULT_LOW_CONFIDENCE_THRESHOLD, DEFAULT_TOP_N};
use skillmatch_core::{Engine, RoleRecord, Settings};
use std::fs;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "skillmatch")]
#[command(about = "Match a skills list against a role catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in role catalog as JSONL
    Generate {
        /// Output file
        #[arg(long)]
        output: String,
    },
    /// Build the index and print catalog statistics
    Inspect {
        /// Catalog path (file or directory); built-in dataset when omitted
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Recommend roles for a skills list or a resume
    Recommend {
        #[arg(long)]
        catalog: Option<String>,
        /// Comma-separated skills
        #[arg(long, conflicts_with = "resume")]
        skills: Option<String>,
        /// Plain-text resume; its most frequent words become the skills list
        #[arg(long)]
        resume: Option<String>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
        /// Low-confidence cutoff on the calibrated percentage
        #[arg(long, default_value_t = DEFAULT_LOW_CONFIDENCE_THRESHOLD)]
        threshold: f64,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output } => {
            let roles = default_roles();
            write_jsonl(&output, &roles)?;
            tracing::info!(output = %output, num_roles = roles.len(), "catalog written");
            Ok(())
        }
        Commands::Inspect { catalog } => {
            let engine = Engine::build(roles(catalog.as_deref())?, Settings::default())?;
            let stats = engine.stats();
            println!("roles: {}", stats.dataset_rows);
            println!("vocabulary: {}", stats.vocab_size);
            Ok(())
        }
        Commands::Recommend { catalog, skills, resume, top_n, threshold } => {
            let skills = match (skills, resume) {
                (Some(s), _) => s,
                (None, Some(path)) => {
                    let text = fs::read_to_string(&path).with_context(|| format!("reading resume {path}"))?;
                    from_resume(&text, DEFAULT_RESUME_KEYWORDS)
                }
                (None, None) => bail!("either --skills or --resume is required"),
            };
            let settings = Settings::default().with_low_confidence_threshold(threshold);
            let engine = Engine::build(roles(catalog.as_deref())?, settings)?;
            let response = engine.recommend(&skills, top_n)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

fn roles(catalog: Option<&str>) -> Result<Vec<RoleRecord>> {
    match catalog {
        Some(path) => load_path(path),
        None => Ok(default_roles()),
    }
}
