use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_align::config::{parse_threshold, Config};
use resume_align::models::{JdSource, ResumeDocument};
use resume_align::{AlignService, AppState};

#[derive(Debug, Parser)]
#[command(name = "resume-align", version, about = "Match résumés against job descriptions")]
struct Cli {
    /// Overrides SIMILARITY_THRESHOLD for this run.
    #[arg(long, global = true, value_parser = threshold_arg)]
    threshold: Option<f32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the keyword set extracted from a JD.
    Extract {
        #[arg(long)]
        jd: PathBuf,
    },
    /// Score one or more résumés against a JD.
    Match {
        #[arg(long)]
        jd: PathBuf,
        #[arg(long = "resume", required = true, num_args = 1..)]
        resumes: Vec<PathBuf>,
    },
    /// Per-keyword match report for a single résumé.
    Report {
        #[arg(long)]
        jd: PathBuf,
        #[arg(long)]
        resume: PathBuf,
    },
    /// Ask the LLM for improvement suggestions.
    Suggest {
        #[arg(long)]
        jd: PathBuf,
        #[arg(long)]
        resume: PathBuf,
    },
}

fn threshold_arg(raw: &str) -> std::result::Result<f32, String> {
    parse_threshold(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(threshold) = cli.threshold {
        config.similarity_threshold = threshold;
    }

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-align v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::build(&config).context("Failed to initialize")?;
    let service = AlignService::new(state);

    match cli.command {
        Command::Extract { jd } => {
            let keywords = service.extract_keywords(&read_text(&jd)?).await?;
            print_json(&keywords)
        }
        Command::Match { jd, resumes } => {
            let documents = resumes
                .iter()
                .map(|path| resume_document(path))
                .collect::<Result<Vec<_>>>()?;
            let response = service.match_resumes(jd_source(&jd)?, &documents).await?;
            print_json(&response)
        }
        Command::Report { jd, resume } => {
            let report = service.report(jd_source(&jd)?, &read_text(&resume)?).await?;
            print_json(&report)
        }
        Command::Suggest { jd, resume } => {
            let document = resume_document(&resume)?;
            let text = document.text.unwrap_or_default();
            let response = service.suggest(jd_source(&jd)?, &document.id, &text).await?;
            print_json(&response)
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

fn jd_source(path: &Path) -> Result<JdSource> {
    Ok(JdSource::Text {
        jd_text: read_text(path)?,
    })
}

fn resume_document(path: &Path) -> Result<ResumeDocument> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());

    Ok(ResumeDocument {
        id,
        title: None,
        file_name,
        text: Some(read_text(path)?),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
