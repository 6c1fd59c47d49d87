//! pitchmatch command-line entrypoint.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pitchmatch::catalog::{CatalogSync, JsonInvestorSource};
use pitchmatch::config::Config;
use pitchmatch::constants::DEFAULT_RESULT_COUNT;
use pitchmatch::embedding::{EmbedderBackend, HttpEmbedder, StubEmbedder};
use pitchmatch::matching::{Recommender, StartupQuery};
use pitchmatch::scoring::{AnalysisSource, ExtractedFacts, ScoringFramework, score_pitch};
use pitchmatch::vectordb::QdrantIndex;

#[derive(Debug, Parser)]
#[command(name = "pitchmatch", version, about = "Match startups to investors and score pitches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Embed investor theses and upsert them into the vector index.
    Sync {
        /// JSON file of the form `{"investors": [...]}`.
        #[arg(long)]
        investors: PathBuf,
    },
    /// Recommend investors for a startup.
    Recommend {
        /// JSON file holding one startup query.
        #[arg(long)]
        startup: PathBuf,
        #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
        count: usize,
    },
    /// Score a pitch against a rubric framework.
    Score {
        /// JSON array of framework rows.
        #[arg(long)]
        framework: PathBuf,
        /// JSON analysis document (`{"questions": [...]}`).
        #[arg(long)]
        analysis: PathBuf,
        /// JSON extracted facts.
        #[arg(long)]
        extraction: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    config.validate()?;

    match cli.command {
        Command::Sync { investors } => run_sync(&config, investors).await,
        Command::Recommend { startup, count } => run_recommend(&config, startup, count).await,
        Command::Score {
            framework,
            analysis,
            extraction,
        } => run_score(&config, framework, analysis, extraction),
    }
}

fn build_embedder(config: &Config) -> anyhow::Result<EmbedderBackend> {
    let embedder = match &config.embedding_url {
        Some(url) => EmbedderBackend::Http(HttpEmbedder::new(
            url,
            &config.embedding_model,
            config.embedding_api_key.as_deref(),
            config.embedding_dim,
        )?),
        None => EmbedderBackend::Stub(StubEmbedder::new(config.embedding_dim)?),
    };

    if embedder.is_stub() {
        tracing::warn!("No PITCHMATCH_EMBEDDING_URL configured, running embedder in stub mode");
    }
    Ok(embedder)
}

async fn connect_index(config: &Config) -> anyhow::Result<QdrantIndex> {
    let index = QdrantIndex::new(&config.qdrant_url)?;
    index.health_check().await?;
    tracing::info!(url = %index.url(), collection = %config.collection_name, "Connected to Qdrant");
    Ok(index)
}

async fn run_sync(config: &Config, investors: PathBuf) -> anyhow::Result<()> {
    let embedder = Arc::new(build_embedder(config)?);
    let index = Arc::new(connect_index(config).await?);

    let sync = CatalogSync::new(embedder, index, config.collection_name.clone())
        .with_concurrency(config.sync_concurrency);
    sync.ensure_collection().await?;

    let report = sync.sync_from(&JsonInvestorSource::new(&investors)).await?;

    println!(
        "inserted={} updated={} unchanged={} rejected={}",
        report.inserted,
        report.updated,
        report.unchanged,
        report.rejected.len()
    );
    for (id, reason) in &report.rejected {
        println!("  rejected {id}: {reason}");
    }

    Ok(())
}

async fn run_recommend(config: &Config, startup: PathBuf, count: usize) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&startup)
        .with_context(|| format!("failed to read {}", startup.display()))?;
    let query: StartupQuery = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", startup.display()))?;

    let embedder = Arc::new(build_embedder(config)?);
    let index = Arc::new(connect_index(config).await?);

    let recommender = Recommender::new(embedder, index, config.collection_name.clone())
        .with_overfetch_factor(config.overfetch_factor);
    let matches = recommender.recommend(&query, count).await?;

    if matches.is_empty() {
        println!("No matching investors found.");
        return Ok(());
    }

    for (rank, m) in matches.iter().enumerate() {
        let investor = &m.investor;
        println!(
            "{}. {} ({}) similarity={:.4}",
            rank + 1,
            investor.name,
            investor.id,
            m.similarity
        );
        println!("   stages: {}", investor.stage_focus.join(", "));
        if let Some(ticket) = investor.ticket {
            println!("   ticket: ${:.0} - ${:.0}", ticket.min_usd, ticket.max_usd);
        }
        if !investor.contact_email.is_empty() {
            println!("   contact: {}", investor.contact_email);
        }
    }

    Ok(())
}

fn run_score(
    config: &Config,
    framework: PathBuf,
    analysis: PathBuf,
    extraction: PathBuf,
) -> anyhow::Result<()> {
    let read = |path: &PathBuf| {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    };

    let framework = ScoringFramework::from_json_str(&read(&framework)?, config.strict_framework)?;
    let analysis = AnalysisSource::from_json_str(&read(&analysis)?)?;
    let facts = ExtractedFacts::from_json_str(&read(&extraction)?)?;

    let report = score_pitch(&framework, &analysis, &facts);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
