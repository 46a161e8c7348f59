use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use panel_catalog::{Catalog, Category, Entity};
use panel_engine::{
    panel_stats, recommend_panels_for_phase, PanelEngine, PanelProfile, PanelRequest, PanelStats,
    PanelType, PhaseRecommendation, ScoredCandidate, ThreePanelTeam,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "panel")]
#[command(about = "Assemble expert panels from a persona catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Bundled scoring profile (default, topic-focus)
    #[arg(long, global = true, env = "PANEL_PROFILE", default_value = "default")]
    profile: String,

    /// Profile file (JSON or TOML) layered over the default profile
    #[arg(long, global = true)]
    profile_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a single panel
    Assemble(AssembleArgs),

    /// Compose Blue, Left-Field and Red Team panels with no shared members
    Team(TeamArgs),

    /// Show the panel memberships of one entity
    Classify(ClassifyArgs),

    /// Per-panel counts and average scores (primary panel only)
    Stats(CatalogArgs),

    /// Panels recommended for a workflow phase
    Phase(PhaseArgs),
}

#[derive(Args)]
struct CatalogArgs {
    /// Catalog file (JSON array or {"entities": [...]})
    #[arg(long)]
    catalog: PathBuf,
}

#[derive(Args)]
struct AssembleArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Panel type: blue, left_field, red_team
    #[arg(long)]
    panel_type: String,

    /// Topic biasing the ranking
    #[arg(long, default_value = "")]
    topic: String,

    /// Panel size; zero or negative yields an empty panel
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    size: i64,

    /// Category earning the required-category boost (repeatable)
    #[arg(long = "require")]
    required: Vec<String>,

    /// Entity id barred from selection (repeatable)
    #[arg(long = "exclude")]
    excluded: Vec<String>,

    /// Include the score of every member
    #[arg(long)]
    explain: bool,
}

#[derive(Args)]
struct TeamArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[arg(long, default_value = "")]
    topic: String,

    /// Blue Team size; the other panels get half of it (at least two)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    team_size: i64,
}

#[derive(Args)]
struct ClassifyArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Entity id
    #[arg(long)]
    id: String,
}

#[derive(Args)]
struct PhaseArgs {
    /// Workflow phase number (1-7)
    #[arg(allow_negative_numbers = true)]
    phase: i64,
}

#[derive(Serialize)]
struct AssembleOutput<'a> {
    panel_type: PanelType,
    topic: String,
    size: usize,
    members: Vec<&'a Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<MemberScore<'a>>>,
}

#[derive(Serialize)]
struct MemberScore<'a> {
    id: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct TeamOutput<'a> {
    topic: String,
    team_size: usize,
    #[serde(flatten)]
    team: ThreePanelTeam<'a>,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    id: &'a str,
    category: Category,
    primary: PanelType,
    panel_types: Vec<PanelType>,
}

#[derive(Serialize)]
struct PhaseOutput {
    phase: i64,
    #[serde(flatten)]
    recommendation: PhaseRecommendation,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let profile = load_profile(cli)?;

    match &cli.command {
        Commands::Assemble(args) => {
            let catalog = load_catalog(&args.catalog.catalog)?;
            let engine = PanelEngine::new(&catalog, &profile);
            let panel_type: PanelType = args.panel_type.parse()?;
            let required = args
                .required
                .iter()
                .map(|name| name.parse::<Category>())
                .collect::<panel_catalog::Result<Vec<_>>>()?;
            let size = normalize_size(args.size);

            let request = PanelRequest::new(args.topic.clone(), panel_type)
                .size(size)
                .required_categories(required)
                .exclude_ids(args.excluded.iter().cloned());
            let scored = engine.assemble_scored(&request);

            let output = AssembleOutput {
                panel_type,
                topic: args.topic.clone(),
                size,
                members: scored.iter().map(|c| c.entity).collect(),
                scores: args.explain.then(|| member_scores(&scored)),
            };
            print_json(cli, &output)
        }
        Commands::Team(args) => {
            let catalog = load_catalog(&args.catalog.catalog)?;
            let engine = PanelEngine::new(&catalog, &profile);
            let team_size = normalize_size(args.team_size);
            let output = TeamOutput {
                topic: args.topic.clone(),
                team_size,
                team: engine.compose_three_panel_team(&args.topic, team_size),
            };
            print_json(cli, &output)
        }
        Commands::Classify(args) => {
            let catalog = load_catalog(&args.catalog.catalog)?;
            let engine = PanelEngine::new(&catalog, &profile);
            let entity = catalog
                .get(&args.id)
                .with_context(|| format!("Entity '{}' not found in catalog", args.id))?;
            let output = ClassifyOutput {
                id: &entity.id,
                category: entity.category,
                primary: engine.primary_panel_type(entity),
                panel_types: engine.all_panel_types(entity),
            };
            print_json(cli, &output)
        }
        Commands::Stats(args) => {
            let catalog = load_catalog(&args.catalog)?;
            let stats: BTreeMap<PanelType, PanelStats> = panel_stats(&catalog);
            print_json(cli, &stats)
        }
        Commands::Phase(args) => {
            let output = PhaseOutput {
                phase: args.phase,
                recommendation: recommend_panels_for_phase(args.phase),
            };
            print_json(cli, &output)
        }
    }
}

fn load_profile(cli: &Cli) -> Result<PanelProfile> {
    match &cli.profile_file {
        Some(path) => {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("custom");
            PanelProfile::from_file(name, path)
        }
        None => Ok(PanelProfile::named(&cli.profile)?),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_file(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

/// Negative sizes mean "nothing requested"
fn normalize_size(size: i64) -> usize {
    usize::try_from(size).unwrap_or(0)
}

fn member_scores<'a>(scored: &[ScoredCandidate<'a>]) -> Vec<MemberScore<'a>> {
    scored
        .iter()
        .map(|c| MemberScore {
            id: &c.entity.id,
            score: c.score,
        })
        .collect()
}

fn print_json<T: Serialize>(cli: &Cli, value: &T) -> Result<()> {
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
