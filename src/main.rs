//! Paradox CLI
//!
//! Terminal front end for Climate Paradox Kenya:
//! - Browse the dashboard, data, stories, petition and about pages
//! - Share an impact story
//! - Sign the petition

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use paradox::config::{generate_default_config, Config};
use paradox::forms::{FieldChange, FormFlow, Submit, SubmitOutcome};
use paradox::page::{
    self, category_label, load, AboutPage, CategoryFilter, DashboardPage, DataPage, Page,
    PageState, PetitionPage, StoriesPage, StoriesView, DEMANDS, KEY_INSIGHTS, MISSION,
};
use paradox::{adapt, render, Backend, HttpBackend, SignatureDraft, StoryDraft};

#[derive(Parser)]
#[command(name = "paradox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Climate Paradox Kenya from the terminal")]
#[command(long_about = "Kenya emits less than 0.1% of global greenhouse gases yet bears some of the \
heaviest climate impacts.\nBrowse the data, read community stories and sign the petition.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/paradox/config.toml, then ./config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// REST backend base URL, including the /api prefix
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline numbers, featured charts and the impact map
    Dashboard,

    /// Every climate series as a chart
    Data {
        /// Only show one category (e.g. emissions)
        #[arg(short, long)]
        category: Option<String>,

        /// Let the backend filter by category instead of filtering locally
        #[arg(long, requires = "category")]
        server_filter: bool,
    },

    /// Published community stories
    Stories,

    /// Petition totals and recent supporters
    Petition,

    /// Background on the climate paradox
    About,

    /// Share your climate impact story
    ShareStory(ShareArgs),

    /// Sign the petition
    Sign(SignArgs),

    /// Print a default config file
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ShareArgs {
    #[arg(long)]
    title: String,
    /// Story text
    #[arg(long)]
    content: String,
    /// Your name
    #[arg(long)]
    author: String,
    /// Never published
    #[arg(long)]
    email: String,
    /// Town or village
    #[arg(long)]
    location: String,
    #[arg(long)]
    county: String,
    /// drought, floods, agriculture, livelihood, health or displacement
    #[arg(long, default_value = "drought")]
    category: String,
    /// Agree to have the story published
    #[arg(long)]
    consent: bool,
}

#[derive(Args)]
struct SignArgs {
    /// Your name (ignored with --anonymous)
    #[arg(long, default_value = "")]
    name: String,
    /// Never published
    #[arg(long)]
    email: String,
    /// Town or village
    #[arg(long)]
    location: String,
    #[arg(long)]
    county: String,
    /// Why you are signing
    #[arg(long, default_value = "")]
    comment: String,
    /// Hide your name from the supporters list
    #[arg(long)]
    anonymous: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Cannot load config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    paradox::logging::init(&config.logging, "");

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Cannot write {:?}", path))?;
                println!("Wrote default config to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let backend = HttpBackend::from_config(&config.api)?;
    tracing::debug!(base_url = backend.base_url(), "Using backend");

    match cli.command {
        Commands::Dashboard => show_dashboard(&backend, cli.format).await,
        Commands::Data {
            category,
            server_filter,
        } => show_data(&backend, cli.format, category, server_filter).await,
        Commands::Stories => show_stories(&backend, cli.format).await,
        Commands::Petition => show_petition(&backend, cli.format).await,
        Commands::About => show_about(&backend, cli.format).await,
        Commands::ShareStory(args) => share_story(&backend, args).await,
        Commands::Sign(args) => sign_petition(&backend, args).await,
        Commands::Config { .. } => Ok(()),
    }
}

/// Load a page or fail with the message the page would show
async fn fetch_view<P: Page>(page: P, backend: &dyn Backend) -> anyhow::Result<P::View> {
    match load(&page, backend).await {
        PageState::Ready(view) => Ok(view),
        PageState::Failed(message) => bail!("{}", message),
        PageState::Loading => bail!("The {} page did not finish loading", P::NAME),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn show_dashboard(backend: &dyn Backend, format: OutputFormat) -> anyhow::Result<()> {
    let view = fetch_view(DashboardPage, backend).await?;
    if format == OutputFormat::Json {
        return print_json(&view);
    }

    print!("{}", render::heading("Climate Paradox Kenya"));
    print!("{}", render::stat_grid(&view.stat_cards()));
    println!();

    for chart in view.featured_charts() {
        print!("{}", render::chart(&chart));
        println!();
    }

    print!("{}", render::heading("Climate Impact Map"));
    for site in view.impact_sites() {
        println!("{}", render::impact_site(site));
    }
    Ok(())
}

async fn show_data(
    backend: &dyn Backend,
    format: OutputFormat,
    category: Option<String>,
    server_filter: bool,
) -> anyhow::Result<()> {
    let filter = CategoryFilter::from(category);

    let series = if server_filter {
        backend
            .fetch_climate_data_by_category(filter.as_str())
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?
    } else {
        let view = fetch_view(DataPage, backend).await?;
        view.filtered(&filter).cloned().collect()
    };

    if format == OutputFormat::Json {
        return print_json(&series);
    }

    let title = match &filter {
        CategoryFilter::All => "Climate Data".to_string(),
        CategoryFilter::Only(c) => format!("Climate Data: {}", category_label(c)),
    };
    print!("{}", render::heading(&title));

    if series.is_empty() {
        println!("{}", page::data::EMPTY_TITLE);
        println!("{}", page::data::EMPTY_HINT);
    }
    for s in &series {
        print!("{}", render::chart(&adapt(s)));
        if !s.source.is_empty() {
            println!("  Source: {}", s.source);
        }
        println!();
    }

    print!("{}", render::heading("Key Insights"));
    for block in KEY_INSIGHTS.iter() {
        print!("{}", render::content_block(block));
    }
    Ok(())
}

async fn show_stories(backend: &dyn Backend, format: OutputFormat) -> anyhow::Result<()> {
    let view = fetch_view(StoriesPage, backend).await?;
    if format == OutputFormat::Json {
        return print_json(&view);
    }

    print!("{}", render::heading("Community Stories"));
    print!("{}", render::stat_grid(&view.stat_cards()));
    println!();

    if view.stories.is_empty() {
        println!("{}", page::stories::EMPTY_TITLE);
        println!("{}", page::stories::EMPTY_HINT);
    }
    for story in &view.stories {
        print!("{}", render::story(story, StoriesView::EXCERPT_CHARS));
        println!();
    }
    Ok(())
}

async fn show_petition(backend: &dyn Backend, format: OutputFormat) -> anyhow::Result<()> {
    let view = fetch_view(PetitionPage, backend).await?;
    if format == OutputFormat::Json {
        return print_json(&view);
    }

    print!("{}", render::heading("Climate Justice Petition"));
    print!("{}", render::stat_grid(&view.stat_cards()));
    println!("{}", render::goal_progress(&view.stats));
    println!();

    for block in DEMANDS.iter() {
        print!("{}", render::content_block(block));
    }
    println!();

    print!("{}", render::heading("Recent Supporters"));
    if view.signatures.is_empty() {
        println!("{}", page::petition::EMPTY_SUPPORTERS);
    }
    for signature in &view.signatures {
        println!("{}", render::supporter(signature));
    }
    Ok(())
}

async fn show_about(backend: &dyn Backend, format: OutputFormat) -> anyhow::Result<()> {
    let view = fetch_view(AboutPage, backend).await?;
    if format == OutputFormat::Json {
        return print_json(&view);
    }

    print!("{}", render::heading(view.title));
    println!("{}", view.tagline);
    println!();
    for block in view.sections.iter().chain(MISSION.iter()) {
        print!("{}", render::content_block(block));
        println!();
    }
    Ok(())
}

/// Run a filled draft through the submit flow, printing the confirmation
async fn submit_draft<D: Submit>(
    backend: &dyn Backend,
    changes: Vec<FieldChange>,
    confirmation: (&str, &str),
) -> anyhow::Result<D::Created> {
    let mut flow = FormFlow::<D>::new();
    for change in &changes {
        flow.change(change)?;
    }

    match flow.submit(backend).await {
        SubmitOutcome::Created(created) => {
            println!("{}", confirmation.0);
            println!("{}", confirmation.1);
            Ok(created)
        }
        SubmitOutcome::Rejected(e) => bail!("{}", e),
        SubmitOutcome::Failed(message) => bail!("{}", message),
    }
}

async fn share_story(backend: &dyn Backend, args: ShareArgs) -> anyhow::Result<()> {
    let mut changes: Vec<FieldChange> = [
        ("title", args.title),
        ("content", args.content),
        ("author", args.author),
        ("email", args.email),
        ("location", args.location),
        ("county", args.county),
        ("category", args.category),
    ]
    .into_iter()
    .map(|(name, value)| FieldChange::text(name, value))
    .collect();
    changes.push(FieldChange::checkbox("consent", args.consent));

    submit_draft::<StoryDraft>(
        backend,
        changes,
        (page::stories::SUBMITTED_TITLE, page::stories::SUBMITTED_BODY),
    )
    .await?;

    // Refetch so the counts include the new story
    if let PageState::Ready(view) = load(&StoriesPage, backend).await {
        println!();
        print!("{}", render::stat_grid(&view.stat_cards()));
    }
    Ok(())
}

async fn sign_petition(backend: &dyn Backend, args: SignArgs) -> anyhow::Result<()> {
    let mut changes: Vec<FieldChange> = [
        ("name", args.name),
        ("email", args.email),
        ("location", args.location),
        ("county", args.county),
        ("comment", args.comment),
    ]
    .into_iter()
    .map(|(name, value)| FieldChange::text(name, value))
    .collect();
    changes.push(FieldChange::checkbox("isAnonymous", args.anonymous));

    let signature = submit_draft::<SignatureDraft>(
        backend,
        changes,
        (page::petition::SUBMITTED_TITLE, page::petition::SUBMITTED_BODY),
    )
    .await?;
    tracing::debug!(id = %signature.id, "Signature recorded");

    if let PageState::Ready(view) = load(&PetitionPage, backend).await {
        println!();
        print!("{}", render::stat_grid(&view.stat_cards()));
        println!("{}", render::goal_progress(&view.stats));
    }
    Ok(())
}

