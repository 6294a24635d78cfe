mod browse;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rdel_core::{CardSettings, CoordinationContext, DirectoryView, LocationId};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rdel")]
#[command(about = "Reigate Delivers directory: search local businesses that deliver")]
struct Cli {
    /// Locations file to load instead of `RDEL_LOCATIONS_PATH`.
    #[arg(long, global = true)]
    locations: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every listing, or those matching a query.
    List {
        /// Search terms; all must match.
        query: Vec<String>,
        /// Expand each card's delivery hours.
        #[arg(long)]
        expand: bool,
    },
    /// Show the delivery-hours summary and raw intervals for one listing.
    Hours { id: String },
    /// Show a listing's safety tips.
    Tips { id: String },
    /// Interactive search: each line updates the query.
    Browse,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = rdel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let path = cli
        .locations
        .clone()
        .unwrap_or_else(|| config.locations_path.clone());
    let (store, report) = rdel_core::load_locations(&path)
        .with_context(|| format!("failed to load locations from {}", path.display()))?;
    if !report.is_clean() {
        tracing::warn!(
            skipped = report.skipped.len(),
            loaded = report.loaded,
            "some listings were skipped; see earlier warnings"
        );
    }

    // One context per session, shared by every card and the modal renderer.
    let context = CoordinationContext::new();
    let mut view = DirectoryView::new(&store, &context, CardSettings::from(&config));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::List { query, expand }) => {
            view.set_query(&query.join(" "));
            if expand {
                let ids: Vec<LocationId> = view.visible().iter().map(|e| e.id.clone()).collect();
                for id in &ids {
                    view.toggle_hours(id);
                }
            }
            render::write_directory(&mut out, &view)?;
        }
        Some(Commands::Hours { id }) => {
            let id = LocationId::new(id);
            let entry = store
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("listing '{id}' not found"))?;
            render::write_hours(&mut out, entry, view.settings())?;
        }
        Some(Commands::Tips { id }) => {
            let id = LocationId::new(id);
            if store.get(&id).is_none() {
                anyhow::bail!("listing '{id}' not found");
            }
            if view.show_safety_tips(&id) {
                render::write_modal(&mut out, &context.current_modal())?;
                view.close_modal();
            } else {
                writeln!(out, "No safety tips published for listing {id}.")?;
            }
        }
        Some(Commands::Browse) => {
            let stdin = io::stdin();
            browse::run(&mut view, stdin.lock(), &mut out)?;
        }
        None => render::write_directory(&mut out, &view)?,
    }

    out.flush()?;
    Ok(())
}
