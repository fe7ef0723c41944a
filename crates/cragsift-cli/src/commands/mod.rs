use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use cragsift_core::{AppConfig, JsonCorpusSource, RouteFinder};

use crate::cli::{Cli, Commands};

mod handlers;
mod support;
mod validation;


pub(crate) use support::report_error;

use self::handlers::{handle_areas, handle_grade, handle_routes, handle_search, handle_tags};
use self::validation::validate_command_preflight;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    validate_command_preflight(&cli.command, &config)?;

    if let Commands::Grade(args) = &cli.command {
        return handle_grade(&config, &args.command);
    }

    let data = resolve_data_path(cli.data, &config)?;
    tracing::debug!(
        operation = cli.command.operation(),
        data = %data.display(),
        scale = %config.grade_scale,
        "opening corpus"
    );
    let finder = RouteFinder::open(&JsonCorpusSource::new(&data), config)
        .with_context(|| format!("failed to load corpus from {}", data.display()))?;
    run_with_finder(&finder, cli.command)
}

fn resolve_data_path(flag: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    flag.or_else(|| config.data_path.clone()).ok_or_else(|| {
        anyhow!("no corpus path: pass --data, set CRAGSIFT_DATA, or set `data` in the config file")
    })
}

fn run_with_finder(finder: &RouteFinder, command: Commands) -> Result<()> {
    match command {
        Commands::Routes(args) => handle_routes(finder, &args),
        Commands::Search(args) => handle_search(finder, &args.query),
        Commands::Areas(args) => handle_areas(finder, args.under.as_ref()),
        Commands::Tags => handle_tags(finder),
        Commands::Grade(args) => handle_grade(finder.config(), &args.command),
    }
}
