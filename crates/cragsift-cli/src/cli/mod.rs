use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod parsers;


pub use args::{AreasArgs, GradeArgs, GradeCommand, RoutesArgs, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "cragsift")]
#[command(about = "Filter, sort and search climbing routes from scraped area exports", version)]
pub struct Cli {
    /// Corpus `.json`/`.jsonl` file or export directory. Defaults to `CRAGSIFT_DATA`.
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// TOML settings file, applied before `CRAGSIFT_*` environment overrides.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter, sort and page through routes.
    Routes(RoutesArgs),
    /// Rank areas and routes against a free-text query.
    Search(SearchArgs),
    /// List child areas of a hierarchy path.
    Areas(AreasArgs),
    /// List tag categories and the tags seen under each.
    Tags,
    Grade(GradeArgs),
}

impl Commands {
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Routes(_) => "routes",
            Self::Search(_) => "search",
            Self::Areas(_) => "areas",
            Self::Tags => "tags",
            Self::Grade(args) => match args.command {
                GradeCommand::Normalize { .. } => "grade.normalize",
                GradeCommand::Scale => "grade.scale",
            },
        }
    }
}
