use clap::{Args, Subcommand};
use cragsift_core::models::{AreaPath, ClimbStyle, Criterion, SortKey};

use super::parsers::{
    parse_area_path, parse_climb_style, parse_min_one_usize, parse_sort_key, parse_tag_criterion,
};

#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Lowest grade to include, e.g. `5.9` or `5.10a`.
    #[arg(long)]
    pub min_grade: Option<String>,
    #[arg(long)]
    pub max_grade: Option<String>,
    /// `trad` or `sport`; repeat to accept either.
    #[arg(long = "style", value_name = "STYLE", value_parser = parse_climb_style)]
    pub styles: Vec<ClimbStyle>,
    /// Area path such as `USA/California/Yosemite`. Selecting a parent and
    /// one of its children narrows the parent to that child.
    #[arg(long = "area", value_name = "PATH", value_parser = parse_area_path)]
    pub areas: Vec<AreaPath>,
    /// `CATEGORY=TAG`, `CATEGORY=exclude_TAG` or `CATEGORY=single_pitch`.
    #[arg(long = "tag", value_name = "CATEGORY=CRITERION", value_parser = parse_tag_criterion)]
    pub tags: Vec<(String, Criterion)>,
    #[arg(long, default_value = "grade", value_parser = parse_sort_key)]
    pub sort: SortKey,
    /// Flip the sort key's default direction.
    #[arg(long, default_value_t = false)]
    pub reverse: bool,
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
    /// Page size; defaults to `CRAGSIFT_PAGE_SIZE`.
    #[arg(long, value_parser = parse_min_one_usize)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct AreasArgs {
    /// Parent path; omit for top-level regions.
    #[arg(long, value_parser = parse_area_path)]
    pub under: Option<AreaPath>,
}

#[derive(Debug, Args)]
pub struct GradeArgs {
    #[command(subcommand)]
    pub command: GradeCommand,
}

#[derive(Debug, Subcommand)]
pub enum GradeCommand {
    /// Map raw grade strings onto the canonical scale.
    Normalize {
        #[arg(required = true, allow_hyphen_values = true)]
        raw: Vec<String>,
    },
    /// Print the canonical scale in difficulty order.
    Scale,
}
