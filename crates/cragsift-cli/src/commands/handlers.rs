use anyhow::Result;
use cragsift_core::models::{AreaPath, FilterSpec, Page, RouteSummary, SearchResults, SortSpec};
use cragsift_core::{AppConfig, CragError, GradeScale, RouteFinder};
use serde::Serialize;

use crate::cli::{GradeCommand, RoutesArgs};

use super::support::{build_filter_spec, build_sort_spec, print_json};

#[derive(Debug, Serialize)]
struct RoutesOutput {
    corpus_version: String,
    filter: FilterSpec,
    sort: SortSpec,
    #[serde(flatten)]
    page: Page<RouteSummary>,
}

#[derive(Debug, Serialize)]
struct GradeNormalization {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<usize>,
    parseable: bool,
}

#[derive(Debug, Serialize)]
struct ScaleOutput {
    variant: String,
    labels: Vec<&'static str>,
}

pub(super) fn handle_routes(finder: &RouteFinder, args: &RoutesArgs) -> Result<()> {
    let filter = build_filter_spec(finder, args)?;
    let sort = build_sort_spec(args);
    let routes = finder.query(&filter, sort);
    let page = finder
        .page(&routes, args.offset, args.limit)
        .map(|entry| entry.summary());
    print_json(&RoutesOutput {
        corpus_version: finder.corpus().version().to_string(),
        filter,
        sort,
        page,
    })
}

pub(super) fn handle_search(finder: &RouteFinder, query: &str) -> Result<()> {
    let results: SearchResults = finder.search(query);
    print_json(&results)
}

pub(super) fn handle_areas(finder: &RouteFinder, under: Option<&AreaPath>) -> Result<()> {
    let hierarchy = finder.corpus().hierarchy();
    if let Some(parent) = under {
        if !hierarchy.contains(parent) {
            return Err(CragError::NotFound(format!("area path {parent}")).into());
        }
    }
    print_json(&hierarchy.children(under))
}

pub(super) fn handle_tags(finder: &RouteFinder) -> Result<()> {
    print_json(finder.corpus().tags())
}

pub(super) fn handle_grade(config: &AppConfig, command: &GradeCommand) -> Result<()> {
    let scale = GradeScale::new(config.grade_scale);
    match command {
        GradeCommand::Normalize { raw } => {
            let rows: Vec<GradeNormalization> = raw
                .iter()
                .map(|input| {
                    let grade = scale.normalize(input).grade();
                    GradeNormalization {
                        input: input.clone(),
                        canonical: grade.map(|g| g.label()),
                        rank: grade.map(|g| g.rank()),
                        parseable: grade.is_some(),
                    }
                })
                .collect();
            print_json(&rows)
        }
        GradeCommand::Scale => print_json(&ScaleOutput {
            variant: scale.variant().to_string(),
            labels: scale.labels().to_vec(),
        }),
    }
}
