use std::io::{self, Write};

use anyhow::Result;
use cragsift_core::models::{FilterSpec, SortSpec};
use cragsift_core::{CragError, RouteFinder};

use crate::cli::RoutesArgs;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn build_filter_spec(finder: &RouteFinder, args: &RoutesArgs) -> Result<FilterSpec> {
    let grade = finder.grade_range(args.min_grade.as_deref(), args.max_grade.as_deref())?;
    let mut spec = FilterSpec::new().with_grade(grade);
    for style in &args.styles {
        spec = spec.with_style(*style);
    }
    for area in &args.areas {
        spec = spec.with_area(area.clone());
    }
    for (category, criterion) in &args.tags {
        spec = spec.with_criterion(category.clone(), criterion.clone());
    }
    Ok(spec)
}

pub(super) const fn build_sort_spec(args: &RoutesArgs) -> SortSpec {
    SortSpec::new(args.sort, args.reverse)
}

/// Writes the human-readable chain and, for library errors, the JSON
/// payload line to stderr.
pub(crate) fn report_error(operation: &str, err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "error: {err:#}");
    if let Some(crag) = err.downcast_ref::<CragError>() {
        let payload = crag.to_payload(operation, None);
        if let Ok(line) = serde_json::to_string(&payload) {
            let _ = writeln!(stderr, "{line}");
        }
    }
}
