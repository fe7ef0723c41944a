use anyhow::Result;
use cragsift_core::{AppConfig, GradeRange, GradeScale};

use crate::cli::Commands;

/// Checks that need no corpus, so bad input fails before any file is read.
pub(super) fn validate_command_preflight(command: &Commands, config: &AppConfig) -> Result<()> {
    if let Commands::Routes(args) = command {
        let scale = GradeScale::new(config.grade_scale);
        GradeRange::parse(
            &scale,
            args.min_grade.as_deref(),
            args.max_grade.as_deref(),
        )?;
    }
    if let Commands::Search(args) = command {
        if args.query.trim().is_empty() {
            anyhow::bail!("search query must not be empty");
        }
    }
    Ok(())
}
