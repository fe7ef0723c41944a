use cragsift_core::models::{AreaPath, ClimbStyle, Criterion, SortKey};

pub(super) fn parse_min_one_usize(raw: &str) -> std::result::Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid integer value '{raw}'"))?;
    if value == 0 {
        return Err("value must be >= 1".to_string());
    }
    Ok(value)
}

pub(super) fn parse_climb_style(raw: &str) -> std::result::Result<ClimbStyle, String> {
    raw.parse::<ClimbStyle>().map_err(|err| err.to_string())
}

pub(super) fn parse_sort_key(raw: &str) -> std::result::Result<SortKey, String> {
    raw.parse::<SortKey>().map_err(|err| err.to_string())
}

pub(super) fn parse_area_path(raw: &str) -> std::result::Result<AreaPath, String> {
    raw.parse::<AreaPath>().map_err(|err| err.to_string())
}

pub(super) fn parse_tag_criterion(raw: &str) -> std::result::Result<(String, Criterion), String> {
    let (category, criterion) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=CRITERION, got '{raw}'"))?;
    let category = category.trim();
    if category.is_empty() {
        return Err(format!("missing tag category in '{raw}'"));
    }
    let criterion = Criterion::parse(criterion).map_err(|err| err.to_string())?;
    Ok((category.to_string(), criterion))
}
