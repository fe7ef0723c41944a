use crate::models::{AreaPath, PATH_SEPARATOR};

const ARTICLE_SUFFIX: &str = ", The";
const AREA_SEGMENT_MAX_CHARS: usize = 15;
const AREA_SEGMENT_CLIP_CHARS: usize = 12;

#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((clip_idx, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut out = text[..clip_idx].to_string();
    out.push_str("...");
    out
}

/// `"Nose, The"` reads as `"The Nose"`.
#[must_use]
pub fn format_route_name(name: &str) -> String {
    match name.strip_suffix(ARTICLE_SUFFIX) {
        Some(stem) => format!("The {stem}"),
        None => name.to_string(),
    }
}

#[must_use]
pub fn display_area_path(path: &AreaPath) -> String {
    path.segments()
        .iter()
        .map(|segment| {
            if segment.chars().count() > AREA_SEGMENT_MAX_CHARS {
                truncate_text(segment, AREA_SEGMENT_CLIP_CHARS)
            } else {
                segment.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}
