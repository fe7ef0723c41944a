use std::cmp::Ordering;

use super::scale::{Grade, GradeScale};

const FIRST_LETTER_GRADE: u32 = 10;
const MAX_GRADE_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeParse {
    Canonical(Grade),
    Unparseable,
}

impl GradeParse {
    #[must_use]
    pub const fn grade(self) -> Option<Grade> {
        match self {
            Self::Canonical(grade) => Some(grade),
            Self::Unparseable => None,
        }
    }

    #[must_use]
    pub const fn is_unparseable(self) -> bool {
        matches!(self, Self::Unparseable)
    }
}

impl From<Option<Grade>> for GradeParse {
    fn from(value: Option<Grade>) -> Self {
        value.map_or(Self::Unparseable, Self::Canonical)
    }
}

impl GradeScale {
    /// Maps a free-form grade token onto this scale.
    ///
    /// Only the first whitespace-delimited token is read, so protection
    /// suffixes such as `"5.10a PG13"` are ignored.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> GradeParse {
        canonical_label(raw)
            .and_then(|label| self.grade(&label))
            .into()
    }
}

#[must_use]
pub fn compare(a: Grade, b: Grade) -> Ordering {
    a.rank().cmp(&b.rank())
}

pub(crate) fn canonical_label(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let tail = token.strip_prefix("5.")?;

    let digit_len = tail.chars().take_while(char::is_ascii_digit).count();
    if digit_len == 0 || digit_len > MAX_GRADE_DIGITS {
        return None;
    }
    let number = tail[..digit_len].parse::<u32>().ok()?;
    let suffix = tail[digit_len..].to_ascii_lowercase();
    let mut chars = suffix.chars();

    if number < FIRST_LETTER_GRADE {
        return match (chars.next(), chars.next()) {
            (None, _) | (Some('-' | '+'), None) => Some(format!("5.{number}")),
            _ => None,
        };
    }

    let label = match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some('-'), None, _, _) => format!("5.{number}a"),
        (Some('+'), None, _, _) => format!("5.{number}d"),
        (Some(letter), None, _, _) if is_sub_letter(letter) => format!("5.{number}{letter}"),
        (Some(letter), Some('-' | '+'), None, _) if is_sub_letter(letter) => {
            format!("5.{number}{letter}")
        }
        (Some(letter), Some('/'), Some(upper), None)
            if is_sub_letter(letter) && is_sub_letter(upper) =>
        {
            format!("5.{number}{letter}")
        }
        _ => return None,
    };
    Some(label)
}

const fn is_sub_letter(c: char) -> bool {
    matches!(c, 'a'..='d')
}
