//! Ordering of the visible users.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Unsorted,
    FirstNameAsc,
    FirstNameDesc,
    LastNameAsc,
    LastNameDesc,
    AgeAsc,
    AgeDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Unsorted,
        SortKey::FirstNameAsc,
        SortKey::FirstNameDesc,
        SortKey::LastNameAsc,
        SortKey::LastNameDesc,
        SortKey::AgeAsc,
        SortKey::AgeDesc,
    ];

    /// Parse a control value. Unknown values mean "unsorted".
    pub fn from_value(value: &str) -> Self {
        match value {
            "name-a-z" => Self::FirstNameAsc,
            "name-z-a" => Self::FirstNameDesc,
            "last-name-a-z" => Self::LastNameAsc,
            "last-name-z-a" => Self::LastNameDesc,
            "age-low-high" => Self::AgeAsc,
            "age-high-low" => Self::AgeDesc,
            _ => Self::Unsorted,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Unsorted => "null",
            Self::FirstNameAsc => "name-a-z",
            Self::FirstNameDesc => "name-z-a",
            Self::LastNameAsc => "last-name-a-z",
            Self::LastNameDesc => "last-name-z-a",
            Self::AgeAsc => "age-low-high",
            Self::AgeDesc => "age-high-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unsorted => "Original order",
            Self::FirstNameAsc => "First name (A-Z)",
            Self::FirstNameDesc => "First name (Z-A)",
            Self::LastNameAsc => "Last name (A-Z)",
            Self::LastNameDesc => "Last name (Z-A)",
            Self::AgeAsc => "Age (low to high)",
            Self::AgeDesc => "Age (high to low)",
        }
    }
}

/// A sorted copy of `users`. Ties keep their original relative order.
pub fn sort_users(users: &[User], key: SortKey) -> Vec<User> {
    let mut sorted = users.to_vec();

    match key {
        SortKey::Unsorted => {}
        SortKey::FirstNameAsc => sorted.sort_by(|a, b| collate(&a.first_name, &b.first_name)),
        SortKey::FirstNameDesc => sorted.sort_by(|a, b| collate(&b.first_name, &a.first_name)),
        SortKey::LastNameAsc => sorted.sort_by(|a, b| collate(&a.last_name, &b.last_name)),
        SortKey::LastNameDesc => sorted.sort_by(|a, b| collate(&b.last_name, &a.last_name)),
        SortKey::AgeAsc => sorted.sort_by_key(|user| user.age),
        SortKey::AgeDesc => sorted.sort_by(|a, b| b.age.cmp(&a.age)),
    }

    sorted
}

/// Locale-style string comparison. Base letters decide first (accents and
/// case ignored), then unaccented before accented, then lowercase before
/// uppercase, then code point order.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
