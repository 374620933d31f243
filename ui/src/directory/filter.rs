//! Age bracket filtering.

use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeFilter {
    #[default]
    All,
    Under18,
    From18To30,
    From31To60,
    Over60,
}

impl AgeFilter {
    pub const ALL: [AgeFilter; 5] = [
        AgeFilter::All,
        AgeFilter::Under18,
        AgeFilter::From18To30,
        AgeFilter::From31To60,
        AgeFilter::Over60,
    ];

    /// Parse a control value. Unknown values mean "all".
    pub fn from_value(value: &str) -> Self {
        match value {
            "under18" => Self::Under18,
            "18-30" => Self::From18To30,
            "31-60" => Self::From31To60,
            "over60" => Self::Over60,
            _ => Self::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Under18 => "under18",
            Self::From18To30 => "18-30",
            Self::From31To60 => "31-60",
            Self::Over60 => "over60",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All ages",
            Self::Under18 => "Under 18",
            Self::From18To30 => "18 to 30",
            Self::From31To60 => "31 to 60",
            Self::Over60 => "Over 60",
        }
    }

    pub fn matches(self, age: u32) -> bool {
        match self {
            Self::All => true,
            Self::Under18 => age < 18,
            Self::From18To30 => (18..=30).contains(&age),
            Self::From31To60 => (31..=60).contains(&age),
            Self::Over60 => age > 60,
        }
    }
}

/// Users in the bracket, in their original order.
pub fn filter_by_age(users: &[User], filter: AgeFilter) -> Vec<User> {
    match filter {
        AgeFilter::All => users.to_vec(),
        bracket => users
            .iter()
            .filter(|user| bracket.matches(user.age))
            .cloned()
            .collect(),
    }
}
