//! Advisory checks for the edit flow. The store saves whatever it is given;
//! these warnings are for the UI to show before saving.

use crate::profile::types::UserProfile;

const MIN_TARGET_YEAR: u16 = 2000;
const MAX_TARGET_YEAR: u16 = 2100;
const MAX_DAILY_HOURS: u8 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileWarning {
    EmptyName,
    TargetYear(String),
    AttemptCount(String),
    DailyGoal(String),
}

impl std::fmt::Display for ProfileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileWarning::EmptyName => write!(f, "Name is empty"),
            ProfileWarning::TargetYear(v) => write!(
                f,
                "Target year '{}' is not a year between {} and {}",
                v, MIN_TARGET_YEAR, MAX_TARGET_YEAR
            ),
            ProfileWarning::AttemptCount(v) => {
                write!(f, "Attempt count '{}' is not a positive number", v)
            }
            ProfileWarning::DailyGoal(v) => write!(
                f,
                "Daily goal '{}' is not a number of hours between 1 and {}",
                v, MAX_DAILY_HOURS
            ),
        }
    }
}

/// Collect every advisory warning for `profile`. Empty means it looks fine.
pub fn validate_profile(profile: &UserProfile) -> Vec<ProfileWarning> {
    let mut warnings = Vec::new();

    if profile.name.trim().is_empty() {
        warnings.push(ProfileWarning::EmptyName);
    }

    let year = profile.target_year.trim();
    let year_ok = year.len() == 4
        && year
            .parse::<u16>()
            .is_ok_and(|y| (MIN_TARGET_YEAR..=MAX_TARGET_YEAR).contains(&y));
    if !year_ok {
        warnings.push(ProfileWarning::TargetYear(profile.target_year.clone()));
    }

    if !profile
        .attempt_count
        .trim()
        .parse::<u32>()
        .is_ok_and(|n| n >= 1)
    {
        warnings.push(ProfileWarning::AttemptCount(profile.attempt_count.clone()));
    }

    if !profile
        .daily_goal
        .trim()
        .parse::<u8>()
        .is_ok_and(|h| (1..=MAX_DAILY_HOURS).contains(&h))
    {
        warnings.push(ProfileWarning::DailyGoal(profile.daily_goal.clone()));
    }

    warnings
}
