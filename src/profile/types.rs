//! Profile record and the events a profile store emits.
//!
//! Stored records may come from older app versions, so decoding goes through
//! [`UserProfile::from_json_lenient`] rather than plain serde.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Editable profile record, persisted whole under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub target_year: String,
    pub optional_subject: String,
    pub bio: String,
    /// 1st, 2nd, ... attempt at the exam.
    pub attempt_count: String,
    /// Study hours per day.
    pub daily_goal: String,
    /// Used for cadre / State PSC content.
    pub home_state: String,
    pub location: String,
}

fn default_name() -> String {
    "UPSC Aspirant".to_string()
}

fn default_target_year() -> String {
    "2026".to_string()
}

fn default_optional_subject() -> String {
    "Optional".to_string()
}

fn default_bio() -> String {
    "Aiming for LBSNAA".to_string()
}

fn default_attempt_count() -> String {
    "1".to_string()
}

fn default_daily_goal() -> String {
    "8".to_string()
}

fn default_home_state() -> String {
    "Not Set".to_string()
}

fn default_location() -> String {
    "Delhi".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            target_year: default_target_year(),
            optional_subject: default_optional_subject(),
            bio: default_bio(),
            attempt_count: default_attempt_count(),
            daily_goal: default_daily_goal(),
            home_state: default_home_state(),
            location: default_location(),
        }
    }
}

impl UserProfile {
    /// Decode a stored record, tolerating schema drift.
    ///
    /// Each known field takes a string as is, stringifies a number or
    /// boolean, and falls back to its default for anything else. Unknown
    /// fields are ignored.
    ///
    /// # Arguments
    /// * `raw` - Stored JSON text
    ///
    /// # Returns
    /// The decoded profile, or `None` when `raw` is not a JSON object.
    ///
    /// # Example
    ///
    /// ```
    /// use upsc_prep_store::UserProfile;
    ///
    /// let p = UserProfile::from_json_lenient(r#"{"name":"Asha","targetYear":2027}"#).unwrap();
    /// assert_eq!(p.target_year, "2027");
    /// assert_eq!(p.daily_goal, "8");
    /// assert!(UserProfile::from_json_lenient("[1, 2]").is_none());
    /// ```
    pub fn from_json_lenient(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let object = value.as_object()?;

        Some(Self {
            name: field(object, "name", default_name),
            target_year: field(object, "targetYear", default_target_year),
            optional_subject: field(object, "optionalSubject", default_optional_subject),
            bio: field(object, "bio", default_bio),
            attempt_count: field(object, "attemptCount", default_attempt_count),
            daily_goal: field(object, "dailyGoal", default_daily_goal),
            home_state: field(object, "homeState", default_home_state),
            location: field(object, "location", default_location),
        })
    }
}

fn field(object: &Map<String, Value>, key: &str, default: fn() -> String) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default(),
    }
}

/// Emitted by `ProfileStore` after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    ProfileSaved(UserProfile),
    AvatarChanged(Option<String>),
    IncognitoChanged(bool),
}
