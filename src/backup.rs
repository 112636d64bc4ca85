//! Study-data backup export.
//!
//! Produces a shareable JSON document wrapping the stored profile exactly as
//! it was persisted, unknown fields included.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::config::PROFILE_KEY;
use crate::error::{Result, StoreError};
use crate::storage::KeyValueStore;

pub const BACKUP_APP_NAME: &str = "SuperKalam";
pub const BACKUP_FORMAT_VERSION: &str = "1.0.0";
const NO_PROFILE_MARKER: &str = "Default Profile";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    pub app: &'static str,
    pub version: &'static str,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub export_date: DateTime<Utc>,
    pub user_data: BackupUserData,
}

/// Either the stored profile JSON or a marker string when nothing was saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BackupUserData {
    Raw(Value),
    Default(&'static str),
}

fn serialize_rfc3339<S>(date: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Build a backup from whatever is currently stored.
///
/// # Arguments
/// * `backend` - Store holding the profile key
///
/// # Returns
/// The payload stamped with the current time. Fails only if the backend
/// cannot be read or the stored profile is not valid JSON.
pub fn export_backup(backend: &dyn KeyValueStore) -> Result<BackupPayload> {
    export_backup_at(backend, Utc::now())
}

/// Same as [`export_backup`] with an explicit export time.
pub fn export_backup_at(
    backend: &dyn KeyValueStore,
    export_date: DateTime<Utc>,
) -> Result<BackupPayload> {
    let user_data = match backend.get(PROFILE_KEY)? {
        Some(raw) if !raw.trim().is_empty() => {
            let value: Value = serde_json::from_str(&raw).map_err(|e| StoreError::Decode {
                key: PROFILE_KEY.to_string(),
                message: e.to_string(),
            })?;
            BackupUserData::Raw(value)
        }
        _ => BackupUserData::Default(NO_PROFILE_MARKER),
    };

    Ok(BackupPayload {
        app: BACKUP_APP_NAME,
        version: BACKUP_FORMAT_VERSION,
        export_date,
        user_data,
    })
}

impl BackupPayload {
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| StoreError::Encode {
            key: "backup".into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_backup_without_profile() {
        let store = MemoryStore::new();
        let payload = export_backup_at(&store, fixed_date()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&payload.to_pretty_json().unwrap()).unwrap();

        assert_eq!(json["app"], "SuperKalam");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["exportDate"], "2026-03-01T09:30:00.000Z");
        assert_eq!(json["userData"], "Default Profile");
    }

    #[test]
    fn test_backup_with_empty_stored_profile() {
        let store = MemoryStore::with_entries([(PROFILE_KEY, "")]);
        let payload = export_backup_at(&store, fixed_date()).unwrap();
        assert_eq!(payload.user_data, BackupUserData::Default("Default Profile"));
    }

    #[test]
    fn test_backup_keeps_profile_as_stored() {
        let store = MemoryStore::with_entries([(PROFILE_KEY, r#"{"name":"Ravi","streak":12}"#)]);
        let payload = export_backup_at(&store, fixed_date()).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["userData"]["name"], "Ravi");
        assert_eq!(json["userData"]["streak"], 12);
        assert!(json["userData"].get("location").is_none());
        assert_eq!(json["userData"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_backup_rejects_invalid_json() {
        let store = MemoryStore::with_entries([(PROFILE_KEY, "garbage")]);
        assert!(matches!(
            export_backup_at(&store, fixed_date()),
            Err(StoreError::Decode { .. })
        ));
    }
}
