//! End-to-end behavior of the stores over the file backend.

use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use upsc_prep_store::backup::{BackupUserData, export_backup};
use upsc_prep_store::config::{AVATAR_KEY, INCOGNITO_KEY, PROFILE_KEY, THEME_KEY};
use upsc_prep_store::{
    ColorScheme, FileStore, KeyValueStore, ProfileEvent, StoreConfig, Stores, UserProfile,
    get_palette,
};

fn open(dir: &TempDir, host: ColorScheme) -> Stores {
    Stores::open(&StoreConfig::new(dir.path(), host))
}

fn profile(name: &str, year: &str) -> UserProfile {
    UserProfile {
        name: name.to_string(),
        target_year: year.to_string(),
        ..UserProfile::default()
    }
}

#[test]
fn fresh_directory_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let stores = open(&dir, ColorScheme::Dark);

    assert!(stores.theme.is_dark_mode());
    assert_eq!(stores.profile.load_profile(), UserProfile::default());
    assert_eq!(stores.profile.load_avatar(), None);
    assert!(!stores.profile.load_incognito());
}

#[test]
fn theme_toggle_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut stores = open(&dir, ColorScheme::Light);
        stores.theme.toggle();
        assert!(stores.theme.is_dark_mode());
    }

    let stores = open(&dir, ColorScheme::Light);
    assert!(stores.theme.is_dark_mode());
    assert_eq!(stores.theme.palette(), get_palette(true));

    let raw = FileStore::new(dir.path()).get(THEME_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some("dark"));
}

#[test]
fn double_toggle_restores_original() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Dark);
    let original = stores.theme.is_dark_mode();

    stores.theme.toggle();
    stores.theme.toggle();

    assert_eq!(stores.theme.is_dark_mode(), original);
    assert_eq!(open(&dir, ColorScheme::Light).theme.is_dark_mode(), original);
}

#[test]
fn incognito_scenario_across_restart() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);

    assert!(!stores.profile.load_incognito());
    stores.profile.set_incognito(true);
    assert!(stores.profile.load_incognito());

    drop(stores);
    let stores = open(&dir, ColorScheme::Light);
    assert!(stores.profile.load_incognito());
}

#[test]
fn profile_round_trip_and_overwrite() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);

    let a = profile("A", "2026");
    stores.profile.save_profile(&a).unwrap();
    assert_eq!(stores.profile.load_profile(), a);

    let b = UserProfile {
        bio: String::new(),
        ..profile("B", "2028")
    };
    stores.profile.save_profile(&b).unwrap();
    stores.profile.save_profile(&b).unwrap();

    let loaded = open(&dir, ColorScheme::Light).profile.load_profile();
    assert_eq!(loaded, b);
    assert_eq!(loaded.bio, "");
}

#[test]
fn stored_profile_is_plain_camel_case_json() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);
    stores.profile.save_profile(&profile("Isha", "2027")).unwrap();

    let raw = FileStore::new(dir.path()).get(PROFILE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["name"], "Isha");
    assert_eq!(json["targetYear"], "2027");
    assert_eq!(json["homeState"], "Not Set");
}

#[test]
fn reload_sees_writes_from_another_handle() {
    let dir = TempDir::new().unwrap();
    let reader = open(&dir, ColorScheme::Light);
    let mut writer = open(&dir, ColorScheme::Light);

    assert_eq!(reader.profile.load_profile().name, "UPSC Aspirant");
    writer.profile.save_profile(&profile("Latest", "2026")).unwrap();
    assert_eq!(reader.profile.load_profile().name, "Latest");
}

#[test]
fn older_profile_shape_decodes_with_defaults() {
    let dir = TempDir::new().unwrap();
    let backend = FileStore::new(dir.path());
    backend
        .set(
            PROFILE_KEY,
            r#"{"name":"Old","targetYear":"2025","optionalSubject":"History","location":"Pune"}"#,
        )
        .unwrap();

    let loaded = open(&dir, ColorScheme::Light).profile.load_profile();
    assert_eq!(loaded.name, "Old");
    assert_eq!(loaded.location, "Pune");
    assert_eq!(loaded.attempt_count, "1");
    assert_eq!(loaded.daily_goal, "8");
}

#[test]
fn avatar_clear_removes_key() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);
    let backend = FileStore::new(dir.path());

    stores.profile.set_avatar("");
    assert_eq!(stores.profile.load_avatar(), Some(String::new()));
    assert!(backend.path_for(AVATAR_KEY).exists());

    stores.profile.clear_avatar();
    assert_eq!(stores.profile.load_avatar(), None);
    assert!(!backend.path_for(AVATAR_KEY).exists());
}

#[test]
fn keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);

    stores.profile.set_avatar("file:///photos/me.jpg");
    stores.profile.set_incognito(true);
    stores.profile.save_profile(&profile("Solo", "2026")).unwrap();
    stores.profile.clear_avatar();

    assert!(stores.profile.load_incognito());
    assert_eq!(stores.profile.load_profile().name, "Solo");
    assert_eq!(
        FileStore::new(dir.path()).get(INCOGNITO_KEY).unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn subscribers_receive_profile_events() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);
    let events = Arc::new(Mutex::new(Vec::new()));

    let id = {
        let events = Arc::clone(&events);
        stores
            .profile
            .subscribe(move |e| events.lock().unwrap().push(e.clone()))
    };

    let saved = profile("Notified", "2026");
    stores.profile.save_profile(&saved).unwrap();
    stores.profile.clear_avatar();
    assert!(stores.profile.unsubscribe(id));
    stores.profile.set_incognito(true);

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            ProfileEvent::ProfileSaved(saved),
            ProfileEvent::AvatarChanged(None),
        ]
    );
}

#[test]
fn backup_reflects_stored_profile() {
    let dir = TempDir::new().unwrap();
    let mut stores = open(&dir, ColorScheme::Light);

    let empty = export_backup(stores.backend()).unwrap();
    assert_eq!(empty.user_data, BackupUserData::Default("Default Profile"));

    stores.profile.save_profile(&profile("Backed", "2026")).unwrap();
    let payload = export_backup(stores.backend()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&payload.to_pretty_json().unwrap()).unwrap();

    assert_eq!(json["app"], "SuperKalam");
    assert_eq!(json["userData"]["name"], "Backed");
    assert!(json["exportDate"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn unreadable_keys_degrade_to_defaults() {
    let dir = TempDir::new().unwrap();
    let backend = FileStore::new(dir.path());
    for key in [THEME_KEY, PROFILE_KEY, AVATAR_KEY, INCOGNITO_KEY] {
        std::fs::create_dir_all(backend.path_for(key)).unwrap();
        assert!(backend.get(key).is_err());
    }

    let stores = open(&dir, ColorScheme::Dark);
    assert!(stores.theme.is_dark_mode());
    assert_eq!(stores.profile.load_profile(), UserProfile::default());
    assert_eq!(stores.profile.load_avatar(), None);
    assert!(!stores.profile.load_incognito());
}
