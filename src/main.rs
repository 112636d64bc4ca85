//! UPSC Prep Store CLI
//!
//! Command-line interface for inspecting and editing the app's locally
//! persisted theme, profile and settings.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use upsc_prep_store::backup::export_backup;
use upsc_prep_store::profile::validate_profile;
use upsc_prep_store::utils::parsing::{parse_color_scheme, parse_toggle};
use upsc_prep_store::{ColorScheme, StoreConfig, Stores, UserProfile, get_palette};

// =============================================================================
// CLI Arguments
// =============================================================================

/// UPSC Prep local state tool
#[derive(Parser, Debug)]
#[command(name = "upsc-prep-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted keys
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Color scheme the host reports: dark or light
    #[arg(long, global = true, value_parser = scheme_arg)]
    system_theme: Option<ColorScheme>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dark/light mode
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Profile record
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Avatar reference
    Avatar {
        #[command(subcommand)]
        action: AvatarAction,
    },

    /// Incognito mode
    Incognito {
        #[command(subcommand)]
        action: IncognitoAction,
    },

    /// Export profile data as a JSON backup
    Backup {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear temporary study files (persisted settings are kept)
    ClearCache,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Show the current mode
    Show,
    /// Switch between dark and light
    Toggle,
    /// Print palette colors
    Palette {
        /// Palette to print instead of the active one: dark or light
        #[arg(short, long, value_parser = scheme_arg)]
        mode: Option<ColorScheme>,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// Show the stored profile
    Show,
    /// Update fields and save the whole record
    Set(ProfileFields),
    /// Show advisory warnings for the stored profile
    Check,
}

#[derive(ClapArgs, Debug, Default)]
struct ProfileFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    target_year: Option<String>,
    #[arg(long)]
    optional_subject: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    /// 1st, 2nd, ... attempt
    #[arg(long)]
    attempt_count: Option<String>,
    /// Study hours per day
    #[arg(long)]
    daily_goal: Option<String>,
    #[arg(long)]
    home_state: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

#[derive(Subcommand, Debug)]
enum AvatarAction {
    /// Show the avatar URI
    Show,
    /// Set the avatar URI
    Set { uri: String },
    /// Remove the custom avatar
    Clear,
}

#[derive(Subcommand, Debug)]
enum IncognitoAction {
    /// Show whether incognito mode is on
    Show,
    /// Turn incognito mode on or off
    Set {
        #[arg(value_parser = toggle_arg, action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn scheme_arg(s: &str) -> std::result::Result<ColorScheme, String> {
    parse_color_scheme(s).map_err(|e| e.to_string())
}

fn toggle_arg(s: &str) -> std::result::Result<bool, String> {
    parse_toggle(s).map_err(|e| e.to_string())
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = StoreConfig::resolve(args.data_dir, args.system_theme)
        .context("Failed to resolve store configuration")?;
    let mut stores = Stores::open(&config);

    match args.command {
        Command::Theme { action } => cmd_theme(&mut stores, action),
        Command::Profile { action } => cmd_profile(&mut stores, action),
        Command::Avatar { action } => cmd_avatar(&mut stores, action),
        Command::Incognito { action } => cmd_incognito(&mut stores, action),
        Command::Backup { output } => cmd_backup(&stores, output),
        Command::ClearCache => cmd_clear_cache(),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// =============================================================================
// Commands
// =============================================================================

fn cmd_theme(stores: &mut Stores, action: ThemeAction) -> Result<()> {
    match action {
        ThemeAction::Show => {
            println!("Theme: {}", stores.theme.scheme());
        }
        ThemeAction::Toggle => {
            stores.theme.toggle();
            println!("Theme switched to {}", stores.theme.scheme());
        }
        ThemeAction::Palette { mode } => {
            let is_dark = mode.map_or(stores.theme.is_dark_mode(), ColorScheme::is_dark);
            let palette = get_palette(is_dark);
            println!("Palette ({}):", ColorScheme::from_dark_mode(is_dark));
            for (role, value) in palette.roles() {
                println!("  {:<14} {}", role, value);
            }
        }
    }
    Ok(())
}

fn cmd_profile(stores: &mut Stores, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => {
            let profile = stores.profile.load_profile();
            println!(
                "{}",
                serde_json::to_string_pretty(&profile).context("Failed to format profile")?
            );
        }
        ProfileAction::Set(fields) => {
            let mut profile = stores.profile.load_profile();
            apply_fields(&mut profile, fields);

            for warning in validate_profile(&profile) {
                println!("⚠️  {}", warning);
            }

            if let Err(e) = stores.profile.save_profile(&profile) {
                eprintln!("❌ Failed to save profile. Nothing was changed, you can retry.");
                return Err(e).context("Failed to save profile");
            }
            println!("✅ Profile saved");
        }
        ProfileAction::Check => {
            let warnings = validate_profile(&stores.profile.load_profile());
            if warnings.is_empty() {
                println!("✅ Profile looks good");
            }
            for warning in warnings {
                println!("⚠️  {}", warning);
            }
        }
    }
    Ok(())
}

fn apply_fields(profile: &mut UserProfile, fields: ProfileFields) {
    let ProfileFields {
        name,
        target_year,
        optional_subject,
        bio,
        attempt_count,
        daily_goal,
        home_state,
        location,
    } = fields;

    let updates = [
        (&mut profile.name, name),
        (&mut profile.target_year, target_year),
        (&mut profile.optional_subject, optional_subject),
        (&mut profile.bio, bio),
        (&mut profile.attempt_count, attempt_count),
        (&mut profile.daily_goal, daily_goal),
        (&mut profile.home_state, home_state),
        (&mut profile.location, location),
    ];
    for (slot, value) in updates {
        if let Some(value) = value {
            *slot = value;
        }
    }
}

fn cmd_avatar(stores: &mut Stores, action: AvatarAction) -> Result<()> {
    match action {
        AvatarAction::Show => match stores.profile.load_avatar() {
            Some(uri) => println!("Avatar: {}", uri),
            None => println!("No custom avatar"),
        },
        AvatarAction::Set { uri } => {
            stores.profile.set_avatar(&uri);
            println!("Avatar set");
        }
        AvatarAction::Clear => {
            stores.profile.clear_avatar();
            println!("Avatar removed");
        }
    }
    Ok(())
}

fn cmd_incognito(stores: &mut Stores, action: IncognitoAction) -> Result<()> {
    match action {
        IncognitoAction::Show => {
            let state = if stores.profile.load_incognito() { "on" } else { "off" };
            println!("Incognito: {}", state);
        }
        IncognitoAction::Set { value } => {
            stores.profile.set_incognito(value);
            println!("Incognito {}", if value { "enabled" } else { "disabled" });
        }
    }
    Ok(())
}

fn cmd_backup(stores: &Stores, output: Option<PathBuf>) -> Result<()> {
    let payload = export_backup(stores.backend()).context("Could not prepare backup")?;
    let json = payload.to_pretty_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write backup to {}", path.display()))?;
            println!("✅ Backup written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_clear_cache() -> Result<()> {
    log::info!("Cache clear requested; no temporary files are kept yet");
    println!("✅ Cache cleared");
    Ok(())
}
