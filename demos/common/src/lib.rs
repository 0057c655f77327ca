// green-marketplace-client/common
//
// Copyright: 2024, Green Marketplace contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ffi::OsStr;
use std::path::PathBuf;
use std::{env, fs};

use anyhow::{format_err, Context, Result};
use green_core_client::dtos::{Session, UserProfile, UserRole};
use tracing::metadata::LevelFilter;
pub use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

/// Writes JSON logs to `demos/<exe>/logs/<exe>.log` and warnings to stderr.
pub fn enable_debug_logging(max_level: Level) -> Result<()> {
    let exe_path = env::current_exe()?;
    let exe_stem = exe_path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| format_err!("Failed to extract file stem from {:?}", exe_path))?;

    let log_dir = demos_dir()?.join(exe_stem).join("logs");
    let log_filename = format!("{}.log", exe_stem);

    let log_file_path = log_dir.join(&log_filename);
    if log_file_path.exists() {
        _ = fs::remove_file(log_file_path);
    }

    let appender = tracing_appender::rolling::never(log_dir, log_filename);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    let stderr_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);

    Registry::default()
        .with(json_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

/// Loads `demos/.env` into the environment. Variables that are already set win.
pub fn load_dotenv() -> Result<()> {
    let path = demos_dir()?.join(".env");
    if !path.exists() {
        return Ok(());
    }
    dotenvy::from_path(&path).with_context(|| format!("Failed to load {:?}", path))?;
    Ok(())
}

/// Builds a session from `GREEN_TOKEN`, `GREEN_USER_ID`, `GREEN_USER_NAME`, `GREEN_USER_EMAIL`
/// and `GREEN_USER_ROLE`.
pub fn load_session() -> Result<Session> {
    let token = required_var("GREEN_TOKEN")?;
    let role = env::var("GREEN_USER_ROLE")
        .unwrap_or_else(|_| "buyer".to_string())
        .parse::<UserRole>()
        .context("Invalid GREEN_USER_ROLE")?;

    let user = UserProfile {
        id: required_var("GREEN_USER_ID")?.into(),
        name: env::var("GREEN_USER_NAME").unwrap_or_default(),
        email: env::var("GREEN_USER_EMAIL").unwrap_or_default(),
        avatar: None,
        role,
    };

    Ok(Session::new(token, user))
}

/// The directory the session of a demo is persisted in.
pub fn cache_dir(name: &str) -> Result<PathBuf> {
    let path = demos_dir()?.join(name).join("cache");
    fs::create_dir_all(&path)?;
    Ok(path)
}

fn demos_dir() -> Result<PathBuf> {
    Ok(env::current_dir()
        .context("Cannot determine current directory")?
        .join("demos"))
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("Missing '{}' in environment or .env", name))
}
