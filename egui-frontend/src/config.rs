//! # Application Configuration
//!
//! Optional YAML file controlling the window, reminder timings and seed data.
//!
//! ## Lookup Order
//!
//! 1. `SMART_EVENT_CONFIG` environment variable
//! 2. `<config dir>/smart-event-organizer/config.yaml` when it exists
//! 3. Built-in defaults
//!
//! ## YAML Format
//!
//! ```yaml
//! window:
//!   width: 1000.0
//!   height: 700.0
//! reminder:
//!   delay_ms: 5000
//! seed:
//!   users:
//!     - { username: admin, password: admin, role: Admin }
//!   events:
//!     - { name: Tech Symposium, location: Auditorium, date: "2025-11-08", total_seats: 100 }
//! ```
//!
//! Every field is optional. A file that exists but does not parse is a startup error.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use shared::Role;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SMART_EVENT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub reminder: ReminderConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            title: "Smart Event Organizer".to_string(),
        }
    }
}

/// Reminder popup timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Wait between accepting the prompt and showing the popup
    pub delay_ms: u64,
    pub fade_steps: u32,
    pub fade_step_ms: u64,
    /// How long after appearing the popup starts fading out
    pub hold_ms: u64,
    /// Distance the popup slides while fading
    pub slide_px: f32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            delay_ms: 5000,
            fade_steps: 20,
            fade_step_ms: 20,
            hold_ms: 6000,
            slide_px: 30.0,
        }
    }
}

impl ReminderConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_step_ms.saturating_mul(u64::from(self.fade_steps)))
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

/// Accounts and events loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub users: Vec<SeedUser>,
    pub events: Vec<SeedEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedEvent {
    pub name: String,
    pub location: String,
    /// ISO date text, validated like form input
    pub date: String,
    pub total_seats: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let user = |name: &str, role| SeedUser {
            username: name.to_string(),
            password: name.to_string(),
            role,
            full_name: None,
            department: None,
        };
        let event = |name: &str, location: &str, date: &str, total_seats| SeedEvent {
            name: name.to_string(),
            location: location.to_string(),
            date: date.to_string(),
            total_seats,
        };

        Self {
            users: vec![user("admin", Role::Admin), user("faculty", Role::Faculty)],
            events: vec![
                event("Tech Symposium", "Auditorium", "2025-11-08", 100),
                event("AI Workshop", "Innovation Lab", "2025-11-12", 50),
                event("Cultural Fest", "Main Hall", "2025-11-15", 200),
            ],
        }
    }
}

impl AppConfig {
    /// Resolve and load the configuration for this run
    pub fn load() -> Result<Self> {
        match Self::resolve_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn resolve_path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            debug!("Using config from {}: {}", CONFIG_ENV_VAR, explicit);
            return Some(PathBuf::from(explicit));
        }

        let default_path = dirs::config_dir()?.join("smart-event-organizer").join("config.yaml");
        if default_path.exists() {
            Some(default_path)
        } else {
            debug!("No config at {}", default_path.display());
            None
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        info!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.reminder.delay(), Duration::from_secs(5));
        assert_eq!(config.reminder.fade(), Duration::from_millis(400));
        assert_eq!(config.reminder.hold(), Duration::from_secs(6));
        assert_eq!(config.reminder.slide_px, 30.0);
        assert_eq!(config.seed.users.len(), 2);
        assert_eq!(config.seed.events[1].name, "AI Workshop");
        assert_eq!(config.seed.events[1].total_seats, 50);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("reminder:\n  delay_ms: 100\nwindow:\n  title: Campus Events\n");
        let config = AppConfig::load_from_path(file.path()).unwrap();

        assert_eq!(config.reminder.delay_ms, 100);
        assert_eq!(config.reminder.hold_ms, 6000);
        assert_eq!(config.window.title, "Campus Events");
        assert_eq!(config.window.width, 1000.0);
        assert_eq!(config.seed, SeedConfig::default());
    }

    #[test]
    fn test_seed_from_file() {
        let yaml = r#"
seed:
  users:
    - username: principal
      password: pw
      role: Admin
    - username: asha
      password: pw
      role: Student
      full_name: Asha Rao
      department: CSE
  events:
    - name: Hackathon
      location: Lab 2
      date: "2026-01-10"
      total_seats: 40
"#;
        let file = write_config(yaml);
        let config = AppConfig::load_from_path(file.path()).unwrap();

        assert_eq!(config.seed.users.len(), 2);
        assert_eq!(config.seed.users[1].role, Role::Student);
        assert_eq!(config.seed.users[1].full_name.as_deref(), Some("Asha Rao"));
        assert_eq!(config.seed.events.len(), 1);
        assert_eq!(config.seed.events[0].date, "2026-01-10");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("reminder: [not, a, map]\n");
        assert!(AppConfig::load_from_path(file.path()).is_err());

        let file = write_config("seed:\n  users:\n    - username: x\n      password: y\n      role: Janitor\n");
        assert!(AppConfig::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from_path(&dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let file = write_config("   \n");
        assert_eq!(AppConfig::load_from_path(file.path()).unwrap(), AppConfig::default());
    }
}
