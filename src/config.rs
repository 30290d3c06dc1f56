use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    /// Program run for delegated commands.
    #[serde(default)]
    pub git: String,
    #[serde(default)]
    pub log_level: String,
    /// Log destination; `~` is expanded. Empty disables logging.
    #[serde(default)]
    pub log_file: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GitConfig {
    /// Command names used when git cannot list its own.
    #[serde(default)]
    pub fallback_commands: Vec<String>,
    /// Names always treated as git commands (aliases).
    #[serde(default)]
    pub extra_commands: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    git: GitOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    git: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GitOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    fallback_commands: Vec<String>,
    #[serde(default)]
    extra_commands: Vec<String>,
    #[serde(default)]
    remove_fallback_commands: Vec<String>,
    #[serde(default)]
    remove_extra_commands: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/gitsh/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/gitsh/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/gitsh/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("gitsh: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        let s = overlay.settings;
        if let Some(v) = s.git {
            self.settings.git = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }

        // Git
        let g = overlay.git;
        merge_list(
            &mut self.git.fallback_commands,
            g.fallback_commands,
            &g.remove_fallback_commands,
            g.replace,
        );
        merge_list(
            &mut self.git.extra_commands,
            g.extra_commands,
            &g.remove_extra_commands,
            g.replace,
        );
    }

    /// The git program, defaulting to `git` when unset.
    pub fn git_program(&self) -> &str {
        if self.settings.git.is_empty() {
            "git"
        } else {
            &self.settings.git
        }
    }

    /// The expanded log file path, or `None` when logging is disabled.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        let raw = self.settings.log_file.trim();
        if raw.is_empty() {
            return None;
        }
        Some(PathBuf::from(shellexpand::tilde(raw).into_owned()))
    }

    /// Serialize the merged configuration for `--dump-config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert_eq!(config.git_program(), "git");
        assert_eq!(config.settings.log_level, "warn");
        assert!(!config.git.fallback_commands.is_empty());
        assert!(config.git.extra_commands.is_empty());
    }

    #[test]
    fn default_fallback_has_common_commands() {
        let config = Config::default_config();
        for name in ["status", "commit", "push", "diff", "log"] {
            assert!(config.git.fallback_commands.contains(&name.to_string()));
        }
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_overrides_scalars() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            git = "/usr/local/bin/git"
            log_level = "debug"
        "#,
        );
        assert_eq!(config.git_program(), "/usr/local/bin/git");
        assert_eq!(config.settings.log_level, "debug");
        // Unset scalars keep defaults
        assert_eq!(config.settings.log_file, "~/.local/share/gitsh/gitsh.log");
    }

    #[test]
    fn overlay_extends_extra_commands() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            extra_commands = ["lg", "co"]
        "#,
        );
        assert_eq!(config.git.extra_commands, vec!["lg", "co"]);
        assert!(config.git.fallback_commands.contains(&"status".to_string()));
    }

    #[test]
    fn overlay_removes_fallback_commands() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            remove_fallback_commands = ["bisect"]
        "#,
        );
        assert!(!config.git.fallback_commands.contains(&"bisect".to_string()));
        assert!(config.git.fallback_commands.contains(&"blame".to_string()));
    }

    #[test]
    fn overlay_replace_git() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            replace = true
            fallback_commands = ["status", "log"]
        "#,
        );
        assert_eq!(config.git.fallback_commands, vec!["status", "log"]);
        assert!(config.git.extra_commands.is_empty());
    }

    #[test]
    fn overlay_no_duplicates() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            fallback_commands = ["status"]
        "#,
        );
        let count = config
            .git
            .fallback_commands
            .iter()
            .filter(|s| *s == "status")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(
            config.git.fallback_commands.len(),
            original.git.fallback_commands.len()
        );
        assert_eq!(config.settings.git, original.settings.git);
    }

    #[test]
    fn empty_log_file_disables_logging() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            log_file = ""
        "#,
        );
        assert_eq!(config.log_file_path(), None);
    }

    #[test]
    fn absolute_log_file_unchanged() {
        let mut config = Config::default_config();
        config.settings.log_file = "/tmp/gitsh.log".into();
        assert_eq!(config.log_file_path(), Some(PathBuf::from("/tmp/gitsh.log")));
    }

    #[test]
    fn dump_round_trips() {
        let config = Config::default_config();
        let dumped = config.to_toml().unwrap();
        let reparsed: Config = toml::from_str(&dumped).unwrap();
        assert_eq!(reparsed.git.fallback_commands, config.git.fallback_commands);
    }
}
