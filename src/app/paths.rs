// SPDX-License-Identifier: MPL-2.0
//! Location of the application configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **CLI argument** (`--config-dir`)
//! 2. **Environment variable** (`CARNELLI_MARINE_CONFIG_DIR`, if non-empty)
//! 3. **Platform default** via the `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CarnelliMarine";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CARNELLI_MARINE_CONFIG_DIR";

/// Returns the configuration directory.
///
/// `cli_override` is the value of `--config-dir`, if given. Returns `None`
/// only when no override is set and the platform has no config directory.
#[must_use]
pub fn config_dir(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        cli_override,
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Applies the resolution order to already-gathered candidates.
fn resolve(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path);
    }

    if let Some(env_path) = env_value.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_wins() {
        let path = resolve(
            Some(PathBuf::from("/cli")),
            Some("/env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(path, Some(PathBuf::from("/cli")));
    }

    #[test]
    fn env_var_beats_platform_default() {
        let path = resolve(None, Some("/env".to_string()), Some(PathBuf::from("/platform")));
        assert_eq!(path, Some(PathBuf::from("/env")));
    }

    #[test]
    fn empty_env_var_uses_default() {
        let path = resolve(None, Some(String::new()), Some(PathBuf::from("/platform")));
        assert_eq!(path, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn no_candidate_yields_none() {
        assert_eq!(resolve(None, None, None), None);
    }

    #[test]
    fn platform_config_dir_contains_app_name() {
        if let Some(path) = resolve(None, None, dirs::config_dir()) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
