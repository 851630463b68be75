// src/infra/paths.rs — Config path resolution
//
// Respects the STOCKROOM_HOME environment variable for isolation. When set,
// config lives under that directory; when unset, under ~/.stockroom/.

use std::path::PathBuf;

/// Returns the STOCKROOM_HOME override, if set.
fn stockroom_home() -> Option<PathBuf> {
    std::env::var_os("STOCKROOM_HOME").map(PathBuf::from)
}

/// Configuration directory: $STOCKROOM_HOME/ or ~/.stockroom/
pub fn config_dir() -> PathBuf {
    if let Some(home) = stockroom_home() {
        return home;
    }
    dirs_home().join(".stockroom")
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_config_dir() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.starts_with(config_dir()));
    }
}
