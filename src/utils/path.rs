use std::path::{Path, PathBuf};

/// Overrides the config directory (used by tests and portable installs)
pub const CONFIG_DIR_ENV: &str = "MINDFULBET_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory (`$MINDFULBET_CONFIG_DIR`, else `~/.config/mindfulbet`)
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".config").join("mindfulbet")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("mindfulbet")
}

/// Format a path for display, showing `~` for the home directory
pub fn format_path_for_display(path: &Path) -> String {
    let home_dir = get_home_dir();

    match path.strip_prefix(&home_dir) {
        Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
        Ok(relative) => format!("~/{}", relative.to_string_lossy()),
        Err(_) => path.to_string_lossy().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path_outside_home() {
        assert_eq!(
            format_path_for_display(Path::new("/definitely/not/home/config.toml")),
            "/definitely/not/home/config.toml"
        );
    }

    #[test]
    fn test_format_path_inside_home() {
        let p = get_home_dir().join(".config").join("mindfulbet");
        assert_eq!(format_path_for_display(&p), "~/.config/mindfulbet");
    }
}
