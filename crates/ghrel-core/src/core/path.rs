use crate::core::error::{GhrelError, GhrelResult};
use std::path::PathBuf;

/// Get the ghrel home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\ghrel
/// - Linux: ~/.config/ghrel
/// - macOS: ~/Library/Application Support/ghrel
pub fn ghrel_home() -> GhrelResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| GhrelError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("ghrel"))
}

/// Get the config file path
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\ghrel\config.yaml
/// - Linux: ~/.config/ghrel/config.yaml
/// - macOS: ~/Library/Application Support/ghrel/config.yaml
pub fn config_file() -> GhrelResult<PathBuf> {
    Ok(ghrel_home()?.join("config.yaml"))
}
