use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::{CONFIG_FILE_NAME, SiteConfig};

pub type SiteConfigManager = ConfigManager<FileContentConfigProvider, SiteConfig, YamlConfigSerializer>;

/// Config file next to the executable, or in the working directory when the
/// executable path is unknown.
pub fn get_config_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(override_path: Option<&Path>) -> SiteConfigManager {
    ConfigManager::from_yaml_file(get_config_path(override_path))
}
