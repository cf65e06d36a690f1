//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "lightslider";
const APPLICATION: &str = "lightslider-demo";

/// Name of the slider options file inside the config directory.
pub const CONFIG_FILE: &str = "slider.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/lightslider-demo` or `~/.config/lightslider-demo`
/// - macOS: `~/Library/Application Support/dev.lightslider.lightslider-demo`
/// - Windows: `C:\Users\<User>\AppData\Roaming\lightslider\lightslider-demo\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default location of the slider options file, if a home directory exists.
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}
