use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "twentytwenty";
const LOG_FILE: &str = "twentytwenty.log";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(Self::log_path_under_home(Path::new(&home)))
        } else {
            ProjectDirs::from("", "", APP_DIR)
                .map(|proj_dirs| proj_dirs.data_local_dir().join(LOG_FILE))
        }
    }

    fn log_path_under_home(home: &Path) -> PathBuf {
        home.join(".local")
            .join("state")
            .join(APP_DIR)
            .join(LOG_FILE)
    }
}
