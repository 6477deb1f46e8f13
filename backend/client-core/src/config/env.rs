//! `.env` discovery.

use std::path::PathBuf;

use log::{info, warn};

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded `.env` file, if found.
    pub path: Option<PathBuf>,
    /// Whether any `.env` file was loaded.
    pub loaded: bool,
}

/// Load `.env` from the working directory, then from next to the executable.
///
/// Values already present in the process environment win over the file.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    let exe_env = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")))
        .filter(|path| path.exists());

    if let Some(env_path) = exe_env {
        match dotenvy::from_path(&env_path) {
            Ok(()) => {
                info!("Loaded .env from: {:?}", env_path);
                return EnvLoadResult {
                    path: Some(env_path),
                    loaded: true,
                };
            }
            Err(e) => warn!("Failed to parse .env at {:?}: {}", env_path, e),
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
    }
}
