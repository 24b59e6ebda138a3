use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Artifact shipped with the repository; used when MODEL_PATH is unset.
pub const DEFAULT_MODEL_PATH: &str = "models/g3_logreg.json";

const DEFAULT_PORT: u16 = 8080;

/// Server configuration, resolved once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub model_path: PathBuf,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Reads MODEL_PATH and PORT, falling back to the bundled artifact and
    /// port 8080.
    pub fn from_env() -> Self {
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            model_path,
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
        }
    }
}
