use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8096";
pub const DEFAULT_CONTENT_DIR: &str = "/downloads";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Library to register on the server.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub name: String,
    pub collection_type: String,
    pub path: String,
}

/// Everything the init binary needs, read from env vars with literal
/// defaults. Fixed dev credentials are deliberate: this tool only ever
/// targets disposable development servers.
#[derive(Debug, Clone)]
pub struct InitConfig {
    pub server_url: String,
    pub admin_username: String,
    pub admin_password: String,
    pub username: String,
    pub password: String,
    pub library: LibraryConfig,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl InitConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: env_or("URL", DEFAULT_SERVER_URL),
            admin_username: env_or("ADMIN_USERNAME", "admin"),
            admin_password: env_or("ADMIN_PASSWORD", "password"),
            username: env_or("USERNAME", "user"),
            password: env_or("PASSWORD", "password"),
            library: LibraryConfig {
                name: env_or("COLLECTION_NAME", "Movies"),
                collection_type: env_or("COLLECTION_TYPE", "movies"),
                path: env_or("COLLECTION_PATH", "/media/movies"),
            },
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

pub fn content_base_dir_from_env() -> PathBuf {
    PathBuf::from(env_or("CONTENT_DIR", DEFAULT_CONTENT_DIR))
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}
