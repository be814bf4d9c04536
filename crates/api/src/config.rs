use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "DISHES_ENDPOINT";

/// Read `config.toml` and the environment once, caching the result.
///
/// Safe to call multiple times; only the first call reads anything. A
/// missing or unparseable file falls back to the built-in endpoint.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = read_config(CONFIG_PATH)
            .with_endpoint_override(std::env::var(ENDPOINT_ENV).ok());
        tracing::info!(endpoint = %config.submission.endpoint, "Submission endpoint configured");
        config
    })
}

/// Parse a config file, defaulting every setting it does not provide.
pub fn read_config(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DEFAULT_ENDPOINT;

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("dish-form-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_defaults() {
        let config = read_config("/definitely/not/here/config.toml");
        assert_eq!(config.submission.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn reads_endpoint_from_file() {
        let path = scratch_file(
            "valid.toml",
            "[submission]\nendpoint = \"http://127.0.0.1:8080/dishes/\"\n",
        );
        let config = read_config(&path);
        assert_eq!(config.submission.endpoint, "http://127.0.0.1:8080/dishes/");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unparseable_file_defaults() {
        let path = scratch_file("broken.toml", "[submission\nendpoint = ");
        let config = read_config(&path);
        assert_eq!(config.submission.endpoint, DEFAULT_ENDPOINT);
        let _ = std::fs::remove_file(path);
    }
}
