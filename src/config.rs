//! Configuration loading (.env + environment + flags)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cli::ConnectionArgs;
use crate::netbox::ConnectionConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Netbox URL is required; pass --url or set NETBOX_URL")]
    MissingUrl,
    #[error("Netbox API token is required; pass --token or set NETBOX_TOKEN")]
    MissingToken,
    #[error("timeout must be at least one second")]
    InvalidTimeout,
}

/// Directory searched for `.env`
pub fn project_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NETBOX_CLI_DIR") {
        return PathBuf::from(dir);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Load `.env` from the project directory. A missing file is fine; returns
/// the path that was loaded, if any. Variables already set win.
pub fn load_env() -> Result<Option<PathBuf>, dotenvy::Error> {
    let env_path = project_dir().join(".env");
    if !env_path.is_file() {
        return Ok(None);
    }
    dotenvy::from_path(&env_path)?;
    Ok(Some(env_path))
}

/// Turn the connection flags into a usable configuration
pub fn resolve(args: &ConnectionArgs) -> Result<ConnectionConfig, ConfigError> {
    let base_url = non_empty(args.url.as_deref()).ok_or(ConfigError::MissingUrl)?;
    let token = non_empty(args.token.as_deref()).ok_or(ConfigError::MissingToken)?;

    if args.timeout == 0 {
        return Err(ConfigError::InvalidTimeout);
    }

    Ok(ConnectionConfig {
        base_url,
        token,
        verify_tls: !args.insecure,
        ca_cert: args.ca_cert.clone(),
        timeout: Duration::from_secs(args.timeout),
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn args(url: Option<&str>, token: Option<&str>) -> ConnectionArgs {
        ConnectionArgs {
            url: url.map(String::from),
            token: token.map(String::from),
            insecure: false,
            ca_cert: None,
            timeout: 30,
        }
    }

    #[test]
    fn resolves_complete_arguments() {
        let mut input = args(Some(" https://nb.example.com "), Some("abc123"));
        input.insecure = true;
        input.timeout = 5;

        let config = resolve(&input).unwrap();
        assert_eq!(config.base_url, "https://nb.example.com");
        assert_eq!(config.token, "abc123");
        assert!(!config.verify_tls);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn errors_name_the_missing_setting() {
        let err = resolve(&args(None, Some("abc"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl));
        assert!(err.to_string().contains("NETBOX_URL"));

        let err = resolve(&args(Some("https://nb"), Some("   "))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
        assert!(err.to_string().contains("NETBOX_TOKEN"));

        let mut zero = args(Some("https://nb"), Some("abc"));
        zero.timeout = 0;
        assert!(matches!(resolve(&zero), Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn loads_env_file_from_project_dir() {
        let _guard = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap();
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "NETBOX_CLI_TEST_URL=https://from-dotenv.example.com\n",
        )
        .unwrap();

        std::env::set_var("NETBOX_CLI_DIR", dir.path());
        std::env::remove_var("NETBOX_CLI_TEST_URL");

        let loaded = load_env().unwrap();
        assert_eq!(loaded, Some(dir.path().join(".env")));
        assert_eq!(
            std::env::var("NETBOX_CLI_TEST_URL").unwrap(),
            "https://from-dotenv.example.com"
        );

        std::env::remove_var("NETBOX_CLI_DIR");
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        let _guard = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap();
        let dir = tempdir().unwrap();
        std::env::set_var("NETBOX_CLI_DIR", dir.path());

        assert_eq!(load_env().unwrap(), None);

        std::env::remove_var("NETBOX_CLI_DIR");
    }
}
