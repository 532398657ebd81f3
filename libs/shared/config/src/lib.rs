use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

pub mod resolver;

pub use resolver::{is_truthy, resolve, resolve_truthy, PropertyBag};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Parent directory for per-call certificate directories. `None` uses the OS temp dir.
    pub cert_temp_root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cert_temp_root: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_address = match env::var("EXECUTOR_BIND_ADDRESS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("EXECUTOR_BIND_ADDRESS '{}' is not a socket address, using default", raw);
                default_bind_address()
            }),
            Err(_) => {
                warn!("EXECUTOR_BIND_ADDRESS not set, using default");
                default_bind_address()
            }
        };

        let cert_temp_root = env::var("NAGIOSREST_CERT_TMPDIR")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self {
            bind_address,
            cert_temp_root,
        }
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert!(config.cert_temp_root.is_none());
    }
}
