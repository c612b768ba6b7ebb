use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}

// Runtime selects how the router is served
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum Runtime {
    Http,
    Lambda,
}

impl TryFrom<&str> for Runtime {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Runtime::Http),
            "lambda" => Ok(Runtime::Lambda),
            other => Err(LibraryError::validation(
                format!("unknown runtime {}", other).as_str(), Some("BOOKS_RUNTIME".to_string()))),
        }
    }
}

impl Display for Runtime {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Runtime::Http => write!(f, "http"),
            Runtime::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub host: String,
    pub port: u16,
    pub runtime: Runtime,
    pub seed: bool,
}

impl Configuration {
    pub fn new(host: &str, port: u16) -> Self {
        Configuration {
            host: host.to_string(),
            port,
            runtime: Runtime::Http,
            seed: true,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let host = lookup("BOOKS_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("BOOKS_PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|err| LibraryError::validation(
                format!("invalid port {} due to {}", port, err).as_str(), Some("BOOKS_PORT".to_string())))?,
            None => 8000,
        };
        let runtime = match lookup("BOOKS_RUNTIME") {
            Some(runtime) => Runtime::try_from(runtime.as_str())?,
            None if lookup("AWS_LAMBDA_RUNTIME_API").is_some() => Runtime::Lambda,
            None => Runtime::Http,
        };
        let seed = !matches!(lookup("BOOKS_SEED").as_deref(), Some("false") | Some("0"));
        Ok(Configuration { host, port, runtime, seed })
    }

    pub fn socket_addr(&self) -> LibraryResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse::<SocketAddr>().map_err(|err| LibraryError::validation(
            format!("invalid address {}:{} due to {}", self.host, self.port, err).as_str(), Some("BOOKS_HOST".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, Runtime};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("127.0.0.1", 8000);
        assert_eq!(Runtime::Http, config.runtime);
        assert!(config.seed);
        assert_eq!("127.0.0.1:8000", config.socket_addr().expect("should parse").to_string());
    }

    #[tokio::test]
    async fn test_should_use_defaults_without_env() {
        let config = Configuration::from_lookup(lookup(&[])).expect("should build config");
        assert_eq!(Configuration::new("127.0.0.1", 8000), config);
    }

    #[tokio::test]
    async fn test_should_read_env() {
        let config = Configuration::from_lookup(lookup(&[
            ("BOOKS_HOST", "0.0.0.0"),
            ("BOOKS_PORT", "9090"),
            ("BOOKS_RUNTIME", "Lambda"),
            ("BOOKS_SEED", "false"),
        ])).expect("should build config");
        assert_eq!("0.0.0.0", config.host);
        assert_eq!(9090, config.port);
        assert_eq!(Runtime::Lambda, config.runtime);
        assert!(!config.seed);
    }

    #[tokio::test]
    async fn test_should_detect_lambda_runtime() {
        let config = Configuration::from_lookup(lookup(&[
            ("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt"),
        ])).expect("should build config");
        assert_eq!(Runtime::Lambda, config.runtime);
    }

    #[tokio::test]
    async fn test_should_reject_bad_port() {
        assert!(Configuration::from_lookup(lookup(&[("BOOKS_PORT", "http")])).is_err());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_runtime() {
        assert!(Configuration::from_lookup(lookup(&[("BOOKS_RUNTIME", "grpc")])).is_err());
    }

    #[tokio::test]
    async fn test_should_reject_bad_host() {
        let config = Configuration::new("not a host", 8000);
        assert!(config.socket_addr().is_err());
    }
}
