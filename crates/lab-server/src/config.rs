use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_EXPORT_OUTPUT_PATH: &str = "artifacts/convergence.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub export_output_path: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidExportOutputPath,
    NonUnicodeListenAddr,
    NonUnicodeExportOutput,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "RUIN_LAB_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidExportOutputPath => {
                write!(f, "RUIN_LAB_EXPORT_OUTPUT must not be empty or whitespace")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "RUIN_LAB_ADDR contains non-unicode data")
            }
            Self::NonUnicodeExportOutput => {
                write!(f, "RUIN_LAB_EXPORT_OUTPUT contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            Self::InvalidExportOutputPath
            | Self::NonUnicodeListenAddr
            | Self::NonUnicodeExportOutput => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("RUIN_LAB_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let export_output_path = match env::var("RUIN_LAB_EXPORT_OUTPUT") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidExportOutputPath);
                }
                value
            }
            Err(env::VarError::NotPresent) => DEFAULT_EXPORT_OUTPUT_PATH.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeExportOutput);
            }
        };

        Ok(Self {
            listen_addr,
            export_output_path,
        })
    }
}
