use crate::error::{CliError, CliResult};
use distri_sdk::constants::DEFAULT_MINT;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use url::Url;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 3_000;

/// Optional YAML config file. Every field can also be given on the command
/// line or through the environment, which take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub rpc_url: Option<String>,
    pub program_id: Option<String>,
    pub mint: Option<String>,
    pub keypair_path: Option<PathBuf>,
    pub settle_delay_ms: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Fields set in `overrides` replace the file's.
    pub fn merge(self, overrides: ConfigFile) -> ConfigFile {
        ConfigFile {
            rpc_url: overrides.rpc_url.or(self.rpc_url),
            program_id: overrides.program_id.or(self.program_id),
            mint: overrides.mint.or(self.mint),
            keypair_path: overrides.keypair_path.or(self.keypair_path),
            settle_delay_ms: overrides.settle_delay_ms.or(self.settle_delay_ms),
        }
    }
}

/// Fully resolved settings, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub rpc_url: Url,
    pub program_id: Pubkey,
    pub mint: Pubkey,
    pub keypair_path: PathBuf,
    pub settle_delay: Duration,
}

impl MarketConfig {
    pub fn load(path: Option<&Path>, overrides: ConfigFile) -> CliResult<Self> {
        let file = match path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file.merge(overrides))
    }

    pub fn resolve(file: ConfigFile) -> CliResult<Self> {
        let rpc_url = file.rpc_url.as_deref().unwrap_or(DEFAULT_RPC_URL);
        let rpc_url = Url::parse(rpc_url)
            .map_err(|e| CliError::InvalidConfig(format!("rpc_url {}: {}", rpc_url, e)))?;
        if !matches!(rpc_url.scheme(), "http" | "https") {
            return Err(CliError::InvalidConfig(format!(
                "rpc_url must be http(s), got {}",
                rpc_url
            )));
        }

        let program_id = file
            .program_id
            .as_deref()
            .ok_or_else(|| CliError::InvalidConfig("program_id is required".to_string()))
            .and_then(parse_pubkey)?;

        let mint = match file.mint.as_deref() {
            Some(mint) => parse_pubkey(mint)?,
            None => DEFAULT_MINT,
        };

        let keypair_path = match file.keypair_path {
            Some(path) => path,
            None => default_keypair_path()?,
        };

        Ok(Self {
            rpc_url,
            program_id,
            mint,
            keypair_path,
            settle_delay: Duration::from_millis(
                file.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS),
            ),
        })
    }
}

pub fn parse_pubkey(value: &str) -> CliResult<Pubkey> {
    Pubkey::from_str(value).map_err(|e| CliError::InvalidPubkey {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn default_keypair_path() -> CliResult<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
        CliError::InvalidConfig("no keypair given and HOME is not set".to_string())
    })?;
    Ok(PathBuf::from(home).join(".config/solana/id.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PROGRAM_ID: &str = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS";

    fn overrides() -> ConfigFile {
        ConfigFile {
            keypair_path: Some(PathBuf::from("/tmp/id.json")),
            ..Default::default()
        }
    }

    #[test]
    fn test_program_id_is_required() {
        let result = MarketConfig::resolve(overrides());
        assert!(matches!(result, Err(CliError::InvalidConfig(msg)) if msg.contains("program_id")));
    }

    #[test]
    fn test_defaults() {
        let config = MarketConfig::resolve(ConfigFile {
            program_id: Some(PROGRAM_ID.to_string()),
            ..overrides()
        })
        .unwrap();

        assert_eq!(config.rpc_url.as_str(), "https://api.devnet.solana.com/");
        assert_eq!(config.program_id, parse_pubkey(PROGRAM_ID).unwrap());
        assert_eq!(config.mint, DEFAULT_MINT);
        assert_eq!(config.settle_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_bad_rpc_url() {
        for rpc_url in ["not a url", "ws://localhost:8900"] {
            let result = MarketConfig::resolve(ConfigFile {
                rpc_url: Some(rpc_url.to_string()),
                program_id: Some(PROGRAM_ID.to_string()),
                ..overrides()
            });
            assert!(matches!(result, Err(CliError::InvalidConfig(_))), "{}", rpc_url);
        }
    }

    #[test]
    fn test_rejects_bad_mint() {
        let result = MarketConfig::resolve(ConfigFile {
            program_id: Some(PROGRAM_ID.to_string()),
            mint: Some("not-a-pubkey".to_string()),
            ..overrides()
        });
        assert!(matches!(result, Err(CliError::InvalidPubkey { .. })));
    }

    #[test]
    fn test_file_values_overridden_by_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rpc_url: http://localhost:8899\nprogram_id: {}\nsettle_delay_ms: 500\nkeypair_path: /tmp/file.json",
            PROGRAM_ID
        )
        .unwrap();

        let config = MarketConfig::load(
            Some(file.path()),
            ConfigFile {
                settle_delay_ms: Some(0),
                ..overrides()
            },
        )
        .unwrap();

        assert_eq!(config.rpc_url.as_str(), "http://localhost:8899/");
        assert_eq!(config.settle_delay, Duration::ZERO);
        assert_eq!(config.keypair_path, PathBuf::from("/tmp/id.json"));
    }

    #[test]
    fn test_unknown_file_field_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "program: {}", PROGRAM_ID).unwrap();

        let result = MarketConfig::load(Some(file.path()), overrides());
        assert!(matches!(result, Err(CliError::Yaml(_))));
    }
}
