use crate::error::{DeployError, Result};
use alloy_signer_local::PrivateKeySigner;
use std::fmt;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_RPC_URL: &str = "https://testnet-rpc.monad.xyz";
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/bountyfactory.sol/BountyFactory.json";

pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const RPC_URL_VAR: &str = "RPC_URL";
pub const ARTIFACT_PATH_VAR: &str = "ARTIFACT_PATH";

/// Hex encoded signing key. Never printed, neither by `Debug` nor `Display`.
#[derive(Clone)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Loads `.env` from the working directory if there is one.
fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(DeployError::Config(format!("failed to load .env: {}", e))),
    }
    Ok(())
}

/// Artifact location alone, for tools that never talk to a node.
pub fn artifact_path_from_env() -> PathBuf {
    if let Err(e) = load_dotenv() {
        tracing::warn!(error = %e, "ignoring .env");
    }
    artifact_path_from_lookup(|key| std::env::var(key).ok())
}

pub fn artifact_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    let path = lookup(ARTIFACT_PATH_VAR)
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.to_string());
    PathBuf::from(path)
}

#[derive(Clone, Debug)]
pub struct Config {
    pub rpc_url: Url,
    pub artifact_path: PathBuf,
    pub private_key: Option<PrivateKey>,
}

impl Config {
    /// Reads the configuration from the process environment, after loading
    /// `.env` from the working directory if there is one.
    pub fn from_env() -> Result<Self> {
        load_dotenv()?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let rpc_url = lookup(RPC_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let rpc_url = Url::parse(rpc_url.trim())
            .map_err(|e| DeployError::Config(format!("invalid {} {:?}: {}", RPC_URL_VAR, rpc_url, e)))?;
        Ok(Config {
            rpc_url,
            artifact_path: artifact_path_from_lookup(&lookup),
            private_key: lookup(PRIVATE_KEY_VAR).map(PrivateKey::new),
        })
    }

    /// Derives the signing identity. Touches no network.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        let key = self
            .private_key
            .as_ref()
            .ok_or_else(|| DeployError::Config(format!("missing env var {}", PRIVATE_KEY_VAR)))?;
        let key = key.0.trim();
        if key.is_empty() {
            return Err(DeployError::Config(format!("env var {} is empty", PRIVATE_KEY_VAR)));
        }
        // the parse error may quote parts of the key
        key.parse::<PrivateKeySigner>().map_err(|_| {
            DeployError::Config(format!(
                "malformed {}: expected a 32 byte hex encoded secp256k1 key",
                PRIVATE_KEY_VAR
            ))
        })
    }
}
