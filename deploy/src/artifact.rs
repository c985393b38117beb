use crate::error::{DeployError, LoadError};
use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{hex, Bytes};
use serde::Deserialize;
use std::path::Path;

/// Compiled contract as produced by the compiler toolchain.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
}

// Hardhat stores the creation code as a plain string, Foundry nests it
// under `object`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn into_hex(self) -> String {
        match self {
            RawBytecode::Hex(hex) => hex,
            RawBytecode::Object { object } => object,
        }
    }
}

impl Artifact {
    /// Reads and parses the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let code = raw.bytecode.into_hex();
        let bytecode = hex::decode(code.trim()).map_err(|e| LoadError::Bytecode(e.to_string()))?;
        if bytecode.is_empty() {
            return Err(LoadError::EmptyBytecode);
        }
        Ok(Self {
            contract_name: raw.contract_name,
            abi: raw.abi,
            bytecode: bytecode.into(),
        })
    }

    /// Human readable constructor signature, e.g. `constructor(address)`.
    pub fn constructor_signature(&self) -> String {
        let inputs = self
            .abi
            .constructor()
            .map(|constructor| {
                constructor
                    .inputs
                    .iter()
                    .map(|param| param.selector_type().into_owned())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        format!("constructor({})", inputs.join(","))
    }

    /// Multi-line overview of what would be deployed.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Contract: {}", self.contract_name.as_deref().unwrap_or("<unnamed>")),
            format!("Constructor: {}", self.constructor_signature()),
            format!("Bytecode: {} bytes", self.bytecode.len()),
        ];
        lines.extend(self.abi.functions().map(|function| format!("  function {}", function.signature())));
        lines.extend(self.abi.events().map(|event| format!("  event {}", event.signature())));
        lines.extend(self.abi.errors().map(|error| format!("  error {}", error.signature())));
        lines.join("\n")
    }

    /// Creation code followed by the ABI-encoded constructor arguments.
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes, DeployError> {
        let encoded_args = match self.abi.constructor() {
            Some(constructor) => constructor
                .abi_encode_input(args)
                .map_err(|e| DeployError::Constructor(format!("{}: {}", self.constructor_signature(), e)))?,
            None if args.is_empty() => Vec::new(),
            None => {
                return Err(DeployError::Constructor(format!(
                    "artifact declares no constructor but {} argument(s) were given",
                    args.len()
                )))
            }
        };
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }
}
