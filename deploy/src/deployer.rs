use crate::artifact::Artifact;
use crate::error::{DeployError, Result};
use crate::shared::Config;
use alloy_dyn_abi::DynSolValue;
use alloy_network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, TxHash};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

/// A node the deployer talks to, already bound to a signing wallet.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Network: Send + Sync {
    fn chain_id(&self) -> u64;

    /// Signs and sends the transaction, returning as soon as the node
    /// accepted it.
    async fn submit(&self, tx: TransactionRequest) -> Result<TxHash>;

    /// Blocks until the transaction is mined and returns the address of the
    /// contract it created.
    async fn confirm(&self, tx_hash: TxHash) -> Result<Address>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, rpc_url: &Url, signer: PrivateKeySigner) -> Result<Box<dyn Network>>;
}

/// Connects to EVM JSON-RPC nodes over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlloyConnector;

#[async_trait]
impl Connector for AlloyConnector {
    async fn connect(&self, rpc_url: &Url, signer: PrivateKeySigner) -> Result<Box<dyn Network>> {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url.clone())
            .erased();
        // the http transport is lazy, ask for the chain id to find out whether
        // the node is actually there
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| DeployError::Connection(format!("{}: {}", rpc_url, e)))?;
        Ok(Box::new(AlloyNetwork { provider, chain_id }))
    }
}

pub struct AlloyNetwork {
    provider: DynProvider,
    chain_id: u64,
}

#[async_trait]
impl Network for AlloyNetwork {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn submit(&self, tx: TransactionRequest) -> Result<TxHash> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::Submission(e.to_string()))?;
        Ok(*pending.tx_hash())
    }

    async fn confirm(&self, tx_hash: TxHash) -> Result<Address> {
        // `get_receipt` keeps polling for the receipt while the heartbeat
        // watches blocks, so a tx mined before the watcher is installed
        // still resolves
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|e| DeployError::Confirmation(format!("{} not confirmed: {}", tx_hash, e)))?;
        created_contract(tx_hash, &receipt)
    }
}

/// Address of the contract created by a mined transaction.
fn created_contract(tx_hash: TxHash, receipt: &impl ReceiptResponse) -> Result<Address> {
    if !receipt.status() {
        return Err(DeployError::Confirmation(format!(
            "{} reverted in block {:?}",
            tx_hash,
            receipt.block_number()
        )));
    }
    receipt
        .contract_address()
        .ok_or_else(|| DeployError::Confirmation(format!("{} created no contract", tx_hash)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub deployer: Address,
    pub chain_id: u64,
    pub deployed_at: DateTime<Utc>,
}

pub struct Deployer<C> {
    config: Config,
    connector: C,
}

impl<C: Connector> Deployer<C> {
    pub fn new(config: Config, connector: C) -> Self {
        Self { config, connector }
    }

    pub async fn deploy(&self, artifact: &Artifact) -> Result<Deployment> {
        let signer = self.config.signer()?;
        let deployer = signer.address();
        tracing::info!(%deployer, "deployer wallet");

        let network = self.connector.connect(&self.config.rpc_url, signer).await?;
        let chain_id = network.chain_id();
        tracing::info!(rpc_url = %self.config.rpc_url, chain_id, "connected");

        // the contract is owned by whoever deploys it
        let code = artifact.deploy_code(&[DynSolValue::Address(deployer)])?;
        let tx = TransactionRequest::default()
            .with_from(deployer)
            .with_deploy_code(code);

        let transaction_hash = network.submit(tx).await?;
        tracing::info!(%transaction_hash, "creation transaction submitted, waiting for confirmation");

        let address = network.confirm(transaction_hash).await?;
        let deployment = Deployment {
            address,
            transaction_hash,
            deployer,
            chain_id,
            deployed_at: Utc::now(),
        };
        tracing::info!(?deployment, "contract deployed");
        Ok(deployment)
    }
}
