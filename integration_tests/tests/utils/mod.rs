use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use alloy_primitives::{hex, Address, TxHash};
use alloy_signer_local::PrivateKeySigner;
use deploy::deployer::{MockConnector, MockNetwork, Network};
use deploy::error::DeployError;
use deploy::shared::Config;
use rand::Rng;

pub const MONAD_TESTNET_CHAIN_ID: u64 = 10143;

pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub fn bounty_factory_path() -> String {
    fixture_path("BountyFactory.json")
}

pub fn random_private_key() -> String {
    let mut rng = rand::thread_rng();
    hex::encode_prefixed(rng.gen::<[u8; 32]>())
}

pub fn address_of(private_key: &str) -> Address {
    private_key.parse::<PrivateKeySigner>().unwrap().address()
}

pub fn config(vars: HashMap<&str, String>) -> Config {
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Behaviour of the simulated node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Unreachable,
    Accepting,
    Rejecting,
    Reverting,
}

/// Nonce shared by every network handed out, so consecutive deployments of
/// the same wallet land on different addresses like on a real chain.
#[derive(Clone, Default)]
pub struct Chain {
    nonce: Arc<AtomicU64>,
}

impl Chain {
    pub fn connector(&self, node: Node) -> MockConnector {
        let mut connector = MockConnector::new();
        let nonce = self.nonce.clone();
        connector.expect_connect().times(1).return_once(move |url, signer| {
            if node == Node::Unreachable {
                return Err(DeployError::Connection(format!("{}: connection refused", url)));
            }
            Ok(Box::new(network(node, signer.address(), nonce)) as Box<dyn Network>)
        });
        connector
    }
}

fn network(node: Node, deployer: Address, nonce: Arc<AtomicU64>) -> MockNetwork {
    let mut network = MockNetwork::new();
    network.expect_chain_id().return_const(MONAD_TESTNET_CHAIN_ID);
    let submitted = nonce.clone();
    network.expect_submit().times(1).returning(move |_| match node {
        Node::Rejecting => Err(DeployError::Submission(
            "server returned an error response: error code -32000: insufficient funds for gas * price + value".to_string(),
        )),
        _ => {
            let nonce = submitted.load(Ordering::SeqCst);
            Ok(TxHash::left_padding_from(&nonce.to_be_bytes()))
        }
    });
    if node != Node::Rejecting {
        network.expect_confirm().times(1).returning(move |tx_hash| match node {
            Node::Reverting => Err(DeployError::Confirmation(format!("{} reverted", tx_hash))),
            _ => Ok(deployer.create(nonce.fetch_add(1, Ordering::SeqCst))),
        });
    }
    network
}
