//! # Greeter Contract Client
//!
//! `ethers` binding for the greeter contract (`greet` / `setGreeting`) plus a
//! receipt wait that polls `eth_getTransactionReceipt` until the transaction is
//! mined, reverted, or the configured timeout passes.

use async_trait::async_trait;
use ethers::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

use super::wallet::EthWallet;
use crate::core::service::GreeterContract;

abigen!(
    Greeter,
    r#"[
        function greet() external view returns (string)
        function setGreeting(string _greeting) external
    ]"#
);

type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Greeter contract errors
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Read failed: {0}")]
    Read(String),
    /// Rejected by the node or failed gas estimation
    #[error("Submit failed: {0}")]
    Submit(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Invalid transaction hash: {0}")]
    InvalidHash(String),
    /// Mined with `status == 0`
    #[error("Transaction {0} reverted")]
    Reverted(String),
    #[error("Timed out after {0}s waiting for receipt")]
    Timeout(u64),
}

/// Summary of a mined, successful transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptInfo {
    pub tx_hash: String,
    pub block_number: Option<u64>,
    pub gas_used: Option<String>,
}

/// Signing greeter client over HTTP.
pub struct GreeterClient {
    contract: Greeter<SignerClient>,
    provider: Provider<Http>,
    receipt_poll: Duration,
    receipt_timeout: Duration,
}

impl GreeterClient {
    pub fn new(address: Address, wallet: &EthWallet, receipt_poll: Duration, receipt_timeout: Duration) -> Self {
        let provider = wallet.provider().clone();
        let client = Arc::new(SignerMiddleware::new(provider.clone(), wallet.signer().clone()));

        Self {
            contract: Greeter::new(address, client),
            provider,
            receipt_poll,
            receipt_timeout,
        }
    }
}

#[async_trait]
impl GreeterContract for GreeterClient {
    async fn read_greeting(&self) -> Result<String, ContractError> {
        self.contract
            .greet()
            .call()
            .await
            .map_err(|e| ContractError::Read(e.to_string()))
    }

    async fn write_greeting(&self, value: &str) -> Result<String, ContractError> {
        let call = self.contract.set_greeting(value.to_string());
        let pending = call
            .send()
            .await
            .map_err(|e| ContractError::Submit(e.to_string()))?;
        let tx_hash: TxHash = *pending;
        Ok(format!("{:?}", tx_hash))
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<ReceiptInfo, ContractError> {
        let hash: TxHash = tx_hash
            .parse()
            .map_err(|_| ContractError::InvalidHash(tx_hash.to_string()))?;
        let started = Instant::now();

        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(hash)
                .await
                .map_err(|e| ContractError::Rpc(e.to_string()))?;

            if let Some(receipt) = receipt {
                return receipt_info(tx_hash, &receipt);
            }

            if started.elapsed() >= self.receipt_timeout {
                return Err(ContractError::Timeout(self.receipt_timeout.as_secs()));
            }

            tokio::time::sleep(self.receipt_poll).await;
        }
    }
}

fn receipt_info(tx_hash: &str, receipt: &TransactionReceipt) -> Result<ReceiptInfo, ContractError> {
    if receipt.status == Some(U64::zero()) {
        return Err(ContractError::Reverted(tx_hash.to_string()));
    }

    Ok(ReceiptInfo {
        tx_hash: tx_hash.to_string(),
        block_number: receipt.block_number.map(|n| n.as_u64()),
        gas_used: receipt.gas_used.map(|g| g.to_string()),
    })
}
