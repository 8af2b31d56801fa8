//! # Wallet Handlers
//!
//! Building the wallet and contract services when the user clicks Connect.

use ethers::types::Address;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::DappConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{GreeterContract, WalletProvider};
use crate::services::greeter::GreeterClient;
use crate::services::wallet::EthWallet;

/// Services for one connected wallet session
pub(crate) struct ConnectedServices {
    pub wallet: Arc<dyn WalletProvider>,
    pub contract: Arc<dyn GreeterContract>,
}

/// Load the configured key and build the ethers-backed services.
///
/// Purely local: no RPC call is made until the first refresh.
///
/// Internal handler function - use [`crate::app::App::handle_wallet_connect_click`] instead.
pub(crate) fn connect_from_config(config: &DappConfig) -> Result<ConnectedServices> {
    let private_key = EthWallet::resolve_private_key(config.key_file.as_deref())?;
    let wallet = EthWallet::from_private_key(&config.rpc_url, &private_key, config.required_chain.id)?;

    let greeter_address = Address::from_str(&config.greeter_address)
        .map_err(|e| AppError::Config(format!("invalid greeter_address: {}", e)))?;
    let contract = GreeterClient::new(
        greeter_address,
        &wallet,
        config.receipt_poll_interval(),
        config.receipt_timeout(),
    );

    tracing::info!(
        rpc_url = %config.rpc_url,
        greeter = %config.greeter_address,
        "Wallet services created"
    );

    Ok(ConnectedServices {
        wallet: Arc::new(wallet),
        contract: Arc::new(contract),
    })
}
