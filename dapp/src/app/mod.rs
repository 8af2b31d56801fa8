//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the egui page, the async wallet and
//! contract calls, and the shared page state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_*_click() - user action handlers           │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - account snapshot, signing, greeter, drafts        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio tasks (one TaskScope per session)        │
//! │  - account_refresh   chain id + balance                     │
//! │  - sign_message      personal sign                          │
//! │  - greeting_read     greet()                                │
//! │  - greeting_write    setGreeting(string)                    │
//! │  - receipt_wait      poll for the receipt                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sessions
//!
//! Connecting a wallet starts a session: a fresh event channel and a fresh
//! [`TaskScope`]. Disconnecting or shutting down closes the scope, aborting
//! whatever is still running, and drops the channel so late results from the
//! old session can never reach the new one.
//!
//! ## Related Modules
//!
//! - [`state`]: Page state and derived views
//! - [`greeter`]: Greeter contract binding
//! - [`events`]: Async task results
//! - [`handlers`]: User action handlers
//! - [`tasks`]: Background account refresh

mod event_handler;
mod events;
pub mod greeter;
mod handlers;
pub mod scope;
mod state;
mod tasks;

pub use events::AppEvent;
pub use greeter::{DisabledReason, GreeterBinding, GreeterState, TxLifecycle, UpdateControl};
pub use scope::TaskScope;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::DappConfig;
use crate::core::service::{GreeterContract, WalletProvider};

/// Page orchestrator.
///
/// Owns the shared [`AppState`], the event channel of the current wallet
/// session and the services of the connected wallet.
pub struct App {
    /// Thread-safe shared page state. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Results of the current session's async tasks, drained in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,

    config: DappConfig,

    wallet: Option<Arc<dyn WalletProvider>>,

    greeter: Option<GreeterBinding>,

    scope: TaskScope,

    shut_down: bool,
}

impl App {
    /// Create a disconnected page.
    pub fn new(config: DappConfig) -> Self {
        let state = AppState::new(config.required_chain.clone(), config.explorer_base_url.clone());
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            required_chain = config.required_chain.id,
            greeter = %config.greeter_address,
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            config,
            wallet: None,
            greeter: None,
            scope: TaskScope::new(),
            shut_down: false,
        }
    }

    /// Start a wallet session with the given services.
    ///
    /// Any previous session is torn down first. The account and the greeting
    /// are fetched right away.
    pub fn attach(&mut self, wallet: Arc<dyn WalletProvider>, contract: Arc<dyn GreeterContract>) {
        if self.shut_down {
            return;
        }
        self.end_session();

        let address = wallet.address();
        {
            let mut state = self.state.write();
            state.reset_session();
            state.account.address = Some(address.clone());
        }

        let greeter = GreeterBinding::new(
            contract,
            Arc::clone(&self.state),
            self.event_tx.clone(),
            self.scope.clone(),
        );
        greeter.refetch_greeting();

        self.wallet = Some(wallet);
        self.greeter = Some(greeter);
        self.refresh_account();

        tracing::info!(address = %address, "Wallet session started");
    }

    /// Close the current session's scope and open a fresh channel.
    fn end_session(&mut self) {
        self.scope.close();
        self.scope = TaskScope::new();

        let (event_tx, event_rx) = unbounded();
        self.event_tx = event_tx;
        self.event_rx = event_rx;

        self.wallet = None;
        self.greeter = None;
    }

    /// Called every frame: apply pending async results and keep the account fresh.
    pub fn on_tick(&mut self) {
        if self.shut_down {
            return;
        }

        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::debug!(events_processed = events_processed, "on_tick: Processed events");
        }

        let refresh_due = {
            let state = self.state.read();
            state.account.is_connected()
                && !state.account.refreshing
                && state
                    .account
                    .last_refresh
                    .map_or(true, |at| at.elapsed() >= self.config.account_poll_interval())
        };
        if refresh_due {
            self.refresh_account();
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    fn refresh_account(&self) {
        if let Some(wallet) = &self.wallet {
            tasks::account::refresh_account(
                Arc::clone(&self.state),
                self.event_tx.clone(),
                &self.scope,
                Arc::clone(wallet),
            );
        }
    }

    /// Connect using the key from the environment or the configured key file.
    pub fn handle_wallet_connect_click(&mut self) {
        self.state.write().connecting = true;

        match handlers::wallet::connect_from_config(&self.config) {
            Ok(services) => self.attach(services.wallet, services.contract),
            Err(e) => {
                tracing::warn!(error = %e, "Wallet connection failed");
                let mut state = self.state.write();
                state.connecting = false;
                state.notify(NotificationLevel::Error, e.to_string());
            }
        }
    }

    /// Drop the wallet and everything tied to it.
    pub fn handle_wallet_disconnect_click(&mut self) {
        self.end_session();
        self.state.write().reset_session();
        tracing::info!("Wallet disconnected");
    }

    pub fn handle_sign_click(&mut self) {
        if let Err(e) = handlers::signing::handle_sign_click(
            Arc::clone(&self.state),
            self.event_tx.clone(),
            &self.scope,
            self.wallet.clone(),
        ) {
            tracing::warn!(error = %e, "Sign request rejected");
        }
    }

    pub fn handle_set_greeting_click(&mut self) {
        if let Err(e) =
            handlers::greeting::handle_set_greeting_click(Arc::clone(&self.state), self.greeter.as_ref())
        {
            tracing::warn!(error = %e, "Update greeting rejected");
        }
    }

    pub fn handle_message_input(&mut self, text: String) {
        handlers::greeting::handle_message_input(Arc::clone(&self.state), text);
    }

    pub fn handle_greeting_input(&mut self, text: String) {
        handlers::greeting::handle_greeting_input(Arc::clone(&self.state), text);
    }

    /// Close the front blocking alert.
    pub fn dismiss_alert(&mut self) {
        self.state.write().alerts.pop_front();
    }

    /// Take the toasts queued since the last frame.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// Abort all outstanding work. Events arriving afterwards are ignored.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.scope.close();
        self.event_rx.close();
        tracing::info!("App shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}
