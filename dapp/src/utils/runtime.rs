//! Global Tokio runtime
//!
//! egui drives the main thread, so the RPC calls run on a process-wide
//! multi-threaded runtime. `main` enters it before starting eframe, which lets
//! `tokio::spawn` be called from the UI thread.
//!
//! ```rust,ignore
//! let rt = dapp::utils::runtime::runtime()?;
//! let _guard = rt.enter();
//! ```

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Get the runtime, building it on first use.
pub fn runtime() -> std::io::Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("dapp-rpc")
            .build()
    })
}
