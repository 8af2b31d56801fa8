use dapp::ui::{page::PAGE_TITLE, DappWindow};
use dapp::{App, DappConfig};

fn main() {
    dapp::debug::init();

    let config = DappConfig::load();
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let runtime = match dapp::utils::runtime::runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start Tokio runtime");
            eprintln!("Failed to start Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PAGE_TITLE)
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };

    tracing::info!(rpc_url = %config.rpc_url, "Starting {}", PAGE_TITLE);

    let result = eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DappWindow::new(cc, App::new(config))))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "GUI exited with error");
        eprintln!("GUI error: {}", e);
        std::process::exit(1);
    }
}
