#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use registrar_business::ConsoleConfig;
use registrar_ui::RegistrarApp;
use registrar_ui::state::{Sources, State};

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConsoleConfig::init().context("invalid REGISTRAR_* configuration")?;
    log::info!(
        "page size {}, window {}, exports under {}",
        config.page_size(),
        config.window_size(),
        config.export_dir().display()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .context("failed to start the fetch runtime")?;
    let sources = Sources::delayed(&config, runtime.handle());
    let state = State::new(config, sources).context("failed to build record pages")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Registrar Console")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Registrar Console",
        native_options,
        Box::new(move |_cc| Ok(Box::new(RegistrarApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
