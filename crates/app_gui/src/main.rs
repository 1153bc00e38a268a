mod api_client;
mod app;

use std::sync::Arc;

use anyhow::{Result, anyhow};
use api_client::DogCeoClient;
use app::UiApp;
use doggy_core::DogApi;
use eframe::NativeOptions;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let api: Arc<dyn DogApi> = Arc::new(DogCeoClient::from_env());
    let options = NativeOptions::default();
    eframe::run_native(
        "Doggy Directory",
        options,
        Box::new(move |cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(cc, api)))
        }),
    )
    .map_err(|e| anyhow!("application stopped with error: {e}"))
}
