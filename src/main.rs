mod browse;
mod config;
mod state;
mod store;
mod ui;

use std::path::PathBuf;

use config::AppConfig;
use state::AppState;
use store::LoggingStore;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = config::default_config_path().unwrap_or_else(|| {
        log::warn!("no hay directorio de configuración disponible, se usará el directorio actual");
        PathBuf::from("logicrm.json")
    });
    let config = AppConfig::load(&config_path);

    desk_shell::run("LogiCRM", move || {
        Box::new(AppState::new(
            config,
            config_path,
            Box::new(LoggingStore::default()),
        ))
    })
    .map_err(|e| anyhow::anyhow!("error de eframe: {e}"))?;

    Ok(())
}
