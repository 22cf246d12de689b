use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Inicializa o subscriber global; `RUST_LOG` tem prioridade sobre `default_level`
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: ignora se já houver subscriber (testes de integração)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_input_read(source: &str, bytes: usize) {
    debug!("Input read: {} ({} bytes)", source, bytes);
}

pub fn log_item_decoded(item_id: i64, fields: usize) {
    info!("✅ Item {} decoded: {} fields", item_id, fields);
}

pub fn log_item_list_decoded(items: usize, total: u64) {
    info!("✅ Item list decoded: {} items (total {})", items, total);
}

pub fn log_field_errors(item_id: i64, errors: usize) {
    warn!("⚠️ Item {} decoded with {} field errors", item_id, errors);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}
