//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` con salida a stderr. `RUST_LOG` tiene prioridad;
//! si no está definido se usa el filtro de la configuración.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Construye el filtro de eventos
fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Instala el subscriber global
///
/// Llamadas posteriores no tienen efecto.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(default_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
