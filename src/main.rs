//! # minihttpd - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor: configuración, logging, storage y
//! loop de aceptación.

use minihttpd::config::Config;
use minihttpd::logging;
use minihttpd::server::Server;
use minihttpd::storage::FsStorage;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    let config = Config::new();
    logging::init(&config.log_level);

    if let Err(e) = config.validate() {
        error!(error = %e, "Configuración inválida");
        std::process::exit(2);
    }

    info!(
        address = %config.address(),
        directory = %config.directory,
        "minihttpd v0.1.0 iniciando"
    );

    let storage = match FsStorage::open(&config.directory) {
        Ok(storage) => storage,
        Err(e) => {
            error!(directory = %config.directory, error = %e, "No se pudo abrir el directorio de archivos");
            std::process::exit(1);
        }
    };

    info!(root = %storage.root().display(), "Storage de archivos listo");

    let server = Server::new(config, Arc::new(storage));

    // Bloquea el thread principal mientras el servidor acepta conexiones
    if let Err(e) = server.run() {
        error!(error = %e, "Error fatal");
        std::process::exit(1);
    }
}
