//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread y atiende exactamente un request.
//!
//! Los threads no comparten estado mutable: solo el router (de solo
//! lectura) y el storage que éste contiene. No hay timeouts; un cliente
//! que nunca termina de enviar su request retiene su thread.

use crate::config::Config;
use crate::router::Router;
use crate::server::connection::{handle_connection, ConnectionError};
use crate::storage::Storage;
use std::io;
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use tracing::{error, info, info_span, warn};

/// Servidor HTTP/1.1 concurrente (un thread por conexión)
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    /// Crea el servidor con las rutas por defecto sobre `storage`
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self {
            config,
            router: Arc::new(Router::with_default_routes(storage)),
        }
    }

    /// Bindea la dirección de la configuración y atiende conexiones
    ///
    /// Solo retorna si falla el bind.
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        self.serve(listener)
    }

    /// Atiende conexiones sobre un listener ya bindeado
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        info!(address = %listener.local_addr()?, "Servidor escuchando (un thread por conexión)");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => self.spawn_connection(stream),
                Err(e) => {
                    error!(error = %e, "Error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    fn spawn_connection(&self, stream: TcpStream) {
        let router = Arc::clone(&self.router);

        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer_addr))
            .spawn(move || {
                let span = info_span!("conn", peer = %peer_addr);
                let _guard = span.enter();

                match handle_connection(stream, &router) {
                    Ok(()) => {}
                    Err(ConnectionError::Parse(e)) => {
                        warn!(error = %e, "Request inválido, cerrando conexión sin respuesta");
                    }
                    Err(e @ ConnectionError::Write(_)) => {
                        error!(error = %e, "No se pudo enviar la respuesta");
                    }
                }
            });

        if let Err(e) = spawned {
            error!(error = %e, "No se pudo crear el thread de la conexión");
        }
    }
}
