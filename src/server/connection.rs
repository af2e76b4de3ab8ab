//! # Manejo de una Conexión
//! src/server/connection.rs
//!
//! Orquesta el ciclo completo de una conexión:
//!
//! ```text
//! leer request → router → to_bytes → escribir → cerrar
//! ```
//!
//! Si el parsing falla no se escribe nada: el cliente solo ve que la
//! conexión se cierra. Un error de escritura tampoco se reintenta.
//! En ambos casos el stream se libera al salir de la función.

use crate::http::{ParseError, Request};
use crate::router::Router;
use std::io::{self, BufReader, Read, Write};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Errores que terminan una conexión
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// El request no se pudo parsear; no se envió respuesta
    #[error("Failed to parse request: {0}")]
    Parse(#[from] ParseError),

    /// Falló la escritura de la respuesta
    #[error("Failed to write response: {0}")]
    Write(#[source] io::Error),
}

/// Atiende un request completo sobre `stream`
///
/// Funciona con cualquier stream bidireccional (`TcpStream` o un mock en
/// tests). El stream se consume y se cierra al retornar.
pub fn handle_connection<S: Read + Write>(mut stream: S, router: &Router) -> Result<(), ConnectionError> {
    let start = Instant::now();

    // El BufReader solo vive durante el parsing
    let request = {
        let mut reader = BufReader::new(&mut stream);
        Request::read_from(&mut reader)?
    };

    info!(
        method = %request.method(),
        path = request.path(),
        body_bytes = request.body().len(),
        "Request aceptado"
    );

    let response = router.route(&request);
    let bytes = response.to_bytes();

    stream.write_all(&bytes).map_err(ConnectionError::Write)?;
    stream.flush().map_err(ConnectionError::Write)?;

    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    if response.status().is_server_error() {
        warn!(status = %response.status(), latency_ms, "Respuesta enviada");
    } else {
        info!(status = %response.status(), latency_ms, "Respuesta enviada");
    }

    Ok(())
}
