//! # Handler de Archivos
//! src/handlers/files.rs
//!
//! Sub-router de `/files/<nombre>` según el método:
//!
//! | Método | Éxito | Falla |
//! |---|---|---|
//! | GET | 200 + contenido | 404 si no existe, 500 en error de I/O |
//! | POST | 201 (escribe el body) | 500 en error de I/O |
//! | otro | 405 | - |
//!
//! El nombre de archivo se pasa al storage sin sanitizar.

use crate::http::{Method, Response, StatusCode};
use crate::router::RouteContext;
use crate::storage::StorageError;
use tracing::{debug, error};

/// Handler para `/files/<nombre>`
pub fn files_handler(ctx: &RouteContext<'_>) -> Response {
    match ctx.request.method() {
        Method::GET => get_file(ctx),
        Method::POST => post_file(ctx),
        Method::Other(_) => Response::empty(StatusCode::MethodNotAllowed),
    }
}

fn get_file(ctx: &RouteContext<'_>) -> Response {
    let name = ctx.tail;

    match ctx.storage.read(name) {
        Ok(content) => {
            debug!(file = name, bytes = content.len(), "Archivo leído");
            Response::octet_stream(content)
        }
        Err(StorageError::NotFound(_)) => Response::empty(StatusCode::NotFound),
        Err(e) => {
            error!(file = name, error = %e, "Error leyendo archivo");
            Response::empty(StatusCode::InternalServerError)
        }
    }
}

fn post_file(ctx: &RouteContext<'_>) -> Response {
    let name = ctx.tail;
    let body = ctx.request.body();

    match ctx.storage.write(name, body) {
        Ok(()) => {
            debug!(file = name, bytes = body.len(), "Archivo escrito");
            Response::empty(StatusCode::Created)
        }
        Err(e) => {
            error!(file = name, error = %e, "Error escribiendo archivo");
            Response::empty(StatusCode::InternalServerError)
        }
    }
}
