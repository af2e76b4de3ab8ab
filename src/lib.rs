//! # minihttpd
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: parser propio,
//! router con rutas exactas y por prefijo, y servicio de archivos sobre
//! un storage inyectado.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de requests y construcción de responses
//! - `router`: Tabla de rutas (primera coincidencia gana)
//! - `handlers`: `/`, `/echo/`, `/user-agent` y `/files/`
//! - `storage`: Lectura/escritura de archivos (disco o memoria)
//! - `server`: Listener TCP y manejo de cada conexión
//! - `config`: Argumentos CLI y variables de entorno
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use minihttpd::config::Config;
//! use minihttpd::server::Server;
//! use minihttpd::storage::FsStorage;
//! use std::sync::Arc;
//!
//! let config = Config::default();
//! let storage = FsStorage::open(&config.directory).expect("storage");
//! let server = Server::new(config, Arc::new(storage));
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
