//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que usa el servidor,
//! sin librerías de alto nivel. Incluye:
//!
//! - Parsing de requests leídos directamente del socket
//! - Construcción y serialización de responses
//! - Códigos de estado soportados
//!
//! ## Alcance
//!
//! - Una conexión = un request y una response
//! - Sin keep-alive, sin chunked transfer encoding, sin pipelining
//! - El body del request se delimita solo con `Content-Length`
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;

// Nombres de headers usados por el servidor
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const USER_AGENT: &str = "User-Agent";

// Content types
pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";
