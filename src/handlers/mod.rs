//! # Handlers del Servidor
//!
//! Este módulo contiene los handlers que el router puede ejecutar.
//!
//! - **basic**: `/`, `/echo/<texto>`, `/user-agent` y el 404 por defecto
//! - **files**: `/files/<nombre>` (lectura y escritura vía storage)
//!
//! Cada handler recibe un `RouteContext` y retorna una `Response`.

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;
