//! # Códigos de Estado
//! src/http/status.rs
//!
//! Los únicos estados que el servidor escribe en la status line:
//!
//! | Código | Quién lo produce |
//! |---|---|
//! | 200 OK | `/`, `/echo/`, `/user-agent`, `GET /files/` |
//! | 201 Created | `POST /files/` |
//! | 404 Not Found | rutas desconocidas, archivo inexistente |
//! | 405 Method Not Allowed | `/files/` con un método que no es GET ni POST |
//! | 500 Internal Server Error | falla de I/O en el storage |
//!
//! Los errores de parsing no tienen código: la conexión se cierra sin
//! respuesta.

/// Estado de una respuesta; el discriminante es el código numérico
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    NotFound = 404,
    MethodNotAllowed = 405,
    InternalServerError = 500,
}

impl StatusCode {
    /// Código numérico
    ///
    /// ```
    /// use minihttpd::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Texto que acompaña al código en la status line
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// 5xx: la conexión lo loguea como warning
    pub fn is_server_error(&self) -> bool {
        self.as_u16() >= 500
    }
}

impl std::fmt::Display for StatusCode {
    /// Lo que va después de `HTTP/1.1 `, ej: "405 Method Not Allowed"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
