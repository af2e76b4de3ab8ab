//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.1
//! y convertirlas a bytes para enviar al cliente.
//!
//! La serialización es fija: status line, headers en el orden en que se
//! agregaron (se permiten duplicados), línea vacía y body sin terminador.
//! `to_bytes` no calcula `Content-Length`; los handlers lo agregan antes.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use minihttpd::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_header("Content-Length", "5")
//!     .with_body(b"hello".to_vec());
//!
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
//! );
//! ```

use super::{StatusCode, CONTENT_LENGTH, CONTENT_TYPE, OCTET_STREAM, TEXT_PLAIN};

/// Representa una respuesta HTTP en construcción
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers en orden de inserción
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header al final de la lista
    ///
    /// No reemplaza headers existentes con el mismo nombre.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Establece el cuerpo de la respuesta
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Respuesta vacía con `Content-Type: text/plain` y `Content-Length: 0`
    ///
    /// Forma común de 201, 404, 405 y 500.
    ///
    /// # Ejemplo
    /// ```
    /// use minihttpd::http::{Response, StatusCode};
    ///
    /// let bytes = Response::empty(StatusCode::NotFound).to_bytes();
    /// assert_eq!(
    ///     bytes,
    ///     b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
    /// );
    /// ```
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status)
            .with_header(CONTENT_TYPE, TEXT_PLAIN)
            .with_header(CONTENT_LENGTH, "0")
    }

    /// Respuesta 200 OK de texto plano
    pub fn text(body: &str) -> Self {
        Self::with_content(TEXT_PLAIN, body.as_bytes().to_vec())
    }

    /// Respuesta 200 OK con contenido binario (archivos)
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self::with_content(OCTET_STREAM, body)
    }

    fn with_content(content_type: &str, body: Vec<u8>) -> Self {
        let length = body.len().to_string();
        Self::new(StatusCode::Ok)
            .with_header(CONTENT_TYPE, content_type)
            .with_header(CONTENT_LENGTH, &length)
            .with_body(body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo:
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario tal cual
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        // 1. Status line
        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        // 2. Headers, en orden de inserción
        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene el primer valor de un header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
