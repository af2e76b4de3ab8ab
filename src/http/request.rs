//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP/1.1 desde cero, leyendo
//! directamente del stream de la conexión.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/note.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 2\r\n
//! \r\n
//! hi
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path PROTOCOL` (tokens separados por espacios)
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: línea vacía que separa headers del body
//! 4. **Body**: exactamente `Content-Length` bytes (vacío si no hay header)
//!
//! Se parsea un único request por conexión. Los bytes que queden en el
//! stream después del body se ignoran.
//!
//! El tamaño del body no tiene límite: un `Content-Length` enorme deja al
//! thread bloqueado leyendo mientras el cliente siga enviando datos. Los
//! bytes se leen de forma incremental, así que la memoria crece con lo que
//! realmente llega y no con el valor declarado.

use super::CONTENT_LENGTH;
use std::collections::HashMap;
use std::io::{self, BufRead, Read};
use thiserror::Error;

/// Headers de un request: nombre tal como llegó → valor.
///
/// Si un nombre se repite, gana la última ocurrencia.
pub type Headers = HashMap<String, String>;

/// Método HTTP del request
///
/// Solo `GET` y `POST` tienen significado para el router; cualquier
/// otro token se conserva tal cual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro método (DELETE, PUT, ...)
    Other(String),
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(m) => m,
        }
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => Method::Other(s.to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primera línea del request: `METHOD PATH PROTOCOL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
    pub protocol: String,
}

impl RequestLine {
    /// Parsea la request line a partir de sus tokens separados por espacios
    ///
    /// Se requieren al menos 3 tokens; los tokens extra se ignoran.
    ///
    /// # Ejemplo
    /// ```
    /// use minihttpd::http::request::{Method, RequestLine};
    ///
    /// let line = RequestLine::parse("GET /echo/abc HTTP/1.1\r\n").unwrap();
    /// assert_eq!(line.method, Method::GET);
    /// assert_eq!(line.path, "/echo/abc");
    /// assert_eq!(line.protocol, "HTTP/1.1");
    /// ```
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();

        match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(path), Some(protocol)) => Ok(RequestLine {
                method: Method::from(method),
                path: path.to_string(),
                protocol: protocol.to_string(),
            }),
            _ => Err(ParseError::MalformedRequestLine(line.trim_end().to_string())),
        }
    }
}

/// Representa un request HTTP parseado
///
/// Pertenece a la conexión que lo leyó y se descarta al enviar la respuesta.
#[derive(Debug, Clone)]
pub struct Request {
    request_line: RequestLine,
    headers: Headers,
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
///
/// Cualquiera de ellos aborta la conexión sin escribir respuesta.
#[derive(Debug, Error)]
pub enum ParseError {
    /// El cliente cerró la conexión sin enviar nada
    #[error("Empty request")]
    EmptyRequest,

    /// El stream falló o terminó antes de completar la request line
    #[error("Failed to read request line: {0}")]
    RequestLineRead(#[source] io::Error),

    /// La request line tiene menos de 3 tokens o no es UTF-8 válido
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// El stream terminó antes de la línea vacía que cierra los headers
    #[error("Failed to read request headers: {0}")]
    HeaderRead(#[source] io::Error),

    /// `Content-Length` no es un entero no negativo
    #[error("Invalid Content-Length: {0:?}")]
    InvalidContentLength(String),

    /// Llegaron menos bytes de body que los declarados
    #[error("Truncated body: expected {expected} bytes, received {received}")]
    TruncatedBody { expected: usize, received: usize },

    /// Error de I/O leyendo el body
    #[error("Failed to read request body: {0}")]
    BodyRead(#[source] io::Error),
}

impl Request {
    /// Parsea un request desde un buffer en memoria
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use minihttpd::http::Request;
    ///
    /// let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: curl/8.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/user-agent");
    /// assert_eq!(request.header("User-Agent"), Some("curl/8.0"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let mut reader = buffer;
        Self::read_from(&mut reader)
    }

    /// Lee y parsea exactamente un request desde un stream
    ///
    /// Bloquea hasta recibir la request line, todos los headers y el body
    /// completo (o hasta que el stream termine).
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self, ParseError> {
        // 1. Request line
        let request_line = Self::read_request_line(reader)?;

        // 2. Headers hasta la línea vacía
        let headers = Self::read_headers(reader)?;

        // 3. Body según Content-Length
        let body = Self::read_body(reader, &headers)?;

        Ok(Request {
            request_line,
            headers,
            body,
        })
    }

    fn read_request_line<R: BufRead>(reader: &mut R) -> Result<RequestLine, ParseError> {
        let mut raw = Vec::new();
        let bytes_read = reader
            .read_until(b'\n', &mut raw)
            .map_err(ParseError::RequestLineRead)?;

        if bytes_read == 0 {
            return Err(ParseError::EmptyRequest);
        }
        if !raw.ends_with(b"\n") {
            return Err(ParseError::RequestLineRead(unexpected_eof(
                "stream ended before end of request line",
            )));
        }

        let line = std::str::from_utf8(&raw).map_err(|_| {
            ParseError::MalformedRequestLine(String::from_utf8_lossy(&raw).trim_end().to_string())
        })?;

        RequestLine::parse(line)
    }

    /// Lee headers línea por línea hasta la primera línea vacía
    ///
    /// Las líneas sin ':' se descartan sin fallar.
    fn read_headers<R: BufRead>(reader: &mut R) -> Result<Headers, ParseError> {
        let mut headers = Headers::new();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut raw)
                .map_err(ParseError::HeaderRead)?;

            if bytes_read == 0 || !raw.ends_with(b"\n") {
                return Err(ParseError::HeaderRead(unexpected_eof(
                    "stream ended before end of headers",
                )));
            }

            let line = String::from_utf8_lossy(&raw);
            let line = line.trim();

            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
        }

        Ok(headers)
    }

    fn read_body<R: Read>(reader: &mut R, headers: &Headers) -> Result<Vec<u8>, ParseError> {
        let raw_length = match headers.get(CONTENT_LENGTH) {
            Some(value) => value,
            None => return Ok(Vec::new()),
        };

        let expected: usize = raw_length
            .parse()
            .map_err(|_| ParseError::InvalidContentLength(raw_length.clone()))?;

        let mut body = Vec::new();
        reader
            .take(expected as u64)
            .read_to_end(&mut body)
            .map_err(ParseError::BodyRead)?;

        if body.len() < expected {
            return Err(ParseError::TruncatedBody {
                expected,
                received: body.len(),
            });
        }

        Ok(body)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.request_line.method
    }

    /// Obtiene el path del request, sin decodificar
    pub fn path(&self) -> &str {
        &self.request_line.path
    }

    /// Obtiene la versión del protocolo (ej: "HTTP/1.1")
    pub fn protocol(&self) -> &str {
        &self.request_line.protocol
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene un header específico (el nombre distingue mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

fn unexpected_eof(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/");
        assert_eq!(request.protocol(), "HTTP/1.1");
        assert!(request.headers().is_empty());
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_request_line_tokens() {
        let raw = b"DELETE   /files/x.txt\tHTTP/1.1 extra tokens\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::Other("DELETE".to_string()));
        assert_eq!(request.path(), "/files/x.txt");
        assert_eq!(request.protocol(), "HTTP/1.1");
    }

    #[test]
    fn test_request_line_lf_only() {
        let raw = b"POST /echo/a HTTP/1.0\n\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.protocol(), "HTTP/1.0");
    }

    #[test]
    fn test_malformed_request_line() {
        for raw in [&b"GET /\r\n\r\n"[..], b"GET\r\n\r\n", b"\r\n\r\n"] {
            let result = Request::parse(raw);
            assert!(
                matches!(result, Err(ParseError::MalformedRequestLine(_))),
                "expected MalformedRequestLine for {:?}",
                String::from_utf8_lossy(raw)
            );
        }
    }

    #[test]
    fn test_invalid_utf8_request_line() {
        let raw = b"GET /\xff\xfe HTTP/1.1\r\n\r\n";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }

    #[test]
    fn test_empty_request() {
        let result = Request::parse(b"");
        assert!(matches!(result, Err(ParseError::EmptyRequest)));
    }

    #[test]
    fn test_request_line_without_newline() {
        let result = Request::parse(b"GET / HTTP/1.1");
        assert!(matches!(result, Err(ParseError::RequestLineRead(_))));
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n  User-Agent :   test-client/1.0  \r\n\r\n";
        let request = Request::parse(raw).unwrap();

        // Solo se corta en el primer ':'
        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("User-Agent"), Some("test-client/1.0"));
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let raw = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("X-Tag"), Some("second"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_header_name_case_preserved() {
        let raw = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("user-agent"), Some("lower"));
        assert_eq!(request.header("User-Agent"), None);
    }

    #[test]
    fn test_header_without_colon_is_skipped() {
        let raw = b"GET / HTTP/1.1\r\nnot a header\r\nAccept: */*\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("Accept"), Some("*/*"));
    }

    #[test]
    fn test_whitespace_only_line_ends_headers() {
        let raw = b"GET / HTTP/1.1\r\nAccept: */*\r\n   \r\nIgnored: yes\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("Ignored"), None);
    }

    #[test]
    fn test_headers_without_blank_line() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost\r\n";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::HeaderRead(_))));
    }

    #[test]
    fn test_header_line_cut_by_eof() {
        let raw = b"GET / HTTP/1.1\r\nHost: local";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::HeaderRead(_))));
    }

    #[test]
    fn test_parse_body_with_content_length() {
        let raw = b"POST /files/note.txt HTTP/1.1\r\nContent-Length: 2\r\n\r\nhi";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.body(), b"hi");
    }

    #[test]
    fn test_body_ignores_trailing_bytes() {
        let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcdef";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.body(), b"abc");
    }

    #[test]
    fn test_body_without_content_length_is_empty() {
        let raw = b"POST /files/a HTTP/1.1\r\n\r\nsome bytes";
        let request = Request::parse(raw).unwrap();

        assert!(request.body().is_empty());
    }

    #[test]
    fn test_binary_body() {
        let mut raw = b"POST /files/bin HTTP/1.1\r\nContent-Length: 4\r\n\r\n".to_vec();
        raw.extend_from_slice(&[0x00, 0xff, b'\n', 0x7f]);
        let request = Request::parse(&raw).unwrap();

        assert_eq!(request.body(), &[0x00, 0xff, b'\n', 0x7f]);
    }

    #[test]
    fn test_invalid_content_length() {
        for value in ["abc", "-1", "", "1.5"] {
            let raw = format!("POST / HTTP/1.1\r\nContent-Length: {}\r\n\r\n", value);
            let result = Request::parse(raw.as_bytes());
            assert!(
                matches!(result, Err(ParseError::InvalidContentLength(_))),
                "expected InvalidContentLength for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_truncated_body() {
        let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nabcd";
        let result = Request::parse(raw);

        match result {
            Err(ParseError::TruncatedBody { expected, received }) => {
                assert_eq!(expected, 10);
                assert_eq!(received, 4);
            }
            other => panic!("expected TruncatedBody, got {:?}", other),
        }
    }

    #[test]
    fn test_method_round_trip_str() {
        assert_eq!(Method::from("GET").as_str(), "GET");
        assert_eq!(Method::from("POST").to_string(), "POST");
        assert_eq!(Method::from("PATCH").as_str(), "PATCH");
        // Los métodos distinguen mayúsculas
        assert_eq!(Method::from("get"), Method::Other("get".to_string()));
    }
}
