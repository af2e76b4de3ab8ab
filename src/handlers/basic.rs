//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `/`: respuesta vacía
//! - `/echo/<texto>`: devuelve el texto del path tal cual
//! - `/user-agent`: devuelve el header `User-Agent`
//!
//! Ninguno de estos handlers valida el método.

use crate::http::{Response, StatusCode, USER_AGENT};
use crate::router::RouteContext;

/// Handler para `/`
pub fn root_handler(_ctx: &RouteContext<'_>) -> Response {
    Response::text("")
}

/// Handler para `/echo/<texto>`
///
/// El texto no se decodifica: `/echo/a%20b` responde `a%20b`.
pub fn echo_handler(ctx: &RouteContext<'_>) -> Response {
    Response::text(ctx.tail)
}

/// Handler para `/user-agent`
///
/// Si el request no trae el header, el body queda vacío.
pub fn user_agent_handler(ctx: &RouteContext<'_>) -> Response {
    let user_agent = ctx.request.header(USER_AGENT).unwrap_or("");
    Response::text(user_agent)
}

/// Respuesta para rutas desconocidas
pub fn not_found_handler() -> Response {
    Response::empty(StatusCode::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Request, CONTENT_LENGTH, CONTENT_TYPE};
    use crate::storage::MemoryStorage;

    fn call(handler: fn(&RouteContext<'_>) -> Response, raw: &[u8], tail: &str) -> Response {
        let request = Request::parse(raw).unwrap();
        let storage = MemoryStorage::new();
        let ctx = RouteContext {
            request: &request,
            tail,
            storage: &storage,
        };
        handler(&ctx)
    }

    #[test]
    fn test_root_handler() {
        let response = call(root_handler, b"GET / HTTP/1.1\r\n\r\n", "");

        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn test_echo_handler() {
        let response = call(echo_handler, b"GET /echo/hello HTTP/1.1\r\n\r\n", "hello");

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header(CONTENT_TYPE), Some("text/plain"));
        assert_eq!(response.header(CONTENT_LENGTH), Some("5"));
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_echo_handler_not_decoded() {
        let response = call(echo_handler, b"GET /echo/a%20b HTTP/1.1\r\n\r\n", "a%20b");

        assert_eq!(response.body(), b"a%20b");
        assert_eq!(response.header(CONTENT_LENGTH), Some("5"));
    }

    #[test]
    fn test_user_agent_handler() {
        let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: test-client/1.0\r\n\r\n";
        let response = call(user_agent_handler, raw, "");

        assert_eq!(response.body(), b"test-client/1.0");
        assert_eq!(response.header(CONTENT_LENGTH), Some("15"));
    }

    #[test]
    fn test_user_agent_handler_missing_header() {
        let response = call(user_agent_handler, b"GET /user-agent HTTP/1.1\r\n\r\n", "");

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert_eq!(response.header(CONTENT_LENGTH), Some("0"));
    }

    #[test]
    fn test_not_found_handler() {
        let response = not_found_handler();

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.header(CONTENT_TYPE), Some("text/plain"));
        assert!(response.body().is_empty());
    }
}
