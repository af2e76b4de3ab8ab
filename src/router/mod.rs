//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea paths HTTP a handlers.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se evalúan en el orden en que se registran y gana la primera
//! que coincide. Una ruta puede ser exacta (`/user-agent`) o por prefijo
//! (`/echo/`); en el segundo caso el handler recibe el resto del path.
//! Si ninguna coincide se responde 404 Not Found.
//!
//! El router no mira el método; eso queda a cargo de cada handler.

use crate::handlers;
use crate::http::{Request, Response};
use crate::storage::Storage;
use std::sync::Arc;

/// Patrón de path de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// El path debe ser exactamente igual
    Exact(&'static str),

    /// El path debe empezar con el prefijo
    Prefix(&'static str),
}

impl PathPattern {
    /// Intenta hacer match contra un path
    ///
    /// Retorna la parte del path que sigue al patrón (vacía en rutas
    /// exactas), o `None` si no coincide.
    ///
    /// # Ejemplo
    /// ```
    /// use minihttpd::router::PathPattern;
    ///
    /// assert_eq!(PathPattern::Prefix("/echo/").match_path("/echo/abc"), Some("abc"));
    /// assert_eq!(PathPattern::Exact("/").match_path("/"), Some(""));
    /// assert_eq!(PathPattern::Exact("/").match_path("/x"), None);
    /// ```
    pub fn match_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        match self {
            PathPattern::Exact(expected) => (path == *expected).then_some(""),
            PathPattern::Prefix(prefix) => path.strip_prefix(prefix),
        }
    }
}

/// Todo lo que un handler necesita para construir su respuesta
pub struct RouteContext<'a> {
    /// Request parseado
    pub request: &'a Request,

    /// Resto del path después del patrón que hizo match
    pub tail: &'a str,

    /// Storage inyectado para `/files/`
    pub storage: &'a dyn Storage,
}

/// Tipo de función handler
pub type Handler = fn(&RouteContext<'_>) -> Response;

/// Router que mapea paths a handlers
pub struct Router {
    /// Rutas en orden de precedencia
    routes: Vec<(PathPattern, Handler)>,

    /// Storage compartido por todas las conexiones
    storage: Arc<dyn Storage>,
}

impl Router {
    /// Crea un router vacío
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            routes: Vec::new(),
            storage,
        }
    }

    /// Crea el router con la tabla de rutas del servidor
    ///
    /// | Patrón | Handler |
    /// |---|---|
    /// | `/` exacto | `root_handler` |
    /// | `/echo/` prefijo | `echo_handler` |
    /// | `/user-agent` exacto | `user_agent_handler` |
    /// | `/files/` prefijo | `files_handler` |
    pub fn with_default_routes(storage: Arc<dyn Storage>) -> Self {
        let mut router = Self::new(storage);
        router.register(PathPattern::Exact("/"), handlers::root_handler);
        router.register(PathPattern::Prefix("/echo/"), handlers::echo_handler);
        router.register(PathPattern::Exact("/user-agent"), handlers::user_agent_handler);
        router.register(PathPattern::Prefix("/files/"), handlers::files_handler);
        router
    }

    /// Registra una ruta al final de la tabla
    ///
    /// # Ejemplo
    /// ```
    /// use minihttpd::router::{PathPattern, RouteContext, Router};
    /// use minihttpd::storage::MemoryStorage;
    /// use minihttpd::http::Response;
    /// use std::sync::Arc;
    ///
    /// fn hello_handler(_ctx: &RouteContext<'_>) -> Response {
    ///     Response::text("hello")
    /// }
    ///
    /// let mut router = Router::new(Arc::new(MemoryStorage::new()));
    /// router.register(PathPattern::Exact("/hello"), hello_handler);
    /// ```
    pub fn register(&mut self, pattern: PathPattern, handler: Handler) {
        self.routes.push((pattern, handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si no encuentra un handler para el path, retorna 404 Not Found.
    pub fn route(&self, request: &Request) -> Response {
        let path = request.path();

        for (pattern, handler) in &self.routes {
            if let Some(tail) = pattern.match_path(path) {
                let ctx = RouteContext {
                    request,
                    tail,
                    storage: self.storage.as_ref(),
                };
                return handler(&ctx);
            }
        }

        handlers::not_found_handler()
    }
}
