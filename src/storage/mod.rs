//! # Storage de Archivos
//! src/storage/mod.rs
//!
//! Capacidad de lectura/escritura que usa `/files/`. Se inyecta en el
//! router al iniciar el servidor en lugar de leer el directorio desde
//! variables globales.
//!
//! - `FsStorage`: archivos dentro de un directorio raíz
//! - `MemoryStorage`: mapa en memoria (tests y uso embebido)
//!
//! Ninguna implementación sincroniza accesos concurrentes al mismo nombre:
//! un GET y un POST simultáneos pueden observar el archivo a medio escribir.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::warn;

/// Errores del storage
#[derive(Debug, Error)]
pub enum StorageError {
    /// El archivo no existe
    #[error("File not found: {0}")]
    NotFound(String),

    /// Cualquier otra falla de I/O
    #[error("I/O error on {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Clasifica un error de I/O: `NotFound` se distingue del resto
    pub fn from_io(name: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound(name.to_string())
        } else {
            StorageError::Io {
                name: name.to_string(),
                source,
            }
        }
    }
}

/// Capacidad de storage usada por el sub-router de archivos
///
/// Debe poder invocarse desde varios threads a la vez.
pub trait Storage: Send + Sync {
    /// Lee el contenido completo de `name`
    fn read(&self, name: &str) -> Result<Vec<u8>, StorageError>;

    /// Escribe (o reemplaza) `name` con `content`
    fn write(&self, name: &str, content: &[u8]) -> Result<(), StorageError>;
}

/// Storage sobre el sistema de archivos, con raíz en un directorio
///
/// El nombre se concatena a la raíz: un nombre absoluto (`/etc/passwd`)
/// queda dentro de ella. Los segmentos `..` no se rechazan, así que un
/// cliente todavía puede leer o escribir fuera de la raíz con ellos.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Crea el storage sin tocar el disco
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Crea el storage y el directorio raíz si no existe
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let storage = Self::new(root);
        fs::create_dir_all(&storage.root)?;
        Ok(storage)
    }

    /// Directorio raíz del storage
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ruta en disco de `name`, siempre relativa a la raíz
    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name.trim_start_matches('/'))
    }
}

impl Storage for FsStorage {
    fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(name);
        fs::read(&path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "No se pudo leer el archivo");
            StorageError::from_io(name, e)
        })
    }

    fn write(&self, name: &str, content: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(name);
        fs::write(&path, content).map_err(|e| {
            warn!(path = %path.display(), error = %e, "No se pudo escribir el archivo");
            StorageError::from_io(name, e)
        })
    }
}

/// Storage en memoria
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de archivos almacenados
    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn write(&self, name: &str, content: &[u8]) -> Result<(), StorageError> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(name.to_string(), content.to_vec());
        Ok(())
    }
}
