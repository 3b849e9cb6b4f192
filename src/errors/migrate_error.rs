use std::path::PathBuf;
use thiserror::Error;

/// Errores de la migración. Ninguno se recupera: cualquier fallo aborta el
/// proceso con estado distinto de cero. No hay protección ante escrituras
/// parciales del archivo de salida.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("No se pudo leer '{}': {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("JSON inválido en '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No se pudo serializar el dataset: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("No se pudo escribir '{}': {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },
}
