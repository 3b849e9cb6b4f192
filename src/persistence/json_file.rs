//! Lectura y escritura del dataset como texto JSON (UTF-8).
//!
//! Se lee y se escribe el archivo completo, de una vez. La salida va con
//! indentación fija de 2 espacios y los caracteres no ASCII se emiten
//! literales (serde_json no los escapa). No hay protección ante escrituras
//! parciales: un proceso interrumpido puede dejar la salida truncada.
use std::fs;
use std::path::Path;

use crate::data::Dataset;
use crate::errors::MigrateError;

/// Lee el archivo completo y parsea el arreglo de registros. Cualquier cosa
/// que no sea un arreglo de objetos planos en el nivel superior es un error
/// de parseo.
pub fn read_dataset(path: &Path) -> Result<Dataset, MigrateError> {
    let text = fs::read_to_string(path).map_err(|source| MigrateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MigrateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializa el dataset con `to_string_pretty` (2 espacios, sin salto de
/// línea final) y escribe el archivo completo.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), MigrateError> {
    let text = serde_json::to_string_pretty(dataset).map_err(MigrateError::Serialize)?;
    fs::write(path, text).map_err(|source| MigrateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
