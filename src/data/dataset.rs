//! Secuencia ordenada de registros. El dataset completo se carga en memoria,
//! se transforma completo y se escribe completo: no hay procesamiento
//! parcial ni streaming.
use serde::{Deserialize, Serialize};

use crate::data::Record;

/// La colección completa de registros del archivo de entrada/salida.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<Record>);

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Itera los registros en su orden original.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(index)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
