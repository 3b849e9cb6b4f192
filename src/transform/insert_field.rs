//! Transformación de inserción de campo en posición.
//!
//! Cada registro se reconstruye copiando sus campos en el orden original y
//! emitiendo el campo nuevo inmediatamente después del campo ancla. La
//! transformación es pura: produce un dataset nuevo y no hace IO ni muta la
//! entrada. Un único pase determinista por registro y por campo, sin retries
//! ni concurrencia.
use serde_json::{json, Value};

use crate::constants::{ELITE_FIELD, MASTER_FIELD};
use crate::data::{Dataset, Record};

/// Inserción de un campo nuevo inmediatamente después de un campo existente.
#[derive(Debug, Clone)]
pub struct FieldInsertion {
    /// Campo ancla: el nuevo campo se emite justo después de copiarlo.
    pub after: String,
    /// Nombre del campo insertado.
    pub name: String,
    /// Valor del campo insertado.
    pub value: Value,
}

impl FieldInsertion {
    pub fn new(after: impl Into<String>, name: impl Into<String>, value: Value) -> Self {
        Self {
            after: after.into(),
            name: name.into(),
            value,
        }
    }

    /// La inserción canónica de esta migración: `done_master: 0` justo
    /// después de `done_elite`.
    pub fn master_after_elite() -> Self {
        Self::new(ELITE_FIELD, MASTER_FIELD, json!(0))
    }

    /// Reconstruye un registro. Si el ancla no existe, el registro pasa sin
    /// cambios (el campo nuevo se omite, no se anexa al final).
    pub fn apply_record(&self, record: &Record) -> Record {
        let mut out = Record::new();
        for (name, value) in record.fields() {
            out.push_field(name.clone(), value.clone());
            if name == &self.after {
                out.push_field(self.name.clone(), self.value.clone());
            }
        }
        out
    }

    /// Aplica la inserción a cada registro del dataset, registro por
    /// registro e independientemente.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset.records().map(|r| self.apply_record(r)).collect()
    }
}
