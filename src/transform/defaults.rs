//! Normalización de contadores por tier.
//!
//! La UI que consume la progresión diaria rellena con `0` los contadores
//! ausentes (`done_easy`, `done_medium`, `done_hard`) antes de sumar. Aquí se
//! expone la misma operación sobre el dataset: los campos ausentes se anexan
//! al final del registro con el valor de relleno, los presentes no se tocan.
use serde_json::{json, Value};

use crate::data::{Dataset, Record};

/// Contadores por tier que la UI espera en cada registro.
const STANDARD_TIERS: [&str; 3] = ["done_easy", "done_medium", "done_hard"];

/// Relleno de campos ausentes con un valor por defecto.
#[derive(Debug, Clone)]
pub struct TierDefaults {
    /// Campos a garantizar, en el orden en que se anexan si faltan.
    pub fields: Vec<String>,
    /// Valor asignado a los campos ausentes.
    pub fill: Value,
}

impl TierDefaults {
    pub fn new(fields: Vec<String>, fill: Value) -> Self {
        Self { fields, fill }
    }

    /// Los tres contadores estándar, rellenados con `0`.
    pub fn standard() -> Self {
        Self::new(STANDARD_TIERS.iter().map(|s| s.to_string()).collect(), json!(0))
    }

    /// Copia el registro y anexa al final los campos ausentes. Los campos
    /// presentes conservan valor y posición.
    pub fn apply_record(&self, record: &Record) -> Record {
        let mut out = record.clone();
        for field in &self.fields {
            if !out.contains_field(field) {
                out.push_field(field.clone(), self.fill.clone());
            }
        }
        out
    }

    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset.records().map(|r| self.apply_record(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fills_missing_counters_at_end() {
        let rec: Record = serde_json::from_str(r#"{"clue_id": 1, "done_medium": 3}"#).unwrap();
        let out = TierDefaults::standard().apply_record(&rec);
        assert_eq!(
            out.field_names(),
            vec!["clue_id", "done_medium", "done_easy", "done_hard"]
        );
        assert_eq!(out.get("done_easy"), Some(&json!(0)));
        assert_eq!(out.get("done_hard"), Some(&json!(0)));
        // El contador presente no se toca.
        assert_eq!(out.get("done_medium"), Some(&json!(3)));
    }

    #[test]
    fn test_complete_record_passes_unchanged() {
        let rec: Record =
            serde_json::from_str(r#"{"done_easy": 1, "done_medium": 2, "done_hard": 3}"#).unwrap();
        let out = TierDefaults::standard().apply_record(&rec);
        assert_eq!(out, rec);
    }

    #[test]
    fn test_apply_over_dataset() {
        let ds: Dataset =
            serde_json::from_str(r#"[{"clue_id": 1}, {"clue_id": 2, "done_easy": 5}]"#).unwrap();
        let out = TierDefaults::standard().apply(&ds);
        assert_eq!(out.len(), 2);
        assert_eq!(out.get(0).unwrap().get("done_easy"), Some(&json!(0)));
        assert_eq!(out.get(1).unwrap().get("done_easy"), Some(&json!(5)));
    }
}
