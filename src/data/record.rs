//! Registro plano de progresión diaria: mapa ordenado nombre de campo →
//! valor JSON. El orden de los campos es semánticamente relevante porque la
//! migración inserta el campo nuevo en una posición concreta, por eso el
//! contenedor es un `IndexMap` (orden de inserción) y no un `HashMap`.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Un registro plano (un día de progresión con sus contadores por tier).
/// Los nombres de campo son únicos dentro del registro, como en cualquier
/// objeto JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Anexa un campo al final del registro. Si el nombre ya existe, el valor
    /// se reemplaza pero el campo conserva su posición original (semántica de
    /// `IndexMap::insert`): un registro nunca puede acabar con claves
    /// duplicadas.
    pub fn push_field(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Itera los campos en su orden original.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Nombres de campo en orden, útil para verificar posiciones en tests.
    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
