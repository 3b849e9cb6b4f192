//! Constantes de la migración.
//!
//! El script opera sobre nombres de archivo fijos (sin flags ni variables de
//! entorno): lee la progresión diaria y escribe una copia actualizada. El
//! archivo de entrada nunca se muta.

/// Archivo de entrada con la progresión diaria de clues.
pub const INPUT_FILE: &str = "daily_clue_progression.json";

/// Archivo de salida con los registros actualizados.
pub const OUTPUT_FILE: &str = "daily_clue_progression_updated.json";

/// Campo ancla: el contador nuevo se inserta justo después de éste.
pub const ELITE_FIELD: &str = "done_elite";

/// Campo nuevo insertado en cada registro.
pub const MASTER_FIELD: &str = "done_master";
