//! Fallos del pipeline: entrada ilegible, JSON malformado, salida no
//! escribible. Ninguno se recupera y no debe quedar salida utilizable.
use std::fs;
use std::path::Path;

use clue_progress_migrate::{migrate_file, MigrateError};
use tempfile::TempDir;

#[test]
fn missing_input_aborts_without_creating_output() {
    let dir = TempDir::new().expect("TempDir creation should succeed");
    let output = dir.path().join("sin-entrada-out.json");
    let err = migrate_file(Path::new("no_existe_progresion.json"), &output).unwrap_err();
    assert!(matches!(err, MigrateError::Read { .. }), "esperaba Read, fue: {err}");
    assert!(!output.exists(), "no debe crearse salida cuando falla la lectura");
}

#[test]
fn malformed_json_aborts_without_creating_output() {
    let dir = TempDir::new().expect("TempDir creation should succeed");
    let input = dir.path().join("malformado-in.json");
    let output = dir.path().join("malformado-out.json");
    fs::write(&input, "[{\"clue_id\": 1,]").unwrap();

    let err = migrate_file(&input, &output).unwrap_err();
    assert!(matches!(err, MigrateError::Parse { .. }), "esperaba Parse, fue: {err}");
    assert!(!output.exists());
}

#[test]
fn non_array_top_level_aborts() {
    let dir = TempDir::new().expect("TempDir creation should succeed");
    let input = dir.path().join("objeto-in.json");
    let output = dir.path().join("objeto-out.json");
    fs::write(&input, r#"{"clue_id": 1, "done_elite": 0}"#).unwrap();

    let err = migrate_file(&input, &output).unwrap_err();
    assert!(matches!(err, MigrateError::Parse { .. }));
}

#[test]
fn unwritable_output_aborts() {
    let dir = TempDir::new().expect("TempDir creation should succeed");
    let input = dir.path().join("salida-in.json");
    fs::write(&input, r#"[{"done_elite": 0}]"#).unwrap();

    // Una ruta cuyo directorio padre no existe no es escribible.
    let output = dir.path().join("directorio-inexistente").join("out.json");

    let err = migrate_file(&input, &output).unwrap_err();
    assert!(matches!(err, MigrateError::Write { .. }), "esperaba Write, fue: {err}");
}
