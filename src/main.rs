use std::path::Path;
use std::process;

use clue_progress_migrate::constants::{ELITE_FIELD, INPUT_FILE, MASTER_FIELD, OUTPUT_FILE};
use clue_progress_migrate::migrate_file;

fn main() {
    // Rutas fijas: este script se corre una vez, a mano, en el directorio
    // donde vive la progresión diaria. Sin flags ni variables de entorno.
    match migrate_file(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE)) {
        Ok(_) => {
            println!("✅ '{MASTER_FIELD}': 0 added after '{ELITE_FIELD}' in all entries.");
        }
        Err(e) => {
            eprintln!("[add-master-entry] {e}");
            process::exit(1);
        }
    }
}
