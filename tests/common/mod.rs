#![allow(dead_code)]

use lendlog::application::registry::LoanRegistry;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `rows` to a temporary command script, one row per line.
pub fn write_script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Registry with contacts "111" (Ana) and "222" (Bia) and `count` generic
/// items with ids "0".."count".
pub fn stocked_registry(count: usize) -> LoanRegistry {
    let mut registry = LoanRegistry::in_memory();
    registry.register_contact("Ana", "111").unwrap();
    registry.register_contact("Bia", "222").unwrap();
    for i in 0..count {
        registry
            .register_item(&format!("Item {i}"), "tool", &i.to_string())
            .unwrap();
    }
    registry
}
