//! The `studytrack init` command.

use std::path::Path;

use anyhow::{Context, Result};
use studytrack_core::config::{CONFIG_FILE_NAME, SAMPLE_CONFIG};

pub fn execute() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} with your own student profile");
    println!("  2. Run: studytrack dashboard");
    println!("  3. Run: studytrack (interactive menu)");

    Ok(())
}
