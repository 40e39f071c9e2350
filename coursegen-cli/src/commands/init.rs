//! Init command implementation.

use anyhow::{Context, Result};
use include_dir::{include_dir, Dir, DirEntry};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../coursegen.yml.example");

static SKELETON: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/skeleton");

/// Scaffold a sample course; existing files are left untouched
pub fn init_course(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    let created = extract_skeleton(&SKELETON, root)?;

    println!("✓ coursegen initialized in {:?} ({} files created)", root, created);
    println!("  - Edit course.md and properties.yaml to describe the course");
    println!("  - Add topic-*/ folders, then run `coursegen build`");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("coursegen.yml");
    if config_path.exists() {
        println!("coursegen.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn extract_skeleton(dir: &Dir<'_>, root: &Path) -> Result<usize> {
    let mut created = 0;
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => {
                let target = root.join(sub.path());
                fs::create_dir_all(&target)
                    .with_context(|| format!("Failed to create {:?}", target))?;
                created += extract_skeleton(sub, root)?;
            }
            DirEntry::File(file) => {
                let target = root.join(file.path());
                if target.exists() {
                    tracing::debug!("Keeping existing {:?}", target);
                    continue;
                }
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {:?}", parent))?;
                }
                fs::write(&target, file.contents())
                    .with_context(|| format!("Failed to write {:?}", target))?;
                created += 1;
            }
        }
    }
    Ok(created)
}
