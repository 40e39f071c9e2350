//! Build command implementation.

use anyhow::{Context, Result};
use coursegen_core::{write_course, CourseBuilder};
use std::path::{Path, PathBuf};

pub struct BuildOptions {
    pub content: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

/// Build the course and write the document to the output directory
pub fn build_course(config_path: &Path, opts: BuildOptions) -> Result<()> {
    let config = super::load_config(
        config_path,
        opts.content.as_deref(),
        opts.output.as_deref(),
    )?;
    tracing::info!("Building course from {:?}", config.content_dir());

    let builder = CourseBuilder::new(config);
    let course = builder.build().context("Failed to build course")?;

    let pretty = opts.pretty || builder.config().pretty;
    let output_file = builder.config().output_file();
    write_course(&course, &output_file, pretty)
        .with_context(|| format!("Failed to write {:?}", output_file))?;

    let hidden = course.children().iter().filter(|lo| lo.hide).count();
    tracing::info!(
        "✓ Built '{}' ({} learning objects, {} hidden)",
        course.title,
        course.node_count(),
        hidden
    );
    Ok(())
}
