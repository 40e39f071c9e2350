//! Outline command - print the built tree for a quick look.

use anyhow::{Context, Result};
use coursegen_core::CourseBuilder;
use coursegen_types::{LearningObject, LoKind, LoType};
use serde_json::{json, Value};
use std::path::Path;

/// Build the course in memory and print its structure
pub fn show_outline(config_path: &Path, content: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_config(config_path, content, None)?;
    let course = CourseBuilder::new(config)
        .build()
        .context("Failed to build course")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outline_summary(&course))?);
        return Ok(());
    }

    let mut lines = Vec::new();
    outline_lines(&course, 0, &mut lines);
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Title, node count, topic count and hidden root children
fn outline_summary(course: &LearningObject) -> Value {
    let topics = course
        .children()
        .iter()
        .filter(|lo| lo.lo_type() == LoType::Topic)
        .count();
    let hidden: Vec<&str> = course
        .children()
        .iter()
        .filter(|lo| lo.hide)
        .map(|lo| lo.id.as_str())
        .collect();
    json!({
        "title": course.title,
        "learningObjects": course.node_count(),
        "topics": topics,
        "hidden": hidden,
    })
}

fn outline_lines(lo: &LearningObject, depth: usize, out: &mut Vec<String>) {
    let steps = match &lo.kind {
        LoKind::Lab { los } => format!(" ({} steps)", los.len()),
        LoKind::Quiz { los } => format!(" ({} questions)", los.len()),
        _ => String::new(),
    };
    let hidden = if lo.hide { " [hidden]" } else { "" };
    out.push(format!(
        "{}{} {}: {}{}{}",
        "  ".repeat(depth),
        lo.lo_type(),
        lo.id,
        lo.title,
        steps,
        hidden
    ));
    for child in lo.children() {
        outline_lines(child, depth + 1, out);
    }
}
