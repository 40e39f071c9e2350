//! Course assembly - root post-processing and output.

use crate::builder::{BuildError, CourseBuilder};
use crate::resource::{read_yaml_file, LearningResource};
use coursegen_types::{LearningObject, LoKind};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const PROPERTIES_FILE: &str = "properties.yaml";
pub const CALENDAR_FILE: &str = "calendar.yaml";

/// Build the tree from the root resource and apply course-level settings
pub fn assemble_course(
    builder: &CourseBuilder,
    root: &LearningResource,
) -> Result<LearningObject, BuildError> {
    let mut course = builder.build_tree(root, 0)?.into_course();
    course.route = "/".to_string();
    course.hide = false;

    let properties = load_metadata(root, PROPERTIES_FILE)?;
    if let Some(props) = &properties {
        let hidden = apply_ignore_list(&mut course, props);
        if hidden > 0 {
            tracing::info!("Hid {} learning objects listed in {}", hidden, PROPERTIES_FILE);
        }
    }

    let calendar = load_metadata(root, CALENDAR_FILE)?;

    if let LoKind::Course {
        properties: course_properties,
        calendar: course_calendar,
        ..
    } = &mut course.kind
    {
        *course_properties = properties;
        *course_calendar = calendar;
    }

    Ok(course)
}

/// Load a root metadata file; a missing or empty file is absent
fn load_metadata(root: &LearningResource, name: &str) -> Result<Option<Value>, BuildError> {
    let Some(path) = root.file_with_name(name) else {
        return Ok(None);
    };
    match read_yaml_file(path)? {
        Value::Null => {
            tracing::debug!("{} is empty", name);
            Ok(None)
        }
        value => Ok(Some(value)),
    }
}

/// Mark direct children of the root whose id is in `properties.ignore` as
/// hidden; returns how many were hidden
pub fn apply_ignore_list(course: &mut LearningObject, properties: &Value) -> usize {
    let ignore: Vec<&str> = match properties.get("ignore") {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(single)) => vec![single.as_str()],
        _ => return 0,
    };

    let Some(children) = course.children_mut() else {
        return 0;
    };

    let mut hidden = 0;
    for child in children.iter_mut() {
        if ignore.contains(&child.id.as_str()) {
            child.hide = true;
            hidden += 1;
        }
    }
    hidden
}

/// Serialize the course document
pub fn render_course(course: &LearningObject, pretty: bool) -> Result<Vec<u8>, BuildError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(course)?
    } else {
        serde_json::to_vec(course)?
    };
    Ok(bytes)
}

/// Write the course document to `path`, creating parent directories
pub fn write_course(course: &LearningObject, path: &Path, pretty: bool) -> Result<(), BuildError> {
    let bytes = render_course(course, pretty)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Course written to {:?}", path);
    Ok(())
}
