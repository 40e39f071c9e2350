//! Learning resource discovery - the input side of a build.
//!
//! A course is a directory tree. Every directory whose name starts with a
//! type tag (`topic-01`, `unit-2`, `book-setup`, `talk`, ...) is a learning
//! resource; the root directory is the course itself.

use crate::builder::BuildError;
use crate::frontmatter::{parse_frontmatter, yaml_str_to_value};
use coursegen_types::{Attributes, LoType};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A node of the source tree
#[derive(Debug, Clone)]
pub struct LearningResource {
    pub lo_type: LoType,

    /// Absolute (or config-relative) directory of this resource
    pub path: PathBuf,

    /// Path relative to the course root, `/`-separated, empty for the root
    pub rel_path: String,

    /// Direct files, sorted by name
    pub files: Vec<PathBuf>,

    /// Child resources, sorted by directory name (containers only)
    pub lrs: Vec<LearningResource>,
}

impl LearningResource {
    /// Directory name of the resource
    pub fn id(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string()
    }

    /// Files with the given extension, in enumeration order
    pub fn files_with_ext(&self, ext: &str) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| has_extension(f, &[ext]))
            .map(PathBuf::as_path)
            .collect()
    }

    /// First file whose extension is one of `exts`
    pub fn first_file_with_ext(&self, exts: &[&str]) -> Option<&Path> {
        self.files
            .iter()
            .find(|f| has_extension(f, exts))
            .map(PathBuf::as_path)
    }

    /// File with an exact name
    pub fn file_with_name(&self, name: &str) -> Option<&Path> {
        self.files
            .iter()
            .find(|f| f.file_name().and_then(|n| n.to_str()) == Some(name))
            .map(PathBuf::as_path)
    }
}

/// Case-insensitive extension check
pub(crate) fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| exts.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

/// Type tag encoded in a directory name, if any
pub fn type_from_dir_name(name: &str) -> Option<LoType> {
    let prefix = name.split('-').next().unwrap_or(name);
    LoType::from_str(prefix).filter(|t| *t != LoType::Course)
}

/// Discover the course resource tree rooted at `root`
pub fn discover_course(
    root: &Path,
    ignore_patterns: &[String],
) -> Result<LearningResource, BuildError> {
    if !root.is_dir() {
        return Err(BuildError::NotADirectory(root.to_path_buf()));
    }
    let root = root.canonicalize().map_err(|source| BuildError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let ignores = compile_ignore_patterns(ignore_patterns);
    let course = discover_resource(&root, String::new(), LoType::Course, &ignores)?;
    tracing::info!(
        "Discovered {} resources under {:?}",
        count_resources(&course),
        root
    );
    Ok(course)
}

fn discover_resource(
    path: &Path,
    rel_path: String,
    lo_type: LoType,
    ignores: &[Regex],
) -> Result<LearningResource, BuildError> {
    let mut files = Vec::new();
    let mut lrs = Vec::new();

    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let child_rel = if rel_path.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", rel_path, name)
        };
        if should_ignore(&child_rel, ignores) {
            tracing::debug!("Ignoring {} due to ignore_patterns", child_rel);
            continue;
        }

        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        } else if entry.file_type().is_dir() && lo_type.is_container() {
            match type_from_dir_name(&name) {
                Some(child_type) => {
                    lrs.push(discover_resource(entry.path(), child_rel, child_type, ignores)?)
                }
                None => tracing::debug!("Skipping {}: no learning resource type", child_rel),
            }
        }
    }

    Ok(LearningResource {
        lo_type,
        path: path.to_path_buf(),
        rel_path,
        files,
        lrs,
    })
}

fn count_resources(lr: &LearningResource) -> usize {
    1 + lr.lrs.iter().map(count_resources).sum::<usize>()
}

fn compile_ignore_patterns(patterns: &[String]) -> Vec<Regex> {
    let mut compiled = Vec::new();
    for pat in patterns {
        match Regex::new(pat) {
            Ok(re) => compiled.push(re),
            Err(err) => tracing::warn!("Invalid ignore pattern '{}': {}", pat, err),
        }
    }
    compiled
}

fn should_ignore(path: &str, ignores: &[Regex]) -> bool {
    ignores.iter().any(|re| re.is_match(path))
}

/// Read a whole text file
pub fn read_text(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a markdown file and split off its frontmatter
pub fn read_markdown(path: &Path) -> Result<(Attributes, String), BuildError> {
    let text = read_text(path)?;
    parse_frontmatter(&text).map_err(|source| BuildError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a YAML file as a generic value
pub fn read_yaml_file(path: &Path) -> Result<serde_json::Value, BuildError> {
    let text = read_text(path)?;
    yaml_str_to_value(&text).map_err(|source| BuildError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_dir_name() {
        assert_eq!(type_from_dir_name("topic-01-intro"), Some(LoType::Topic));
        assert_eq!(type_from_dir_name("book-setup"), Some(LoType::Lab));
        assert_eq!(type_from_dir_name("talk"), Some(LoType::Talk));
        assert_eq!(type_from_dir_name("panelvideo-demo"), Some(LoType::Panelvideo));
        assert_eq!(type_from_dir_name("img"), None);
        assert_eq!(type_from_dir_name("course-copy"), None);
    }

    #[test]
    fn test_discovery_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("course.md"), "Course").unwrap();
        fs::create_dir_all(root.join("topic-02/book-a/img")).unwrap();
        fs::create_dir_all(root.join("topic-01/unit-1/talk-x")).unwrap();
        fs::create_dir_all(root.join("json")).unwrap();
        fs::write(root.join("topic-02/book-a/01.intro.md"), "Intro").unwrap();

        let course = discover_course(root, &[]).unwrap();
        assert_eq!(course.lo_type, LoType::Course);
        assert_eq!(course.rel_path, "");
        assert_eq!(course.files_with_ext("md").len(), 1);

        let ids: Vec<_> = course.lrs.iter().map(|lr| lr.id()).collect();
        assert_eq!(ids, vec!["topic-01", "topic-02"]);

        let lab = &course.lrs[1].lrs[0];
        assert_eq!(lab.lo_type, LoType::Lab);
        assert_eq!(lab.rel_path, "topic-02/book-a");
        // leaf resources do not descend into asset folders
        assert!(lab.lrs.is_empty());

        let talk = &course.lrs[0].lrs[0].lrs[0];
        assert_eq!(talk.rel_path, "topic-01/unit-1/talk-x");
    }

    #[test]
    fn test_ignore_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("topic-01")).unwrap();
        fs::create_dir_all(dir.path().join("topic-draft")).unwrap();

        let course = discover_course(dir.path(), &["draft".to_string()]).unwrap();
        assert_eq!(course.lrs.len(), 1);
        assert_eq!(course.lrs[0].id(), "topic-01");
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover_course(&dir.path().join("nope"), &[]),
            Err(BuildError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_file_lookup() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("properties.yaml"), "ignore: []").unwrap();
        fs::write(dir.path().join("slides.PDF"), "").unwrap();
        let course = discover_course(dir.path(), &[]).unwrap();
        assert!(course.file_with_name("properties.yaml").is_some());
        assert!(course.file_with_name("calendar.yaml").is_none());
        assert!(course.first_file_with_ext(&["pdf"]).is_some());
    }
}
