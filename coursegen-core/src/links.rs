//! Route, identifier and media reference derivation for learning resources.

use crate::builder::BuildError;
use crate::resource::{has_extension, read_text, LearningResource};
use coursegen_types::{LoType, VideoIdentifier, VideoIdentifiers};
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];
const VIDEO_ID_FILE: &str = "videoid";
const WEB_LINK_FILE: &str = "weburl";
const GIT_LINK_FILE: &str = "githubid";
const DEFAULT_VIDEO_SERVICE: &str = "youtube";

/// Derives routes and media references relative to a course URL
#[derive(Debug, Clone)]
pub struct LinkResolver {
    course_url: String,
}

impl LinkResolver {
    pub fn new(course_url: impl Into<String>) -> Self {
        Self {
            course_url: course_url.into().trim().trim_matches('/').to_string(),
        }
    }

    /// `/{type}/{course_url}/{relative path}`
    pub fn route(&self, lr: &LearningResource) -> String {
        format!(
            "/{}",
            join_segments(&[lr.lo_type.as_str(), &self.course_url, &lr.rel_path])
        )
    }

    /// `{course_url}/{relative path}/{file name}`
    pub fn media_ref(&self, lr: &LearningResource, file: &Path) -> String {
        let rel = file
            .strip_prefix(&lr.path)
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/");
        join_segments(&[&self.course_url, &lr.rel_path, &rel])
    }

    pub fn image(&self, lr: &LearningResource) -> Option<String> {
        lr.first_file_with_ext(IMAGE_EXTENSIONS)
            .map(|f| self.media_ref(lr, f))
    }

    /// `img/main.*` inside a lab, else the first image in `img/`, else the
    /// resource's own image
    pub fn lab_image(&self, lr: &LearningResource) -> Result<Option<String>, BuildError> {
        let img_dir = lr.path.join("img");
        if !img_dir.is_dir() {
            return Ok(self.image(lr));
        }

        let mut images = Vec::new();
        for entry in WalkDir::new(&img_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), IMAGE_EXTENSIONS) {
                images.push(entry.into_path());
            }
        }

        let main = images
            .iter()
            .find(|p| p.file_stem().and_then(|s| s.to_str()) == Some("main"))
            .or_else(|| images.first());

        Ok(match main {
            Some(path) => Some(self.media_ref(lr, path)),
            None => self.image(lr),
        })
    }

    pub fn pdf(&self, lr: &LearningResource) -> Option<String> {
        lr.first_file_with_ext(&["pdf"]).map(|f| self.media_ref(lr, f))
    }

    /// `/video/{course_url}/{relative path}/{videoid}`
    pub fn video(&self, lr: &LearningResource, ids: Option<&VideoIdentifiers>) -> Option<String> {
        let ids = ids?;
        Some(format!(
            "/{}",
            join_segments(&["video", &self.course_url, &lr.rel_path, &ids.videoid])
        ))
    }

    /// Archive download reference (first `.zip` file)
    pub fn archive(&self, lr: &LearningResource) -> Result<String, BuildError> {
        lr.first_file_with_ext(&["zip"])
            .map(|f| self.media_ref(lr, f))
            .ok_or_else(|| missing_link(lr, "zip file"))
    }
}

/// Read the `videoid` file, if present
pub fn read_video_ids(lr: &LearningResource) -> Result<Option<VideoIdentifiers>, BuildError> {
    match lr.file_with_name(VIDEO_ID_FILE) {
        Some(path) => Ok(parse_video_ids(&read_text(path)?)),
        None => Ok(None),
    }
}

/// Each non-empty line is `service: id` or a bare id; the first entry is the default
pub fn parse_video_ids(text: &str) -> Option<VideoIdentifiers> {
    let video_ids: Vec<VideoIdentifier> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(':') {
            Some((service, id)) if !id.starts_with("//") => VideoIdentifier {
                service: service.trim().to_string(),
                id: id.trim().to_string(),
            },
            _ => VideoIdentifier {
                service: DEFAULT_VIDEO_SERVICE.to_string(),
                id: line.to_string(),
            },
        })
        .collect();

    let videoid = video_ids.first()?.id.clone();
    Some(VideoIdentifiers { videoid, video_ids })
}

/// External link from a `weburl` file
pub fn web_link(lr: &LearningResource) -> Result<String, BuildError> {
    link_file(lr, WEB_LINK_FILE)
}

/// Repository link from a `githubid` file
pub fn git_link(lr: &LearningResource) -> Result<String, BuildError> {
    link_file(lr, GIT_LINK_FILE)
}

fn link_file(lr: &LearningResource, name: &'static str) -> Result<String, BuildError> {
    let path = lr
        .file_with_name(name)
        .ok_or_else(|| missing_link(lr, name))?;
    let link = read_text(path)?.trim().to_string();
    if link.is_empty() {
        return Err(missing_link(lr, name));
    }
    Ok(link)
}

fn missing_link(lr: &LearningResource, expected: &'static str) -> BuildError {
    BuildError::MissingLink {
        lo_type: lr.lo_type,
        id: lr.id(),
        expected,
    }
}

/// Short title of a chapter file: `01.intro.md` -> `intro`
pub fn short_title(file: &Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    match stem.split_once('.') {
        Some((_, rest)) => rest.to_string(),
        None => stem.to_string(),
    }
}

/// Parent directory of a route with `/unit` or `/side` rewritten to `/topic`
pub fn topic_route(route: &str, from: LoType) -> String {
    let parent = match route.rfind('/') {
        Some(idx) => &route[..=idx],
        None => route,
    };
    parent.replacen(&format!("/{}", from.as_str()), "/topic", 1)
}

fn join_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn resource(lo_type: LoType, rel_path: &str) -> LearningResource {
        LearningResource {
            lo_type,
            path: PathBuf::from("/course").join(rel_path),
            rel_path: rel_path.to_string(),
            files: vec![],
            lrs: vec![],
        }
    }

    #[test]
    fn test_route() {
        let links = LinkResolver::new("{{COURSEURL}}");
        let lr = resource(LoType::Lab, "topic-01/book-a");
        assert_eq!(links.route(&lr), "/lab/{{COURSEURL}}/topic-01/book-a");

        let root = resource(LoType::Course, "");
        assert_eq!(links.route(&root), "/course/{{COURSEURL}}");
    }

    #[test]
    fn test_media_ref() {
        let links = LinkResolver::new("/example.com/");
        let lr = resource(LoType::Talk, "topic-01/talk-1");
        let file = PathBuf::from("/course/topic-01/talk-1/slides.pdf");
        assert_eq!(
            links.media_ref(&lr, &file),
            "example.com/topic-01/talk-1/slides.pdf"
        );
    }

    #[test]
    fn test_short_title() {
        assert_eq!(short_title(Path::new("/x/01.intro.md")), "intro");
        assert_eq!(short_title(Path::new("02.setup.md")), "setup");
        assert_eq!(short_title(Path::new("03.part.two.md")), "part.two");
        assert_eq!(short_title(Path::new("intro.md")), "intro");
    }

    #[test]
    fn test_topic_route() {
        assert_eq!(
            topic_route("/unit/c/topic-01/unit-1", LoType::Unit),
            "/topic/c/topic-01/"
        );
        assert_eq!(
            topic_route("/side/c/topic-02/side-extra", LoType::Side),
            "/topic/c/topic-02/"
        );
        assert_eq!(topic_route("/a/unit/x", LoType::Unit), "/a/topic/");
    }

    #[test]
    fn test_parse_video_ids() {
        let ids = parse_video_ids("heanet: abc123\nXyZ9\nhttps://vimeo.com/1\n").unwrap();
        assert_eq!(ids.videoid, "abc123");
        assert_eq!(ids.video_ids.len(), 3);
        assert_eq!(ids.video_ids[0].service, "heanet");
        assert_eq!(ids.video_ids[1].service, "youtube");
        assert_eq!(ids.video_ids[1].id, "XyZ9");
        assert_eq!(ids.video_ids[2].id, "https://vimeo.com/1");

        assert!(parse_video_ids("\n  \n").is_none());
    }

    #[test]
    fn test_video_route() {
        let links = LinkResolver::new("c");
        let lr = resource(LoType::Panelvideo, "topic-01/panelvideo-x");
        let ids = parse_video_ids("abc").unwrap();
        assert_eq!(
            links.video(&lr, Some(&ids)),
            Some("/video/c/topic-01/panelvideo-x/abc".to_string())
        );
        assert_eq!(links.video(&lr, None), None);
    }

    #[test]
    fn test_missing_web_link() {
        let lr = resource(LoType::Web, "topic-01/web-docs");
        assert!(matches!(
            web_link(&lr),
            Err(BuildError::MissingLink { expected: "weburl", .. })
        ));
    }
}
