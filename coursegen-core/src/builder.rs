//! Course building logic - turns learning resources into learning objects.

use crate::{
    config::Config,
    course::assemble_course,
    frontmatter::FrontmatterError,
    lab::parse_lab,
    links::{git_link, read_video_ids, topic_route, web_link, LinkResolver},
    markdown::title_and_summary,
    quiz::{parse_quiz, QuizError},
    resource::{discover_course, read_markdown, LearningResource},
};
use coursegen_types::{LearningObject, LoKind, LoType};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Frontmatter error in {path:?}: {source}")]
    Frontmatter {
        path: PathBuf,
        source: FrontmatterError,
    },

    #[error("YAML error in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        source: FrontmatterError,
    },

    #[error("Quiz error in {path:?}: {source}")]
    Quiz { path: PathBuf, source: QuizError },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Course root {0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("{lo_type} '{id}' has no {expected}")]
    MissingLink {
        lo_type: LoType,
        id: String,
        expected: &'static str,
    },

    #[error("Failed to serialize course: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main course builder
///
/// Building is a pure walk over the resource tree: nothing is retained
/// between calls, so one builder can build any number of courses.
pub struct CourseBuilder {
    config: Config,
    links: LinkResolver,
}

impl CourseBuilder {
    pub fn new(config: Config) -> Self {
        let links = LinkResolver::new(config.normalized_course_url());
        Self { config, links }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover the content tree and build the full course
    pub fn build(&self) -> Result<LearningObject, BuildError> {
        let root = discover_course(&self.config.content_dir(), &self.config.ignore_patterns)?;
        let course = assemble_course(self, &root)?;
        tracing::info!("Built course with {} learning objects", course.node_count());
        Ok(course)
    }

    /// Build one resource and everything below it
    pub fn build_tree(
        &self,
        lr: &LearningResource,
        depth: usize,
    ) -> Result<LearningObject, BuildError> {
        let lo = self.build_default(lr)?;
        tracing::debug!("{}: {} : {}", "-".repeat(depth * 2), lo.id, lo.title);

        match lr.lo_type {
            LoType::Course | LoType::Topic | LoType::Unit | LoType::Side => {
                self.build_container(lo, lr, depth)
            }
            LoType::Lab
            | LoType::Quiz
            | LoType::Talk
            | LoType::Panelvideo
            | LoType::Web
            | LoType::Github
            | LoType::Archive => self.build_leaf(lo, lr),
        }
    }

    /// Attributes every learning object carries, whatever its type
    pub fn build_default(&self, lr: &LearningResource) -> Result<LearningObject, BuildError> {
        let (front_matter, body) = match lr.files_with_ext("md").first() {
            Some(file) => read_markdown(file)?,
            None => Default::default(),
        };
        let parts = title_and_summary(&body);
        let videoids = read_video_ids(lr)?;

        Ok(LearningObject {
            id: lr.id(),
            route: self.links.route(lr),
            title: parts.title,
            summary: parts.summary,
            content_md: body,
            front_matter: (!front_matter.is_empty()).then_some(front_matter),
            img: self.links.image(lr),
            pdf: self.links.pdf(lr),
            video: self.links.video(lr, videoids.as_ref()),
            videoids,
            hide: false,
            kind: LoKind::empty(lr.lo_type),
        })
    }

    fn build_container(
        &self,
        mut lo: LearningObject,
        lr: &LearningResource,
        depth: usize,
    ) -> Result<LearningObject, BuildError> {
        match lr.lo_type {
            LoType::Unit | LoType::Side => lo.route = topic_route(&lo.route, lr.lo_type),
            _ => {}
        }

        let mut children = Vec::with_capacity(lr.lrs.len());
        for child in &lr.lrs {
            children.push(self.build_tree(child, depth + 1)?);
        }
        // stable: equal types keep discovery order
        children.sort_by_key(|c| c.lo_type());

        if let Some(los) = lo.children_mut() {
            *los = children;
        }
        Ok(lo)
    }

    fn build_leaf(
        &self,
        mut lo: LearningObject,
        lr: &LearningResource,
    ) -> Result<LearningObject, BuildError> {
        match lr.lo_type {
            LoType::Lab => {
                let lab = parse_lab(lr, &lo.route)?;
                lo.title = lab.title;
                lo.img = self.links.lab_image(lr)?;
                lo.kind = LoKind::Lab { los: lab.steps };
            }
            LoType::Quiz => {
                let questions = parse_quiz(lr, &lo.route)?;
                lo.img = self.links.lab_image(lr)?;
                lo.kind = LoKind::Quiz { los: questions };
            }
            LoType::Talk => {
                if lo.pdf.is_none() {
                    if let Some(video) = &lo.video {
                        lo.route = video.clone();
                    }
                }
            }
            LoType::Panelvideo => match &lo.video {
                Some(video) => lo.route = video.clone(),
                None => tracing::warn!("Panel video '{}' has no videoid file", lo.id),
            },
            LoType::Web => lo.route = web_link(lr)?,
            LoType::Github => lo.route = git_link(lr)?,
            LoType::Archive => lo.route = self.links.archive(lr)?,
            LoType::Course | LoType::Topic | LoType::Unit | LoType::Side => {}
        }
        Ok(lo)
    }
}
