//! # coursegen-core
//!
//! Core library for the coursegen course builder.
//!
//! This crate discovers a course's content tree on disk, parses labs and
//! quizzes out of their markdown chapters, and assembles the learning object
//! document the course reader consumes.

pub mod builder;
pub mod config;
pub mod course;
pub mod frontmatter;
pub mod lab;
pub mod links;
pub mod markdown;
pub mod quiz;
pub mod resource;

pub use builder::{BuildError, CourseBuilder};
pub use config::Config;
pub use course::{assemble_course, write_course};
pub use coursegen_types::{
    AnswerOption, LabStep, LearningObject, LoKind, LoType, QuestionType, QuizStep,
};
pub use resource::{discover_course, LearningResource};
