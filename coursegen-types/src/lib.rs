//! Shared types for coursegen
//!
//! This crate holds the output document model: the learning object tree a
//! course build produces, the steps labs and quizzes carry, and the closed set
//! of type tags together with the precedence order children are sorted by.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Generic front matter / YAML attribute map
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Type tag of a learning object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoType {
    Course,
    Topic,
    Unit,
    Side,
    Lab,
    Quiz,
    Talk,
    Panelvideo,
    Web,
    Github,
    Archive,
}

impl LoType {
    pub const ALL: [LoType; 11] = [
        LoType::Course,
        LoType::Topic,
        LoType::Unit,
        LoType::Side,
        LoType::Lab,
        LoType::Quiz,
        LoType::Talk,
        LoType::Panelvideo,
        LoType::Web,
        LoType::Github,
        LoType::Archive,
    ];

    /// Parse a type tag. `book` is accepted as an alias of `lab`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "course" => Some(LoType::Course),
            "topic" => Some(LoType::Topic),
            "unit" => Some(LoType::Unit),
            "side" => Some(LoType::Side),
            "lab" | "book" => Some(LoType::Lab),
            "quiz" => Some(LoType::Quiz),
            "talk" => Some(LoType::Talk),
            "panelvideo" => Some(LoType::Panelvideo),
            "web" => Some(LoType::Web),
            "github" => Some(LoType::Github),
            "archive" => Some(LoType::Archive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoType::Course => "course",
            LoType::Topic => "topic",
            LoType::Unit => "unit",
            LoType::Side => "side",
            LoType::Lab => "lab",
            LoType::Quiz => "quiz",
            LoType::Talk => "talk",
            LoType::Panelvideo => "panelvideo",
            LoType::Web => "web",
            LoType::Github => "github",
            LoType::Archive => "archive",
        }
    }

    /// Container types own child learning objects
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            LoType::Course | LoType::Topic | LoType::Unit | LoType::Side
        )
    }

    /// Sort rank among siblings; lower sorts first.
    ///
    /// Units and side units lead, leaf content follows, nested topics trail.
    pub fn precedence(&self) -> u8 {
        match self {
            LoType::Unit => 1,
            LoType::Side => 2,
            LoType::Talk => 3,
            LoType::Lab => 4,
            LoType::Quiz => 5,
            LoType::Web => 6,
            LoType::Github => 7,
            LoType::Panelvideo => 8,
            LoType::Archive => 9,
            LoType::Topic => 10,
            LoType::Course => 11,
        }
    }
}

impl PartialOrd for LoType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LoType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for LoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a quiz question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Textbox,
    Radio,
    Checkbox,
}

/// One selectable option of a radio/checkbox question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub option: String,
    pub is_answer: bool,
}

/// A single video hosting reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoIdentifier {
    pub service: String,
    pub id: String,
}

/// Video references read from a `videoid` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoIdentifiers {
    /// Default video id (first entry)
    pub videoid: String,

    #[serde(rename = "videoIds")]
    pub video_ids: Vec<VideoIdentifier>,
}

/// One chapter of a lab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabStep {
    pub title: String,
    pub short_title: String,
    pub content_md: String,
    pub route: String,
    pub id: String,
}

/// One question of a quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStep {
    pub title: String,
    pub question_type: QuestionType,
    pub question_md: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answer_options: Vec<AnswerOption>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textbox_answers: Vec<String>,

    pub route: String,
    pub id: String,
}

/// Type-specific payload of a learning object, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoKind {
    Course {
        los: Vec<LearningObject>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        properties: Option<serde_json::Value>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        calendar: Option<serde_json::Value>,
    },
    Topic {
        los: Vec<LearningObject>,
    },
    Unit {
        los: Vec<LearningObject>,
    },
    Side {
        los: Vec<LearningObject>,
    },
    Lab {
        los: Vec<LabStep>,
    },
    Quiz {
        los: Vec<QuizStep>,
    },
    Talk,
    Panelvideo,
    Web,
    Github,
    Archive,
}

impl LoKind {
    /// Empty payload for a type tag
    pub fn empty(lo_type: LoType) -> Self {
        match lo_type {
            LoType::Course => LoKind::Course {
                los: Vec::new(),
                properties: None,
                calendar: None,
            },
            LoType::Topic => LoKind::Topic { los: Vec::new() },
            LoType::Unit => LoKind::Unit { los: Vec::new() },
            LoType::Side => LoKind::Side { los: Vec::new() },
            LoType::Lab => LoKind::Lab { los: Vec::new() },
            LoType::Quiz => LoKind::Quiz { los: Vec::new() },
            LoType::Talk => LoKind::Talk,
            LoType::Panelvideo => LoKind::Panelvideo,
            LoType::Web => LoKind::Web,
            LoType::Github => LoKind::Github,
            LoType::Archive => LoKind::Archive,
        }
    }

    pub fn lo_type(&self) -> LoType {
        match self {
            LoKind::Course { .. } => LoType::Course,
            LoKind::Topic { .. } => LoType::Topic,
            LoKind::Unit { .. } => LoType::Unit,
            LoKind::Side { .. } => LoType::Side,
            LoKind::Lab { .. } => LoType::Lab,
            LoKind::Quiz { .. } => LoType::Quiz,
            LoKind::Talk => LoType::Talk,
            LoKind::Panelvideo => LoType::Panelvideo,
            LoKind::Web => LoType::Web,
            LoKind::Github => LoType::Github,
            LoKind::Archive => LoType::Archive,
        }
    }
}

/// A node of the generated course document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningObject {
    pub id: String,
    pub route: String,
    pub title: String,
    pub summary: String,
    pub content_md: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_matter: Option<Attributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videoids: Option<VideoIdentifiers>,

    pub hide: bool,

    #[serde(flatten)]
    pub kind: LoKind,
}

impl LearningObject {
    pub fn lo_type(&self) -> LoType {
        self.kind.lo_type()
    }

    /// Child learning objects (empty for leaf types, labs and quizzes)
    pub fn children(&self) -> &[LearningObject] {
        match &self.kind {
            LoKind::Course { los, .. }
            | LoKind::Topic { los }
            | LoKind::Unit { los }
            | LoKind::Side { los } => los,
            _ => &[],
        }
    }

    /// Mutable child list, `None` for non-container types
    pub fn children_mut(&mut self) -> Option<&mut Vec<LearningObject>> {
        match &mut self.kind {
            LoKind::Course { los, .. }
            | LoKind::Topic { los }
            | LoKind::Unit { los }
            | LoKind::Side { los } => Some(los),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Turn this node into a course, keeping its children
    pub fn into_course(self) -> Self {
        let kind = match self.kind {
            course @ LoKind::Course { .. } => course,
            LoKind::Topic { los } | LoKind::Unit { los } | LoKind::Side { los } => {
                LoKind::Course {
                    los,
                    properties: None,
                    calendar: None,
                }
            }
            _ => LoKind::empty(LoType::Course),
        };
        Self { kind, ..self }
    }
}
