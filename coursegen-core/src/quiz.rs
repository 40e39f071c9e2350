//! Quiz parsing - one question per markdown chapter.
//!
//! A question body is free markdown optionally followed by option lines:
//!
//! ```text
//! What is 2+2?
//! - [ ] 3
//! - [x] 4
//! - [ ] 5
//! ```
//!
//! A line starting with `- [`, one marker character and `]` opens an option;
//! lines that follow continue that option until the next option line. Only a
//! lowercase `x` marks an answer. A body without option lines is a free-text
//! question whose accepted answers come from `textboxAnswers` front matter.

use crate::builder::BuildError;
use crate::frontmatter::{attr_string, attr_string_list};
use crate::links::short_title;
use crate::resource::{read_markdown, LearningResource};
use coursegen_types::{AnswerOption, QuestionType, QuizStep};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("question lists options but none is marked as an answer")]
    Unanswered,
}

/// Parsed question body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question_type: QuestionType,
    pub question_md: String,
    pub answer_options: Vec<AnswerOption>,
}

/// `- [x] text` -> `(true, " text")`
fn option_line(line: &str) -> Option<(bool, &str)> {
    let rest = line.strip_prefix("- [")?;
    let mut chars = rest.chars();
    let marker = chars.next()?;
    let text = chars.as_str().strip_prefix(']')?;
    Some((marker == 'x', text))
}

/// Parse one question body
pub fn parse_question(body: &str) -> Result<Question, QuizError> {
    let mut question_lines: Vec<&str> = Vec::new();
    let mut options: Vec<(bool, String)> = Vec::new();

    for line in body.split('\n') {
        if let Some((is_answer, text)) = option_line(line) {
            options.push((is_answer, text.to_string()));
        } else if let Some((_, text)) = options.last_mut() {
            text.push('\n');
            text.push_str(line);
        } else {
            question_lines.push(line);
        }
    }

    if options.is_empty() {
        return Ok(Question {
            question_type: QuestionType::Textbox,
            question_md: body.to_string(),
            answer_options: Vec::new(),
        });
    }

    let answer_options: Vec<AnswerOption> = options
        .into_iter()
        .map(|(is_answer, text)| AnswerOption {
            option: text.trim().to_string(),
            is_answer,
        })
        .collect();

    let question_type = match answer_options.iter().filter(|o| o.is_answer).count() {
        0 => return Err(QuizError::Unanswered),
        1 => QuestionType::Radio,
        _ => QuestionType::Checkbox,
    };

    Ok(Question {
        question_type,
        question_md: question_lines.join("\n").trim_end().to_string(),
        answer_options,
    })
}

/// Build the questions of a quiz resource. The first chapter introduces the
/// quiz and is not a question.
pub fn parse_quiz(lr: &LearningResource, route: &str) -> Result<Vec<QuizStep>, BuildError> {
    lr.files_with_ext("md")
        .into_iter()
        .skip(1)
        .map(|file| parse_quiz_file(file, route))
        .collect()
}

fn parse_quiz_file(file: &Path, route: &str) -> Result<QuizStep, BuildError> {
    let title = short_title(file);
    let (attrs, body) = read_markdown(file)?;
    let question = parse_question(&body).map_err(|source| BuildError::Quiz {
        path: file.to_path_buf(),
        source,
    })?;

    let textbox_answers = match question.question_type {
        QuestionType::Textbox => attr_string_list(&attrs, "textboxAnswers"),
        _ => Vec::new(),
    };

    Ok(QuizStep {
        route: format!("{}/{}", route, title),
        id: title.clone(),
        title,
        question_type: question.question_type,
        question_md: question.question_md,
        explanation: attr_string(&attrs, "explanation"),
        hint: attr_string(&attrs, "hint"),
        answer_options: question.answer_options,
        textbox_answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(option: &str, is_answer: bool) -> AnswerOption {
        AnswerOption {
            option: option.to_string(),
            is_answer,
        }
    }

    #[test]
    fn test_radio_question() {
        let q = parse_question("What is 2+2?\n- [ ] 3\n- [x] 4\n- [ ] 5").unwrap();
        assert_eq!(q.question_type, QuestionType::Radio);
        assert_eq!(q.question_md, "What is 2+2?");
        assert_eq!(
            q.answer_options,
            vec![opt("3", false), opt("4", true), opt("5", false)]
        );
    }

    #[test]
    fn test_checkbox_question() {
        let q = parse_question("Pick the primes\n- [x] 2\n- [x] 3\n- [ ] 4\n").unwrap();
        assert_eq!(q.question_type, QuestionType::Checkbox);
        assert_eq!(q.answer_options.len(), 3);
        assert_eq!(q.answer_options.iter().filter(|o| o.is_answer).count(), 2);
    }

    #[test]
    fn test_textbox_question() {
        let body = "Name the Rust package manager.\n";
        let q = parse_question(body).unwrap();
        assert_eq!(q.question_type, QuestionType::Textbox);
        assert_eq!(q.question_md, body);
        assert!(q.answer_options.is_empty());
    }

    #[test]
    fn test_unanswered_question_rejected() {
        assert_eq!(
            parse_question("Pick one\n- [ ] a\n- [ ] b"),
            Err(QuizError::Unanswered)
        );
    }

    #[test]
    fn test_uppercase_marker_is_not_an_answer() {
        let q = parse_question("Q\n- [X] a\n- [x] b").unwrap();
        assert_eq!(q.question_type, QuestionType::Radio);
        assert_eq!(q.answer_options, vec![opt("a", false), opt("b", true)]);
    }

    #[test]
    fn test_multiline_question_and_option() {
        let body = "Which compiles?\n\n```rust\nlet x = 5;\n```\n- [x] the first\n  snippet\n- [ ] neither";
        let q = parse_question(body).unwrap();
        assert_eq!(q.question_md, "Which compiles?\n\n```rust\nlet x = 5;\n```");
        assert_eq!(q.answer_options[0].option, "the first\n  snippet");
        assert_eq!(q.answer_options[1].option, "neither");
    }

    #[test]
    fn test_markdown_link_list_is_not_an_option() {
        let body = "See the docs:\n- [book](https://doc.rust-lang.org/book)\n";
        let q = parse_question(body).unwrap();
        assert_eq!(q.question_type, QuestionType::Textbox);
    }

    #[test]
    fn test_crlf_options() {
        let q = parse_question("Q\r\n- [x] yes\r\n- [ ] no\r\n").unwrap();
        assert_eq!(q.question_md, "Q");
        assert_eq!(q.answer_options, vec![opt("yes", true), opt("no", false)]);
    }
}
