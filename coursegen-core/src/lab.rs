//! Lab parsing - one step per markdown chapter, in file order.

use crate::builder::BuildError;
use crate::links::short_title;
use crate::resource::{read_markdown, LearningResource};
use coursegen_types::LabStep;

/// Steps of a lab and the title derived from its first chapter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabChapters {
    /// Short title of the first chapter, empty for a lab without chapters
    pub title: String,
    pub steps: Vec<LabStep>,
}

/// Build every chapter of a lab resource into a step
pub fn parse_lab(lr: &LearningResource, route: &str) -> Result<LabChapters, BuildError> {
    let mut lab = LabChapters::default();

    for (index, chapter) in lr.files_with_ext("md").into_iter().enumerate() {
        let (_, body) = read_markdown(chapter)?;
        let name = short_title(chapter);
        if index == 0 {
            lab.title = name.clone();
        }

        lab.steps.push(LabStep {
            title: step_title(&body),
            route: format!("{}/{}", route, name),
            id: name.clone(),
            short_title: name,
            content_md: body,
        });
    }

    Ok(lab)
}

/// First line of a chapter body, carriage returns removed
fn step_title(body: &str) -> String {
    body.split('\n').next().unwrap_or_default().replace('\r', "")
}
