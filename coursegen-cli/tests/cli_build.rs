use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn init_then_build_writes_course_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursegen initialized"));

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .args(["build", "--pretty"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("json").join("tutors.json"))?;
    let course: Value = serde_json::from_str(&output)?;
    assert_eq!(course["type"], "course");
    assert_eq!(course["route"], "/");
    assert_eq!(course["title"], "My First Course");

    let topics = course["los"].as_array().ok_or("los is not an array")?;
    assert_eq!(topics.len(), 2);
    let welcome = topics
        .iter()
        .find(|t| t["id"] == "topic-01-welcome")
        .ok_or("missing welcome topic")?;
    assert_eq!(welcome["hide"], false);
    let next = topics
        .iter()
        .find(|t| t["id"] == "topic-02-next")
        .ok_or("missing next topic")?;
    assert_eq!(next["hide"], true);

    let kinds: Vec<&str> = welcome["los"]
        .as_array()
        .ok_or("topic los is not an array")?
        .iter()
        .filter_map(|lo| lo["type"].as_str())
        .collect();
    assert_eq!(kinds, vec!["talk", "lab", "quiz", "web"]);
    Ok(())
}

#[test]
fn build_honours_output_override_and_course_url() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let content = dir.path().join("content");
    fs::create_dir_all(content.join("topic-01-intro"))?;
    fs::write(content.join("course.md"), "# Override\n")?;
    fs::write(content.join("topic-01-intro/topic.md"), "# Intro\n")?;
    fs::write(
        dir.path().join("coursegen.yml"),
        "paths:\n  content: content\ncourse_url: courses.example.com/override\n",
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .args(["build", "--output", "public"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("public").join("tutors.json"))?;
    assert!(!output.contains('\n'), "expected compact output");
    let course: Value = serde_json::from_str(&output)?;
    assert_eq!(
        course["los"][0]["route"],
        "/topic/courses.example.com/override/topic-01-intro"
    );
    Ok(())
}

#[test]
fn outline_prints_tree() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .arg("outline")
        .assert()
        .success()
        .stdout(predicate::str::contains("topic topic-02-next: Coming Next [hidden]"))
        .stdout(predicate::str::contains("quiz quiz-1-check: Check your understanding (2 questions)"));

    #[allow(deprecated)]
    let assert = Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .args(["outline", "--json"])
        .assert()
        .success();
    let summary: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(summary["topics"], 2);
    assert_eq!(summary["hidden"][0], "topic-02-next");
    Ok(())
}

#[test]
fn build_fails_on_unanswered_question() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let quiz = dir.path().join("topic-01/quiz-1");
    fs::create_dir_all(&quiz)?;
    fs::write(quiz.join("00.quiz.md"), "# Quiz\n")?;
    fs::write(quiz.join("01.pick.md"), "Pick one\n- [ ] a\n- [ ] b\n")?;

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build course"));

    assert!(!dir.path().join("json").join("tutors.json").exists());
    Ok(())
}

#[test]
fn build_fails_on_missing_content_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("coursegen")?
        .current_dir(dir.path())
        .args(["build", "--content", "nowhere"])
        .assert()
        .failure();
    Ok(())
}
