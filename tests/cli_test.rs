use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_build_command() {
    // Create temporary directory
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    // Create sample markdown file with two slides
    let markdown_path = temp_path.join("deck.md");
    let markdown_content = "# First\n\nHello.\n---\n# Second\n\nGoodbye.";
    fs::write(&markdown_path, markdown_content).expect("Failed to write markdown file");

    let output_dir = temp_path.join("site");

    // Run command
    let output = run_command(&[
        "build",
        "-i",
        markdown_path.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
        "--root",
        temp_path.to_str().unwrap(),
    ]);

    // Check command executed successfully
    assert!(output.status.success(), "Command failed: {:?}", output);

    // One directory per slide route
    let first = fs::read_to_string(output_dir.join("1").join("index.html"))
        .expect("First page was not written");
    assert!(first.contains("<h1>First</h1>"), "Missing first slide content");
    assert!(first.contains("<p>Hello.</p>"), "Missing first slide body");

    let second = fs::read_to_string(output_dir.join("2").join("index.html"))
        .expect("Second page was not written");
    assert!(second.contains("<h1>Second</h1>"), "Missing second slide content");
}

#[test]
fn test_build_command_rejects_missing_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nope.md");
    let output_dir = temp_dir.path().join("site");

    let output = run_command(&[
        "build",
        "-i",
        missing.to_str().unwrap(),
        "-o",
        output_dir.to_str().unwrap(),
    ]);

    assert!(!output.status.success(), "Command should fail: {:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"), "stderr: {}", stderr);
}
