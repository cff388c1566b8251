use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary in `dir` with a clean environment for settings and logs.
fn listwalk(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_listwalk"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("LW_RUN__KEEP_GOING")
        .env_remove("LW_RUN__JSON")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run listwalk")
}

const LISTS_PREFIX: &str = "\
['trek', 'cannondale', 'redline', 'specialized']
trek
Trek
My first bike was a Cannondale.
['honda', 'yamaha', 'suzuki']
['ducati', 'yamaha', 'suzuki']
['ducati', 'yamaha', 'suzuki', 'davidson']
['harley', 'ducati', 'yamaha', 'suzuki', 'davidson']
['ducati', 'yamaha', 'suzuki', 'davidson']
davidson
['ducati', 'yamaha', 'suzuki']
ducati
['yamaha', 'suzuki']
";

const LISTS_REST: &str = "\
['yamaha', 'suzuki']
['suzuki', 'yamaha']
['yamaha', 'suzuki']
['suzuki', 'yamaha']
['suzuki', 'yamaha']
yamaha
['kyle', 'mike']
['kyle', 'mike']
['corey']
";

const STRINGS: &str = "\
Kyle David
KYLE DAVID
kyle david
kyle schneiderlochner
Hello Kyle Schneiderlochner!
\t Python
Python
is 
fun!
 Java 
 Java
Java 
Java
";

#[test]
fn test_strings_lesson_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["run", "strings"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), STRINGS);
}

#[test]
fn test_lists_lesson_stops_at_failed_remove() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["run", "lists"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), LISTS_PREFIX);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\"honda\" is not in list"));
    assert!(stderr.contains("--keep-going"));
}

#[test]
fn test_keep_going_runs_all_lessons() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["run", "--keep-going"]);

    assert!(output.status.success());
    let expected = format!("{LISTS_PREFIX}{LISTS_REST}{STRINGS}");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_keep_going_from_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".listwalk");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("settings.toml"), "[run]\nkeep_going = true\n").unwrap();

    // Settings are found from a nested working directory too
    let nested = temp_dir.path().join("deep/inside");
    std::fs::create_dir_all(&nested).unwrap();
    let output = listwalk(&nested, &["run", "lists"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("['corey']\n"));
}

#[test]
fn test_unknown_lesson() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["run", "strings", "dicts"]);

    assert_eq!(output.status.code(), Some(2));
    // Nothing runs when any name is unknown
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown lesson: dicts"));
    assert!(stderr.contains("lists, strings"));
}

#[test]
fn test_json_envelope_on_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["run", "lists", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "error");
    assert_eq!(value["code"], "STEP_FAILED");
    assert_eq!(value["exit_code"], 1);
    assert_eq!(value["error"]["step"], "remove honda");
    assert_eq!(value["data"][0]["lesson"], "lists");
    assert_eq!(value["data"][0]["output"][12], "['yamaha', 'suzuki']");
    assert_eq!(value["data"][0]["aborted"], true);
}

#[test]
fn test_json_envelope_partial_success() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["run", "--json", "--keep-going"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "partial_success");
    assert_eq!(value["code"], "OK");
    assert_eq!(value["meta"]["count"], 2);
    assert_eq!(value["meta"]["schema_version"], "1.0.0");
    assert_eq!(value["data"][1]["output"][6], "Python\nis \nfun!");
    assert!(value["data"][1].get("failures").is_none());
}

#[test]
fn test_lessons_listing() {
    let temp_dir = TempDir::new().unwrap();
    let output = listwalk(temp_dir.path(), &["lessons"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Lessons:\n"));
    assert!(stdout.contains("  lists  "));
    assert!(stdout.contains("  strings  "));
}
