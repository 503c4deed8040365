//! Integration tests for the notesift CLI using fixture notebooks.

use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;

/// Get the path to a fixture notebook or note.
fn fixture_path(relative: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .unwrap()
        .join("fixtures")
        .join("notebooks")
        .join(relative)
}

/// Run notesift and return (stdout, stderr, exit code).
fn run_notesift(args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_notesift");

    let output = Command::new(binary)
        .env("NOTESIFT_CONFIG", fixture_path("no-such-config.toml"))
        .env_remove("NOTESIFT_LOG")
        .args(args)
        .output()
        .expect("Failed to execute notesift");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Search both fixture notebooks, `work` first.
fn search_all(extra: &[&str]) -> (Value, i32) {
    let work = fixture_path("work");
    let home = fixture_path("home");
    let mut args = vec![
        "search",
        "--scope",
        "all-notebooks",
        "--notebook",
        work.to_str().unwrap(),
        "--notebook",
        home.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);

    let (stdout, stderr, code) = run_notesift(&args);
    let value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("invalid JSON ({e}): {stdout}\nstderr: {stderr}"));
    (value, code)
}

fn labels(result: &Value) -> Vec<String> {
    result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["display_text"].as_str().unwrap().to_string())
        .collect()
}

mod name_search {
    use super::*;

    #[test]
    fn matches_note_names() {
        let (result, code) = search_all(&["plan"]);
        assert_eq!(code, 0);
        assert_eq!(result["state"], "success");
        assert_eq!(labels(&result), vec!["plan"]);
    }

    #[test]
    fn hidden_notes_are_skipped() {
        let (result, code) = search_all(&["hidden"]);
        assert_eq!(code, 0);
        assert!(labels(&result).is_empty());
    }

    #[test]
    fn empty_keyword_succeeds_with_nothing() {
        let (result, code) = search_all(&[""]);
        assert_eq!(code, 0);
        assert_eq!(result["state"], "success");
        assert!(labels(&result).is_empty());
    }
}

mod outline_search {
    use super::*;

    #[test]
    fn groups_matching_headings_per_note() {
        let (result, code) = search_all(&["plan", "--object", "outline"]);
        assert_eq!(code, 0);
        assert_eq!(labels(&result), vec!["budget", "plan"]);

        let budget = &result["items"][0]["sub_matches"];
        assert_eq!(budget[0]["line_number"], 2);
        assert_eq!(budget[0]["text"], "Travel plans");

        let plan = &result["items"][1]["sub_matches"];
        assert_eq!(plan.as_array().unwrap().len(), 1);
        assert_eq!(plan[0]["line_number"], 0);
        assert_eq!(plan[0]["text"], "Project Plan");
    }

    #[test]
    fn whole_word_only() {
        let (result, _) = search_all(&["plan", "--object", "outline", "-w"]);
        assert_eq!(labels(&result), vec!["plan"]);
    }

    #[test]
    fn case_sensitive() {
        let (result, _) = search_all(&["plan", "--object", "outline", "-c"]);
        assert_eq!(labels(&result), vec!["budget"]);

        let (result, _) = search_all(&["Plan", "--object", "outline", "-c"]);
        assert_eq!(labels(&result), vec!["plan"]);
    }

    #[test]
    fn regular_expression() {
        let (result, code) = search_all(&["^(Bread|Soup)$", "--object", "outline", "-e"]);
        assert_eq!(code, 0);
        assert_eq!(labels(&result), vec!["recipes"]);
        assert_eq!(result["items"][0]["sub_matches"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn name_wins_over_outline() {
        let (result, _) = search_all(&["plan", "--object", "outline", "--object", "name"]);
        assert_eq!(labels(&result), vec!["plan"]);
        assert!(result["items"][0].get("sub_matches").is_none());
    }
}

mod content_search {
    use super::*;

    #[test]
    fn current_folder_lines() {
        let current = fixture_path("work/inbox.md");
        let (stdout, _, code) = run_notesift(&[
            "search",
            "review",
            "--object",
            "content",
            "--scope",
            "current-folder",
            "--current",
            current.to_str().unwrap(),
        ]);
        assert_eq!(code, 0);

        let result: Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(labels(&result), vec!["inbox"]);
        assert_eq!(result["items"][0]["sub_matches"][0]["line_number"], 2);
        assert_eq!(
            result["items"][0]["sub_matches"][0]["text"],
            "Remember to review the plan."
        );
    }
}

mod failures {
    use super::*;

    #[test]
    fn invalid_regex_fails_search() {
        let (result, code) = search_all(&["([", "-e"]);
        assert_eq!(code, 3);
        assert_eq!(result["state"], "fail");
        assert!(result["error_message"].as_str().unwrap().contains("(["));
        assert!(labels(&result).is_empty());
    }

    #[test]
    fn tag_object_is_unsupported() {
        let (result, code) = search_all(&["plan", "--object", "tag"]);
        assert_eq!(code, 3);
        assert_eq!(result["state"], "fail");
    }

    #[test]
    fn folder_target_is_unsupported() {
        let (result, code) = search_all(&["plan", "--target", "folder"]);
        assert_eq!(code, 3);
        assert_eq!(result["state"], "fail");
    }

    #[test]
    fn missing_current_note() {
        let missing = fixture_path("work/missing.md");
        let (_, stderr, code) =
            run_notesift(&["search", "x", "--current", missing.to_str().unwrap()]);
        assert_eq!(code, 2);
        assert!(stderr.contains("Note not found"));
    }

    #[test]
    fn missing_notebook() {
        let missing = fixture_path("nowhere");
        let (_, stderr, code) =
            run_notesift(&["search", "x", "--notebook", missing.to_str().unwrap()]);
        assert_eq!(code, 1);
        assert!(stderr.contains("Notebook not found"));
    }
}

mod presentation {
    use super::*;

    #[test]
    fn tree_output() {
        let work = fixture_path("work");
        let (stdout, stderr, code) = run_notesift(&[
            "search",
            "plan",
            "--object",
            "outline",
            "--scope",
            "current-notebook",
            "--notebook",
            work.to_str().unwrap(),
            "--tree",
        ]);
        assert_eq!(code, 0);
        assert_eq!(
            stdout,
            "budget\n    [2] Travel plans\nplan\n    [0] Project Plan\n"
        );
        assert!(stderr.contains("2 Items"));
    }

    #[test]
    fn quiet_tree_output() {
        let work = fixture_path("work");
        let (_, stderr, code) = run_notesift(&[
            "search",
            "plan",
            "--notebook",
            work.to_str().unwrap(),
            "--scope",
            "current-notebook",
            "--tree",
            "-q",
        ]);
        assert_eq!(code, 0);
        assert!(!stderr.contains("Items"));
    }

    #[test]
    fn yaml_output() {
        let work = fixture_path("work");
        let (stdout, _, code) = run_notesift(&[
            "--yaml",
            "search",
            "inbox",
            "--scope",
            "current-notebook",
            "--notebook",
            work.to_str().unwrap(),
        ]);
        assert_eq!(code, 0);
        assert!(stdout.contains("state: success"));
        assert!(stdout.contains("display_text: inbox"));
    }

    #[test]
    fn outline_command() {
        let note = fixture_path("work/projects/plan.md");
        let (stdout, _, code) = run_notesift(&["outline", note.to_str().unwrap()]);
        assert_eq!(code, 0);

        let value: Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["name"], "plan");
        let texts: Vec<&str> = value["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["Project Plan", "Goals", "Timeline"]);
    }
}
