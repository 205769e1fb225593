//! Integration tests for word-forge

use assert_cmd::Command;
use predicates::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tempfile::tempdir;

use word_forge::{
    export,
    generate_combinations, generate_combinations_with_rng, tokenize,
    CombinationMode, CombinationResult, GenerationOptions, HistoryEntry, SessionHistory,
    WordForgeError, SAFETY_CAP,
};

fn numbered_words(n: usize) -> String {
    (0..n).map(|i| format!("w{:02}", i)).collect::<Vec<_>>().join(",")
}

fn word_forge() -> Command {
    let mut cmd = Command::cargo_bin("word-forge").unwrap();
    cmd.env_remove("WORD_FORGE_MODE")
        .env_remove("WORD_FORGE_SEPARATOR")
        .env_remove("WORD_FORGE_PREFIX")
        .env_remove("WORD_FORGE_SUFFIX")
        .env_remove("WORD_FORGE_SHUFFLE")
        .env_remove("WORD_FORGE_LIMIT")
        .env_remove("WORD_FORGE_HISTORY_SIZE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_pairs_count_and_reverse() {
    let words = ["alpha", "beta", "gamma", "delta", "beta"];
    let result = generate_combinations(&words.join("\n"), &CombinationMode::Pairs, &GenerationOptions::default()).unwrap();
    assert_eq!(result.count, words.len() * (words.len() - 1));

    // Count-preserving: "A B" appears as often as "B A"
    for item in &result.items {
        let (a, b) = item.split_once(' ').unwrap();
        let reverse = format!("{} {}", b, a);
        let forward = result.items.iter().filter(|i| *i == item).count();
        let backward = result.items.iter().filter(|i| **i == reverse).count();
        assert_eq!(forward, backward);
    }
}

#[test]
fn test_all_combinations_cover_every_subset() {
    let n = 6;
    let raw = numbered_words(n);
    let words = tokenize(&raw);
    let result = generate_combinations(&raw, &CombinationMode::AllCombinations, &GenerationOptions::default()).unwrap();

    assert_eq!(result.count, (1 << n) - 1);
    let produced: HashSet<&String> = result.items.iter().collect();
    assert_eq!(produced.len(), result.count);

    for mask in 1u32..(1 << n) {
        let expected = words
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, w)| w.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert!(produced.contains(&expected), "missing subset {}", expected);
    }
}

#[test]
fn test_all_combinations_twenty_words_capped() {
    let result = generate_combinations(
        &numbered_words(20),
        &CombinationMode::AllCombinations,
        &GenerationOptions::default(),
    )
    .unwrap();
    assert_eq!(result.count, SAFETY_CAP);
    assert_eq!(result.items.len(), SAFETY_CAP);
    assert!(result.truncated_for_safety);
}

#[test]
fn test_limit_applies_after_safety_cap() {
    let options = GenerationOptions::default().with_limit(5);
    let result = generate_combinations(&numbered_words(20), &CombinationMode::AllCombinations, &options).unwrap();
    assert_eq!(result.count, 5);
    assert!(result.truncated_for_safety);
}

#[test]
fn test_wrapped_identity_and_separated() {
    let identity = CombinationMode::Wrapped { prefix: String::new(), suffix: String::new() };
    let result = generate_combinations("a\nb", &identity, &GenerationOptions::default()).unwrap();
    assert_eq!(result.items, vec!["a", "b"]);
    assert_eq!(result.count, 2);

    let dash = CombinationMode::Separated { separator: "-".into() };
    let result = generate_combinations("x,y", &dash, &GenerationOptions::default()).unwrap();
    assert_eq!(result.items, vec!["x-y", "y-x"]);
    assert_eq!(result.count, 2);
}

#[test]
fn test_seeded_shuffle_sample() {
    let raw = numbered_words(16);
    let mode = CombinationMode::AllCombinations;
    let full = generate_combinations(&raw, &mode, &GenerationOptions::default()).unwrap();
    let full_set: HashSet<&String> = full.items.iter().collect();

    let options = GenerationOptions::default().shuffled().with_limit(50);
    let a = generate_combinations_with_rng(&raw, &mode, &options, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = generate_combinations_with_rng(&raw, &mode, &options, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.count, 50);
    assert!(a.truncated_for_safety);
    assert!(a.items.iter().all(|item| full_set.contains(item)));
}

#[test]
fn test_empty_input_is_error() {
    for raw in ["", ",, \n"] {
        let err = generate_combinations(raw, &CombinationMode::AllCombinations, &GenerationOptions::default()).unwrap_err();
        assert_eq!(err, WordForgeError::EmptyInput);
    }
}

#[test]
fn test_export_and_history_files() {
    let dir = tempdir().unwrap();
    let result = CombinationResult::new(vec!["a b".into(), "b a".into()], false);

    let text_path = dir.path().join("out.txt");
    export::write_text(&result, &text_path).unwrap();
    assert_eq!(std::fs::read_to_string(&text_path).unwrap(), "a b\nb a\n");

    let json_path = dir.path().join("out.json");
    export::write_json(&result, &json_path).unwrap();
    let back: CombinationResult = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(back, result);

    let history_path = dir.path().join("nested").join("history.json");
    let mut history = SessionHistory::new(3);
    history.record(HistoryEntry::new(&CombinationMode::Pairs, 2, &result));
    history.save(&history_path).unwrap();

    let loaded = SessionHistory::load(&history_path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.latest().map(|e| e.item_count), Some(2));
}

#[test]
fn test_history_load_rejects_garbage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();
    let err = SessionHistory::load(&path).unwrap_err();
    assert!(matches!(err, WordForgeError::Parse { .. }));
}

#[test]
fn test_cli_separated() {
    word_forge()
        .args(["-q", "-m", "separated", "-s", "-", "x", "y"])
        .assert()
        .success()
        .stdout("x-y\ny-x\n");
}

#[test]
fn test_cli_reads_stdin() {
    word_forge()
        .args(["-q", "-m", "pairs"])
        .write_stdin("sun,\n moon\n")
        .assert()
        .success()
        .stdout("sun moon\nmoon sun\n");
}

#[test]
fn test_cli_safety_notice() {
    word_forge()
        .args(["-l", "3"])
        .write_stdin(numbered_words(15))
        .assert()
        .success()
        .stdout("w00\nw00 w01\nw00 w01 w02\n")
        .stderr(predicate::str::contains("Too many combinations"));
}

#[test]
fn test_cli_empty_input_fails() {
    word_forge()
        .write_stdin(" ,, ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No words to combine"));
}

#[test]
fn test_cli_missing_separator() {
    word_forge()
        .args(["-m", "separated", "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("separator"));
}

#[test]
fn test_cli_config_from_env() {
    word_forge()
        .env("WORD_FORGE_MODE", "wrapped")
        .env("WORD_FORGE_SUFFIX", ".com")
        .args(["-q", "go", "fly"])
        .assert()
        .success()
        .stdout("go.com\nfly.com\n");
}

#[test]
fn test_cli_output_file_and_history() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("combos.json");
    let history = dir.path().join("history.json");

    word_forge()
        .args(["-m", "pairs", "-f", "json", "-o"])
        .arg(&out)
        .arg("--history")
        .arg(&history)
        .args(["a", "b"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Generated 2 combination(s)"));

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["count"], 2);

    let loaded = SessionHistory::load(&history).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.latest().map(|e| e.word_count), Some(2));
}

#[test]
fn test_cli_help() {
    word_forge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}
