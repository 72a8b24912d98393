//! End-to-end scenarios: config file on disk -> load -> walk -> report.

use dirtree_core::{DIRECTORY_MISSING, Error, RuleOutcome, WalkOptions, check_structure_file};
use dirtree_test_utils::{RULE_KEYS, TestTree, structure_yaml};
use pretty_assertions::assert_eq;

const CHECK: WalkOptions = WalkOptions { check_rules: true };

fn failed(names: &[&str]) -> RuleOutcome {
    RuleOutcome::Failed(names.iter().map(|n| n.to_string()).collect())
}

/// A scratch root holding `.keep` and `notes.txt`.
fn root_with_files() -> TestTree {
    let tree = TestTree::new();
    tree.dir("root").file("root/.keep").file("root/notes.txt");
    tree
}

fn root_config(tree: &TestTree, overrides: &str) -> std::path::PathBuf {
    let mut node = format!(
        "  - name: Root\n    desc: Scratch root\n    path: {}/root\n",
        tree.root_str()
    );
    if !overrides.is_empty() {
        node.push_str("    rules:\n");
        node.push_str(overrides);
    }
    tree.write_config("structure.yml", &structure_yaml(true, &node))
}

#[test]
fn visible_and_hidden_files_both_fail() {
    let tree = root_with_files();
    let config = root_config(&tree, "");

    let report = check_structure_file(&config, CHECK).unwrap();

    assert_eq!(report.outcomes_for("noUnknownDirectories"), vec![&RuleOutcome::Passed]);
    assert_eq!(report.outcomes_for("noHiddenDirectories"), vec![&RuleOutcome::Passed]);
    assert_eq!(report.outcomes_for("noVisibleFiles"), vec![&failed(&["notes.txt"])]);
    assert_eq!(report.outcomes_for("noHiddenFiles"), vec![&failed(&[".keep"])]);
    assert!(report.summary.all_directories_exist);
    assert!(!report.summary.all_rules_pass);
}

#[test]
fn disabled_rule_does_not_count() {
    let tree = root_with_files();
    let config = root_config(&tree, "      noVisibleFiles: false\n");

    let report = check_structure_file(&config, CHECK).unwrap();

    assert_eq!(report.outcomes_for("noVisibleFiles"), vec![&RuleOutcome::Disabled]);
    assert_eq!(report.outcomes_for("noHiddenFiles"), vec![&failed(&[".keep"])]);
    assert!(!report.summary.all_rules_pass);
}

#[test]
fn disabling_every_failing_rule_passes() {
    let tree = root_with_files();
    let config = root_config(
        &tree,
        "      noVisibleFiles: false\n      noHiddenFiles: false\n",
    );

    let report = check_structure_file(&config, CHECK).unwrap();

    assert!(report.summary.all_rules_pass);
}

#[test]
fn undeclared_directory_is_unknown() {
    let tree = TestTree::new();
    tree.dir("root/declared").dir("root/extra");
    let node = format!(
        "  - name: Root\n    path: {}/root\n    subdirs:\n      - name: Declared\n        path: /declared\n",
        tree.root_str()
    );
    let config = tree.write_config("structure.yml", &structure_yaml(true, &node));

    let report = check_structure_file(&config, CHECK).unwrap();

    assert_eq!(
        report.outcomes_for("noUnknownDirectories"),
        vec![&failed(&["extra"]), &RuleOutcome::Passed]
    );
    assert!(!report.summary.all_rules_pass);
}

#[test]
fn missing_root_reports_every_rule_and_continues() {
    let tree = TestTree::new();
    let node = format!(
        "  - name: Root\n    path: {}/absent\n    subdirs:\n      - name: Child\n        path: /child\n",
        tree.root_str()
    );
    let config = tree.write_config("structure.yml", &structure_yaml(true, &node));

    let report = check_structure_file(&config, CHECK).unwrap();

    assert_eq!(report.visited(), vec!["Root", "Child"]);
    for key in RULE_KEYS {
        assert_eq!(
            report.outcomes_for(key),
            vec![&failed(&[DIRECTORY_MISSING]); 2],
            "rule {key}"
        );
    }
    assert!(!report.summary.all_directories_exist);
    assert!(!report.summary.all_rules_pass);
}

#[test]
fn partial_rule_keys_abort_before_traversal() {
    let tree = TestTree::new();
    let config = tree.write_config(
        "structure.yml",
        "rules:\n  noUnknownDirectories: true\n  noVisibleFiles: true\ndirectories:\n  - name: Anything\n    path: /nonexistent/dirtree\n",
    );

    let err = check_structure_file(&config, CHECK).unwrap_err();

    match err {
        Error::ConfigMismatch { declared, expected } => {
            assert_eq!(declared, vec!["noUnknownDirectories", "noVisibleFiles"]);
            assert_eq!(expected.len(), 4);
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn walk_does_not_modify_the_tree() {
    let tree = root_with_files();
    let config = root_config(&tree, "");
    let before = tree.listing();

    check_structure_file(&config, CHECK).unwrap();
    check_structure_file(&config, WalkOptions::default()).unwrap();

    assert_eq!(tree.listing(), before);
}
