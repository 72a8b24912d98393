//! The same structure declared as YAML, JSON and TOML walks identically.

use dirtree_core::{WalkOptions, check_structure_file};
use dirtree_meta::load_structure;
use dirtree_test_utils::TestTree;
use pretty_assertions::assert_eq;

fn write_all_formats(tree: &TestTree) -> Vec<std::path::PathBuf> {
    let root = tree.root_str();
    let yaml = format!(
        "rules:\n  noUnknownDirectories: true\n  noHiddenDirectories: true\n  noVisibleFiles: false\n  noHiddenFiles: true\n\
         directories:\n  - name: Work\n    desc: Projects\n    path: {root}/work\n    subdirs:\n      - name: Rust\n        path: /rust\n        rules:\n          noVisibleFiles: true\n"
    );
    let json = format!(
        r#"{{
  "rules": {{
    "noUnknownDirectories": true,
    "noHiddenDirectories": true,
    "noVisibleFiles": false,
    "noHiddenFiles": true
  }},
  "directories": [
    {{
      "name": "Work",
      "desc": "Projects",
      "path": "{root}/work",
      "subdirs": [
        {{ "name": "Rust", "path": "/rust", "rules": {{ "noVisibleFiles": true }} }}
      ]
    }}
  ]
}}
"#
    );
    let toml = format!(
        r#"[rules]
noUnknownDirectories = true
noHiddenDirectories = true
noVisibleFiles = false
noHiddenFiles = true

[[directories]]
name = "Work"
desc = "Projects"
path = "{root}/work"

[[directories.subdirs]]
name = "Rust"
path = "/rust"

[directories.subdirs.rules]
noVisibleFiles = true
"#
    );

    vec![
        tree.write_config("structure.yml", &yaml),
        tree.write_config("structure.json", &json),
        tree.write_config("structure.toml", &toml),
    ]
}

#[test]
fn formats_load_to_the_same_structure() {
    let tree = TestTree::new();
    let paths = write_all_formats(&tree);

    let configs: Vec<_> = paths.iter().map(|p| load_structure(p).unwrap()).collect();

    assert_eq!(configs[0], configs[1]);
    assert_eq!(configs[0], configs[2]);
    assert_eq!(
        configs[0].rules.keys().collect::<Vec<_>>(),
        vec!["noUnknownDirectories", "noHiddenDirectories", "noVisibleFiles", "noHiddenFiles"]
    );
}

#[test]
fn formats_walk_to_the_same_report() {
    let tree = TestTree::new();
    tree.file("work/plan.md").file("work/rust/main.rs");
    let paths = write_all_formats(&tree);
    let options = WalkOptions { check_rules: true };

    let reports: Vec<_> = paths
        .iter()
        .map(|p| check_structure_file(p, options).unwrap())
        .collect();

    assert_eq!(reports[0], reports[1]);
    assert_eq!(reports[0], reports[2]);
    assert!(!reports[0].summary.all_rules_pass);

    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["summary"]["all_directories_exist"], true);
}
