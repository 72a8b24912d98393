//! Structure config snippets.

/// Rule keys in registry order.
pub const RULE_KEYS: [&str; 4] = [
    "noUnknownDirectories",
    "noHiddenDirectories",
    "noVisibleFiles",
    "noHiddenFiles",
];

/// A `rules:` block with every rule set to `enabled`.
pub fn rules_yaml(enabled: bool) -> String {
    let mut out = String::from("rules:\n");
    for key in RULE_KEYS {
        out.push_str(&format!("  {key}: {enabled}\n"));
    }
    out
}

/// A full structure config: a rules block followed by `directories_yaml`,
/// which must be the indented body of the `directories:` sequence.
pub fn structure_yaml(enabled: bool, directories_yaml: &str) -> String {
    format!("{}directories:\n{}", rules_yaml(enabled), directories_yaml)
}
