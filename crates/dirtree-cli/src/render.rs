//! Terminal and JSON rendering of walk reports

use colored::Colorize;
use dirtree_core::{Renderer, RuleOutcome, WalkReport, glyphs};

/// Renders a walk as a colored tree, in the manner of `tree`.
///
/// Without `print_checks` only failures are shown: passing and disabled
/// rules, the existence indicator of present directories and the
/// "All directories exist !" line are left out. With it every check is
/// printed, prefixed `OK: ` or `NOT OK: `.
#[derive(Debug, Default)]
pub struct TreeRenderer {
    print_checks: bool,
    out: String,
}

impl TreeRenderer {
    pub fn new(print_checks: bool) -> Self {
        Self {
            print_checks,
            out: String::new(),
        }
    }

    /// Render a whole report and return the text.
    pub fn render_report(report: &WalkReport, print_checks: bool) -> String {
        let mut renderer = Self::new(print_checks);
        report.render(&mut renderer);
        renderer.finish()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// A passing check. `None` when `hidden_unless_printing` is set and
    /// checks are not printed.
    fn success(
        &self,
        message: &str,
        parentheses: bool,
        hidden_unless_printing: bool,
    ) -> Option<String> {
        if hidden_unless_printing && !self.print_checks {
            return None;
        }
        let message = if self.print_checks {
            format!("OK: {message}")
        } else {
            message.to_string()
        };
        Some(paren(message, parentheses).green().bold().to_string())
    }

    fn failure(&self, message: &str, parentheses: bool) -> String {
        let message = if self.print_checks {
            format!("NOT OK: {message}")
        } else {
            message.to_string()
        };
        paren(message, parentheses).red().bold().to_string()
    }
}

fn paren(message: String, parentheses: bool) -> String {
    if parentheses {
        format!("({message})")
    } else {
        message
    }
}

impl Renderer for TreeRenderer {
    fn render_root(&mut self, label: &str) {
        let label = label.yellow().bold().to_string();
        self.line(&label);
        self.line(glyphs::BRANCH);
    }

    fn render_directory_header(&mut self, name: &str, prefix: &str, exists: bool) {
        let check = if exists {
            self.success("directory exists", true, true)
                .map(|msg| format!(" {msg}"))
                .unwrap_or_default()
        } else {
            format!(" {}", self.failure("directory doesn't exist", true))
        };
        let line = format!("{prefix}{}{check}", name.yellow().bold());
        self.line(&line);
    }

    fn render_directory_info(&mut self, desc: &str, path: &str, prefix: &str) {
        let desc_line = format!("{prefix}{} {desc}", "Desc:".magenta());
        let path_line = format!("{prefix}{} {}", "Path:".magenta(), path.cyan());
        self.line(&desc_line);
        self.line(&path_line);
    }

    fn render_rule_result(&mut self, rule_name: &str, outcome: &RuleOutcome, prefix: &str) {
        let message = match outcome {
            RuleOutcome::Passed => self.success(rule_name, false, true),
            RuleOutcome::Disabled => self.success(
                &format!("{rule_name} (rule set to false, check will always pass)"),
                false,
                true,
            ),
            RuleOutcome::Failed(violations) => Some(self.failure(
                &format!("{rule_name}: [{}]", violations.join(", ")),
                false,
            )),
        };
        if let Some(message) = message {
            self.line(&format!("{prefix}{message}"));
        }
    }

    fn render_node_end(&mut self, prefix: &str) {
        self.line(prefix);
    }

    fn render_global_summary(
        &mut self,
        all_directories_exist: bool,
        all_rules_pass: bool,
        rule_checking_enabled: bool,
    ) {
        if all_directories_exist {
            if let Some(msg) = self.success("All directories exist !", false, true) {
                self.line(&msg);
            }
        } else {
            let msg = self.failure("Not all directories exist.", false);
            self.line(&msg);
        }

        if rule_checking_enabled {
            let msg = if all_rules_pass {
                self.success("All rules pass !", false, false)
            } else {
                Some(self.failure("Not all rules pass.", false))
            };
            if let Some(msg) = msg {
                self.line(&msg);
            }
        }
    }
}

/// Serialize the event list and summary as pretty JSON.
pub fn render_json(report: &WalkReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
