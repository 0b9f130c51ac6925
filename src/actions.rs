use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Dependency-file format understood by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DepsFormat {
    Gcc,
    Msvc,
}

/// A parameterized command, registered once per pass. Steps reference rules
/// by name and supply the `$`-parameter bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub command: String,
    pub description: String,
    /// Path template of the auto-discovered dependency file, if any.
    pub depfile: Option<String>,
    pub deps_format: Option<DepsFormat>,
}

/// One unit of work: fixed inputs and outputs plus parameter bindings for
/// its rule. Implicit inputs order the step without appearing in `$in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub rule: &'static str,
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
    pub implicits: Vec<PathBuf>,
    /// Named parameter bindings, in declaration order.
    pub bindings: Vec<(&'static str, String)>,
}

/// Registration interface the external execution engine exposes to the
/// builders. The engine owns scheduling, incremental rebuilds and process
/// invocation; the builders only declare.
pub trait ActionSink {
    fn rule(&mut self, rule: Rule);
    fn step(&mut self, step: Step);
    /// Declare a phony target: a logical name resolving to a real artifact.
    fn alias(&mut self, name: &str, target: &Path);
}

/// In-memory sink recording everything in registration order.
///
/// This is both the test double for the builders and the source for the
/// compilation-database export.
#[derive(Debug, Default, Serialize)]
pub struct ActionLog {
    pub rules: Vec<Rule>,
    pub steps: Vec<Step>,
    pub aliases: Vec<(String, PathBuf)>,
}

impl ActionSink for ActionLog {
    fn rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    fn step(&mut self, step: Step) {
        self.steps.push(step);
    }

    fn alias(&mut self, name: &str, target: &Path) {
        self.aliases.push((name.to_string(), target.to_path_buf()));
    }
}

impl ActionLog {
    fn rule_by_name(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Expand a step's rule command against its bindings, `$in` and `$out`.
    /// Unknown parameters expand to the empty string, matching the engine's
    /// variable semantics.
    pub fn expand_command(&self, step: &Step) -> Option<String> {
        let rule = self.rule_by_name(step.rule)?;
        Some(expand(&rule.command, step))
    }

    /// Render every compile step (any step whose rule declares a depfile)
    /// into `compile_commands.json` entries.
    pub fn compile_commands(&self, directory: &Path) -> Vec<serde_json::Value> {
        self.steps
            .iter()
            .filter(|s| {
                self.rule_by_name(s.rule)
                    .is_some_and(|r| r.depfile.is_some())
            })
            .map(|s| {
                json!({
                    "directory": directory.to_string_lossy(),
                    "command": self.expand_command(s).unwrap_or_default(),
                    "file": s.inputs.first().map(|p| p.to_string_lossy()).unwrap_or_default(),
                })
            })
            .collect()
    }

    pub fn write_compile_commands(&self, path: &Path, directory: &Path) -> Result<()> {
        let json_str = serde_json::to_string_pretty(&self.compile_commands(directory))?;
        std::fs::write(path, json_str)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand(command: &str, step: &Step) -> String {
    let mut out = String::new();
    let mut chars = command.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let mut name = String::new();
        while let Some(&n) = chars.peek() {
            if n.is_ascii_alphanumeric() || n == '_' {
                name.push(n);
                chars.next();
            } else {
                break;
            }
        }
        match name.as_str() {
            "in" => out.push_str(&join_paths(&step.inputs)),
            "out" => out.push_str(&join_paths(&step.outputs)),
            name => {
                if let Some((_, value)) = step.bindings.iter().find(|(k, _)| *k == name) {
                    out.push_str(value);
                }
            }
        }
    }
    out
}
