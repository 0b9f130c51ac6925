//! Action builders and the per-pass generation driver.
//!
//! Each builder maps one slice of a module declaration onto sink
//! registrations; [`core::generate`] walks a host-ordered module list and
//! dispatches them.

use crate::actions::{ActionSink, DepsFormat, Rule};
use crate::config::BuildConfig;
use crate::toolchain::ToolchainSet;
use std::path::Path;

/// Compilation of a C source.
pub const RULE_CC: &str = "cc";
/// Compilation of a C++ source.
pub const RULE_CXX: &str = "cxx";
/// Linking objects into a binary or shared library.
pub const RULE_LINK: &str = "link";
/// Running a script module's executable over one input.
pub const RULE_SCRIPT: &str = "script";

pub mod compile;
pub mod core;
pub mod link;
pub mod script;

pub use self::core::{ModuleEntry, generate, generate_module};
pub use self::link::LinkKind;

/// Per-module view handed to every builder: identity plus the process-wide
/// configuration.
#[derive(Debug, Clone, Copy)]
pub struct ModuleContext<'a> {
    pub name: &'a str,
    /// Declaring directory, relative to the source root.
    pub dir: &'a Path,
    pub config: &'a BuildConfig,
    pub toolchains: &'a ToolchainSet,
}

/// Register the four rules with the sink. Called once per generation pass,
/// before any module generates.
pub fn register_rules(toolchains: &ToolchainSet, sink: &mut dyn ActionSink) {
    sink.rule(Rule {
        name: RULE_CC,
        command: format!(
            "{} -MMD -MF $out.d $cflags $incflags -c $in -o $out",
            toolchains.c.command
        ),
        description: "CC   $out".to_string(),
        depfile: Some("$out.d".to_string()),
        deps_format: Some(DepsFormat::Gcc),
    });
    sink.rule(Rule {
        name: RULE_CXX,
        command: format!(
            "{} -MMD -MF $out.d $cflags $incflags -c $in -o $out",
            toolchains.cxx.command
        ),
        description: "CXX  $out".to_string(),
        depfile: Some("$out.d".to_string()),
        deps_format: Some(DepsFormat::Gcc),
    });
    sink.rule(Rule {
        name: RULE_LINK,
        command: format!(
            "{} $ldflags $in -o $out $ldpaths $libs",
            toolchains.linker.command
        ),
        description: "LINK $out".to_string(),
        depfile: None,
        deps_format: None,
    });
    sink.rule(Rule {
        name: RULE_SCRIPT,
        command: "$script $args".to_string(),
        description: "RUN $script".to_string(),
        depfile: None,
        deps_format: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionLog;

    #[test]
    fn test_register_rules_declares_depfiles_for_compiles_only() {
        let mut log = ActionLog::default();
        register_rules(&ToolchainSet::gnu(), &mut log);

        assert_eq!(log.rules.len(), 4);
        let names: Vec<_> = log.rules.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![RULE_CC, RULE_CXX, RULE_LINK, RULE_SCRIPT]);

        for rule in &log.rules {
            let compiles = rule.name == RULE_CC || rule.name == RULE_CXX;
            assert_eq!(rule.depfile.is_some(), compiles, "{}", rule.name);
        }
    }

    #[test]
    fn test_rule_commands_embed_toolchain_commands() {
        let mut log = ActionLog::default();
        register_rules(&ToolchainSet::gnu(), &mut log);
        assert!(log.rules[0].command.starts_with("gcc "));
        assert!(log.rules[1].command.starts_with("g++ "));
        assert!(log.rules[2].command.starts_with("g++ "));
    }
}
