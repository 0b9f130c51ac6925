//! # cxgen - C/C++ Build Action Generator
//!
//! cxgen is a module-type layer: it turns declarative build-module
//! descriptions (binaries, shared libraries, script generators) into a graph
//! of concrete build actions for an external execution engine.
//!
//! ## Features
//!
//! - **Transitive Link Metadata**: include paths, `-L` search paths, `-l`
//!   references and artifact prerequisites propagated across the module graph
//!   in declaration order
//! - **Deterministic Flag Assembly**: user flags, toolchain defaults and
//!   dependency flags composed in a fixed, reproducible order
//! - **Script Generators**: one action per input, driven by a minimal
//!   `{var}` template pair with fail-fast preconditions
//! - **Engine Agnostic**: everything is registered through the small
//!   [`actions::ActionSink`] trait; scheduling, caching and process spawning
//!   live entirely in the external engine
//!
//! ## Quick Start
//!
//! ```
//! use cxgen::actions::ActionLog;
//! use cxgen::build::{self, ModuleEntry};
//! use cxgen::config::BuildConfig;
//! use cxgen::module::{BaseProps, BinaryModule, Module};
//! use cxgen::report::Reporter;
//! use cxgen::toolchain::ToolchainSet;
//!
//! let config = BuildConfig::new("src_root", "out");
//! let toolchains = ToolchainSet::gnu();
//! let mut entries = vec![ModuleEntry::new(
//!     "hello",
//!     "demo",
//!     Module::Binary(BinaryModule::new(BaseProps {
//!         srcs: vec!["hello.c".into()],
//!         ..Default::default()
//!     })),
//! )];
//!
//! let mut sink = ActionLog::default();
//! let mut reporter = Reporter::default();
//! build::generate(&mut entries, &config, &toolchains, &mut sink, &mut reporter);
//! assert!(!reporter.failed());
//! ```
//!
//! ## Module Organization
//!
//! - [`build`] - Action builders (compile, link, script) and the driver
//! - [`config`] - Process-wide source/build roots
//! - [`toolchain`] - Compiler table and default flags
//! - [`module`] - Module variants and their property records
//! - [`deps`] - Dependency metadata propagation
//! - [`actions`] - Rule/step registration interface to the engine

/// Rule and step registration interface consumed by all builders.
pub mod actions;

/// Action builders and the per-pass generation driver.
pub mod build;

/// Process-wide build configuration (source root, build root).
pub mod config;

/// Dependency metadata aggregation.
pub mod deps;

/// Module variants and property records.
pub mod module;

/// Module-type name registry.
pub mod registry;

/// Per-module diagnostics collection and rendering.
pub mod report;

/// Minimal template substitution for script modules.
pub mod template;

/// Toolchain table: languages, commands, default flags.
pub mod toolchain;
