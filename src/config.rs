use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Process-wide build configuration.
///
/// Created once by the host before generation starts and passed by reference
/// into every builder. Both roots are taken verbatim; the crate never
/// canonicalizes them, so relative roots stay relative in emitted actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Directory the module tree (and `//`-prefixed script paths) resolve
    /// against.
    pub src_root: PathBuf,

    /// Directory all generated artifacts land under, mirroring the module
    /// directory layout.
    pub build_root: PathBuf,
}

impl BuildConfig {
    pub fn new(src_root: impl Into<PathBuf>, build_root: impl Into<PathBuf>) -> Self {
        Self {
            src_root: src_root.into(),
            build_root: build_root.into(),
        }
    }

    pub fn src_root(&self) -> &Path {
        &self.src_root
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_kept_verbatim() {
        let config = BuildConfig::new("tree", "out/debug");
        assert_eq!(config.src_root(), Path::new("tree"));
        assert_eq!(config.build_root(), Path::new("out/debug"));
    }

    #[test]
    fn test_config_from_toml() {
        let config: BuildConfig =
            toml::from_str("src_root = \".\"\nbuild_root = \"out\"").unwrap();
        assert_eq!(config.build_root(), Path::new("out"));
    }
}
