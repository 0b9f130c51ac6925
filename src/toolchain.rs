use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source language recognized by the compile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Plain C (`.c`)
    C,
    /// C++ (`.cpp`, `.cc`, `.cxx`)
    Cxx,
}

/// Fixed extension table. Exact match only; anything else is a per-file
/// configuration error at the compile step.
const EXTENSION_TABLE: &[(&str, Language)] = &[
    ("c", Language::C),
    ("cpp", Language::Cxx),
    ("cc", Language::Cxx),
    ("cxx", Language::Cxx),
];

/// One compiler entry: the command plus the default flags appended after
/// module-declared flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compiler {
    pub command: String,
    pub default_flags: Vec<String>,
}

/// The link tool shared by both compiled module variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linker {
    pub command: String,
    pub default_flags: Vec<String>,
    /// Appended when the link target is a shared library.
    pub shared_flag: String,
}

/// Immutable toolchain table, constructed once at process start and passed
/// explicitly into every builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainSet {
    pub c: Compiler,
    pub cxx: Compiler,
    pub linker: Linker,
    /// Prepended to compile flags of shared-library modules.
    pub pic_flag: String,
    /// Platform extension for shared-library artifacts (no leading dot).
    pub shared_lib_ext: String,
}

impl ToolchainSet {
    /// The GNU table: gcc/g++ with conservative warning and optimization
    /// defaults.
    pub fn gnu() -> Self {
        Self {
            c: Compiler {
                command: "gcc".to_string(),
                default_flags: vec![
                    "-Wall".to_string(),
                    "-std=c99".to_string(),
                    "-O2".to_string(),
                ],
            },
            cxx: Compiler {
                command: "g++".to_string(),
                default_flags: vec![
                    "-Wall".to_string(),
                    "-std=c++11".to_string(),
                    "-O2".to_string(),
                ],
            },
            linker: Linker {
                command: "g++".to_string(),
                default_flags: Vec::new(),
                shared_flag: "-shared".to_string(),
            },
            pic_flag: "-fPIC".to_string(),
            shared_lib_ext: shared_lib_ext().to_string(),
        }
    }

    /// Select the language for a source path by exact extension match.
    /// `None` means the file is not compilable by any entry in the table.
    pub fn language_for(path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?;
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, lang)| *lang)
    }

    pub fn compiler(&self, lang: Language) -> &Compiler {
        match lang {
            Language::C => &self.c,
            Language::Cxx => &self.cxx,
        }
    }
}

fn shared_lib_ext() -> &'static str {
    if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_for_c_sources() {
        assert_eq!(
            ToolchainSet::language_for(Path::new("src/main.c")),
            Some(Language::C)
        );
    }

    #[test]
    fn test_language_for_cxx_sources() {
        for name in ["a.cpp", "b.cc", "dir/c.cxx"] {
            assert_eq!(
                ToolchainSet::language_for(Path::new(name)),
                Some(Language::Cxx),
                "{name}"
            );
        }
    }

    #[test]
    fn test_language_for_rejects_unknown() {
        assert_eq!(ToolchainSet::language_for(Path::new("main.rs")), None);
        assert_eq!(ToolchainSet::language_for(Path::new("noext")), None);
        // Exact match only: no case folding, no compound extensions.
        assert_eq!(ToolchainSet::language_for(Path::new("main.C")), None);
    }

    #[test]
    fn test_gnu_defaults() {
        let tc = ToolchainSet::gnu();
        assert_eq!(tc.compiler(Language::C).command, "gcc");
        assert_eq!(
            tc.compiler(Language::Cxx).default_flags,
            vec!["-Wall", "-std=c++11", "-O2"]
        );
        assert!(tc.linker.default_flags.is_empty());
    }
}
