use serde::Deserialize;
use std::path::PathBuf;

/// Properties shared by the compiled module variants.
///
/// Field order inside each sequence is load-bearing: it is preserved all the
/// way into compiler and linker argument lists.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BaseProps {
    /// Module-relative source paths.
    pub srcs: Vec<String>,
    /// Raw compiler flag tokens.
    pub cflags: Vec<String>,
    /// Raw linker flag tokens.
    pub ldflags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SharedLibProps {
    #[serde(flatten)]
    pub base: BaseProps,
    /// Module-relative include paths exported to dependers.
    pub include_paths: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptProps {
    /// Executable path spec: `//`-prefixed (source-root-relative) or
    /// module-relative.
    pub script: String,
    /// Ordered input file paths, module-relative.
    pub inputs: Vec<String>,
    /// Output-path template, rendered per input against the build root.
    pub output: String,
    /// Argument template, rendered per input after the output resolves.
    pub args: String,
}

/// Metadata a shared library exports to modules that depend on it.
/// Populated only once the library's own generation completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibExports {
    /// Include paths visible to dependers (already module-dir-prefixed).
    pub include_paths: Vec<PathBuf>,
    /// Output directory, used by dependers as a link search path.
    pub link_path: PathBuf,
    /// Full artifact path (`<link_path>/lib<name>.<ext>`).
    pub artifact: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryModule {
    pub props: BaseProps,
    /// Executable artifact path, set by generation.
    pub output: Option<PathBuf>,
}

impl BinaryModule {
    pub fn new(props: BaseProps) -> Self {
        Self {
            props,
            output: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedLibModule {
    pub props: SharedLibProps,
    /// Exported metadata, set by generation.
    pub exports: Option<LibExports>,
}

impl SharedLibModule {
    pub fn new(props: SharedLibProps) -> Self {
        Self {
            props,
            exports: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptModule {
    pub props: ScriptProps,
}

impl ScriptModule {
    pub fn new(props: ScriptProps) -> Self {
        Self { props }
    }
}

/// The closed set of module variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Module {
    Binary(BinaryModule),
    SharedLib(SharedLibModule),
    Script(ScriptModule),
}

impl Module {
    /// Human-readable kind name, used in dependency diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Module::Binary(_) => "c_binary",
            Module::SharedLib(_) => "c_shared_lib",
            Module::Script(_) => "run_script",
        }
    }
}
