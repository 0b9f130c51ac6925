use crate::module::{BinaryModule, Module, ScriptModule, SharedLibModule};
use std::collections::HashMap;

/// Produces an empty module instance for the host to populate from decoded
/// properties.
pub type ModuleFactory = fn() -> Module;

/// Name → factory map for module types. The host looks up the type name from
/// each declaration and instantiates through here.
#[derive(Default)]
pub struct ModuleTypeRegistry {
    types: HashMap<String, ModuleFactory>,
}

impl ModuleTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three built-in module types.
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        registry.register("c_binary", || Module::Binary(BinaryModule::default()));
        registry.register("c_shared_lib", || {
            Module::SharedLib(SharedLibModule::default())
        });
        registry.register("run_script", || Module::Script(ScriptModule::default()));
        registry
    }

    /// Register a factory. Last registration wins for duplicate names.
    pub fn register(&mut self, name: &str, factory: ModuleFactory) {
        self.types.insert(name.to_string(), factory);
    }

    pub fn create(&self, name: &str) -> Option<Module> {
        self.types.get(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}
