use std::collections::HashMap;

use crate::builtins;
use crate::context::CallContext;
use crate::runtime::{AstraRuntime, Feature};
use crate::value::Value;

/// Signature shared by every builtin implementation: a pure function of the
/// ambient runtime and the call's argument context.
pub type BuiltinFn = fn(&AstraRuntime, &dyn CallContext) -> Value;

/// One registered builtin: the implementation plus an optional feature gate.
#[derive(Clone, Copy)]
pub struct BuiltinEntry {
    func: BuiltinFn,
    feature: Option<Feature>,
}

impl BuiltinEntry {
    pub fn func(&self) -> BuiltinFn {
        self.func
    }

    pub fn feature(&self) -> Option<Feature> {
        self.feature
    }
}

/// Name→implementation registry.
///
/// Populated during runtime construction and read-only afterwards; duplicate
/// registrations overwrite so optional variants can shadow a base entry.
#[derive(Clone)]
pub struct Builtins {
    entries: HashMap<String, BuiltinEntry>,
}

impl Builtins {
    /// An empty registry, for hosts assembling a custom catalogue.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, func: BuiltinFn) {
        self.entries
            .insert(name.to_string(), BuiltinEntry { func, feature: None });
    }

    pub fn register_gated(&mut self, name: &str, func: BuiltinFn, feature: Feature) {
        self.entries.insert(
            name.to_string(),
            BuiltinEntry {
                func,
                feature: Some(feature),
            },
        );
    }

    pub fn resolve(&self, name: &str) -> Option<BuiltinEntry> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Builtins {
    /// The full builtin catalogue.
    fn default() -> Self {
        let mut registry = Self::empty();
        builtins::register_all(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn return_one(_rt: &AstraRuntime, _ctx: &dyn CallContext) -> Value {
        Value::Number(1.0)
    }

    fn return_two(_rt: &AstraRuntime, _ctx: &dyn CallContext) -> Value {
        Value::Number(2.0)
    }

    #[test]
    fn duplicate_registration_overwrites() {
        let runtime = AstraRuntime::new();
        let mut registry = Builtins::empty();
        registry.register("probe", return_one);
        registry.register("probe", return_two);
        assert_eq!(registry.len(), 1);
        let entry = registry.resolve("probe").expect("registered");
        let no_args: &[Value; 0] = &[];
        assert_eq!((entry.func())(&runtime, no_args), Value::Number(2.0));
    }

    #[test]
    fn default_catalogue_contains_the_builtins() {
        let registry = Builtins::default();
        for name in [
            "abs", "sign", "sin", "cos", "tan", "asin", "acos", "atan", "atan2", "round", "ceil",
            "floor", "pow", "sqrt", "exp", "log", "ln", "min", "max", "norm", "cross", "concat",
            "len", "str", "search", "lookup", "rands", "version", "version_num", "parent_module",
        ] {
            assert!(registry.resolve(name).is_some(), "missing builtin {name}");
        }
    }

    #[test]
    fn concat_is_feature_gated() {
        let registry = Builtins::default();
        let entry = registry.resolve("concat").expect("registered");
        assert_eq!(entry.feature(), Some(Feature::Concat));
        assert_eq!(registry.resolve("abs").expect("registered").feature(), None);
    }
}
