use std::ffi::OsStr;

use super::command::Builtin;

/// Fixed, ordered set of builtins available to the dispatcher.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    commands: Vec<Builtin>,
}

impl BuiltinRegistry {
    pub fn setup() -> Self {
        Self {
            commands: vec![Builtin::Echo, Builtin::Env, Builtin::Exit],
        }
    }

    /// Exact, case-sensitive lookup. The first registered match wins.
    pub fn lookup(&self, name: impl AsRef<OsStr>) -> Option<Builtin> {
        let name = name.as_ref();
        self.commands
            .iter()
            .find(|builtin| builtin.name() == name)
            .copied()
    }

    pub fn get_commands(&self) -> Vec<&'static str> {
        self.commands.iter().map(Builtin::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_default_builtins() {
        let registry = BuiltinRegistry::setup();
        assert_eq!(registry.lookup("echo"), Some(Builtin::Echo));
        assert_eq!(registry.lookup("env"), Some(Builtin::Env));
        assert_eq!(registry.lookup("exit"), Some(Builtin::Exit));
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = BuiltinRegistry::setup();
        assert_eq!(registry.lookup("ECHO"), None);
        assert_eq!(registry.lookup("ech"), None);
        assert_eq!(registry.lookup("echo "), None);
        assert_eq!(registry.lookup("cd"), None);
        assert_eq!(registry.lookup(""), None);
        assert_eq!(registry.lookup(OsStr::new("exit")), Some(Builtin::Exit));
    }

    #[test]
    fn test_registration_order() {
        let registry = BuiltinRegistry::setup();
        assert_eq!(registry.get_commands(), vec!["echo", "env", "exit"]);
    }
}
