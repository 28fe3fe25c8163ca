//! Rule storage and the built-in rule set.

pub mod builtin;
pub mod definition;
pub mod loader;

pub use builtin::{builtin_rules, default_registry};
pub use definition::{PatternDefinition, RuleDefinition, SequenceDefinition, WildcardKind};
pub use loader::{load_rule_file, load_rules_from_directory, save_rules_to_directory};
