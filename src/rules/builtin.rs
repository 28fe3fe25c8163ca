//! Rules shipped with the library: JLPT N3 and N4 grammar points.
//!
//! Realizations are written in the notation of [`crate::grammar::notation`],
//! with the fragments of [`crate::grammar::common`] spliced in where several
//! rules share them.

mod n3;
mod n4;

use crate::error::Result;
use crate::grammar::notation::parse_sequence;
use crate::grammar::pattern::TokenPattern;
use crate::grammar::registry::RuleRegistry;
use crate::grammar::rule::GrammarRule;
use crate::grammar::sequence::PatternSequence;

const N3: &str = "N3";
const N4: &str = "N4";

fn seq(parts: Vec<Vec<TokenPattern>>) -> Result<PatternSequence> {
    PatternSequence::new(parts.into_iter().flatten().collect())
}

/// Elements of a sequence fragment.
fn elements(notation: &str) -> Result<Vec<TokenPattern>> {
    Ok(parse_sequence(notation)?.patterns().to_vec())
}

fn rule(
    category: &str,
    index: u32,
    name: &str,
    description: &str,
    sequences: Vec<PatternSequence>,
    examples: &[&str],
) -> Result<GrammarRule> {
    Ok(GrammarRule::new(name, sequences)?
        .with_description(description)
        .with_category(category)
        .with_index(index)
        .with_examples(examples.iter().copied()))
}

/// The built-in rule set: N3 then N4, each ordered by entry number.
pub fn builtin_rules() -> Result<Vec<GrammarRule>> {
    let mut rules = n3::rules()?;
    rules.extend(n4::rules()?);
    Ok(rules)
}

/// A registry with the built-in rules and the default configuration.
pub fn default_registry() -> Result<RuleRegistry> {
    let mut registry = RuleRegistry::new();
    registry.add_rules(builtin_rules()?)?;
    Ok(registry)
}
