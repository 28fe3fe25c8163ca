//! The rule registry: holds grammar rules and matches them against sentences.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;

use crate::config::RegistryConfig;
use crate::error::{KotogramError, Result};
use crate::grammar::matcher::Matcher;
use crate::grammar::notation;
use crate::grammar::overlap::resolve_overlaps;
use crate::grammar::rule::GrammarRule;
use crate::grammar::span::MatchSpan;
use crate::morph::token::MorphToken;
use crate::rules::loader;

/// Matches of one rule, for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleMatches {
    pub rule: String,
    pub label: Option<String>,
    pub description: String,
    pub matches: Vec<MatchSpan>,
}

/// A set of grammar rules, matched together.
///
/// Rules keep their registration order, which also decides which of two
/// equally long overlapping matches is kept. Matching takes `&self` and
/// keeps no state between calls, so a registry can be shared across threads
/// once it is built.
pub struct RuleRegistry {
    rules: Vec<Arc<GrammarRule>>,
    by_name: AHashMap<String, usize>,
    config: RegistryConfig,
    matcher: Matcher,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rule_names())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// Create an empty registry with the default, sequential configuration.
    pub fn new() -> Self {
        let config = RegistryConfig::default();
        RuleRegistry {
            rules: Vec::new(),
            by_name: AHashMap::new(),
            matcher: Matcher::new().with_min_span_len(config.min_span_len),
            config,
            thread_pool: None,
        }
    }

    /// Create an empty registry. A thread pool is started when the
    /// configuration asks for parallel matching.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let threads = config.effective_threads();
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("kotogram-match-{i}"))
                .build()
                .map_err(|e| KotogramError::internal(format!("Failed to create thread pool: {e}")))?;
            debug!("Started matching thread pool with {threads} thread(s)");
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(RuleRegistry {
            rules: Vec::new(),
            by_name: AHashMap::new(),
            matcher: Matcher::new().with_min_span_len(config.min_span_len),
            config,
            thread_pool,
        })
    }

    /// Register a rule. Names must be unique.
    pub fn add_rule(&mut self, rule: GrammarRule) -> Result<()> {
        if self.by_name.contains_key(rule.name()) {
            return Err(KotogramError::config(format!(
                "Grammar rule '{}' is already registered",
                rule.name()
            )));
        }
        debug!(
            "Registered rule '{}' with {} realization(s)",
            rule.name(),
            rule.sequences().len()
        );
        self.by_name.insert(rule.name().to_string(), self.rules.len());
        self.rules.push(Arc::new(rule));
        Ok(())
    }

    /// Register several rules in order, stopping at the first rejected one.
    pub fn add_rules<I>(&mut self, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = GrammarRule>,
    {
        for rule in rules {
            self.add_rule(rule)?;
        }
        Ok(())
    }

    /// Build a rule from pattern notation and register it.
    ///
    /// Realizations are separated by `|`; see [`crate::grammar::notation`].
    ///
    /// ```
    /// use kotogram::grammar::RuleRegistry;
    ///
    /// let mut registry = RuleRegistry::new();
    /// registry
    ///     .add_rule_from_notation("〜だらけ", "名詞 だらけ", "full of")
    ///     .unwrap();
    /// assert_eq!(registry.rule_names(), vec!["〜だらけ"]);
    /// ```
    pub fn add_rule_from_notation(&mut self, name: &str, notation: &str, description: &str) -> Result<()> {
        let sequences = notation::parse_sequences(notation)?;
        let rule = GrammarRule::new(name, sequences)?.with_description(description);
        self.add_rule(rule)
    }

    /// Register every rule found in the JSON files of `dir`.
    pub fn load_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let rules = loader::load_rules_from_directory(dir)?;
        let count = rules.len();
        self.add_rules(rules)?;
        Ok(count)
    }

    /// Registered rules in registration order.
    pub fn rules(&self) -> &[Arc<GrammarRule>] {
        &self.rules
    }

    /// Look a rule up by name.
    pub fn rule(&self, name: &str) -> Option<&Arc<GrammarRule>> {
        self.by_name.get(name).map(|&i| &self.rules[i])
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Match every rule against `tokens` and reduce the candidates with the
    /// configured overlap policy. The result is ordered by start offset.
    pub fn match_all(&self, tokens: &[MorphToken]) -> Vec<MatchSpan> {
        let candidates = self.candidates(tokens);
        let candidate_count = candidates.len();
        let matches = resolve_overlaps(candidates, self.config.overlap_policy);
        debug!(
            "Matched {} rule(s) over {} token(s): {} candidate(s), {} kept",
            self.rules.len(),
            tokens.len(),
            candidate_count,
            matches.len()
        );
        matches
    }

    /// Match only the rule called `rule_name`. Overlapping matches of that
    /// rule are reduced the same way as in [`RuleRegistry::match_all`].
    ///
    /// An unknown name yields no matches.
    pub fn match_specific(&self, rule_name: &str, tokens: &[MorphToken]) -> Vec<MatchSpan> {
        let Some(rule) = self.rule(rule_name) else {
            debug!("No rule named '{rule_name}' is registered");
            return Vec::new();
        };
        let candidates = self.matcher.find_all_matches(rule, tokens);
        resolve_overlaps(candidates, self.config.overlap_policy)
    }

    /// [`RuleRegistry::match_all`] for each sentence. Results are in input
    /// order whether or not matching runs in parallel.
    pub fn match_batch(&self, sentences: &[Vec<MorphToken>]) -> Vec<Vec<MatchSpan>> {
        match &self.thread_pool {
            Some(pool) => pool.install(|| {
                sentences
                    .par_iter()
                    .map(|tokens| self.match_all(tokens))
                    .collect()
            }),
            None => sentences.iter().map(|tokens| self.match_all(tokens)).collect(),
        }
    }

    /// Group matches by rule, in order of each rule's first match.
    pub fn group_by_rule(&self, matches: &[MatchSpan]) -> Vec<RuleMatches> {
        let mut groups: Vec<RuleMatches> = Vec::new();
        let mut positions: AHashMap<&str, usize> = AHashMap::new();

        for span in matches {
            let at = *positions.entry(span.rule_name()).or_insert_with(|| {
                groups.push(RuleMatches {
                    rule: span.rule_name().to_string(),
                    label: span.rule.label(),
                    description: span.rule.description().to_string(),
                    matches: Vec::new(),
                });
                groups.len() - 1
            });
            groups[at].matches.push(span.clone());
        }
        groups
    }

    // Candidates in registration order, then start offset.
    fn candidates(&self, tokens: &[MorphToken]) -> Vec<MatchSpan> {
        let per_rule: Vec<Vec<MatchSpan>> = match &self.thread_pool {
            Some(pool) => pool.install(|| {
                self.rules
                    .par_iter()
                    .map(|rule| self.matcher.find_all_matches(rule, tokens))
                    .collect()
            }),
            None => self
                .rules
                .iter()
                .map(|rule| self.matcher.find_all_matches(rule, tokens))
                .collect(),
        };
        trace!("Collected candidates from {} rule(s)", per_rule.len());
        per_rule.into_iter().flatten().collect()
    }
}
