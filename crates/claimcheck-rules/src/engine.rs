//! First-match evaluation over the rule table

use crate::rule::Rule;
use crate::table::RULES;
use claimcheck_domain::traits::{ClaimMatcher, MatchError};
use claimcheck_domain::{MatchOutcome, SourceType};
use tracing::debug;

/// Evaluates claims against an ordered rule table
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine {
    rules: &'static [Rule],
}

impl RuleEngine {
    /// Create an engine over the built-in rule table
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// The first rule that fires for `claim`, if any
    pub fn evaluate(&self, claim: &str) -> Option<&'static Rule> {
        let lower = claim.to_lowercase();
        let rule = self.rules.iter().find(|rule| rule.matches(&lower))?;
        debug!("Rule '{}' fired", rule.name);
        Some(rule)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimMatcher for RuleEngine {
    fn name(&self) -> &'static str {
        "keyword-rules"
    }

    fn try_match(&self, claim: &str) -> Result<Option<MatchOutcome>, MatchError> {
        Ok(self.evaluate(claim).map(|rule| {
            MatchOutcome::new(rule.verdict, rule.confidence, rule.reason, SourceType::CustomRules)
                .with_tags(rule.tags.iter().copied())
        }))
    }
}
