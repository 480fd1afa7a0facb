//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use claimcheck_analyzer::Statistics;
use claimcheck_domain::{ClassificationResult, FactRecord, Verdict};
use claimcheck_rules::Rule;
use claimcheck_store::DatasetStatistics;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format one classification as a field/value table.
    pub fn format_result(&self, result: &ClassificationResult) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(result);
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Claim".to_string(), result.claim.clone()]);
        builder.push_record(["Verdict".to_string(), self.verdict(result.verdict)]);
        builder.push_record(["Confidence".to_string(), format!("{:.2}", result.confidence)]);
        builder.push_record(["Reason".to_string(), result.reason.clone()]);
        builder.push_record(["Source type".to_string(), result.source_type.to_string()]);
        builder.push_record(["Tags".to_string(), result.tags.join(", ")]);
        if !result.sources.is_empty() {
            builder.push_record(["Sources".to_string(), result.sources.join(", ")]);
        }
        if let Some(fact) = &result.matched_fact {
            builder.push_record(["Matched fact".to_string(), fact.clone()]);
        }
        if let Some(similarity) = result.similarity {
            builder.push_record(["Similarity".to_string(), format!("{:.2}", similarity)]);
        }

        Ok(styled(builder.build()))
    }

    /// Format several classifications, one row each.
    pub fn format_results(&self, results: &[ClassificationResult]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(results);
        }
        if results.is_empty() {
            return Ok(self.colorize("No claims classified.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Claim", "Verdict", "Confidence", "Source type"]);
        for result in results {
            builder.push_record([
                result.claim.clone(),
                self.verdict(result.verdict),
                format!("{:.2}", result.confidence),
                result.source_type.to_string(),
            ]);
        }

        Ok(styled(builder.build()))
    }

    /// Format classification statistics.
    pub fn format_statistics(&self, stats: &Statistics) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(stats);
        }

        let mut builder = Builder::default();
        builder.push_record(["Total", "Real", "Fake", "Unverified", "Accuracy"]);
        builder.push_record([
            stats.total.to_string(),
            stats.real.to_string(),
            stats.fake.to_string(),
            stats.unverified.to_string(),
            stats.accuracy.to_string(),
        ]);

        Ok(styled(builder.build()))
    }

    /// Format the corpus summary.
    pub fn format_dataset(&self, stats: &DatasetStatistics, known_facts: usize) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(&serde_json::json!({
                "corpus": stats,
                "known_facts": known_facts,
            }));
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "Facts"]);
        for (category, count) in &stats.by_category {
            builder.push_record([category.clone(), count.to_string()]);
        }

        let header = [
            format!("Corpus facts: {}", stats.total_facts),
            format!(
                "Verified true: {}  Verified false: {}",
                stats.verified_true, stats.verified_false
            ),
            format!("Sources: {}", stats.sources.join(", ")),
            format!("Known facts: {}", known_facts),
        ]
        .join("\n");

        Ok(format!("{}\n{}", header, styled(builder.build())))
    }

    /// Format corpus facts.
    pub fn format_facts(&self, facts: &[&FactRecord]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(facts);
        }
        if facts.is_empty() {
            return Ok(self.colorize("No facts found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Claim", "Verdict", "Confidence", "Category", "Source", "Date"]);
        for fact in facts {
            builder.push_record([
                fact.claim.clone(),
                self.verdict(fact.verdict.into()),
                format!("{:.2}", fact.confidence),
                fact.category.clone(),
                fact.source.clone(),
                fact.date.clone(),
            ]);
        }

        Ok(styled(builder.build()))
    }

    /// Format the rule table.
    pub fn format_rules(&self, rules: &[Rule]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(rules);
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Name", "Cluster", "Verdict", "Confidence", "Tags"]);
        for (index, rule) in rules.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                rule.name.to_string(),
                rule.cluster.to_string(),
                self.verdict(rule.verdict),
                format!("{:.2}", rule.confidence),
                rule.tags.join(", "),
            ]);
        }

        Ok(styled(builder.build()))
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn verdict(&self, verdict: Verdict) -> String {
        let color = match verdict {
            Verdict::Real => "green",
            Verdict::Fake => "red",
            Verdict::Unverified => "yellow",
            Verdict::Unknown => "magenta",
        };
        self.colorize(verdict.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
