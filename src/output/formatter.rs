//! Output formatters: console, JSON, and markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, SkillGraphError};
use crate::output::report::{AnalysisReport, ScoredListing};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering analysis reports.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and optional detail.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for downstream tooling.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u8) -> Color {
        if score >= 80 {
            Color::Green
        } else if score >= 50 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn format_match(&self, rank: usize, entry: &ScoredListing) -> String {
        let mut out = String::new();
        let listing = &entry.listing;

        let score_label = format!("{}%", entry.match_score);
        out.push_str(&format!(
            "{}. {} @ {} — {}\n",
            rank,
            self.bold(&listing.title),
            listing.company,
            self.paint(&score_label, Self::score_color(entry.match_score)),
        ));
        out.push_str(&format!(
            "   {} | {} | {}\n",
            listing.industry, listing.salary_range, listing.source
        ));

        if self.detailed {
            out.push_str(&format!("   {}\n", listing.description));
        }

        let matched: Vec<&str> = entry.matched_required.iter().map(|s| s.name.as_str()).collect();
        if !matched.is_empty() {
            out.push_str(&format!(
                "   Matched: {}\n",
                self.paint(&matched.join(", "), Color::Green)
            ));
        }
        let bonus: Vec<&str> = entry.matched_bonus.iter().map(|s| s.name.as_str()).collect();
        if !bonus.is_empty() {
            out.push_str(&format!(
                "   Bonus: {}\n",
                self.paint(&bonus.join(", "), Color::Cyan)
            ));
        }
        if entry.is_full_required_match() {
            out.push_str(&format!(
                "   {}\n",
                self.paint("All core requirements covered", Color::Green)
            ));
        } else {
            let missing: Vec<&str> =
                entry.missing_required.iter().map(|s| s.name.as_str()).collect();
            out.push_str(&format!(
                "   Missing: {}\n",
                self.paint(&missing.join(", "), Color::Red)
            ));
        }

        if let Some(market) = &entry.market {
            out.push_str(&format!(
                "   Market: {} (health {}/100) — \"{}\"\n",
                market.sentiment, market.health_score, market.signal
            ));
            if self.detailed {
                if let Some(trend) = &market.hiring_trend {
                    out.push_str(&format!("   Hiring trend: {}\n", trend));
                }
                if let Some(risk) = &market.layoff_risk {
                    out.push_str(&format!("   Layoff risk: {}\n", risk));
                }
            }
        }

        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.bold("Skill Match Analysis")));
        out.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!(
            "Resume: {} characters, {} words | Taxonomy: {} concepts\n\n",
            report.resume.characters, report.resume.words, report.taxonomy_size
        ));

        let breakdown = &report.category_breakdown;
        out.push_str(&format!(
            "{} ({}): Technical {} | Soft {} | Domain {}\n",
            self.bold("Extracted skills"),
            report.extracted_skills.len(),
            breakdown.hard,
            breakdown.soft,
            breakdown.domain
        ));
        for skill in &report.extracted_skills {
            let mut line = format!("  • {} [{}]", skill.name, skill.category);
            if let Some(trend) = &skill.trend {
                if let (Some(demand), Some(direction)) = (trend.demand_percent, &trend.trend) {
                    line.push_str(&format!(" (demand {:.0}%, {})", demand, direction));
                }
            }
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str(&format!("\n{}\n", self.bold("Matches")));
        if report.matches.is_empty() {
            out.push_str("  (no listings in catalog)\n");
        }
        for (idx, entry) in report.matches.iter().enumerate() {
            out.push_str(&self.format_match(idx + 1, entry));
        }

        out.push_str(&format!(
            "\nProcessed in {}ms\n",
            report.processing_time_ms
        ));

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Skill Match Analysis\n\n");
        out.push_str(&format!(
            "Generated: {}  \n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!(
            "Resume: {} characters, {} words  \nTaxonomy: {} concepts\n\n",
            report.resume.characters, report.resume.words, report.taxonomy_size
        ));

        out.push_str(&format!(
            "## Extracted Skills ({})\n\n",
            report.extracted_skills.len()
        ));
        let breakdown = &report.category_breakdown;
        out.push_str(&format!(
            "Technical: {} | Soft: {} | Domain: {}\n\n",
            breakdown.hard, breakdown.soft, breakdown.domain
        ));
        for skill in &report.extracted_skills {
            out.push_str(&format!("- **{}** ({})", skill.name, skill.category));
            if let Some(trend) = &skill.trend {
                if let Some(direction) = &trend.trend {
                    out.push_str(&format!(" — demand {}", direction.to_lowercase()));
                }
            }
            out.push('\n');
        }

        out.push_str("\n## Matches\n");
        for entry in &report.matches {
            let listing = &entry.listing;
            out.push_str(&format!(
                "\n### {} @ {} — {}%\n\n",
                listing.title, listing.company, entry.match_score
            ));
            out.push_str(&format!(
                "{} | {} | {}\n\n",
                listing.industry, listing.salary_range, listing.source
            ));

            let matched: Vec<&str> =
                entry.matched_required.iter().map(|s| s.name.as_str()).collect();
            let bonus: Vec<&str> = entry.matched_bonus.iter().map(|s| s.name.as_str()).collect();
            let missing: Vec<&str> =
                entry.missing_required.iter().map(|s| s.name.as_str()).collect();

            if !matched.is_empty() {
                out.push_str(&format!("- Matched: {}\n", matched.join(", ")));
            }
            if !bonus.is_empty() {
                out.push_str(&format!("- Bonus: {}\n", bonus.join(", ")));
            }
            if missing.is_empty() {
                out.push_str("- All core requirements covered\n");
            } else {
                out.push_str(&format!("- Missing: {}\n", missing.join(", ")));
            }

            if let Some(market) = &entry.market {
                out.push_str(&format!(
                    "- Market: {} (health {}/100) — *{}*\n",
                    market.sentiment, market.health_score, market.signal
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Dispatches to the formatter matching the requested output format and
/// handles writing reports to disk.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save(
        &self,
        report: &AnalysisReport,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        let content = self.generate(report, format)?;
        std::fs::write(path, content).map_err(|e| {
            SkillGraphError::OutputFormatting(format!(
                "Failed to write report to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::{CategoryBreakdown, ResumeSummary};
    use chrono::TimeZone;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            generated_at: chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            resume: ResumeSummary {
                characters: 120,
                words: 20,
            },
            extracted_skills: vec![],
            category_breakdown: CategoryBreakdown {
                hard: 0,
                soft: 0,
                domain: 0,
            },
            matches: vec![],
            taxonomy_size: 11,
            processing_time_ms: 3,
        }
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Skill Match Analysis"));
        assert!(output.contains("120 characters"));
        assert!(output.contains("no listings in catalog"));
        // no ANSI escapes when colors are off
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["taxonomy_size"], 11);
        assert_eq!(value["resume"]["words"], 20);
    }

    #[test]
    fn test_markdown_output_has_headers() {
        let output = MarkdownFormatter.format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# Skill Match Analysis"));
        assert!(output.contains("## Extracted Skills"));
        assert!(output.contains("## Matches"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, false);
        let report = sample_report();
        assert!(generator
            .generate(&report, OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
        assert!(generator
            .generate(&report, OutputFormat::Markdown)
            .unwrap()
            .starts_with('#'));
    }
}
