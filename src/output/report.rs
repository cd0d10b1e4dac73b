//! Analysis report structures

use crate::catalog::JobListing;
use crate::market::{MarketSignal, SkillTrend};
use crate::processing::match_engine::{MatchResult, SkillRef};
use crate::taxonomy::SkillCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one analysis run produces: the extracted skill set, the ranked
/// scored listings with gap annotations, optional market enrichment, and
/// generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub resume: ResumeSummary,
    pub extracted_skills: Vec<ExtractedSkillEntry>,
    pub category_breakdown: CategoryBreakdown,
    pub matches: Vec<ScoredListing>,
    pub taxonomy_size: usize,
    pub processing_time_ms: u64,
}

/// Input-side stats for the report header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub characters: usize,
    pub words: usize,
}

/// One extracted concept, optionally decorated with market demand context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSkillEntry {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<SkillTrend>,
}

/// Counts per category group, mirroring the Technical / Soft / Domain tiles
/// of the source dashboard (Process counts toward Domain).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub hard: usize,
    pub soft: usize,
    pub domain: usize,
}

impl CategoryBreakdown {
    pub fn from_counts(counts: impl Fn(SkillCategory) -> usize) -> Self {
        Self {
            hard: counts(SkillCategory::HardSkill),
            soft: counts(SkillCategory::SoftSkill),
            domain: counts(SkillCategory::Domain) + counts(SkillCategory::Process),
        }
    }
}

/// A ranked match entry: the scored listing plus its optional market signal.
/// The signal is display context only; it never feeds back into the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing: JobListing,
    pub match_score: u8,
    pub matched_required: Vec<SkillRef>,
    pub missing_required: Vec<SkillRef>,
    pub matched_bonus: Vec<SkillRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketSignal>,
}

impl ScoredListing {
    pub fn from_result(result: MatchResult, market: Option<MarketSignal>) -> Self {
        Self {
            listing: result.listing,
            match_score: result.match_score,
            matched_required: result.matched_required,
            missing_required: result.missing_required,
            matched_bonus: result.matched_bonus,
            market,
        }
    }

    /// True when every required skill of the listing is covered.
    pub fn is_full_required_match(&self) -> bool {
        self.missing_required.is_empty()
    }
}
