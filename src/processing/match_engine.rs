//! Weighted-overlap scoring of one job listing against one candidate skill set

use crate::catalog::{JobCatalog, JobListing};
use crate::processing::extractor::ExtractedSkillSet;
use crate::taxonomy::{ResolvedSkill, SkillCategory, SkillTaxonomy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_REQUIRED_WEIGHT: u32 = 10;
pub const DEFAULT_BONUS_WEIGHT: u32 = 5;

/// Lightweight summary of a resolved (or placeholder) skill for results and
/// display. `resolved` distinguishes a cataloged concept from a placeholder
/// synthesized for an unknown listing skill name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRef {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub resolved: bool,
}

impl From<&ResolvedSkill> for SkillRef {
    fn from(skill: &ResolvedSkill) -> Self {
        Self {
            id: skill.id().to_string(),
            name: skill.name().to_string(),
            category: skill.category(),
            resolved: skill.is_resolved(),
        }
    }
}

/// Score and gap annotations for one (candidate, listing) pair. Recomputed
/// on every analysis run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub listing: JobListing,
    /// Weighted-overlap percentage, 0..=100
    pub match_score: u8,
    pub matched_required: Vec<SkillRef>,
    pub missing_required: Vec<SkillRef>,
    pub matched_bonus: Vec<SkillRef>,
}

/// Scores listings against an extracted skill set.
///
/// Candidate membership is tested by resolved skill *name*, not concept id:
/// two concepts with equal display names are the same skill for matching
/// purposes. Unresolved listing names still contribute their full weight to
/// the attainable score, so a listing demanding unknown skills is penalized
/// rather than ignored.
pub struct MatchEngine {
    taxonomy: Arc<SkillTaxonomy>,
    required_weight: u32,
    bonus_weight: u32,
}

impl MatchEngine {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self {
            taxonomy,
            required_weight: DEFAULT_REQUIRED_WEIGHT,
            bonus_weight: DEFAULT_BONUS_WEIGHT,
        }
    }

    pub fn with_weights(mut self, required: u32, bonus: u32) -> Self {
        self.required_weight = required;
        self.bonus_weight = bonus;
        self
    }

    /// Pure function of the listing, the candidate set, and the taxonomy.
    pub fn score(&self, listing: &JobListing, candidate: &ExtractedSkillSet) -> MatchResult {
        let required: Vec<ResolvedSkill> = listing
            .required_skills
            .iter()
            .map(|name| self.taxonomy.resolve_by_name(name))
            .collect();
        let bonus: Vec<ResolvedSkill> = listing
            .bonus_skills
            .iter()
            .map(|name| self.taxonomy.resolve_by_name(name))
            .collect();

        let mut matched_required = Vec::new();
        let mut missing_required = Vec::new();
        for skill in &required {
            if candidate.contains_name(skill.name()) {
                matched_required.push(SkillRef::from(skill));
            } else {
                missing_required.push(SkillRef::from(skill));
            }
        }

        // unmatched bonus skills are not tracked; only the present subset
        // matters for scoring and display
        let matched_bonus: Vec<SkillRef> = bonus
            .iter()
            .filter(|skill| candidate.contains_name(skill.name()))
            .map(SkillRef::from)
            .collect();

        let total_weight = self.required_weight * required.len() as u32
            + self.bonus_weight * bonus.len() as u32;
        let earned = self.required_weight * matched_required.len() as u32
            + self.bonus_weight * matched_bonus.len() as u32;

        let match_score = if total_weight == 0 {
            0
        } else {
            ((earned as f64 / total_weight as f64) * 100.0).round() as u8
        };

        MatchResult {
            listing: listing.clone(),
            match_score,
            matched_required,
            missing_required,
            matched_bonus,
        }
    }

    /// Score every listing in the catalog against the same candidate set.
    /// Each result depends only on its own listing, so catalog order has no
    /// effect on any individual score.
    pub fn score_all(&self, catalog: &JobCatalog, candidate: &ExtractedSkillSet) -> Vec<MatchResult> {
        catalog
            .listings()
            .iter()
            .map(|listing| self.score(listing, candidate))
            .collect()
    }
}
