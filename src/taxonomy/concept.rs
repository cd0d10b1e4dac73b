//! Canonical skill concepts and resolution results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Sentinel id carried by placeholder concepts for names the taxonomy
/// does not know.
pub const UNRESOLVED_ID: &str = "unknown";

/// Fixed category labels for taxonomy concepts. `General` is reserved for
/// unresolved placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Hard Skill")]
    HardSkill,
    #[serde(rename = "Soft Skill")]
    SoftSkill,
    Process,
    Domain,
    General,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillCategory::HardSkill => "Hard Skill",
            SkillCategory::SoftSkill => "Soft Skill",
            SkillCategory::Process => "Process",
            SkillCategory::Domain => "Domain",
            SkillCategory::General => "General",
        };
        write!(f, "{}", label)
    }
}

/// One canonical skill entry: a stable id, a unique display name, a category
/// label, and the lowercase text forms that identify it in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConcept {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub synonyms: Vec<String>,
}

impl SkillConcept {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: SkillCategory,
        synonyms: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            synonyms: synonyms.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Outcome of resolving a skill name against the taxonomy.
///
/// "Not found" is a normal outcome, not an error: callers count and display
/// unresolved names symmetrically with resolved ones, but the tagged variant
/// keeps a placeholder from silently passing as a categorized concept.
#[derive(Debug, Clone)]
pub enum ResolvedSkill {
    Resolved(Arc<SkillConcept>),
    Unresolved { name: String },
}

impl ResolvedSkill {
    pub fn name(&self) -> &str {
        match self {
            ResolvedSkill::Resolved(concept) => &concept.name,
            ResolvedSkill::Unresolved { name } => name,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResolvedSkill::Resolved(concept) => &concept.id,
            ResolvedSkill::Unresolved { .. } => UNRESOLVED_ID,
        }
    }

    pub fn category(&self) -> SkillCategory {
        match self {
            ResolvedSkill::Resolved(concept) => concept.category,
            ResolvedSkill::Unresolved { .. } => SkillCategory::General,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolvedSkill::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        let json = serde_json::to_string(&SkillCategory::HardSkill).unwrap();
        assert_eq!(json, "\"Hard Skill\"");
        let back: SkillCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkillCategory::HardSkill);
        assert_eq!(SkillCategory::SoftSkill.to_string(), "Soft Skill");
    }

    #[test]
    fn test_unresolved_placeholder_shape() {
        let placeholder = ResolvedSkill::Unresolved {
            name: "Quantum Basket Weaving".to_string(),
        };
        assert_eq!(placeholder.name(), "Quantum Basket Weaving");
        assert_eq!(placeholder.id(), UNRESOLVED_ID);
        assert_eq!(placeholder.category(), SkillCategory::General);
        assert!(!placeholder.is_resolved());
    }

    #[test]
    fn test_synonyms_are_lowercased_on_construction() {
        let concept = SkillConcept::new(
            "tech_01",
            "Python",
            SkillCategory::HardSkill,
            &["Python", "DJANGO"],
        );
        assert_eq!(concept.synonyms, vec!["python", "django"]);
    }
}
