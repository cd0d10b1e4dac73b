//! Skill taxonomy: canonical concepts and the immutable lookup index

pub mod concept;
pub mod index;

pub use concept::{ResolvedSkill, SkillCategory, SkillConcept, UNRESOLVED_ID};
pub use index::{MatchMode, SkillTaxonomy};
