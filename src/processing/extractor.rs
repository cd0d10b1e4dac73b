//! Skill extraction: raw text in, deduplicated concept set out

use crate::taxonomy::{MatchMode, SkillCategory, SkillConcept, SkillTaxonomy};
use std::collections::HashSet;
use std::sync::Arc;

/// Maps free text to the set of taxonomy concepts present in it.
///
/// Extraction is a presence test, not a span parse: the input is lowercased
/// and every matchable form of every concept is tested for containment.
/// No positional information survives, and there are no failure modes —
/// empty or non-matching text yields an empty set.
pub struct SkillExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    mode: MatchMode,
}

impl SkillExtractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self {
            taxonomy,
            mode: MatchMode::Substring,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn extract(&self, text: &str) -> ExtractedSkillSet {
        ExtractedSkillSet::from_concepts(self.taxonomy.match_forms_with(text, self.mode))
    }
}

/// Deduplicated set of concepts produced from one text input.
///
/// Uniqueness is by concept identity: a concept matched via both its name
/// and a synonym appears once. Iteration order follows the taxonomy's
/// declaration order, which keeps fixtures reproducible.
#[derive(Debug, Clone)]
pub struct ExtractedSkillSet {
    concepts: Vec<Arc<SkillConcept>>,
    names: HashSet<String>,
}

impl ExtractedSkillSet {
    pub fn from_concepts(concepts: Vec<Arc<SkillConcept>>) -> Self {
        let mut seen_ids = HashSet::new();
        let mut deduped = Vec::new();
        let mut names = HashSet::new();
        for concept in concepts {
            if seen_ids.insert(concept.id.clone()) {
                names.insert(concept.name.clone());
                deduped.push(concept);
            }
        }
        Self {
            concepts: deduped,
            names,
        }
    }

    /// Membership by display name, the identity the match engine uses.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<SkillConcept>> {
        self.concepts.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|c| c.name.as_str())
    }

    pub fn count_in_category(&self, category: SkillCategory) -> usize {
        self.concepts
            .iter()
            .filter(|c| c.category == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillConcept;

    fn taxonomy() -> Arc<SkillTaxonomy> {
        Arc::new(
            SkillTaxonomy::new(vec![
                SkillConcept::new(
                    "t1",
                    "Python",
                    SkillCategory::HardSkill,
                    &["python", "django"],
                ),
                SkillConcept::new(
                    "t2",
                    "SQL",
                    SkillCategory::HardSkill,
                    &["sql", "postgres"],
                ),
                SkillConcept::new(
                    "s1",
                    "Communication",
                    SkillCategory::SoftSkill,
                    &["communication", "public speaking"],
                ),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_extracts_via_name_and_synonym() {
        let extractor = SkillExtractor::new(taxonomy());
        let set = extractor.extract("I build APIs with Python and Postgres.");
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_concept_matched_via_multiple_forms_counts_once() {
        let extractor = SkillExtractor::new(taxonomy());
        // "python" (name) and "django" (synonym) both hit concept t1
        let set = extractor.extract("python and django work");
        assert_eq!(set.len(), 1);
        assert!(set.contains_name("Python"));
    }

    #[test]
    fn test_empty_and_non_matching_text_yield_empty_set() {
        let extractor = SkillExtractor::new(taxonomy());
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("nothing relevant here").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = SkillExtractor::new(taxonomy());
        let text = "Python, postgres, and lots of public speaking.";
        let first: Vec<String> = extractor.extract(text).names().map(String::from).collect();
        let second: Vec<String> = extractor.extract(text).names().map(String::from).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_text_only_grows_the_set() {
        let extractor = SkillExtractor::new(taxonomy());
        let base = "I build APIs with Python.";
        let extended = format!("{} I also give talks on public speaking.", base);

        let before: HashSet<String> = extractor.extract(base).names().map(String::from).collect();
        let after: HashSet<String> = extractor
            .extract(&extended)
            .names()
            .map(String::from)
            .collect();
        assert!(before.is_subset(&after));
        assert!(after.contains("Communication"));
    }

    #[test]
    fn test_category_counts() {
        let extractor = SkillExtractor::new(taxonomy());
        let set = extractor.extract("python, sql, communication");
        assert_eq!(set.count_in_category(SkillCategory::HardSkill), 2);
        assert_eq!(set.count_in_category(SkillCategory::SoftSkill), 1);
        assert_eq!(set.count_in_category(SkillCategory::Domain), 0);
    }
}
