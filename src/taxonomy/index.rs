//! Immutable taxonomy index: name resolution and text-form matching

use crate::error::{Result, SkillGraphError};
use crate::taxonomy::concept::{ResolvedSkill, SkillCategory, SkillConcept};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// How text forms are tested against input text.
///
/// `Substring` is the source-faithful default: raw containment, so short
/// forms like "js" match inside longer tokens like "reactjs". `WordBounded`
/// is a stricter opt-in that only accepts matches flanked by non-alphanumeric
/// characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Substring,
    #[serde(rename = "word")]
    WordBounded,
}

/// Read-only index over a set of skill concepts.
///
/// Built once at startup and shared across scoring calls; nothing here
/// mutates after construction. All matchable forms (lowercased canonical
/// name plus synonyms) feed a single Aho-Corasick automaton, searched with
/// overlapping matches so nested forms are never shadowed by longer ones.
pub struct SkillTaxonomy {
    concepts: Vec<Arc<SkillConcept>>,
    by_name: HashMap<String, usize>,
    form_matcher: AhoCorasick,
    form_owner: Vec<usize>,
}

impl SkillTaxonomy {
    /// Build an index, validating that no two concepts share a canonical
    /// name or a matchable form. A concept repeating its own name among its
    /// synonyms is fine; the seeded taxonomy does exactly that.
    pub fn new(concepts: Vec<SkillConcept>) -> Result<Self> {
        let mut by_name = HashMap::new();
        let mut form_seen: HashMap<String, usize> = HashMap::new();
        let mut patterns: Vec<String> = Vec::new();
        let mut form_owner: Vec<usize> = Vec::new();

        for (idx, concept) in concepts.iter().enumerate() {
            if concept.name.trim().is_empty() {
                return Err(SkillGraphError::Taxonomy(format!(
                    "concept '{}' has an empty name",
                    concept.id
                )));
            }
            if let Some(prev) = by_name.insert(concept.name.clone(), idx) {
                return Err(SkillGraphError::Taxonomy(format!(
                    "duplicate concept name '{}' (ids '{}' and '{}')",
                    concept.name, concepts[prev].id, concept.id
                )));
            }

            let name_form = concept.name.to_lowercase();
            let forms = std::iter::once(&name_form).chain(concept.synonyms.iter());
            for form in forms {
                if form.trim().is_empty() {
                    return Err(SkillGraphError::Taxonomy(format!(
                        "concept '{}' has an empty matchable form",
                        concept.id
                    )));
                }
                match form_seen.get(form) {
                    Some(&owner) if owner != idx => {
                        return Err(SkillGraphError::Taxonomy(format!(
                            "form '{}' is claimed by both '{}' and '{}'",
                            form, concepts[owner].id, concept.id
                        )));
                    }
                    Some(_) => {} // same concept, skip the duplicate pattern
                    None => {
                        form_seen.insert(form.clone(), idx);
                        patterns.push(form.clone());
                        form_owner.push(idx);
                    }
                }
            }
        }

        let form_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                SkillGraphError::Taxonomy(format!("failed to build form matcher: {}", e))
            })?;

        Ok(Self {
            concepts: concepts.into_iter().map(Arc::new).collect(),
            by_name,
            form_matcher,
            form_owner,
        })
    }

    /// Load a concept table from a JSON file (an array of concepts).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let concepts: Vec<SkillConcept> = serde_json::from_str(&content)?;
        Self::new(concepts)
    }

    /// The built-in seed taxonomy.
    pub fn builtin() -> Self {
        use SkillCategory::*;
        let concepts = vec![
            SkillConcept::new("tech_01", "Python", HardSkill, &["python", "python3", "django", "flask"]),
            SkillConcept::new("tech_02", "JavaScript", HardSkill, &["javascript", "js", "es6", "typescript"]),
            SkillConcept::new("tech_03", "React", HardSkill, &["react", "reactjs", "react.js", "jsx"]),
            SkillConcept::new("tech_04", "SQL", HardSkill, &["sql", "mysql", "postgres", "database query"]),
            SkillConcept::new("tech_05", "Machine Learning", HardSkill, &["ml", "machine learning", "scikit-learn", "ai"]),
            SkillConcept::new("tech_06", "AWS", HardSkill, &["aws", "amazon web services", "ec2", "lambda"]),
            SkillConcept::new("soft_01", "Communication", SoftSkill, &["communication", "public speaking", "presentation", "writing"]),
            SkillConcept::new("soft_02", "Leadership", SoftSkill, &["leadership", "management", "mentoring", "team lead"]),
            SkillConcept::new("soft_03", "Agile", Process, &["agile", "scrum", "kanban", "sprint planning"]),
            SkillConcept::new("fin_01", "Financial Modeling", Domain, &["financial modeling", "excel models", "forecasting"]),
            SkillConcept::new("fin_02", "SEC Reporting", Domain, &["sec reporting", "10-k", "10-q", "edgar"]),
        ];
        Self::new(concepts).expect("builtin taxonomy is valid")
    }

    /// Exact, case-sensitive lookup against the canonical `name` field.
    /// A miss yields an `Unresolved` placeholder, never an error.
    pub fn resolve_by_name(&self, name: &str) -> ResolvedSkill {
        match self.by_name.get(name) {
            Some(&idx) => ResolvedSkill::Resolved(Arc::clone(&self.concepts[idx])),
            None => ResolvedSkill::Unresolved {
                name: name.to_string(),
            },
        }
    }

    /// Concepts with any matchable form present in `text`, in taxonomy order.
    pub fn match_forms(&self, text: &str) -> Vec<Arc<SkillConcept>> {
        self.match_forms_with(text, MatchMode::Substring)
    }

    /// Like [`match_forms`](Self::match_forms), with an explicit match mode.
    pub fn match_forms_with(&self, text: &str, mode: MatchMode) -> Vec<Arc<SkillConcept>> {
        let haystack = text.to_lowercase();
        let mut hit = vec![false; self.concepts.len()];

        for mat in self.form_matcher.find_overlapping_iter(&haystack) {
            if mode == MatchMode::WordBounded
                && !is_word_bounded(&haystack, mat.start(), mat.end())
            {
                continue;
            }
            hit[self.form_owner[mat.pattern().as_usize()]] = true;
        }

        self.concepts
            .iter()
            .enumerate()
            .filter(|(idx, _)| hit[*idx])
            .map(|(_, concept)| Arc::clone(concept))
            .collect()
    }

    /// Concepts in declaration order.
    pub fn concepts(&self) -> impl Iterator<Item = &Arc<SkillConcept>> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

fn is_word_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.map_or(false, |c| c.is_alphanumeric())
        && !after.map_or(false, |c| c.is_alphanumeric())
}
