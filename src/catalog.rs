//! Job listing catalog: static reference data the engine scores against

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One job posting. Required and bonus skill names are resolved against the
/// taxonomy at scoring time; duplicates are not expected but not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: u32,
    pub title: String,
    pub company: String,
    /// Provenance tag, free text ("LinkedIn Scraper", "Indeed API", ...)
    pub source: String,
    pub salary_range: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
    pub industry: String,
}

/// Immutable set of listings handed to the engine at construction time.
/// Mutation and lifecycle belong to an external catalog, not to this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCatalog {
    listings: Vec<JobListing>,
}

impl JobCatalog {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }

    /// Load listings from a JSON file (an array of listings).
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let listings: Vec<JobListing> = serde_json::from_str(&content)?;
        Ok(Self::new(listings))
    }

    /// The built-in seed catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            JobListing {
                id: 1,
                title: "Senior Frontend Engineer".to_string(),
                company: "TechFlow Systems".to_string(),
                source: "LinkedIn Scraper (Simulated)".to_string(),
                salary_range: "$120k - $160k".to_string(),
                description: "Building scalable UIs. We need someone who breathes React and can lead junior devs.".to_string(),
                required_skills: skills(&["React", "JavaScript", "Communication", "Agile"]),
                bonus_skills: skills(&["AWS", "SQL"]),
                industry: "Technology".to_string(),
            },
            JobListing {
                id: 2,
                title: "Data Scientist".to_string(),
                company: "QuantMetrics".to_string(),
                source: "Burning Glass API".to_string(),
                salary_range: "$130k - $170k".to_string(),
                description: "Analyze large datasets using Python and SQL to drive business insights.".to_string(),
                required_skills: skills(&["Python", "SQL", "Machine Learning", "Communication"]),
                bonus_skills: skills(&["AWS", "Financial Modeling"]),
                industry: "Data Science".to_string(),
            },
            JobListing {
                id: 3,
                title: "Financial Analyst".to_string(),
                company: "Capital Horizons".to_string(),
                source: "Direct (SEC Signal)".to_string(),
                salary_range: "$90k - $120k".to_string(),
                description: "Support quarterly reporting. Must know GAAP and SEC filing procedures.".to_string(),
                required_skills: skills(&["Financial Modeling", "SEC Reporting", "SQL"]),
                bonus_skills: skills(&["Python", "Communication"]),
                industry: "Finance".to_string(),
            },
            JobListing {
                id: 4,
                title: "Technical Lead".to_string(),
                company: "BuildIt Corp".to_string(),
                source: "Indeed API".to_string(),
                salary_range: "$140k - $180k".to_string(),
                description: "Lead cross-functional teams. Technical background in JS/AWS required.".to_string(),
                required_skills: skills(&["Leadership", "Agile", "JavaScript", "AWS"]),
                bonus_skills: skills(&["React", "Communication"]),
                industry: "Management".to_string(),
            },
        ])
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = JobCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.listings()[0].company, "TechFlow Systems");
        assert_eq!(catalog.listings()[2].required_skills.len(), 3);
    }

    #[test]
    fn test_listing_json_round_trip() {
        let catalog = JobCatalog::builtin();
        let json = serde_json::to_string(catalog.listings()).unwrap();
        let back: Vec<JobListing> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 4);
        assert_eq!(back[1].title, "Data Scientist");
    }
}
