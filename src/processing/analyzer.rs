//! Analysis pipeline: extract, score, rank, enrich, report

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::market::MarketDataClient;
use crate::output::report::{
    AnalysisReport, CategoryBreakdown, ExtractedSkillEntry, ResumeSummary, ScoredListing,
};
use crate::processing::extractor::{ExtractedSkillSet, SkillExtractor};
use crate::processing::match_engine::MatchEngine;
use crate::processing::ranking::rank_matches;
use crate::taxonomy::SkillTaxonomy;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use unicode_segmentation::UnicodeSegmentation;

/// Coordinates one analysis run over already-resident in-memory data.
///
/// The taxonomy is read-only after construction and shared; every scoring
/// call is a pure computation, so runs are safe to repeat and listings could
/// be scored concurrently without changing any result. The market client is
/// optional: without it (or with enrichment disabled) reports simply carry
/// no signals.
pub struct AnalysisEngine {
    catalog: JobCatalog,
    market: Option<Arc<MarketDataClient>>,
    extractor: SkillExtractor,
    match_engine: MatchEngine,
    taxonomy_size: usize,
}

impl AnalysisEngine {
    pub fn new(
        taxonomy: Arc<SkillTaxonomy>,
        catalog: JobCatalog,
        market: Option<Arc<MarketDataClient>>,
        config: &Config,
    ) -> Self {
        let extractor =
            SkillExtractor::new(Arc::clone(&taxonomy)).with_mode(config.extraction.match_mode);
        let match_engine = MatchEngine::new(Arc::clone(&taxonomy)).with_weights(
            config.scoring.required_weight,
            config.scoring.bonus_weight,
        );
        Self {
            taxonomy_size: taxonomy.len(),
            catalog,
            market,
            extractor,
            match_engine,
        }
    }

    /// Extraction only, for callers that do not need scoring.
    pub fn extract(&self, text: &str) -> ExtractedSkillSet {
        self.extractor.extract(text)
    }

    /// Full pipeline for one resume text against the whole catalog.
    pub async fn analyze(&self, resume_text: &str) -> Result<AnalysisReport> {
        let start = Instant::now();

        let extracted = self.extractor.extract(resume_text);
        info!(
            "extracted {} skills from {} characters of input",
            extracted.len(),
            resume_text.len()
        );

        let results = self.match_engine.score_all(&self.catalog, &extracted);
        let ranked = rank_matches(results);
        debug!(
            "scored {} listings, top score {}",
            ranked.len(),
            ranked.first().map(|r| r.match_score).unwrap_or(0)
        );

        // enrichment fans out concurrently and is display-only; a missing
        // signal leaves the entry bare, never fails the run
        let (company_signals, skill_trends) = match &self.market {
            Some(market) => {
                let companies: HashSet<String> = ranked
                    .iter()
                    .map(|r| r.listing.company.clone())
                    .collect();
                let names: Vec<String> = extracted.names().map(String::from).collect();
                let signals = market.company_signals(companies).await;
                let trends = market.skill_trends(names).await;
                info!("market data resolved for {} companies", signals.len());
                (signals, trends)
            }
            None => Default::default(),
        };

        let extracted_skills: Vec<ExtractedSkillEntry> = extracted
            .iter()
            .map(|concept| ExtractedSkillEntry {
                id: concept.id.clone(),
                name: concept.name.clone(),
                category: concept.category,
                trend: skill_trends.get(&concept.name).cloned(),
            })
            .collect();

        let category_breakdown =
            CategoryBreakdown::from_counts(|category| extracted.count_in_category(category));

        let matches: Vec<ScoredListing> = ranked
            .into_iter()
            .map(|result| {
                let signal = company_signals.get(&result.listing.company).cloned();
                ScoredListing::from_result(result, signal)
            })
            .collect();

        Ok(AnalysisReport {
            generated_at: chrono::Utc::now(),
            resume: ResumeSummary {
                characters: resume_text.chars().count(),
                words: resume_text.unicode_words().count(),
            },
            extracted_skills,
            category_breakdown,
            matches,
            taxonomy_size: self.taxonomy_size,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
