//! Market intelligence lookups: company signals and skill demand trends
//!
//! Display-only enrichment. Lookups are keyed by company name or skill name
//! and may come back empty; absence never changes a match score. The lookup
//! surface is async so a remote backend can replace the in-memory table
//! without touching callers.

use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Per-company sentiment and health fields, displayed alongside a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSignal {
    pub sentiment: String,
    pub signal: String,
    pub health_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layoff_risk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_trend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_status: Option<String>,
}

/// Demand and salary context for one skill, displayed alongside extraction
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand_percent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SignalTables {
    #[serde(default)]
    companies: HashMap<String, MarketSignal>,
    #[serde(default)]
    skills: HashMap<String, SkillTrend>,
}

/// Pull-based market data source backed by an in-memory table.
pub struct MarketDataClient {
    tables: SignalTables,
}

impl MarketDataClient {
    /// Load signal tables from a JSON file with `companies` and `skills` maps.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let tables: SignalTables = serde_json::from_str(&content)?;
        Ok(Self { tables })
    }

    /// The built-in seed tables.
    pub fn builtin() -> Self {
        let mut companies = HashMap::new();
        companies.insert(
            "TechFlow Systems".to_string(),
            MarketSignal {
                sentiment: "High Growth".to_string(),
                signal: "SEC 10-K: 15% budget increase for R&D.".to_string(),
                health_score: 92,
                layoff_risk: Some("Low".to_string()),
                hiring_trend: Some("+35% YoY".to_string()),
                funding_status: Some("Public".to_string()),
            },
        );
        companies.insert(
            "QuantMetrics".to_string(),
            MarketSignal {
                sentiment: "Stable".to_string(),
                signal: "SEC 8-K: Recent merger, consolidating teams.".to_string(),
                health_score: 65,
                layoff_risk: Some("Medium".to_string()),
                hiring_trend: Some("+5% YoY".to_string()),
                funding_status: Some("Public".to_string()),
            },
        );
        companies.insert(
            "Capital Horizons".to_string(),
            MarketSignal {
                sentiment: "Aggressive Expansion".to_string(),
                signal: "SEC 10-K: Opening 3 new regional offices.".to_string(),
                health_score: 88,
                layoff_risk: Some("Low".to_string()),
                hiring_trend: Some("+20% YoY".to_string()),
                funding_status: Some("Public".to_string()),
            },
        );
        companies.insert(
            "BuildIt Corp".to_string(),
            MarketSignal {
                sentiment: "Cautionary".to_string(),
                signal: "SEC 10-Q: Supply chain headwinds noted.".to_string(),
                health_score: 55,
                layoff_risk: Some("Medium".to_string()),
                hiring_trend: Some("-3% YoY".to_string()),
                funding_status: Some("Public".to_string()),
            },
        );

        let mut skills = HashMap::new();
        skills.insert(
            "Python".to_string(),
            SkillTrend {
                demand_percent: Some(68.0),
                avg_salary: Some(125_000.0),
                trend: Some("Rising".to_string()),
            },
        );
        skills.insert(
            "JavaScript".to_string(),
            SkillTrend {
                demand_percent: Some(61.0),
                avg_salary: Some(115_000.0),
                trend: Some("Stable".to_string()),
            },
        );
        skills.insert(
            "React".to_string(),
            SkillTrend {
                demand_percent: Some(54.0),
                avg_salary: Some(120_000.0),
                trend: Some("Rising".to_string()),
            },
        );
        skills.insert(
            "SQL".to_string(),
            SkillTrend {
                demand_percent: Some(57.0),
                avg_salary: Some(110_000.0),
                trend: Some("Stable".to_string()),
            },
        );
        skills.insert(
            "Machine Learning".to_string(),
            SkillTrend {
                demand_percent: Some(43.0),
                avg_salary: Some(145_000.0),
                trend: Some("Rising".to_string()),
            },
        );
        skills.insert(
            "AWS".to_string(),
            SkillTrend {
                demand_percent: Some(49.0),
                avg_salary: Some(130_000.0),
                trend: Some("Rising".to_string()),
            },
        );

        Self {
            tables: SignalTables { companies, skills },
        }
    }

    pub async fn company_signal(&self, company: &str) -> Option<MarketSignal> {
        self.tables.companies.get(company).cloned()
    }

    pub async fn skill_trend(&self, skill_name: &str) -> Option<SkillTrend> {
        self.tables.skills.get(skill_name).cloned()
    }

    /// Fetch signals for a batch of companies concurrently. Results are
    /// order-independent, so the lookups fan out instead of awaiting one at
    /// a time; unknown companies are simply absent from the returned map.
    pub async fn company_signals(
        self: &Arc<Self>,
        companies: impl IntoIterator<Item = String>,
    ) -> HashMap<String, MarketSignal> {
        let mut lookups = JoinSet::new();
        for company in companies {
            let client = Arc::clone(self);
            lookups.spawn(async move {
                let signal = client.company_signal(&company).await;
                (company, signal)
            });
        }

        let mut signals = HashMap::new();
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((company, Some(signal))) => {
                    signals.insert(company, signal);
                }
                Ok((company, None)) => {
                    debug!("no market signal for company '{}'", company);
                }
                Err(e) => {
                    debug!("market signal lookup aborted: {}", e);
                }
            }
        }
        signals
    }

    /// Fetch demand trends for a batch of skill names concurrently.
    pub async fn skill_trends(
        self: &Arc<Self>,
        skill_names: impl IntoIterator<Item = String>,
    ) -> HashMap<String, SkillTrend> {
        let mut lookups = JoinSet::new();
        for name in skill_names {
            let client = Arc::clone(self);
            lookups.spawn(async move {
                let trend = client.skill_trend(&name).await;
                (name, trend)
            });
        }

        let mut trends = HashMap::new();
        while let Some(joined) = lookups.join_next().await {
            if let Ok((name, Some(trend))) = joined {
                trends.insert(name, trend);
            }
        }
        trends
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_company_lookup() {
        let client = MarketDataClient::builtin();
        let signal = client.company_signal("TechFlow Systems").await.unwrap();
        assert_eq!(signal.health_score, 92);
        assert_eq!(signal.sentiment, "High Growth");
    }

    #[tokio::test]
    async fn test_unknown_company_degrades_to_none() {
        let client = MarketDataClient::builtin();
        assert!(client.company_signal("Nonexistent LLC").await.is_none());
    }

    #[tokio::test]
    async fn test_batch_lookup_returns_partial_map() {
        let client = Arc::new(MarketDataClient::builtin());
        let signals = client
            .company_signals(vec![
                "TechFlow Systems".to_string(),
                "Nonexistent LLC".to_string(),
                "BuildIt Corp".to_string(),
            ])
            .await;
        assert_eq!(signals.len(), 2);
        assert!(signals.contains_key("TechFlow Systems"));
        assert!(!signals.contains_key("Nonexistent LLC"));
    }

    #[tokio::test]
    async fn test_skill_trend_lookup() {
        let client = MarketDataClient::builtin();
        let trend = client.skill_trend("Python").await.unwrap();
        assert_eq!(trend.trend.as_deref(), Some("Rising"));
        assert!(client.skill_trend("Underwater Welding").await.is_none());
    }
}
