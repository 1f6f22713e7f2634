use serde::{Deserialize, Serialize};

/// The insight schema requested from the model and validated by the merge in
/// `generate`. camelCase on the wire — the keys are the prompt's literal
/// output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    pub salary_ranges: Vec<SalaryRange>,
    /// Estimated % growth. Unconstrained here; the dashboard clamps display.
    pub growth_rate: f64,
    /// "Low" | "Medium" | "High" | "Very High" by contract, but any non-empty
    /// string passes through the normalizer unchanged.
    pub demand_level: String,
    pub top_skills: Vec<String>,
    pub market_outlook: String,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub role: String,
    pub min: f64,
    pub max: f64,
}
