//! Static fallback insights, substituted whenever generation fails or the
//! reply fails validation. Always schema-valid.

use crate::insights::models::{InsightRecord, SalaryRange};

/// Per-element defaults used when a parsed salary range is missing sub-fields.
pub const DEFAULT_ROLE: &str = "Role";
pub const DEFAULT_SALARY_MIN: f64 = 300_000.0;
pub const DEFAULT_SALARY_MAX: f64 = 600_000.0;

/// Builds the fallback record for an industry. The industry name is woven into
/// the text fields so a degraded dashboard still reads as personalized.
pub fn fallback_insights(industry: &str) -> InsightRecord {
    let base_industry = if industry.trim().is_empty() {
        "Technology"
    } else {
        industry
    };

    InsightRecord {
        salary_ranges: vec![
            SalaryRange {
                role: "Junior".to_string(),
                min: 300_000.0,
                max: 600_000.0,
            },
            SalaryRange {
                role: "Mid".to_string(),
                min: 600_000.0,
                max: 1_200_000.0,
            },
            SalaryRange {
                role: "Senior".to_string(),
                min: 1_200_000.0,
                max: 2_500_000.0,
            },
        ],
        growth_rate: 8.5,
        demand_level: "High".to_string(),
        top_skills: vec![
            "Problem Solving".to_string(),
            "Communication".to_string(),
            "Team Collaboration".to_string(),
            format!("{base_industry} Fundamentals"),
        ],
        market_outlook: format!(
            "The {base_industry} industry is growing steadily with strong demand \
             for skilled professionals and increasing digital adoption."
        ),
        key_trends: vec![
            "Increased automation and AI adoption".to_string(),
            "Remote and hybrid work models".to_string(),
            "Growing demand for multi-skilled professionals".to_string(),
        ],
        recommended_skills: vec![
            "Data Analysis".to_string(),
            "Cloud Basics".to_string(),
            "Version Control (Git)".to_string(),
            "System Design Fundamentals".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_interpolates_industry() {
        let fb = fallback_insights("Finance");
        assert!(fb.top_skills.contains(&"Finance Fundamentals".to_string()));
        assert!(fb.market_outlook.contains("Finance"));
    }

    #[test]
    fn test_empty_industry_defaults_to_technology() {
        let fb = fallback_insights("");
        assert!(fb.market_outlook.contains("Technology"));
    }

    #[test]
    fn test_fallback_shape_is_complete() {
        let fb = fallback_insights("Healthcare");
        assert_eq!(fb.salary_ranges.len(), 3);
        assert_eq!(fb.demand_level, "High");
        assert!(fb.growth_rate > 0.0);
        assert!(!fb.key_trends.is_empty());
        assert!(!fb.recommended_skills.is_empty());
    }
}
