//! Industry-insight generation: prompt → generate → normalize.
//!
//! The merge is total. Each schema field degrades to its fallback counterpart
//! independently of sibling fields; salary-range elements degrade per
//! sub-field. Unknown extra fields in the reply are discarded.

use serde_json::Value;
use tracing::warn;

use crate::insights::fallback::{
    fallback_insights, DEFAULT_ROLE, DEFAULT_SALARY_MAX, DEFAULT_SALARY_MIN,
};
use crate::insights::models::{InsightRecord, SalaryRange};
use crate::insights::prompts::insight_prompt;
use crate::llm_client::normalize::{parse_json, DegradeReason, Normalized};
use crate::llm_client::TextGenerator;

/// Generates insights for an industry. Never fails: any upstream or parse
/// problem yields the fallback record with the reason attached.
pub async fn generate_insights(llm: &dyn TextGenerator, industry: &str) -> Normalized<InsightRecord> {
    let fallback = fallback_insights(industry);
    let prompt = insight_prompt(industry);

    let raw = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Insight generation failed upstream: {e}");
            return Normalized::Degraded {
                value: fallback,
                reason: DegradeReason::Upstream(e.to_string()),
            };
        }
    };

    normalize_insights(&raw, fallback)
}

/// Coerces a raw reply into a schema-valid record. Total — never raises.
pub fn normalize_insights(raw: &str, fallback: InsightRecord) -> Normalized<InsightRecord> {
    match parse_json(raw) {
        Ok(parsed) => Normalized::Parsed(merge_fields(&parsed, fallback)),
        Err(reason) => Normalized::Degraded {
            value: fallback,
            reason,
        },
    }
}

/// Field-by-field merge of the parsed reply over the fallback record.
fn merge_fields(parsed: &Value, fb: InsightRecord) -> InsightRecord {
    InsightRecord {
        salary_ranges: parsed
            .get("salaryRanges")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().map(coerce_salary_range).collect())
            .unwrap_or(fb.salary_ranges),
        growth_rate: parsed
            .get("growthRate")
            .and_then(Value::as_f64)
            .unwrap_or(fb.growth_rate),
        demand_level: non_empty_string(parsed, "demandLevel").unwrap_or(fb.demand_level),
        top_skills: string_array(parsed, "topSkills").unwrap_or(fb.top_skills),
        market_outlook: non_empty_string(parsed, "marketOutlook").unwrap_or(fb.market_outlook),
        key_trends: string_array(parsed, "keyTrends").unwrap_or(fb.key_trends),
        recommended_skills: string_array(parsed, "recommendedSkills")
            .unwrap_or(fb.recommended_skills),
    }
}

/// Per-element coercion: each sub-field falls back on its own.
fn coerce_salary_range(v: &Value) -> SalaryRange {
    SalaryRange {
        role: v
            .get("role")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ROLE)
            .to_string(),
        min: v
            .get("min")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_SALARY_MIN),
        max: v
            .get("max")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_SALARY_MAX),
    }
}

fn non_empty_string(parsed: &Value, key: &str) -> Option<String> {
    parsed
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn string_array(parsed: &Value, key: &str) -> Option<Vec<String>> {
    parsed.get(key).and_then(Value::as_array).map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb() -> InsightRecord {
        fallback_insights("Technology")
    }

    #[test]
    fn test_malformed_json_returns_fallback_exactly() {
        let result = normalize_insights("{bad json", fb());
        assert!(result.is_degraded());
        assert_eq!(*result.value(), fb());
    }

    #[test]
    fn test_prose_returns_fallback() {
        let result = normalize_insights("Here are some thoughts on tech...", fb());
        assert_eq!(result.degrade_reason(), Some(&DegradeReason::NonJson));
        assert_eq!(*result.value(), fb());
    }

    #[test]
    fn test_empty_returns_fallback() {
        let result = normalize_insights("", fb());
        assert_eq!(result.degrade_reason(), Some(&DegradeReason::EmptyReply));
    }

    #[test]
    fn test_missing_field_takes_fallback_others_parsed() {
        // growthRate present and valid; demandLevel missing entirely
        let raw = r#"{"growthRate": 12.5, "topSkills": ["Kubernetes"]}"#;
        let result = normalize_insights(raw, fb());
        let record = result.into_value();
        assert_eq!(record.growth_rate, 12.5);
        assert_eq!(record.top_skills, vec!["Kubernetes".to_string()]);
        assert_eq!(record.demand_level, fb().demand_level);
        assert_eq!(record.market_outlook, fb().market_outlook);
    }

    #[test]
    fn test_wrong_typed_field_takes_fallback() {
        let raw = r#"{"growthRate": "fast", "topSkills": "Rust"}"#;
        let record = normalize_insights(raw, fb()).into_value();
        assert_eq!(record.growth_rate, fb().growth_rate);
        assert_eq!(record.top_skills, fb().top_skills);
    }

    #[test]
    fn test_salary_range_elements_coerced_independently() {
        let raw = r#"{"salaryRanges": [
            {"role": "Staff", "min": 2000000, "max": 4000000},
            {"min": "lots"},
            {}
        ]}"#;
        let record = normalize_insights(raw, fb()).into_value();
        assert_eq!(record.salary_ranges.len(), 3);
        assert_eq!(record.salary_ranges[0].role, "Staff");
        assert_eq!(record.salary_ranges[0].min, 2_000_000.0);
        assert_eq!(record.salary_ranges[1].role, DEFAULT_ROLE);
        assert_eq!(record.salary_ranges[1].min, DEFAULT_SALARY_MIN);
        assert_eq!(record.salary_ranges[2].max, DEFAULT_SALARY_MAX);
    }

    #[test]
    fn test_fenced_equals_unfenced() {
        let bare = r#"{"growthRate": 12}"#;
        let fenced = "```json\n{\"growthRate\": 12}\n```";
        assert_eq!(
            normalize_insights(bare, fb()).into_value(),
            normalize_insights(fenced, fb()).into_value()
        );
    }

    #[test]
    fn test_conformant_reply_is_idempotent() {
        let record = fb();
        let raw = serde_json::to_string(&record).unwrap();
        let result = normalize_insights(&raw, fallback_insights("Something Else"));
        assert!(!result.is_degraded());
        assert_eq!(result.into_value(), record);
    }

    #[test]
    fn test_unknown_extra_fields_discarded() {
        let raw = r#"{"growthRate": 3.0, "hallucinatedField": true}"#;
        let record = normalize_insights(raw, fb()).into_value();
        assert_eq!(record.growth_rate, 3.0);
        // nothing else to assert — InsightRecord has no place for extras
    }
}
