// Insight generation prompt. Replace `{industry}` before sending.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"You are an expert career and labor-market analyst.

Generate structured insights for the industry: "{industry}".

Return ONLY valid JSON (no markdown, no commentary) in this exact shape:

{
  "salaryRanges": [
    { "role": "Junior", "min": 300000, "max": 600000 },
    { "role": "Mid", "min": 600000, "max": 1200000 },
    { "role": "Senior", "min": 1200000, "max": 2500000 }
  ],
  "growthRate":  number (estimated % growth, e.g. 8.5),
  "demandLevel": "Low" | "Medium" | "High" | "Very High",
  "topSkills": ["skill1", "skill2", "skill3"],
  "marketOutlook": "1-3 sentences summary of current market & future outlook",
  "keyTrends": ["short trend 1", "short trend 2", "short trend 3"],
  "recommendedSkills": ["skill1", "skill2", "skill3"]
}"#;

pub fn insight_prompt(industry: &str) -> String {
    format!(
        "{JSON_ONLY_INSTRUCTION}\n\n{}",
        INSIGHT_PROMPT_TEMPLATE.replace("{industry}", industry)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_substituted() {
        let p = insight_prompt("Fintech");
        assert!(p.contains("\"Fintech\""));
        assert!(!p.contains("{industry}"));
    }
}
