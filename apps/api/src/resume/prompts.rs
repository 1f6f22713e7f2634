// Resume improvement prompt.
// Replace: {section_type}, {industry}, {current_text}, {experience_level},
//          {skills}, {insight_context}

pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer. Improve the following "{section_type}" for a professional in {industry}.

Current content:
"{current_text}"

User details:
- Industry: {industry}
- Experience Level: {experience_level}
- Skills: {skills}
{insight_context}

Requirements:
1. Use strong action verbs and a confident tone.
2. Focus on achievements and impact, not just responsibilities.
3. Add metrics and results where reasonable (without inventing unrealistic claims).
4. Naturally include relevant technical and industry keywords.
5. Keep it concise and professional.
6. Make it suitable for ATS scanning.
7. Do NOT use bullet points; respond as 1-3 sentences / a single paragraph.

Return ONLY the improved text. No headings, labels, or extra commentary."#;

pub struct ImprovePromptArgs<'a> {
    pub section_type: &'a str,
    pub industry: &'a str,
    pub current_text: &'a str,
    pub experience_level: &'a str,
    pub skills: &'a str,
    /// Optional market-context lines sourced from the stored insight row.
    pub insight_context: &'a str,
}

pub fn improve_prompt(args: &ImprovePromptArgs) -> String {
    IMPROVE_PROMPT_TEMPLATE
        .replace("{section_type}", args.section_type)
        .replace("{industry}", args.industry)
        .replace("{current_text}", args.current_text)
        .replace("{experience_level}", args.experience_level)
        .replace("{skills}", args.skills)
        .replace("{insight_context}", args.insight_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_substituted() {
        let prompt = improve_prompt(&ImprovePromptArgs {
            section_type: "experience bullet",
            industry: "Fintech",
            current_text: "did stuff",
            experience_level: "Mid",
            skills: "Rust",
            insight_context: "- Market demand level: High",
        });
        assert!(prompt.contains("\"experience bullet\""));
        assert!(prompt.contains("\"did stuff\""));
        assert!(prompt.contains("Market demand level"));
        assert!(!prompt.contains("{industry}"));
    }
}
