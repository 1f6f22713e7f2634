// Interview module prompts. Replace `{industry}` / `{mistakes}` before sending.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Create 10 multiple-choice interview questions for the industry:
"{industry}"

Return ONLY valid JSON (no markdown, no extra commentary):
{
  "questions": [
    {
      "question": "string",
      "options": ["A", "B", "C", "D"],
      "correctAnswer": "string",
      "explanation": "string"
    }
  ]
}"#;

pub const IMPROVEMENT_TIP_PROMPT_TEMPLATE: &str = r#"A user made mistakes on these interview topics:
{mistakes}
Provide a short encouraging improvement tip (max 2 sentences)."#;

pub fn quiz_prompt(industry: &str) -> String {
    format!(
        "{JSON_ONLY_INSTRUCTION}\n\n{}",
        QUIZ_PROMPT_TEMPLATE.replace("{industry}", industry)
    )
}

pub fn improvement_tip_prompt(mistakes: &str) -> String {
    IMPROVEMENT_TIP_PROMPT_TEMPLATE.replace("{mistakes}", mistakes)
}
