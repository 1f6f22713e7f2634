// Cross-cutting prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Instruction prefixed to every schema-bound prompt. Gemini has no separate
/// system channel, so this rides at the top of the user prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON. \
    Do NOT use markdown code fences. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";
