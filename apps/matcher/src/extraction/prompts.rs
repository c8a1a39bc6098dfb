// All prompt constants for the enrichment pass.

/// System prompt for skill extraction — enforces JSON-only output.
pub const SKILL_EXTRACT_SYSTEM: &str =
    "You are an expert resume analyst. \
    Extract professional skills and keywords from resume text. \
    You MUST respond with a valid JSON array of strings only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction sent with the (truncated) resume text.
pub const SKILL_EXTRACT_INSTRUCTION: &str = r#"List the professional skills, tools, and domain keywords present in the resume below.

Return a JSON array of short strings, for example:
["Python", "SQL", "Machine Learning", "Stakeholder Management"]

Rules:
- One skill or keyword per entry, 1-3 words each.
- Include technologies, methodologies, and soft skills with clear evidence in the text.
- Do NOT invent skills that are not supported by the resume.
- Return at most 30 entries."#;
