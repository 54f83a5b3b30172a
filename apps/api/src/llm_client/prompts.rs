// Cross-cutting prompt fragments. Feature-specific prompts live next to the
// feature (see `outreach::prompts`).

/// System prompt for calls whose answer is sent to a person verbatim.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a precise writing assistant. \
    Respond with the requested text only. \
    Do NOT use markdown code fences. \
    Do NOT add commentary, headings, or explanations before or after the text.";
