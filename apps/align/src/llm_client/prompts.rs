// Shared prompt fragments. The suggestion prompt itself is built in
// `suggestions`; this file holds the cross-cutting system instructions.

/// System prompt for résumé improvement advice.
pub const ADVISOR_SYSTEM: &str = "You are a helpful career advisor. \
    You give concrete, actionable advice for tailoring a résumé to a specific job. \
    Respond in plain text, not JSON.";

/// Appended to every suggestion prompt.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Do not invent experience or skills. \
    Only suggest how to better present existing experience or highlight relevant skills \
    the résumé already supports.";
