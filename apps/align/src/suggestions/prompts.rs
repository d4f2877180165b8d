// Prompt for résumé improvement suggestions.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::GROUNDING_INSTRUCTION;

const DEFAULT_FOCUS: &str = "relevant keywords from the job description";
const DEFAULT_KEYWORD_LIST: &str = "general JD requirements";

/// Builds the advisor prompt. With no keywords the prompt falls back to
/// general JD requirements.
pub fn build_prompt(jd_text: &str, resume_text: &str, keywords: &[String]) -> String {
    let (focus, keyword_list) = if keywords.is_empty() {
        (DEFAULT_FOCUS.to_string(), DEFAULT_KEYWORD_LIST.to_string())
    } else {
        let joined = keywords.join(", ");
        (format!("the following specific keywords: {joined}"), joined)
    };

    format!(
        "You are an expert career advisor and résumé optimization specialist.
Your goal is to provide actionable, specific, and constructive suggestions to improve the provided résumé text so it aligns better with the given job description, particularly focusing on incorporating {focus}.

Job Description (JD):
---
{jd}
---

Résumé Text to Improve:
---
{resume}
---

Please provide detailed suggestions for improvement. Consider the following:
1. Identify key skills, experiences, and qualifications from the JD that are missing or underrepresented in the résumé text, focusing on the keywords: {keyword_list}.
2. Suggest how to rephrase sentences or bullet points in the résumé text to naturally integrate these keywords or related concepts from the JD.
3. Recommend adding specific, quantifiable achievements or examples where possible, if relevant to the JD and the candidate's likely experience.
4. Keep a professional tone and correct grammar.
5. {grounding}
6. Structure your output clearly: list a keyword or a résumé section, followed by your specific suggestions for it. Offer 2-3 alternative phrasings if appropriate.

Provide your improvement suggestions below:",
        jd = jd_text.trim(),
        resume = resume_text.trim(),
        grounding = GROUNDING_INSTRUCTION,
    )
}
