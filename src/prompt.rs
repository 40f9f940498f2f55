use serde_json::Value;

/// Fill the chat prompt with the knowledge base (pretty JSON), the language
/// code and the user's question.
pub fn build_prompt(
    knowledge: &Value,
    language: &str,
    user_question: &str,
) -> Result<String, serde_json::Error> {
    let knowledge_data = serde_json::to_string_pretty(knowledge)?;
    Ok(format!(
        "
You are the chat assistant on a personal portfolio website. Answer questions about the site owner ONLY.
- Use ONLY the KNOWLEDGE BASE below. Never invent facts.
- Reply in the language given under LANGUAGE.
- If the question is off-topic or the knowledge base does not cover it, decline politely.
- Keep replies short and natural.
---
KNOWLEDGE BASE: {knowledge_data}
---
LANGUAGE: {language}
---
USER'S QUESTION: {user_question}
---
YOUR ANSWER:
"
    ))
}
