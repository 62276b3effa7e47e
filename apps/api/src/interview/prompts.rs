// LLM prompt constants for the interview simulator.

pub const ASK_SCHEMA_HINT: &str = r#"{"question":string}"#;

pub const EVALUATE_SCHEMA_HINT: &str =
    r#"{"score":number,"strengths":[string],"weaknesses":[string],"ideal_answer":string}"#;

pub fn ask_prompt(role: &str) -> String {
    format!(
        "You are a technical interviewer. Generate a challenging but fair interview question \
         for the role: \"{role}\". The question should be conceptual or scenario-based. \
         IMPORTANT: The generated question MUST BE IN TURKISH LANGUAGE."
    )
}

pub fn evaluate_prompt(role: &str, question: &str, answer: &str) -> String {
    format!(
        "Role: {role}\n\
         Question: {question}\n\
         Candidate Answer: {answer}\n\n\
         Evaluate the answer. Give a score (0-100), list strengths and weaknesses, and provide \
         an ideal concise answer. Output Language: Turkish."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_prompt_embeds_role() {
        let prompt = ask_prompt("DevOps Mühendisi");
        assert!(prompt.contains("DevOps Mühendisi"));
        assert!(prompt.contains("TURKISH"));
    }

    #[test]
    fn test_evaluate_prompt_embeds_exchange() {
        let prompt = evaluate_prompt("Backend", "Soru?", "Cevap.");
        assert!(prompt.contains("Soru?"));
        assert!(prompt.contains("Cevap."));
    }
}
