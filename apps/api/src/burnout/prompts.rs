// LLM prompt constants for the burnout coach.

use super::CheckinEntry;

pub const BURNOUT_SCHEMA_HINT: &str = r#"{"text":string,"status":"good"|"warn"|"danger"}"#;

pub fn coach_prompt(entry: &CheckinEntry, history: &[CheckinEntry]) -> String {
    let history_json = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_owned());
    format!(
        "You are a compassionate Career Coach and Burnout Specialist.\n\
         Analyze the user's latest check-in:\n\
         - Job Satisfaction: {}/10\n\
         - Stress Level: {}/10\n\
         - Growth/Learning: {}/10\n\
         - User Note: \"{}\"\n\
         - Recent History (last 3 entries): {history_json}\n\n\
         Provide a helpful, empathetic, and actionable feedback in Turkish.\n\n\
         CRITICAL INSTRUCTIONS:\n\
         1. Be Detailed: write a substantial paragraph (4-6 sentences) analyzing their situation.\n\
         2. Be Specific: reference their exact scores and note.\n\
         3. Actionable: give concrete advice (e.g., take a walk, talk to your manager, focus \
         on one task).\n\n\
         Determine a status: 'good' (healthy), 'warn' (caution), 'danger' (high risk).",
        entry.satisfaction, entry.stress, entry.growth, entry.note
    )
}
