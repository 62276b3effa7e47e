// LLM prompt constants for networking plans.

pub const NETWORKING_SCHEMA_HINT: &str =
    r#"{"personas":[{"title":string,"why":string}],"messages":[{"title":string,"text":string}]}"#;

const NETWORKING_SYSTEM: &str = "You are a career networking strategist. \
    You suggest who to contact and draft high-quality cold messages.";

pub fn networking_prompt(company: &str, role: &str, profile: &str) -> String {
    format!(
        "System: {NETWORKING_SYSTEM}\n\n\
         User: Target company: {company}\n\
         Target role: {role}\n\
         Profile: {profile}\n\n\
         Return 3 personas and 2 cold messages in Turkish. Messages must be short, polite \
         and specific."
    )
}
