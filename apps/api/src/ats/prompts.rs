// LLM prompt constants for ATS scoring.

/// Schema hint forwarded to the completion backend alongside the prompt.
pub const ATS_SCHEMA_HINT: &str = r#"{"total":number,"breakdown":{"keyword_score":number,"format_score":number,"seniority_fit":number,"domain_fit":number},"missing_keywords":string[],"edit_suggestions":string[],"skill_gap":{"summary":string,"courses":[{"title":string,"why":string,"impact_pct":number}],"chance_increase_pct":number}}"#;

const ATS_SYSTEM: &str = "You are an expert ATS and recruiting analyst. \
    You score CV-to-job match rigorously and give actionable edits.";

/// Builds the full scoring prompt. Analysis output is requested in Turkish
/// to match the rest of the product surface.
pub fn ats_prompt(cv_text: &str, jd_text: &str, target_role: &str, target_city: &str) -> String {
    format!(
        "System: {ATS_SYSTEM}\n\n\
         User: Analyze CV vs Job Description. Output in Turkish.\n\n\
         Target role: {target_role}\n\
         City: {target_city}\n\n\
         CV:\n{cv_text}\n\n\
         Job Description:\n{jd_text}\n\n\
         Rules:\n\
         - total must be 0-100\n\
         - missing_keywords: list the most important missing hard/soft skills and tools, max 18\n\
         - edit_suggestions: max 5, concrete\n\
         - courses: exactly 2 items; impact_pct each 5-35\n\
         - chance_increase_pct: 10-60 (your estimate)"
    )
}
