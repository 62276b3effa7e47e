// LLM prompt constants for salary estimation.

pub const SALARY_SCHEMA_HINT: &str =
    r#"{"min":number,"max":number,"expected":number,"currency":"TRY","tactic":string,"answer":string,"notes":string[]}"#;

const SALARY_SYSTEM: &str = "You are a compensation analyst and salary negotiation coach. \
    You propose a realistic range and a tailored negotiation answer.";

pub fn salary_prompt(
    role: &str,
    city: &str,
    years: f64,
    skills: &[String],
    work_mode: &str,
) -> String {
    format!(
        "System: {SALARY_SYSTEM}\n\n\
         User: Compute Turkey market salary for: role={role}, city={city}, years={years}, \
         workMode={work_mode}.\n\
         Skills: {}\n\n\
         Return monthly gross TRY band. Provide negotiation tactic and a ready-to-say answer \
         in Turkish.",
        skills.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_prompt_embeds_inputs() {
        let skills = vec!["React".to_owned(), "AWS".to_owned()];
        let prompt = salary_prompt("Backend Geliştirici", "Ankara", 4.0, &skills, "remote");
        assert!(prompt.contains("Backend Geliştirici"));
        assert!(prompt.contains("Ankara"));
        assert!(prompt.contains("React, AWS"));
        assert!(prompt.contains("workMode=remote"));
    }
}
