// LLM prompt constants for portfolio review.

use super::truncate_chars;

pub const REVIEW_SCHEMA_HINT: &str =
    r#"{"score":number,"strengths":[string],"weaknesses":[string],"suggestions":[string]}"#;

const HTML_CHAR_BUDGET: usize = 150_000;
const README_CHAR_BUDGET: usize = 20_000;

/// Builds the rubric prompt over the fetched profile HTML and README.
pub fn review_prompt(html_content: &str, readme_content: Option<&str>) -> String {
    let html = truncate_chars(html_content, HTML_CHAR_BUDGET);
    let readme = readme_content
        .map(|r| truncate_chars(r, README_CHAR_BUDGET))
        .unwrap_or("Not found or empty.");

    format!(
        "Analyze this raw HTML content of a GitHub profile.\n\n\
         CRITICAL INSTRUCTIONS:\n\
         1. DEFINITION OF 'BIO': for this analysis, \"Bio\" = Sidebar Biography + Profile \
         README (the main content area usually under \"Pinned\").\n\
         2. Look Deeper: you MUST search the entire HTML for \"Programming Languages\", \
         \"Tech Stack\", \"Tools\", or icon/image alts like \"Python\", \"React\", \"Java\".\n\
         3. Specific Rule: if you see a section titled \"Programming Languages\" or similar in \
         the HTML (even if deep down), YOU MUST NOT SAY technical skills are missing.\n\
         4. Evidence-Based Scoring: score based on the rubric below. Tech stack in README \
         counts as tech stack in Bio.\n\
         5. No Hallucinations: if you don't see a License badge, say it's missing.\n\n\
         EVALUATION RUBRIC (Total 100 + BONUS):\n\n\
         1. CONTRIBUTION ACTIVITY (30 Points):\n\
         - 1000+ contributions: 30 pts.\n\
         - 500-999 contributions: 20-29 pts.\n\
         - <100 contributions: 0-9 pts.\n\n\
         2. CORE QUALITY (50 Points):\n\
         - README, Code Quality, Structure, Docs, License, Tests, CI/CD, Professionalism. \
         (5 pts each)\n\n\
         3. VOLUME & DIVERSITY BOOSTERS (20 Points):\n\
         - High Repo Count: >15 public repos (+5 pts).\n\
         - Tech Stack Diversity: knows 5+ distinct languages/frameworks (+5 pts).\n\
         - Achievements: has GitHub Achievements badges (+5 pts).\n\
         - Tooling: uses specific tools like Docker, K8s, Terraform (+5 pts).\n\n\
         SCORING RULE: if the user has high activity (1000+ contribs) AND diverse stack AND \
         achievements, the score should be VERY HIGH (90-100).\n\n\
         ELITE RULE: if the user has >50 repositories OR >1000 followers OR >2000 \
         contributions, the score MUST be between 95 and 100; ignore minor missing details \
         and highlight the profile as industry-leading in strengths.\n\n\
         HTML Content (truncated):\n{html}\n\n\
         ---\n\
         DETECTED PROFILE README CONTENT (MARKDOWN):\n{readme}\n\
         ---\n\n\
         CRITICAL: if the section above contains the README, USE IT to determine tech stack, \
         documentation, and overview. Do not say it's missing if it's right there!\n\n\
         Respond in Turkish."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_embeds_html_and_readme() {
        let prompt = review_prompt("<html>profile</html>", Some("# Hi, tech stack: Rust"));
        assert!(prompt.contains("<html>profile</html>"));
        assert!(prompt.contains("tech stack: Rust"));
    }

    #[test]
    fn test_review_prompt_marks_missing_readme() {
        let prompt = review_prompt("<html></html>", None);
        assert!(prompt.contains("Not found or empty."));
    }
}
