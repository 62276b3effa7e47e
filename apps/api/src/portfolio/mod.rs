//! Portfolio review: fetches a GitHub profile page and its profile README,
//! then asks the AI backend for a rubric-based assessment. This is the one
//! analysis with no deterministic fallback — without a configured backend
//! the endpoint reports the AI as unavailable.

pub mod handlers;
pub mod prompts;

use reqwest::Url;
use tracing::debug;

use crate::errors::AppError;

/// Browser-like agent; GitHub serves profile pages to it without fuss.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// First path segment of a GitHub profile URL.
pub fn extract_username(github_url: &str) -> Option<String> {
    let url = Url::parse(github_url).ok()?;
    url.path_segments()?
        .find(|segment| !segment.is_empty())
        .map(str::to_owned)
}

/// Fetches the raw profile page HTML.
pub async fn fetch_profile_html(
    http: &reqwest::Client,
    github_url: &str,
) -> Result<String, AppError> {
    let response = http
        .get(github_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("GitHub request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "GitHub profile not found or private ({})",
            response.status().as_u16()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::Upstream(format!("GitHub response read failed: {e}")))
}

/// Tries the raw profile README (`<user>/<user>/README.md`) on the main and
/// master branches. Absence is not an error.
pub async fn fetch_profile_readme(http: &reqwest::Client, username: &str) -> Option<String> {
    for branch in ["main", "master"] {
        let url = format!(
            "https://raw.githubusercontent.com/{username}/{username}/{branch}/README.md"
        );
        match http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                if let Ok(text) = response.text().await {
                    debug!("profile README found on branch {branch} ({} bytes)", text.len());
                    return Some(text);
                }
            }
            Ok(_) => continue,
            Err(e) => {
                debug!("profile README fetch failed on branch {branch}: {e}");
            }
        }
    }
    None
}

/// Char-boundary-safe prefix truncation for prompt budgets.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_username() {
        assert_eq!(
            extract_username("https://github.com/octocat"),
            Some("octocat".to_owned())
        );
        assert_eq!(
            extract_username("https://github.com/octocat/repo"),
            Some("octocat".to_owned())
        );
        assert_eq!(
            extract_username("https://github.com/"),
            None
        );
        assert_eq!(extract_username("not a url"), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        // Never splits a multibyte char.
        assert_eq!(truncate_chars("ığüşöç", 3), "ığü");
    }
}
