//! Interview simulation: question generation and answer evaluation.

pub mod handlers;
pub mod prompts;

/// Role assumed when the client sends none.
pub const DEFAULT_ROLE: &str = "Software Engineer";

/// Question served when no AI backend is reachable.
pub fn fallback_question(role: &str) -> String {
    format!(
        "{role} pozisyonu için: React'te 'useEffect' hook'unun kullanım amaçlarını ve \
         dependency array'in önemini açıklayınız."
    )
}

/// Neutral evaluation served when no AI backend is reachable.
pub struct FallbackEvaluation {
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub ideal_answer: String,
}

pub fn fallback_evaluation() -> FallbackEvaluation {
    FallbackEvaluation {
        score: 75,
        strengths: vec![
            "Net ifade".to_owned(),
            "Temel kavramlar doğru".to_owned(),
        ],
        weaknesses: vec!["Daha derin teknik detay verilebilir".to_owned()],
        ideal_answer: "Cevabını tanım, kullanım senaryosu ve kısa bir örnekle yapılandır; \
                       teknik terimleri ilan diliyle eşleştir."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_question_mentions_role() {
        let question = fallback_question("Frontend Developer");
        assert!(question.contains("Frontend Developer"));
        assert!(question.contains("useEffect"));
    }

    #[test]
    fn test_fallback_evaluation_shape() {
        let eval = fallback_evaluation();
        assert_eq!(eval.score, 75);
        assert_eq!(eval.strengths.len(), 2);
        assert_eq!(eval.weaknesses.len(), 1);
        assert!(!eval.ideal_answer.is_empty());
    }
}
