//! Networking plans: who to contact at a target company and what to write.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub title: String,
    pub why: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColdMessage {
    pub title: String,
    pub text: String,
}

/// Deterministic plan used when no AI backend is available: three standard
/// personas, two templated Turkish cold messages and a short action list.
pub fn build_local_plan(
    company: &str,
    role: &str,
) -> (Vec<Persona>, Vec<ColdMessage>, Vec<String>) {
    let personas = vec![
        Persona {
            title: "Senior Engineering Manager".to_owned(),
            why: format!("{company} tarafında işe alım kararını veren kişi."),
        },
        Persona {
            title: "Lead Developer".to_owned(),
            why: "Seni ekibe içeriden referans edebilir.".to_owned(),
        },
        Persona {
            title: "Talent Acquisition Specialist".to_owned(),
            why: "İlk eleme sürecini yönetir.".to_owned(),
        },
    ];

    let messages = vec![
        ColdMessage {
            title: "Doğrudan yaklaşım".to_owned(),
            text: format!(
                "Merhaba, {company} ekibinin çalışmalarını bir süredir takip ediyorum. Ben de \
                 benzer teknolojilerle çalışıyorum ve {role} pozisyonuyla ilgileniyorum. Uygun \
                 olursanız kısa bir görüşmede deneyimlerinizi dinlemek isterim."
            ),
        },
        ColdMessage {
            title: "Tavsiye isteme".to_owned(),
            text: format!(
                "Selam, {role} alanındaki kariyer yolculuğunuz bana ilham veriyor. Müsait bir \
                 zamanınızda kariyer tavsiyelerinizi dinlemeyi çok isterim."
            ),
        },
    ];

    let steps = vec![
        format!("LinkedIn'den {company} şirketinde çalışan {role} pozisyonundaki kişileri bul."),
        "Ortak nokta (okul, eski şirket) bulmaya çalış.".to_owned(),
        format!(
            "Kısa ve net bir mesaj at: \"Merhaba, {role} pozisyonuyla ilgileniyorum, \
             deneyimlerinizden öğrenmek isterim.\""
        ),
    ];

    (personas, messages, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_plan_shape() {
        let (personas, messages, steps) = build_local_plan("Acme", "Backend Developer");
        assert_eq!(personas.len(), 3);
        assert_eq!(messages.len(), 2);
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_local_plan_templates_company_and_role() {
        let (personas, messages, steps) = build_local_plan("Acme", "Backend Developer");
        assert!(personas[0].why.contains("Acme"));
        assert!(messages[0].text.contains("Acme"));
        assert!(messages[0].text.contains("Backend Developer"));
        assert!(steps[0].contains("Acme"));
        assert!(steps[2].contains("Backend Developer"));
    }
}
