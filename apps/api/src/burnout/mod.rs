//! Burnout check-ins: trend averaging over the most recent entries plus an
//! optional AI coach pass. History is client-owned; nothing is persisted.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// Feedback considers at most this many trailing entries.
pub const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinEntry {
    /// dd.mm.yyyy, stamped by the server for new entries.
    pub date: String,
    pub satisfaction: u8,
    pub stress: u8,
    pub growth: u8,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutStatus {
    Good,
    Warn,
    /// Only the AI coach escalates this far.
    Danger,
    Neutral,
}

#[derive(Debug, Clone)]
pub struct TrendFeedback {
    pub text: String,
    pub status: BurnoutStatus,
}

/// Averages the last three entries and applies the threshold rules:
/// high stress with low satisfaction or stalled growth warns, otherwise the
/// trend is considered balanced.
pub fn trend_feedback(entries: &[CheckinEntry]) -> TrendFeedback {
    if entries.is_empty() {
        return TrendFeedback {
            text: "Henüz kayıt yok.".to_owned(),
            status: BurnoutStatus::Neutral,
        };
    }

    let recent = &entries[entries.len().saturating_sub(TREND_WINDOW)..];
    let avg = |pick: fn(&CheckinEntry) -> u8| -> f64 {
        recent.iter().map(|e| f64::from(pick(e))).sum::<f64>() / recent.len() as f64
    };
    let satisfaction = avg(|e| e.satisfaction);
    let stress = avg(|e| e.stress);
    let growth = avg(|e| e.growth);

    let mut text = format!(
        "Son {} kayıt ortalaması: memnuniyet {satisfaction:.1}/10, stres {stress:.1}/10, \
         gelişim {growth:.1}/10.",
        recent.len()
    );

    if stress >= 7.0 && satisfaction <= 5.0 {
        text.push_str(
            " Stres yüksek ve memnuniyet düşük görünüyor: iş yükü/öncelikler için yöneticinle \
             1:1 planla; haftalık net sınırlar koy.",
        );
        return TrendFeedback {
            text,
            status: BurnoutStatus::Warn,
        };
    }

    if growth <= 4.0 {
        text.push_str(
            " Gelişim hızı düşük: haftada 2 saat öğrenme slotu ayır veya yeni sorumluluk \
             talep et.",
        );
        return TrendFeedback {
            text,
            status: BurnoutStatus::Warn,
        };
    }

    text.push_str(
        " Genel trend dengeli. Bu ay bir hedef belirle: 1 teknik konu + 1 \
         iletişim/presentasyon konusu.",
    );
    TrendFeedback {
        text,
        status: BurnoutStatus::Good,
    }
}
