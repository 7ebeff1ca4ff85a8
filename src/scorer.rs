//! Strength scorer - runs the scoring sections and builds the report.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::level::StrengthLevel;
use crate::sections::{
    PasswordProfile, SectionResult, character_variety_section, entropy_section, length_section,
    uniqueness_section,
};

const MAX_SCORE: f64 = 100.0;

/// Delay before an async evaluation runs, so rapid edits collapse into one.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Score, level and suggestions for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    fn empty() -> Self {
        Self {
            score: 0,
            level: StrengthLevel::Weak,
            feedback: Vec::new(),
        }
    }

    /// Display label of the level.
    pub fn label(&self) -> &'static str {
        self.level.label()
    }
}

/// Scores a password's strength.
///
/// Total over all inputs: the empty password yields score 0, level weak
/// and no feedback.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn score_strength(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthReport::empty();
    }

    let profile = PasswordProfile::analyze(pwd);

    // Order fixes the order of feedback messages
    let sections: [(&str, fn(&PasswordProfile) -> SectionResult); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("uniqueness", uniqueness_section),
        ("entropy", entropy_section),
    ];

    let mut total = 0.0;
    let mut feedback = Vec::new();

    for (section_name, section_fn) in sections {
        let result = section_fn(&profile);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = section_name, points = result.points, "scoring section");

        total += result.points;
        feedback.extend(result.feedback.into_iter().map(String::from));
    }

    let score = total.clamp(0.0, MAX_SCORE).round() as u8;

    StrengthReport {
        score,
        level: StrengthLevel::from_score(score),
        feedback,
    }
}

/// Debounced scoring that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn score_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("strength scoring is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("strength scoring cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = score_strength(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_strength_tx_sends_report() {
        let (tx, mut rx) = mpsc::channel(1);
        let pwd = secret("TestPass123!");

        score_strength_tx(&pwd, CancellationToken::new(), tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report, score_strength(&pwd));
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_strength_tx_cancelled_before_start() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        score_strength_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_strength_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();
        let pwd = secret("TestPass123!");

        tokio::join!(score_strength_tx(&pwd, token, tx), async move {
            tokio::time::sleep(DEBOUNCE / 2).await;
            canceller.cancel();
        });

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_strength_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic when the receiver is gone
        score_strength_tx(&secret("abc"), CancellationToken::new(), tx).await;
    }
}
