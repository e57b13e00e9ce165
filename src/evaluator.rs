//! PIN evaluator - rule orchestration and combined evaluation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::pin::Digits;
use crate::rules::RULES;
use crate::strength::calculate_strength;
use crate::types::{PinEvaluation, Verdict};

/// How long [`evaluate_pin_tx`] waits for further input before evaluating.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Validates a PIN against the weakness rules.
///
/// The PIN must be exactly four ASCII digits; numeric PINs must be
/// zero-padded by the caller (`format!("{:04}", n)`). Rules are checked
/// in a fixed order and the first match decides the reason.
///
/// Never fails: malformed input yields an invalid [`Verdict`].
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn validate_pin(pin: &SecretString) -> Verdict {
    let digits = match Digits::parse(pin.expose_secret()) {
        Ok(digits) => digits,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = ?e, "PIN rejected: malformed");
            return Verdict::rejected(e.to_string());
        }
    };

    for (rule_name, rule_fn) in RULES.iter() {
        if let Some(reason) = rule_fn(&digits) {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = *rule_name, "PIN rejected");
            return Verdict::rejected(reason);
        }
    }

    Verdict::accepted()
}

/// Validates and rates a PIN.
///
/// Both results are computed independently: the strength of an invalid
/// PIN is still reported.
pub fn evaluate_pin(pin: &SecretString) -> PinEvaluation {
    PinEvaluation {
        verdict: validate_pin(pin),
        strength: calculate_strength(pin),
    }
}

/// Async version that sends the evaluation via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled meanwhile (e.g. the
/// user typed another digit), nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_pin_tx(
    pin: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PinEvaluation>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("PIN evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_pin(pin);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send PIN evaluation result: {}", _e);
    }
}
