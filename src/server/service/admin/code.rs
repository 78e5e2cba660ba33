//! One-time admin bootstrap codes.
//!
//! When the database has no admin, startup generates a code and logs a login link carrying
//! it. The first login that presents the code within its lifetime is granted admin. A code
//! is consumed by a successful check and discarded once expired.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use rand::{distr::Alphanumeric, Rng};
use tokio::sync::Mutex;

const CODE_LENGTH: usize = 32;
const CODE_TTL: Duration = Duration::from_secs(60);

struct PendingCode {
    value: String,
    issued_at: Instant,
}

impl PendingCode {
    fn is_live(&self, now: Instant) -> bool {
        now.duration_since(self.issued_at) < CODE_TTL
    }
}

/// Holds at most one pending admin code.
///
/// Cloning shares the same slot, so the copy in `AppState` and the one used at startup see
/// the same code.
#[derive(Clone, Default)]
pub struct AdminCodeService {
    pending: Arc<Mutex<Option<PendingCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh 32-character alphanumeric code, replacing any previous one.
    pub async fn generate(&self) -> String {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect();

        *self.pending.lock().await = Some(PendingCode {
            value: value.clone(),
            issued_at: Instant::now(),
        });

        value
    }

    /// Checks `input` against the pending code.
    ///
    /// # Returns
    /// - `true` - The code matched and was still live; it is now consumed
    /// - `false` - No code, wrong code, or expired code (an expired code is dropped)
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        self.check_at(input, Instant::now()).await
    }

    async fn check_at(&self, input: &str, now: Instant) -> bool {
        let mut pending = self.pending.lock().await;

        match pending.as_ref() {
            Some(code) if !code.is_live(now) => {
                *pending = None;
                false
            }
            Some(code) if code.value == input => {
                *pending = None;
                true
            }
            _ => false,
        }
    }
}
