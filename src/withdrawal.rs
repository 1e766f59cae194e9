//! Withdrawal orchestration with failure classification and recovery.
//!
//! The orchestrator wraps a backend's raw [`Funding::withdraw`] with the
//! behavior fund movements need: every failure is classified into exactly one
//! [`FailureKind`], a malformed currency/network identifier gets exactly one
//! fallback resubmission through the override table, ambiguous transport
//! failures are surfaced with an explicit submission-state-unknown marker and
//! never retried, and concurrent duplicates are rejected before anything
//! reaches the backend.
//!
//! Orchestrators are composed per session around a shared override table; no
//! global state is touched.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::resolver::NetworkCodeResolver;
use crate::traits::Funding;
use crate::types::{Transaction, WithdrawParams};

/// Raw parameter key the resolved composite identifier is merged under.
pub const CURRENCY_ID_PARAM: &str = "currency_id";

/// Classification of a failed withdrawal submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The currency/network identifier the backend received was missing or
    /// malformed. The one failure class the fallback retry can fix.
    MalformedIdentifier,
    /// The backend rejected the request for a business reason that retrying
    /// cannot change (unverified address, insufficient balance, amount below
    /// minimum, invalid parameters).
    TerminalBusiness,
    /// The attempt timed out or failed at the transport level. The backend
    /// may or may not have registered the withdrawal; never retried.
    Ambiguous,
    /// Unrecognized failure, surfaced verbatim and never retried.
    Unknown,
}

impl FailureKind {
    /// Classifies an error from a withdrawal submission.
    ///
    /// Context layers are penetrated; classification looks at the root cause.
    pub fn classify(error: &Error) -> Self {
        if error.is_missing_value() {
            return Self::MalformedIdentifier;
        }
        match error.root_cause() {
            Error::Timeout(_) | Error::Network(_) => Self::Ambiguous,
            Error::InvalidCurrency(_) => Self::MalformedIdentifier,
            Error::InsufficientBalance(_) | Error::InvalidRequest(_) => Self::TerminalBusiness,
            Error::Backend(details) => classify_backend_message(&details.message),
            _ => Self::Unknown,
        }
    }

    /// Returns `true` if a failure of this kind leaves the backend-side
    /// submission state unknown.
    pub fn submission_state_unknown(self) -> bool {
        matches!(self, Self::Ambiguous)
    }
}

/// Maps recognized backend rejection messages onto the failure taxonomy.
///
/// Phrases observed on real withdrawal endpoints; anything unrecognized is
/// `Unknown` so it is never retried on a guess.
fn classify_backend_message(message: &str) -> FailureKind {
    let msg = message.to_lowercase();
    if msg.contains("currency not found")
        || msg.contains("invalid currency")
        || msg.contains("coin not support")
        || msg.contains("unknown currency id")
    {
        FailureKind::MalformedIdentifier
    } else if msg.contains("not verified")
        || msg.contains("whitelist")
        || msg.contains("minimum")
        || msg.contains("insufficient")
        || msg.contains("suspended")
    {
        FailureKind::TerminalBusiness
    } else {
        FailureKind::Unknown
    }
}

/// Final outcome status of an orchestrated withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    /// A submission was accepted by the backend.
    Succeeded,
    /// All permitted submissions failed.
    Failed,
}

/// States a withdrawal moves through inside the orchestrator.
///
/// ```text
/// Requested → Submitted → Succeeded
///                       → NeedsRetry → Retried → Succeeded
///                       │                      → Failed
///                       → Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalState {
    /// Accepted by the orchestrator, nothing sent yet.
    Requested,
    /// First submission sent to the backend.
    Submitted,
    /// First submission failed on a malformed identifier; fallback pending.
    NeedsRetry,
    /// Fallback submission sent to the backend.
    Retried,
    /// Terminal: a submission was accepted.
    Succeeded,
    /// Terminal: no further submissions are permitted.
    Failed,
}

/// Details of a failed withdrawal.
#[derive(Debug)]
pub struct WithdrawalFailure {
    /// Classified failure kind.
    pub kind: FailureKind,
    /// `true` when the backend may have registered the withdrawal anyway
    /// (timeout or transport failure after the request left the process).
    pub submission_state_unknown: bool,
    /// The underlying error from the last submission.
    pub source: Error,
}

/// Outcome of an orchestrated withdrawal.
#[derive(Debug)]
pub struct WithdrawalResult {
    /// Final status.
    pub status: WithdrawalStatus,
    /// Number of submissions that reached (or were sent toward) the backend.
    pub attempts: u32,
    /// `true` when the fallback retry is what produced the success.
    pub recovered: bool,
    /// The accepted transaction, on success.
    pub transaction: Option<Transaction>,
    /// Failure details, on failure.
    pub failure: Option<WithdrawalFailure>,
}

impl WithdrawalResult {
    /// Returns `true` if the withdrawal was accepted.
    pub fn succeeded(&self) -> bool {
        self.status == WithdrawalStatus::Succeeded
    }
}

/// Identity of an in-flight withdrawal for duplicate rejection.
///
/// The caller-supplied idempotency key participates when present; otherwise
/// the destination address stands in, so two concurrent submissions to the
/// same address for the same currency collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WithdrawalKey {
    backend: String,
    currency: String,
    key: String,
}

impl WithdrawalKey {
    fn for_params(backend_id: &str, params: &WithdrawParams) -> Self {
        let key = params
            .idempotency_key
            .clone()
            .unwrap_or_else(|| params.address.clone());
        Self {
            backend: backend_id.to_lowercase(),
            currency: params.currency.to_uppercase(),
            key,
        }
    }
}

/// Orchestrator tuning.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Deadline for each individual submission attempt.
    pub attempt_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_secs(30),
        }
    }
}

type InFlightSet = Arc<Mutex<HashSet<WithdrawalKey>>>;

/// Releases the in-flight reservation when the withdrawal finishes, however
/// it finishes.
struct InFlightGuard {
    set: InFlightSet,
    key: WithdrawalKey,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut set = self.set.lock().unwrap_or_else(|p| p.into_inner());
        set.remove(&self.key);
    }
}

/// Drives withdrawals through resolution, submission, classification and the
/// single permitted fallback retry.
///
/// # Example
///
/// ```rust,ignore
/// use unifex::withdrawal::WithdrawalOrchestrator;
/// use unifex::types::WithdrawParams;
/// use rust_decimal_macros::dec;
///
/// let orchestrator = WithdrawalOrchestrator::with_builtin_overrides();
/// let result = orchestrator.withdraw(
///     &backend,
///     WithdrawParams::new("USDT", dec!(100), "TAddress...").network("TRC20"),
/// ).await?;
/// if result.succeeded() {
///     println!("attempts: {}", result.attempts);
/// }
/// ```
pub struct WithdrawalOrchestrator {
    resolver: NetworkCodeResolver,
    config: OrchestratorConfig,
    in_flight: InFlightSet,
}

impl WithdrawalOrchestrator {
    /// Creates an orchestrator with the given resolver and config.
    pub fn new(resolver: NetworkCodeResolver, config: OrchestratorConfig) -> Self {
        Self {
            resolver,
            config,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Creates an orchestrator over the built-in override data and default
    /// config.
    pub fn with_builtin_overrides() -> Self {
        Self::new(
            NetworkCodeResolver::with_builtin_overrides(),
            OrchestratorConfig::default(),
        )
    }

    /// The resolver this orchestrator uses.
    pub fn resolver(&self) -> &NetworkCodeResolver {
        &self.resolver
    }

    /// Submits a withdrawal with classification, duplicate guarding and the
    /// single fallback retry.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for requests that never produce a submission:
    /// [`Error::InvalidCurrency`] and [`Error::InvalidRequest`] for
    /// structurally invalid parameters, [`Error::DuplicateInFlight`] when an
    /// identical withdrawal is already outstanding. Submission failures are
    /// reported inside the `Ok` result's [`WithdrawalFailure`].
    pub async fn withdraw(
        &self,
        backend: &dyn Funding,
        params: WithdrawParams,
    ) -> Result<WithdrawalResult> {
        if params.currency.trim().is_empty() {
            return Err(Error::invalid_currency("currency code is empty"));
        }
        if params.amount <= rust_decimal::Decimal::ZERO {
            return Err(Error::invalid_request(format!(
                "withdrawal amount must be positive, got {}",
                params.amount
            )));
        }
        if params.address.trim().is_empty() {
            return Err(Error::invalid_request("destination address is empty"));
        }

        let _guard = self.reserve(backend.id(), &params)?;

        let identifier = self
            .resolver
            .resolve(backend, &params.currency, params.network.as_deref())?;
        info!(
            backend = backend.id(),
            currency = %params.currency,
            network = params.network.as_deref().unwrap_or(""),
            %identifier,
            "withdrawal requested"
        );

        let mut state = WithdrawalState::Requested;
        let mut attempts = 0u32;
        let mut current = with_identifier(&params, &identifier);

        loop {
            state = match state {
                WithdrawalState::Requested => WithdrawalState::Submitted,
                WithdrawalState::NeedsRetry => WithdrawalState::Retried,
                _ => state,
            };
            attempts += 1;

            let err = match self.submit(backend, current.clone()).await {
                Ok(tx) => {
                    let recovered = state == WithdrawalState::Retried;
                    info!(
                        backend = backend.id(),
                        currency = %params.currency,
                        attempts,
                        recovered,
                        transaction_id = %tx.id,
                        "withdrawal succeeded"
                    );
                    return Ok(WithdrawalResult {
                        status: WithdrawalStatus::Succeeded,
                        attempts,
                        recovered,
                        transaction: Some(tx),
                        failure: None,
                    });
                }
                Err(err) => err,
            };

            let kind = FailureKind::classify(&err);
            debug!(
                backend = backend.id(),
                currency = %params.currency,
                attempts,
                kind = ?kind,
                error = %err,
                "withdrawal submission failed"
            );

            if kind == FailureKind::MalformedIdentifier && state == WithdrawalState::Submitted {
                state = WithdrawalState::NeedsRetry;
                let fallback = self.resolver.resolve_offline(
                    backend.id(),
                    &params.currency,
                    params.network.as_deref(),
                )?;
                warn!(
                    backend = backend.id(),
                    currency = %params.currency,
                    identifier = %fallback,
                    "malformed identifier, retrying once with offline resolution"
                );
                current = with_identifier(&params, &fallback);
                continue;
            }

            let submission_state_unknown = kind.submission_state_unknown();
            error!(
                backend = backend.id(),
                currency = %params.currency,
                attempts,
                kind = ?kind,
                submission_state_unknown,
                error = %err.report(),
                "withdrawal failed"
            );
            return Ok(WithdrawalResult {
                status: WithdrawalStatus::Failed,
                attempts,
                recovered: false,
                transaction: None,
                failure: Some(WithdrawalFailure {
                    kind,
                    submission_state_unknown,
                    source: err,
                }),
            });
        }
    }

    /// Reserves the in-flight slot for this withdrawal, rejecting duplicates.
    fn reserve(&self, backend_id: &str, params: &WithdrawParams) -> Result<InFlightGuard> {
        let key = WithdrawalKey::for_params(backend_id, params);
        let mut set = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        if !set.insert(key.clone()) {
            return Err(Error::duplicate_in_flight(format!(
                "{} withdrawal of {} already in flight",
                key.backend, key.currency
            )));
        }
        Ok(InFlightGuard {
            set: Arc::clone(&self.in_flight),
            key,
        })
    }

    /// One submission, bounded by the attempt timeout.
    async fn submit(&self, backend: &dyn Funding, params: WithdrawParams) -> Result<Transaction> {
        match tokio::time::timeout(self.config.attempt_timeout, backend.withdraw(params)).await {
            Ok(result) => result,
            Err(_) => Err(Error::timeout(format!(
                "withdrawal attempt exceeded {:?}",
                self.config.attempt_timeout
            ))),
        }
    }
}

fn with_identifier(params: &WithdrawParams, identifier: &str) -> WithdrawParams {
    let mut out = params.clone();
    out.params
        .insert(CURRENCY_ID_PARAM.to_string(), identifier.to_string());
    out
}
