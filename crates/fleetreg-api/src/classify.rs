// Failure classification.
//
// Decides, for every error the request executor produces, whether the call
// degrades to a synthetic response or surfaces to the caller. The policy is
// deliberately biased toward availability: anything network-shaped falls
// back, and only errors that fit no known taxonomy propagate.

use crate::error::Error;

/// Error-message fragments that identify interference from unrelated
/// injected scripts (browser extensions, tag managers) rather than a fault
/// in the registry service. Inherited from the suite's deployed consoles,
/// where such exceptions were routinely mistaken for outages.
const SCRIPT_MARKERS: &[&str] = &[
    "share-modal",
    "gtag",
    "adsbygoogle",
    "chrome-extension://",
    "moz-extension://",
];

/// Why a call is being served synthetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The executor's latency ceiling elapsed and the call was aborted.
    Timeout,
    /// Connection-level failure: refused, DNS, offline.
    Transport,
    /// The service answered with a non-2xx status.
    HttpStatus(u16),
    /// The error originated from an unrelated injected script.
    ScriptInterference,
}

/// What to do with a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Serve the synthetic response for this endpoint/method pair.
    Fallback(FallbackReason),
    /// Propagate the error to the caller.
    Surface,
}

/// Classify an executor error.
///
/// Timeouts, transport failures, non-2xx statuses, and script interference
/// are all network-shaped and fall back. Deserialization failures and
/// session-storage failures are logic errors and surface — substituting
/// synthetic data for them would hide genuine bugs in this client.
pub fn classify(err: &Error) -> Disposition {
    match err {
        Error::Timeout { .. } => Disposition::Fallback(FallbackReason::Timeout),
        Error::Transport(_) => Disposition::Fallback(FallbackReason::Transport),
        Error::Api { status, .. } => Disposition::Fallback(FallbackReason::HttpStatus(*status)),
        Error::Authentication { .. } => {
            // Auth rejections ride the same HTTP-status path as any other
            // non-2xx; see the documented trade-off on `RegistryClient`.
            Disposition::Fallback(FallbackReason::HttpStatus(401))
        }
        Error::Unclassified(message) if has_script_marker(message) => {
            Disposition::Fallback(FallbackReason::ScriptInterference)
        }
        Error::InvalidUrl(_)
        | Error::Deserialization { .. }
        | Error::SessionStore(_)
        | Error::Unclassified(_) => Disposition::Surface,
    }
}

fn has_script_marker(message: &str) -> bool {
    SCRIPT_MARKERS.iter().any(|m| message.contains(m))
}
