//! Call wrapping for promptgate.
//!
//! [`wrap`] runs a caller-supplied unit of work (the actual model call),
//! reports progress through a [`ProgressSink`], and returns the result
//! inside a [`CallEnvelope`] carrying timing and technique metadata.
//!
//! The wrapper deliberately owns nothing else: no retry, no backoff, no
//! timeout, no interpretation of provider error codes. Callers that want
//! any of those build them into the unit-of-work closure.

mod envelope;
mod sink;
mod wrap;

pub use envelope::{CallEnvelope, VerificationBadge, ENVELOPE_CONFIDENCE};
pub use sink::{ProgressSink, TracingSink};
pub use wrap::wrap;
