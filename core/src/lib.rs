//! Validation and arithmetic core for the calculator API.
//!
//! # Overview
//! Turns raw request data (Content-Type header + body bytes) into a validated
//! pair of integer operands, then computes one of four arithmetic operations
//! over it. Nothing here touches the network or the HTTP framework — the
//! server crate owns routing, response encoding, and logging, keeping the
//! core fully deterministic and testable.
//!
//! # Design
//! - [`parse_operands`] is the single validation entry point; every endpoint
//!   rejects requests through it, so the policy cannot drift per route.
//! - [`Operation::apply`] is a pure function over [`OperandPair`];
//!   divide-by-zero is the only domain failure.
//! - Exactly one of [`OperationResult`] / [`ApiError`] is produced per
//!   request, never both and never neither.
//! - Signatures use plain data (`Option<&str>`, `&[u8]`, `u16` statuses) so
//!   the crate stays off the HTTP framework's types.

pub mod error;
pub mod ops;
pub mod request;
pub mod types;

pub use error::ApiError;
pub use ops::Operation;
pub use request::parse_operands;
pub use types::{OperandPair, OperationResult};
