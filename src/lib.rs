//! Deterministic scoring core for workplace ergonomics assessments.
//!
//! The crate turns a structured assessment (workspace geometry, posture
//! angles, movement habits, reported symptoms) and a user profile into a
//! 0–100 risk score, a discrete risk level, a ranked list of risk factors,
//! priority areas, trend summaries across assessments, and a deterministic
//! recommendation set. Storage, transport, and any external text generator
//! are collaborators owned by the caller; every operation here is a pure
//! function over the inputs it is handed.

pub mod assessment;
