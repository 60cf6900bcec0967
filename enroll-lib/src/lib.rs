//! Signup form core library
//!
//! Field validation, submit gating, and registration sinks for an
//! email/password signup flow. Screens stay outside this crate: they feed raw
//! input text in, render the returned messages, and choose the sink that
//! receives a successful submission.

pub mod error;
pub mod form;
pub mod sink;
pub mod validate;

mod client;

pub use client::*;
