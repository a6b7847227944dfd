//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so individual components can
//! depend on small focused models. The app root wraps each model in an
//! `RwSignal` provided via context; the structs themselves stay plain so
//! transitions can be unit tested without a reactive runtime.

pub mod auth;
pub mod toast;
