//! Actix middleware applied to every route.

pub mod trace;

pub use trace::Trace;
