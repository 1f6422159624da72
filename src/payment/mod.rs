//! Payment widget boundary
//!
//! The storefront never processes payments itself. It hands an amount to an
//! external widget and is told, asynchronously, whether the buyer approved.

pub mod sandbox;
pub mod widget;

pub use sandbox::{SandboxDecision, SandboxWidget};
pub use widget::*;
