//! Internal Access Module
//!
//! Crate-private seam between the public facade layer and the private
//! implementation layer. Nothing here is part of the public API.

mod bridge;
pub(crate) mod diagnostics;

pub(crate) use bridge::CacheBridge;
