//! Engine core: the action vocabulary, the dispatcher that turns an
//! action plus a snapshot into the next snapshot, numeric policy
//! constants, and the long-lived [`engine::Engine`] owner.

pub mod actions;
pub mod constants;
pub mod engine;
