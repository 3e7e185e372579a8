//! Application layer: the per-session store, the validation gate, and the
//! Bancontact payment method that ties them to the checkout's ports.
//!
//! Everything here runs on the caller's task. The only await point is the
//! hand-off to the transaction submitter.

pub mod bancontact;
pub mod registry;
pub mod store;
pub mod validation;
