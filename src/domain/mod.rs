//! Domain layer: the Bancontact field state, its reducer, the checkout types it
//! consumes, and the ports through which it talks to the surrounding checkout.

pub mod field;
pub mod form_status;
pub mod line_item;
pub mod payment;
pub mod ports;
pub mod state;
pub mod view;

/// Fixed identifier of the Bancontact payment method.
pub const BANCONTACT_METHOD_ID: &str = "bancontact";
