//! Random multigraph generators based on preferential attachment.
//!
//! Generation runs in two phases. A stub graph is grown one half-edge at a time
//! ([`stub_builder`]), drawing each attachment from the weights of [`probability`] through
//! [`sampler`]. The finished stub graph is then folded into final vertices ([`fold`]), in
//! parallel over aligned batches ([`generator`]).

pub mod attractiveness;
pub mod cleanup;
pub mod fold;
pub mod generator;
pub mod ledger;
pub mod probability;
pub mod sampler;
pub mod stub_builder;
