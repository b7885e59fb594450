//! State utilities built on the MVI primitives in [`mvi`].

pub mod mvi;
pub mod promise;
pub mod toggle;
