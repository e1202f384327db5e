//! The seven generation strategies.
//!
//! Every strategy file exposes one `generate` function taking the RNG by
//! generic reference plus that strategy's inputs, and returns a sealed
//! six-number combination. Pool construction differs per strategy; the
//! draw-and-fill machinery is shared through `helpers` and `pool`.

pub mod ai;
pub mod balanced;
pub mod custom;
pub mod history;
pub mod random;
pub mod recommend;
pub mod statistical;
