//! Beverage composition and order notification.
//!
//! A beverage is built by wrapping a base item ([`Americano`] or a custom
//! [`Brew`]) in zero or more [`Topping`] decorators, each adding a fixed
//! cost delta and a description suffix. A [`Maker`] broadcasts the
//! completed beverage to its registered observers (typically
//! [`Customer`]s) in registration order, with a [`Logger`] recording both
//! the completion and each delivery.
//!
//! The logger is an injected dependency owned at the composition root;
//! [`Logger::global()`] provides the single process-wide instance for
//! callers that do not inject one.

pub mod beverage;
pub mod customer;
pub mod error;
pub mod logger;
pub mod maker;

pub use beverage::{Americano, Beverage, Brew, Topping, MAX_CHAIN_DEPTH};
pub use customer::Customer;
pub use error::OrderError;
pub use logger::{Logger, MemorySink, OutputSink, StdoutSink};
pub use maker::{Maker, Observer};
