//! Runtime-independent scheduling primitives.
//!
//! The plugin runtime only offers one-shot timeouts. These two types hold the
//! scheduling decisions so they can be driven (and tested) with explicit
//! [`std::time::Instant`] values:
//!
//! - [`Debouncer`]: cancel-and-reschedule timer for trailing-edge debounce
//! - [`IdleQueue`]: coalescing queue of low-priority jobs run after rendering
//!
//! The caller arms real timers with the durations these types return and
//! polls them when a timer fires.

pub mod debounce;
pub mod idle;

pub use debounce::Debouncer;
pub use idle::IdleQueue;
