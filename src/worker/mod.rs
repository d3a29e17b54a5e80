//! Background worker for the country catalog and flag preloading.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker state and message processing

pub mod handler;
pub mod messages;

pub use handler::CountryWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
