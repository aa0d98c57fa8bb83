//! Outbound HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! provider adapter
//!     → request.rs  (describe the call)
//!     → builder.rs  (validate, encode, construct)
//!     → executor.rs (bind timeout, send, normalize failures)
//!     → transport.rs (shared client, the actual wire)
//! ```

pub mod builder;
pub mod error;
pub mod executor;
pub mod request;
pub mod transport;

pub use error::{OutboundError, OutboundResult};
pub use executor::RequestExecutor;
pub use request::{ApiRequest, HttpMethod};
pub use transport::{HttpTransport, Transport};
