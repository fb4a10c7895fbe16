//! Runs one operation (`add`, `list`, `findById`, `remove`) against a
//! JSON-array store file and writes the result to an output sink.

mod error;
mod executor;
mod handlers;
mod request;

pub use error::{ExecError, ExecResult};
pub use executor::{perform, Executor};
pub use handlers::Output;
pub use request::{Invocation, Request};
