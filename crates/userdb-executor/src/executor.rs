use std::io::Write;

use tracing::debug;
use userdb_store::{StoreFile, WriteMode};
use userdb_types::Arguments;

use crate::error::ExecResult;
use crate::handlers::handle_request;
use crate::request::Invocation;

#[derive(Debug, Clone, Copy, Default)]
pub struct Executor {
    write_mode: WriteMode,
}

impl Executor {
    pub fn new(write_mode: WriteMode) -> Self {
        Self { write_mode }
    }

    /// Validates `args`, opens (or creates) the store file, runs the
    /// requested operation and writes its output to `out`.
    ///
    /// The store file is closed on every return path.
    pub fn perform<W: Write + ?Sized>(&self, args: &Arguments, out: &mut W) -> ExecResult<()> {
        let invocation = Invocation::from_arguments(args)?;
        debug!(
            "Performing {} on {}",
            invocation.request.operation(),
            invocation.file_name.display()
        );

        let mut store = StoreFile::open(&invocation.file_name, self.write_mode)?;
        let output = handle_request(&mut store, invocation.request)?;
        output.write_to(out)
    }
}

/// [`Executor::perform`] with in-place writes.
pub fn perform<W: Write + ?Sized>(args: &Arguments, out: &mut W) -> ExecResult<()> {
    Executor::default().perform(args, out)
}
