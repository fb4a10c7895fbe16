use std::io::Write;

use tracing::debug;
use userdb_store::StoreFile;
use userdb_types::User;

use crate::error::ExecResult;
use crate::request::Request;

mod add;
mod find;
mod list;
mod remove;

pub use add::handle_add;
pub use find::handle_find_by_id;
pub use list::handle_list;
pub use remove::handle_remove;

/// What a handler wants written to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Compact JSON, either the whole collection or a single record.
    Json(Vec<u8>),
    /// A plain-text sentence for a soft failure.
    Message(String),
    Nothing,
}

impl Output {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Json(data) => data,
            Output::Message(message) => message.as_bytes(),
            Output::Nothing => &[],
        }
    }

    /// One write for the whole output, none at all for `Nothing`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> ExecResult<()> {
        let data = self.as_bytes();
        if data.is_empty() {
            return Ok(());
        }
        out.write_all(data)?;
        out.flush()?;
        Ok(())
    }
}

pub fn handle_request(store: &mut StoreFile, request: Request) -> ExecResult<Output> {
    debug!("Dispatching {} on {}", request.operation(), store.path().display());
    match request {
        Request::Add { user } => handle_add(store, user),
        Request::List => handle_list(store),
        Request::FindById { id } => handle_find_by_id(store, &id),
        Request::Remove { id } => handle_remove(store, &id),
    }
}

/// Rewrites the store with `users` and echoes the same bytes.
fn save_users(store: &mut StoreFile, users: &[User]) -> ExecResult<Output> {
    let data = serde_json::to_vec(users)?;
    store.replace(&data)?;
    Ok(Output::Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_writes_nothing() {
        let mut out = Vec::new();
        Output::Nothing.write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_message_has_no_trailing_newline() {
        let mut out = Vec::new();
        Output::Message("Item with id 1 not found".to_string())
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, b"Item with id 1 not found");
    }
}
