use tracing::debug;
use userdb_store::StoreFile;
use userdb_types::{position_by_id, User};

use super::Output;
use crate::error::ExecResult;

/// No match is not an error: nothing gets written.
pub fn handle_find_by_id(store: &mut StoreFile, id: &str) -> ExecResult<Output> {
    let users: Vec<User> = store.load()?;

    match position_by_id(&users, id) {
        Some(index) => Ok(Output::Json(serde_json::to_vec(&users[index])?)),
        None => {
            debug!("No user with id {} in {}", id, store.path().display());
            Ok(Output::Nothing)
        }
    }
}
