use tracing::{info, warn};
use userdb_store::StoreFile;
use userdb_types::{position_by_id, User};

use super::{save_users, Output};
use crate::error::ExecResult;

pub fn handle_remove(store: &mut StoreFile, id: &str) -> ExecResult<Output> {
    let mut users: Vec<User> = store.load()?;

    let Some(index) = position_by_id(&users, id) else {
        warn!("Item with id {} not found in {}", id, store.path().display());
        return Ok(Output::Message(format!("Item with id {} not found", id)));
    };

    info!("Removing user {} from {}", id, store.path().display());
    users.remove(index);
    save_users(store, &users)
}
