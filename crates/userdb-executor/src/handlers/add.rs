use tracing::{info, warn};
use userdb_store::StoreFile;
use userdb_types::{position_by_id, User};

use super::{save_users, Output};
use crate::error::ExecResult;

pub fn handle_add(store: &mut StoreFile, user: User) -> ExecResult<Output> {
    let mut users: Vec<User> = store.load()?;

    if position_by_id(&users, &user.id).is_some() {
        warn!("Item with id {} already exists in {}", user.id, store.path().display());
        return Ok(Output::Message(format!(
            "Item with id {} already exists",
            user.id
        )));
    }

    info!("Adding user {} to {}", user.id, store.path().display());
    users.push(user);
    save_users(store, &users)
}
