use userdb_store::StoreFile;
use userdb_types::User;

use super::Output;
use crate::error::ExecResult;

pub fn handle_list(store: &mut StoreFile) -> ExecResult<Output> {
    let users: Vec<User> = store.load()?;
    Ok(Output::Json(serde_json::to_vec(&users)?))
}
