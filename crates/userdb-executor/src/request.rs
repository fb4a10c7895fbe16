use std::path::PathBuf;

use userdb_types::{Arguments, Operation, User, FILE_NAME_KEY, ID_KEY, ITEM_KEY, OPERATION_KEY};

use crate::error::{ExecError, ExecResult};

/// A validated operation with everything it needs except the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add { user: User },
    List,
    FindById { id: String },
    Remove { id: String },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Add { .. } => Operation::Add,
            Request::List => Operation::List,
            Request::FindById { .. } => Operation::FindById,
            Request::Remove { .. } => Operation::Remove,
        }
    }
}

/// The store file plus the request to run against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub file_name: PathBuf,
    pub request: Request,
}

fn required<'a>(args: &'a Arguments, key: &str) -> ExecResult<&'a str> {
    match args.get(key) {
        "" => Err(ExecError::missing_argument(key)),
        value => Ok(value),
    }
}

impl Invocation {
    /// Validates the option map. Touches no files, so every
    /// `MissingArgument`, `UnsupportedOperation` and item `Parse` error
    /// surfaces before the store is opened.
    pub fn from_arguments(args: &Arguments) -> ExecResult<Self> {
        let file_name = required(args, FILE_NAME_KEY)?;
        let operation = required(args, OPERATION_KEY)?;
        let operation = Operation::parse(operation)
            .ok_or_else(|| ExecError::unsupported_operation(operation))?;

        let request = match operation {
            Operation::Add => {
                let user: User = serde_json::from_str(required(args, ITEM_KEY)?)?;
                Request::Add { user }
            }
            Operation::List => Request::List,
            Operation::FindById => Request::FindById {
                id: required(args, ID_KEY)?.to_string(),
            },
            Operation::Remove => Request::Remove {
                id: required(args, ID_KEY)?.to_string(),
            },
        };

        Ok(Self {
            file_name: PathBuf::from(file_name),
            request,
        })
    }
}
