use std::fmt;

/// The four things the executor knows how to do to a store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::List,
        Operation::FindById,
        Operation::Remove,
    ];

    /// Exact, case-sensitive match on the operation name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Operation::Add),
            "list" => Some(Operation::List),
            "findById" => Some(Operation::FindById),
            "remove" => Some(Operation::Remove),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
