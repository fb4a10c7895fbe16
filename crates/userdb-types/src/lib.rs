mod arguments;
mod operation;
mod user;

pub use arguments::*;
pub use operation::*;
pub use user::*;
