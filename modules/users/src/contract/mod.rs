pub mod error;
pub mod model;

pub use error::UsersError;
pub use model::{NewUser, User, UserPatch};
