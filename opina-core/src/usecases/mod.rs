mod create_new_comment;
mod error;
mod list_comments;


type Result<T> = std::result::Result<T, Error>;

pub use self::{create_new_comment::*, error::Error, list_comments::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::Error as RepoError, repositories::*};
}
