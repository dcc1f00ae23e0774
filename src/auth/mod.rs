pub mod directory;
pub mod login;
pub mod password;
pub mod seed;

pub use directory::ModeratorDirectory;
pub use login::{LoginError, authenticate};
