pub mod note;
pub mod user;

pub use note::Note;
pub use user::{Session, User};
