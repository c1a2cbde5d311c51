pub mod comment;
pub mod favourite_title;
pub mod title;
pub mod user;
