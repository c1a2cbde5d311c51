//! Per-entity orchestration: resolve references, validate, persist, map.

mod comments;
mod favourites;
mod titles;
mod users;

pub use comments::CommentService;
pub use favourites::FavouriteService;
pub use titles::TitleService;
pub use users::UserService;
