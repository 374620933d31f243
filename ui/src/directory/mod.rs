//! The user directory: loading, filtering, sorting, avatars and the page that shows them.

pub mod avatar;
pub mod filter;
pub mod loader;
pub mod sort;
pub mod state;
pub mod user;

mod rows;
mod view;

pub use avatar::{AvatarError, AvatarLimits, AvatarStore, PickedFile};
pub use filter::{filter_by_age, AgeFilter};
pub use loader::load_directory;
pub use sort::{sort_users, SortKey};
pub use state::{DirectoryState, LoadPhase};
pub use user::{User, UserId};
pub use view::DirectoryView;
