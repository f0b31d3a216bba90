pub mod fetch_style;
pub mod new_user;
pub mod user_record;

pub use fetch_style::FetchStyle;
pub use new_user::{FormError, NewUser};
pub use user_record::{Address, UserRecord};
