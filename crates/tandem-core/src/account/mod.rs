//! Local account module.
//!
//! # Module Structure
//!
//! - `model`: the LocalUser record and notification settings
//! - `store`: mock login, current-user lookup and account settings

mod model;
mod store;

pub use model::{LocalUser, NotificationSettings, NotificationUpdate};
pub use store::{AccountStore, DEMO_USER_NAME};
