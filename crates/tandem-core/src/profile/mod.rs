//! Learner profile module.
//!
//! # Module Structure
//!
//! - `model`: Profile, Proficiency and ProfileUpdate
//! - `seed`: defaults shown before the first edit
//! - `store`: load and edit, persisted under the `profile` key

mod model;
pub mod seed;
mod store;

pub use model::{LANGUAGES, Profile, ProfileUpdate, Proficiency};
pub use store::ProfileStore;
