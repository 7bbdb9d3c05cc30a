//! Practice session domain module.
//!
//! # Module Structure
//!
//! - `model`: Session and NewSession
//! - `seed`: demo sessions used on first start
//! - `store`: the persisted upcoming/past collections

mod model;
pub mod seed;
mod store;

pub use model::{NewSession, Session};
pub use store::SessionStore;
