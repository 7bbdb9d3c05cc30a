//! Messaging domain module.
//!
//! # Module Structure
//!
//! - `model`: threads, messages and participants
//! - `seed`: demo conversations used on first start
//! - `store`: the persisted thread map and active conversation

mod model;
pub mod seed;
mod store;

pub use model::{ConversationSummary, ME, Message, Participant, PresenceStatus, Thread};
pub use store::MessageStore;
