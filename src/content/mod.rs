// SPDX-License-Identifier: MPL-2.0
//! Site content: typed section records, the remote key-value content store
//! boundary, and the client-side sync state that binds the two together.

pub mod section;
pub mod store;
pub mod sync;

pub use section::{
    AboutContent, BusinessHours, ContactContent, HeroContent, SectionContent, SectionKey,
    ServiceItem, ServicesContent, Stat,
};
pub use store::{ContentError, ContentStore, HttpContentStore, MemoryStore};
pub use sync::{SaveOutcome, SyncState};
