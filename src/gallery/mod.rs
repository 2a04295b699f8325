//! Persisted gallery of tree parameter sets
//!
//! The store owns the ordered list; layout turns it into per-cell surfaces
//! and a composed sheet.

/// Grid geometry and the full re-render pass
pub mod layout;
/// Storage backends
pub mod storage;
/// Capacity-bounded gallery store
pub mod store;

pub use layout::{GridLayout, allocate_surfaces, compose_sheet, render_gallery};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::GalleryStore;
