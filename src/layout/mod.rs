//! Board layout - packing played groups into screen-width rows.
//!
//! # Module Structure
//!
//! - `layout_params`: LayoutParams - tile cell width and group padding
//! - `row`: Row - one packed row of groups
//! - `packer`: RowPacker trait and the first-fit implementation
//! - `cache`: ContentKey structural hashing and the LRU ContentCache
//! - `service`: BoardLayoutService - memoized `rows(board)`

pub mod cache;
pub mod layout_params;
pub mod packer;
pub mod row;
pub mod service;

pub use cache::{ContentCache, ContentKey, DEFAULT_CACHE_CAPACITY};
pub use layout_params::LayoutParams;
pub use packer::{FirstFitPacker, RowPacker};
pub use row::Row;
pub use service::{BoardLayoutService, Rows};
