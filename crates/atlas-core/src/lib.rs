//! Admin-Atlas Core Library
//!
//! Platform-independent routing for the admin-atlas client:
//! - [`Level`]: the administrative tiers being browsed
//! - [`PathPattern`]: URL shapes with static and `:named` segments
//! - [`RouteTable`]: the ordered, validated route table and its resolver
//! - [`paths`]: reverse path builders for links between views

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod level;
pub mod paths;
pub mod pattern;
pub mod table;
pub mod view;

pub use level::{Level, LevelParseError};
pub use pattern::{Params, PathPattern, PatternError, Segment};
pub use table::{MAX_REDIRECTS, Resolution, ResolveError, RouteEntry, RouteTable, TableError, Target};
pub use view::{ViewKind, ViewRequest};
