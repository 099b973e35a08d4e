//! View bindings and the requests handed to views.

use crate::level::Level;
use crate::paths;

/// Which view a route entry activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Listing view over one tier. The tier is bound into the route entry.
    Listing(Level),
    /// Details view; tier and id come from the path.
    Details,
}

/// A resolved view together with the inputs it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    /// List the entities of `level`. `id` is the parent entity whose children
    /// are listed; absent for the top tier.
    Listing { level: Level, id: Option<String> },
    /// Show one entity. `level` is passed through as captured.
    Details { level: String, id: String },
}

impl ViewRequest {
    /// The path that resolves to this request, if it describes a valid one.
    pub fn path(&self) -> Option<String> {
        match self {
            ViewRequest::Listing { level, id } => paths::listing_path(*level, id.as_deref()),
            ViewRequest::Details { level, id } => paths::details_path(level, id),
        }
    }
}
