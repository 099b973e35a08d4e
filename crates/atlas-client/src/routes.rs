//! Application routes.
//!
//! The variants mirror the entries of [`atlas_core::RouteTable::standard`];
//! views are selected by resolving the route's path against that table.

use atlas_core::{Level, ViewRequest, paths};
use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    /// Entry point; redirects to the division listing.
    #[at("/")]
    Root,
    #[at("/divisions")]
    Divisions,
    #[at("/division/:id/districts")]
    Districts { id: String },
    #[at("/district/:id/upazilas")]
    Upazilas { id: String },
    #[at("/upazila/:id/unions")]
    Unions { id: String },
    #[at("/details/:level/:id")]
    Details { level: String, id: String },
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route that displays `view`, if `view` describes a reachable path.
    pub fn for_view(view: &ViewRequest) -> Option<Self> {
        Self::for_path(&view.path()?)
    }

    /// Listing of the children of entity `id` at `level`.
    pub fn children(level: Level, id: &str) -> Option<Self> {
        Self::for_path(&paths::children_path(level, id)?)
    }

    pub fn details(level: Level, id: &str) -> Option<Self> {
        Self::for_path(&paths::details_path(level.as_str(), id)?)
    }

    fn for_path(path: &str) -> Option<Self> {
        Self::recognize(path).filter(|route| *route != Route::NotFound)
    }
}
