//! UI Components for the admin-atlas client.

mod breadcrumb;
mod entity_links;
mod entity_lookup;
mod header;

pub use breadcrumb::Breadcrumb;
pub use entity_links::EntityLinks;
pub use entity_lookup::EntityLookup;
pub use header::AppHeader;
