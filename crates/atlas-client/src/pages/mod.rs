//! Page components.

mod details;
mod listing;
mod not_found;

pub use details::DetailsPage;
pub use listing::ListingPage;
pub use not_found::NotFoundPage;
