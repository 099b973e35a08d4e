//! Reverse path builders.
//!
//! Links between views are built here so they use the same vocabulary the
//! route table matches. Ids are percent-encoded; the table decodes them.

use crate::level::Level;

/// Path of the listing of `level`.
///
/// The top tier takes no parent id; every other tier requires one.
pub fn listing_path(level: Level, parent_id: Option<&str>) -> Option<String> {
    match (level.parent(), parent_id) {
        (None, None) => Some(format!("/{}", level.plural())),
        (Some(parent), Some(id)) if !id.is_empty() => Some(format!(
            "/{}/{}/{}",
            parent.as_str(),
            urlencoding::encode(id),
            level.plural()
        )),
        _ => None,
    }
}

/// Path of the listing of the children of entity `id` at `level`.
pub fn children_path(level: Level, id: &str) -> Option<String> {
    listing_path(level.child()?, Some(id))
}

/// Path of the details view for `id` at `level`.
pub fn details_path(level: &str, id: &str) -> Option<String> {
    (!level.is_empty() && !id.is_empty()).then(|| {
        format!(
            "/details/{}/{}",
            urlencoding::encode(level),
            urlencoding::encode(id)
        )
    })
}
