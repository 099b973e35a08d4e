//! The route table.
//!
//! Entries are matched in declaration order and the first match wins.
//! [`RouteTable::new`] rejects tables where that order would matter: no
//! concrete path may match two entries. Redirects must land on a view
//! within [`MAX_REDIRECTS`] hops.

use std::collections::HashSet;

use crate::level::Level;
use crate::pattern::{Params, PathPattern, PatternError, normalize_path};
use crate::view::{ViewKind, ViewRequest};

/// Upper bound on redirect hops during resolution.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    View(ViewKind),
    /// Redirect to a static path.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pattern: PathPattern,
    target: Target,
}

impl RouteEntry {
    pub fn view(pattern: &str, kind: ViewKind) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            target: Target::View(kind),
        })
    }

    pub fn redirect(pattern: &str, to: &str) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            target: Target::Redirect(to.to_string()),
        })
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Pattern '{later}' overlaps earlier pattern '{earlier}'")]
    Overlap { earlier: String, later: String },

    #[error("Redirect from '{from}' must target a static path, got '{to}'")]
    RedirectNotStatic { from: String, to: String },

    #[error("Redirect from '{from}' to '{to}' does not reach a view")]
    DanglingRedirect { from: String, to: String },

    #[error("Redirect cycle starting at '{0}'")]
    RedirectCycle(String),

    #[error("Redirect chain from '{from}' takes {hops} hops, limit is {}", MAX_REDIRECTS)]
    RedirectChainTooLong { from: String, hops: usize },

    #[error("Listing pattern '{pattern}' must end in '{expected}'")]
    LevelMismatch {
        pattern: String,
        expected: &'static str,
    },

    #[error("Pattern '{pattern}' is missing parameter ':{name}'")]
    MissingParam { pattern: String, name: &'static str },

    #[error("Pattern '{pattern}' has unexpected parameter ':{name}'")]
    UnexpectedParam { pattern: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("No route matches '{0}'")]
    NotFound(String),

    #[error("Redirect limit exceeded while resolving '{0}'")]
    TooManyRedirects(String),

    #[error("Route '{pattern}' matched without parameter ':{name}'")]
    MissingParam { pattern: String, name: &'static str },
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The view to activate and its inputs.
    pub view: ViewRequest,
    /// Parameters captured by the matched pattern.
    pub params: Params,
    /// The pattern that selected the view.
    pub pattern: String,
    /// Normalized path the view was resolved for, after redirects.
    pub path: String,
    /// Normalized path originally requested, when a redirect was followed.
    pub redirected_from: Option<String>,
}

/// Immutable, validated route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, TableError> {
        let table = Self { entries };
        if let Err(err) = table.validate() {
            tracing::warn!(%err, "Rejected route table");
            return Err(err);
        }
        Ok(table)
    }

    /// The application's route table.
    pub fn standard() -> Result<Self, TableError> {
        Self::new(vec![
            RouteEntry::redirect("/", "/divisions")?,
            RouteEntry::view("/divisions", ViewKind::Listing(Level::Division))?,
            RouteEntry::view("/division/:id/districts", ViewKind::Listing(Level::District))?,
            RouteEntry::view("/district/:id/upazilas", ViewKind::Listing(Level::Upazila))?,
            RouteEntry::view("/upazila/:id/unions", ViewKind::Listing(Level::Union))?,
            RouteEntry::view("/details/:level/:id", ViewKind::Details)?,
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Every entry matching `path`, in declaration order.
    pub fn matching<'a, 'p>(
        &'a self,
        path: &'p str,
    ) -> impl Iterator<Item = (&'a RouteEntry, Params)> + use<'a, 'p> {
        self.entries
            .iter()
            .filter_map(move |entry| entry.pattern.matches(path).map(|params| (entry, params)))
    }

    /// First entry matching `path`.
    pub fn find(&self, path: &str) -> Option<(&RouteEntry, Params)> {
        self.matching(path).next()
    }

    /// Resolve `path` to a view, following redirects.
    pub fn resolve(&self, path: &str) -> Result<Resolution, ResolveError> {
        let requested = normalize_path(path);
        let mut current = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let Some((entry, params)) = self.find(&current) else {
                tracing::debug!(path = %current, "No route matched");
                return Err(ResolveError::NotFound(current));
            };

            match &entry.target {
                Target::Redirect(to) => {
                    tracing::trace!(from = %current, to = %to, "Following redirect");
                    current = normalize_path(to);
                }
                Target::View(kind) => {
                    let view = view_request(*kind, &entry.pattern, &params)?;
                    tracing::debug!(path = %current, pattern = %entry.pattern, ?view, "Resolved route");
                    let redirected_from = (current != requested).then_some(requested);
                    return Ok(Resolution {
                        view,
                        params,
                        pattern: entry.pattern.to_string(),
                        path: current,
                        redirected_from,
                    });
                }
            }
        }

        Err(ResolveError::TooManyRedirects(requested))
    }

    fn validate(&self) -> Result<(), TableError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(earlier) = self.entries[..index]
                .iter()
                .find(|earlier| earlier.pattern.overlaps(&entry.pattern))
            {
                return Err(TableError::Overlap {
                    earlier: earlier.pattern.to_string(),
                    later: entry.pattern.to_string(),
                });
            }

            match &entry.target {
                Target::View(kind) => validate_binding(*kind, &entry.pattern)?,
                Target::Redirect(to) => {
                    if !PathPattern::parse(to)?.is_static() {
                        return Err(TableError::RedirectNotStatic {
                            from: entry.pattern.to_string(),
                            to: to.clone(),
                        });
                    }
                }
            }
        }

        for entry in &self.entries {
            if matches!(entry.target, Target::Redirect(_)) {
                self.follow_redirects(entry)?;
            }
        }
        Ok(())
    }

    /// Walk the redirect chain starting at `start` until it reaches a view.
    fn follow_redirects(&self, start: &RouteEntry) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        let mut entry = start;

        while let Target::Redirect(to) = &entry.target {
            if !seen.insert(entry.pattern.as_str()) {
                return Err(TableError::RedirectCycle(start.pattern.to_string()));
            }
            entry = self
                .find(to)
                .map(|(next, _)| next)
                .ok_or_else(|| TableError::DanglingRedirect {
                    from: entry.pattern.to_string(),
                    to: to.clone(),
                })?;
        }

        if seen.len() > MAX_REDIRECTS {
            return Err(TableError::RedirectChainTooLong {
                from: start.pattern.to_string(),
                hops: seen.len(),
            });
        }
        Ok(())
    }
}

const TOP_LISTING_PARAMS: &[&str] = &[];
const NESTED_LISTING_PARAMS: &[&str] = &["id"];
const DETAILS_PARAMS: &[&str] = &["level", "id"];

/// Check that a pattern provides what its view needs, and nothing else.
fn validate_binding(kind: ViewKind, pattern: &PathPattern) -> Result<(), TableError> {
    let allowed = match kind {
        ViewKind::Listing(level) => {
            if pattern.trailing_literal() != Some(level.plural()) {
                return Err(TableError::LevelMismatch {
                    pattern: pattern.to_string(),
                    expected: level.plural(),
                });
            }
            if level.parent().is_some() {
                NESTED_LISTING_PARAMS
            } else {
                TOP_LISTING_PARAMS
            }
        }
        ViewKind::Details => DETAILS_PARAMS,
    };

    if let Some(name) = allowed.iter().copied().find(|name| !pattern.has_param(name)) {
        return Err(TableError::MissingParam {
            pattern: pattern.to_string(),
            name,
        });
    }
    if let Some(name) = pattern
        .param_names()
        .find(|name| !allowed.iter().any(|allowed| allowed == name))
    {
        return Err(TableError::UnexpectedParam {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

fn view_request(kind: ViewKind, pattern: &PathPattern, params: &Params) -> Result<ViewRequest, ResolveError> {
    let param = |name: &'static str| {
        params.get(name).cloned().ok_or_else(|| ResolveError::MissingParam {
            pattern: pattern.to_string(),
            name,
        })
    };

    Ok(match kind {
        ViewKind::Listing(level) => ViewRequest::Listing {
            level,
            id: params.get("id").cloned(),
        },
        ViewKind::Details => ViewRequest::Details {
            level: param("level")?,
            id: param("id")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard().unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_standard_table_is_valid() {
        let table = table();
        assert_eq!(table.entries().len(), 6);
        assert_eq!(
            table.entries()[0].target(),
            &Target::Redirect("/divisions".to_string())
        );
    }

    #[test]
    fn test_listing_routes_capture_id() {
        let table = table();
        let cases = [
            ("/division/12/districts", Level::District),
            ("/district/12/upazilas", Level::Upazila),
            ("/upazila/12/unions", Level::Union),
        ];

        for (path, level) in cases {
            let resolution = table.resolve(path).unwrap();
            assert_eq!(
                resolution.view,
                ViewRequest::Listing {
                    level,
                    id: Some("12".to_string())
                },
                "path {path}"
            );
            assert_eq!(resolution.params, params(&[("id", "12")]));
            assert_eq!(resolution.redirected_from, None);
        }
    }

    #[test]
    fn test_listing_routes_decode_id() {
        let table = table();
        let cases = [
            ("/division/a%20b/districts", Level::District, "a b"),
            ("/district/Dh%C4%81ka/upazilas", Level::Upazila, "Dhāka"),
            ("/upazila/50%25/unions", Level::Union, "50%"),
        ];

        for (path, level, id) in cases {
            let resolution = table.resolve(path).unwrap();
            assert_eq!(
                resolution.view,
                ViewRequest::Listing {
                    level,
                    id: Some(id.to_string())
                },
                "path {path}"
            );
            assert_eq!(resolution.params, params(&[("id", id)]));
        }
    }

    #[test]
    fn test_divisions_has_no_id() {
        let resolution = table().resolve("/divisions").unwrap();
        assert_eq!(
            resolution.view,
            ViewRequest::Listing {
                level: Level::Division,
                id: None
            }
        );
        assert!(resolution.params.is_empty());
    }

    #[test]
    fn test_root_redirects_to_divisions() {
        let table = table();
        let root = table.resolve("/").unwrap();
        let divisions = table.resolve("/divisions").unwrap();

        assert_eq!(root.view, divisions.view);
        assert_eq!(root.params, divisions.params);
        assert_eq!(root.path, "/divisions");
        assert_eq!(root.pattern, "/divisions");
        assert_eq!(root.redirected_from.as_deref(), Some("/"));
    }

    #[test]
    fn test_details_route() {
        let resolution = table().resolve("/details/district/7").unwrap();
        assert_eq!(
            resolution.view,
            ViewRequest::Details {
                level: "district".to_string(),
                id: "7".to_string()
            }
        );
        assert_eq!(resolution.params, params(&[("id", "7"), ("level", "district")]));
    }

    #[test]
    fn test_details_route_decodes_params() {
        let resolution = table().resolve("/details/district/Dh%C4%81ka").unwrap();
        assert_eq!(
            resolution.view,
            ViewRequest::Details {
                level: "district".to_string(),
                id: "Dhāka".to_string()
            }
        );
    }

    #[test]
    fn test_encoded_ids_survive_path_round_trip() {
        let table = table();
        let views = [
            ViewRequest::Details {
                level: "district".to_string(),
                id: "a b".to_string(),
            },
            ViewRequest::Details {
                level: "union".to_string(),
                id: "50%".to_string(),
            },
            ViewRequest::Listing {
                level: Level::Upazila,
                id: Some("Dhāka/North".to_string()),
            },
        ];

        for view in views {
            let path = view.path().unwrap();
            // Resolving twice in a row must not encode the id again.
            let once = table.resolve(&path).unwrap().view;
            let twice = table.resolve(&once.path().unwrap()).unwrap().view;
            assert_eq!(once, view, "path {path}");
            assert_eq!(twice, view, "path {path}");
        }
    }

    #[test]
    fn test_representative_paths_match_exactly_one_entry() {
        let table = table();
        let paths = [
            "/",
            "/divisions",
            "/division/1/districts",
            "/district/10/upazilas",
            "/upazila/100/unions",
            "/details/division/1",
            "/details/union/dhaka-01",
            // Ids that look like other segments still match only their own entry.
            "/division/districts/districts",
            "/details/details/divisions",
        ];

        for path in paths {
            assert_eq!(table.matching(path).count(), 1, "path {path}");
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = table();
        for path in ["/", "/divisions", "/upazila/3/unions", "/details/union/3"] {
            assert_eq!(table.resolve(path), table.resolve(path));
        }
    }

    #[test]
    fn test_unmatched_paths() {
        let table = table();
        for path in [
            "/division",
            "/division/12",
            "/division/12/upazilas",
            "/union/5/wards",
            "/details/district",
            "/details//7",
        ] {
            assert!(
                matches!(table.resolve(path), Err(ResolveError::NotFound(_))),
                "path {path}"
            );
        }
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        let table = table();
        let plain = table.resolve("/district/5/upazilas").unwrap();
        assert_eq!(table.resolve("/district/5/upazilas/").unwrap(), plain);
        assert_eq!(table.resolve("/district/5/upazilas?zoom=9").unwrap(), plain);
    }

    #[test]
    fn test_rejects_overlap() {
        let result = RouteTable::new(vec![
            RouteEntry::view("/details/:level/:id", ViewKind::Details).unwrap(),
            RouteEntry::view("/division/:id/districts", ViewKind::Listing(Level::District)).unwrap(),
            RouteEntry::view("/details/division/:id", ViewKind::Details).unwrap(),
        ]);
        assert_eq!(
            result,
            Err(TableError::Overlap {
                earlier: "/details/:level/:id".to_string(),
                later: "/details/division/:id".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_redirect_cycle() {
        let result = RouteTable::new(vec![
            RouteEntry::redirect("/", "/home").unwrap(),
            RouteEntry::redirect("/home", "/").unwrap(),
        ]);
        assert_eq!(result, Err(TableError::RedirectCycle("/".to_string())));
    }

    #[test]
    fn test_redirect_chain_length() {
        let chain = |hops: usize| {
            let mut entries: Vec<RouteEntry> = (0..hops)
                .map(|i| {
                    let to = if i + 1 == hops {
                        "/divisions".to_string()
                    } else {
                        format!("/r{}", i + 1)
                    };
                    RouteEntry::redirect(&format!("/r{i}"), &to).unwrap()
                })
                .collect();
            entries.push(RouteEntry::view("/divisions", ViewKind::Listing(Level::Division)).unwrap());
            RouteTable::new(entries)
        };

        let table = chain(MAX_REDIRECTS).unwrap();
        let resolution = table.resolve("/r0").unwrap();
        assert_eq!(resolution.path, "/divisions");

        assert_eq!(
            chain(MAX_REDIRECTS + 1),
            Err(TableError::RedirectChainTooLong {
                from: "/r0".to_string(),
                hops: MAX_REDIRECTS + 1,
            })
        );
    }

    #[test]
    fn test_rejects_dangling_redirect() {
        let result = RouteTable::new(vec![RouteEntry::redirect("/", "/nowhere").unwrap()]);
        assert_eq!(
            result,
            Err(TableError::DanglingRedirect {
                from: "/".to_string(),
                to: "/nowhere".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_parameterised_redirect() {
        let result = RouteTable::new(vec![
            RouteEntry::redirect("/", "/division/:id/districts").unwrap(),
            RouteEntry::view("/division/:id/districts", ViewKind::Listing(Level::District)).unwrap(),
        ]);
        assert!(matches!(result, Err(TableError::RedirectNotStatic { .. })));
    }

    #[test]
    fn test_rejects_listing_level_mismatch() {
        let result = RouteTable::new(vec![
            RouteEntry::view("/division/:id/upazilas", ViewKind::Listing(Level::District)).unwrap(),
        ]);
        assert_eq!(
            result,
            Err(TableError::LevelMismatch {
                pattern: "/division/:id/upazilas".to_string(),
                expected: "districts",
            })
        );
    }

    #[test]
    fn test_rejects_wrong_params() {
        let missing = RouteTable::new(vec![
            RouteEntry::view("/districts", ViewKind::Listing(Level::District)).unwrap(),
        ]);
        assert_eq!(
            missing,
            Err(TableError::MissingParam {
                pattern: "/districts".to_string(),
                name: "id",
            })
        );

        let unexpected = RouteTable::new(vec![
            RouteEntry::view("/details/:kind/:id", ViewKind::Details).unwrap(),
        ]);
        assert!(matches!(unexpected, Err(TableError::MissingParam { name: "level", .. })));

        let extra = RouteTable::new(vec![
            RouteEntry::view("/:lang/divisions", ViewKind::Listing(Level::Division)).unwrap(),
        ]);
        assert!(matches!(extra, Err(TableError::UnexpectedParam { name, .. }) if name == "lang"));
    }

    #[test]
    fn test_view_request_path_resolves_back() {
        let table = table();
        for path in [
            "/divisions",
            "/division/1/districts",
            "/district/2/upazilas",
            "/upazila/3/unions",
            "/details/upazila/3",
        ] {
            let resolution = table.resolve(path).unwrap();
            assert_eq!(resolution.view.path().as_deref(), Some(path));
        }
    }
}
