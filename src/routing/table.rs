//! Route table module
//!
//! Implements path resolution for the static router. Entries are tried in
//! order; an entry may decline (file missing on disk) and hand the path to
//! the next one. The final entry matches everything and resolves to the
//! fallback page, so resolution never fails and unknown paths never 404.

use std::path::{Component, Path, PathBuf};

use crate::config::SiteConfig;

/// What a request path is matched against
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteMatcher {
    /// The bare root path `/`
    Root,
    /// Exact path match
    Exact(String),
    /// Matches every path
    Any,
}

impl RouteMatcher {
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Root => path == "/",
            Self::Exact(expected) => path == expected,
            Self::Any => true,
        }
    }
}

/// Where a matched request is sent
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteTarget {
    /// A fixed file under the static root
    File(String),
    /// Probe the disk for the request path itself, then with `.html` appended
    DiskLookup,
    /// The unconditional fallback page
    Fallback,
}

/// Outcome of resolving a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Serve this file from disk
    Disk(PathBuf),
    /// Serve the fallback entry page
    Fallback,
}

/// Ordered route table compiled from the site configuration
pub struct RouteTable {
    root: PathBuf,
    fallback_page: String,
    entries: Vec<(RouteMatcher, RouteTarget)>,
}

impl RouteTable {
    /// Compile the table: root entry, named pages (sorted by path), generic
    /// disk lookup, unconditional fallback.
    pub fn from_site(site: &SiteConfig) -> Self {
        let mut entries = Vec::with_capacity(site.pages.len() + 3);
        entries.push((
            RouteMatcher::Root,
            RouteTarget::File(site.fallback_page.clone()),
        ));
        for (path, file) in &site.pages {
            entries.push((RouteMatcher::Exact(path.clone()), RouteTarget::File(file.clone())));
        }
        entries.push((RouteMatcher::Any, RouteTarget::DiskLookup));
        entries.push((RouteMatcher::Any, RouteTarget::Fallback));

        Self {
            root: PathBuf::from(&site.static_root),
            fallback_page: site.fallback_page.clone(),
            entries,
        }
    }

    /// Resolve a request path to a disk file or the fallback page.
    ///
    /// Existence is re-checked on every call; nothing is cached between
    /// requests.
    pub fn resolve(&self, path: &str) -> Resolution {
        for (matcher, target) in &self.entries {
            if !matcher.matches(path) {
                continue;
            }
            match target {
                RouteTarget::File(file) => {
                    if let Some(found) = self.checked_file(file) {
                        return Resolution::Disk(found);
                    }
                }
                RouteTarget::DiskLookup => {
                    if let Some(found) = self.lookup(path) {
                        return Resolution::Disk(found);
                    }
                }
                RouteTarget::Fallback => return Resolution::Fallback,
            }
        }
        Resolution::Fallback
    }

    /// Location of the fallback page file under the static root
    pub fn fallback_path(&self) -> PathBuf {
        self.root.join(&self.fallback_page)
    }

    /// Probe the disk for the request path itself, then with `.html` appended
    fn lookup(&self, path: &str) -> Option<PathBuf> {
        let relative = sanitize(path)?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        let candidate = self.root.join(relative);
        if is_file(&candidate) {
            return Some(candidate);
        }

        let mut with_html = candidate.into_os_string();
        with_html.push(".html");
        let candidate = PathBuf::from(with_html);
        is_file(&candidate).then_some(candidate)
    }

    /// Check a configured file name below the static root
    fn checked_file(&self, file: &str) -> Option<PathBuf> {
        let relative = sanitize(file)?;
        let candidate = self.root.join(relative);
        is_file(&candidate).then_some(candidate)
    }
}

/// Turn a request path into a relative path that cannot escape the root.
/// Parent or rooted components reject the whole path.
fn sanitize(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(clean)
}

/// Existence probe. Errors (permissions, racing deletes) count as a miss so
/// resolution falls through to the fallback instead of surfacing an error.
fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temp_root(prefix: &str) -> PathBuf {
        let base = std::env::temp_dir();
        let pid = std::process::id();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = base.join(format!("{prefix}_{pid}_{nonce}"));
        std::fs::create_dir_all(dir.join("assets")).expect("create temp root");
        std::fs::write(dir.join("index.html"), "<html>entry</html>").expect("write index");
        std::fs::write(dir.join("about.html"), "<html>about</html>").expect("write about");
        std::fs::write(dir.join("assets/app.css"), "body{}").expect("write css");
        dir
    }

    fn make_table(root: &Path, pages: &[(&str, &str)]) -> RouteTable {
        let site = SiteConfig {
            static_root: root.to_string_lossy().into_owned(),
            fallback_page: "index.html".to_string(),
            pages: pages
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<BTreeMap<_, _>>(),
        };
        RouteTable::from_site(&site)
    }

    #[test]
    fn test_root_resolves_to_entry_page() {
        let root = temp_root("wm_table_root");
        let table = make_table(&root, &[]);
        assert_eq!(table.resolve("/"), Resolution::Disk(root.join("index.html")));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_exact_file_and_html_suffix() {
        let root = temp_root("wm_table_suffix");
        let table = make_table(&root, &[]);
        assert_eq!(
            table.resolve("/about.html"),
            Resolution::Disk(root.join("about.html"))
        );
        assert_eq!(
            table.resolve("/about"),
            Resolution::Disk(root.join("about.html"))
        );
        assert_eq!(
            table.resolve("/assets/app.css"),
            Resolution::Disk(root.join("assets/app.css"))
        );
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_miss_resolves_to_fallback() {
        let root = temp_root("wm_table_miss");
        let table = make_table(&root, &[]);
        assert_eq!(table.resolve("/no-such-page"), Resolution::Fallback);
        assert_eq!(table.resolve("/deep/nested/miss"), Resolution::Fallback);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_named_page_is_subsumed_by_lookup() {
        let root = temp_root("wm_table_named");
        let table = make_table(&root, &[("/company", "about.html")]);
        // Named entry pins the mapping
        assert_eq!(
            table.resolve("/company"),
            Resolution::Disk(root.join("about.html"))
        );
        // Generic lookup still covers the page file itself
        assert_eq!(
            table.resolve("/about"),
            Resolution::Disk(root.join("about.html"))
        );
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_named_page_missing_on_disk_falls_through() {
        let root = temp_root("wm_table_named_miss");
        let table = make_table(&root, &[("/gone", "gone.html")]);
        assert_eq!(table.resolve("/gone"), Resolution::Fallback);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_traversal_rejected() {
        let root = temp_root("wm_table_traversal");
        // Plant a file just outside the root
        std::fs::write(root.join("../escape.html"), "outside").expect("write outside");
        let table = make_table(&root, &[]);
        assert_eq!(table.resolve("/../escape.html"), Resolution::Fallback);
        assert_eq!(table.resolve("/../escape"), Resolution::Fallback);
        let _ = std::fs::remove_dir_all(&root);
        let _ = std::fs::remove_file(root.join("../escape.html"));
    }

    #[test]
    fn test_fallback_path() {
        let root = temp_root("wm_table_fb");
        let table = make_table(&root, &[]);
        assert_eq!(table.fallback_path(), root.join("index.html"));
        let _ = std::fs::remove_dir_all(&root);
    }
}
