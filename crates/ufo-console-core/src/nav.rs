//! Fixed admin navigation map used by the sidebar.

/// One sidebar link. Paths must match the backend routes byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

pub const ADMIN_NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry::new("/", "Home"),
    NavEntry::new("/user/", "Users"),
    NavEntry::new("/proxyserver/", "Proxy Servers"),
    NavEntry::new("/chromepolicy/", "Chrome Policy"),
    NavEntry::new("/setup/", "Setup"),
    NavEntry::new("/logout/", "Logout"),
];

/// Index of the first entry whose path equals `pathname`.
///
/// Comparison is exact: `/user` does not match `/user/`, and there is no
/// fallback selection when nothing matches.
pub fn current_page(entries: &[NavEntry], pathname: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.path == pathname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_match_backend_routes() {
        let pairs: Vec<(&str, &str)> = ADMIN_NAV_ENTRIES
            .iter()
            .map(|entry| (entry.path, entry.label))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("/", "Home"),
                ("/user/", "Users"),
                ("/proxyserver/", "Proxy Servers"),
                ("/chromepolicy/", "Chrome Policy"),
                ("/setup/", "Setup"),
                ("/logout/", "Logout"),
            ]
        );
    }

    #[test]
    fn current_page_finds_users() {
        assert_eq!(current_page(&ADMIN_NAV_ENTRIES, "/user/"), Some(1));
        assert_eq!(current_page(&ADMIN_NAV_ENTRIES, "/"), Some(0));
        assert_eq!(current_page(&ADMIN_NAV_ENTRIES, "/logout/"), Some(5));
    }

    #[test]
    fn current_page_has_no_fallback() {
        assert_eq!(current_page(&ADMIN_NAV_ENTRIES, "/user"), None);
        assert_eq!(current_page(&ADMIN_NAV_ENTRIES, "/user/add"), None);
        assert_eq!(current_page(&ADMIN_NAV_ENTRIES, ""), None);
        assert_eq!(current_page(&[], "/"), None);
    }

    #[test]
    fn current_page_first_match_wins() {
        let entries = [
            NavEntry::new("/a/", "First"),
            NavEntry::new("/b/", "Second"),
            NavEntry::new("/a/", "Duplicate"),
        ];
        assert_eq!(current_page(&entries, "/a/"), Some(0));
    }
}
