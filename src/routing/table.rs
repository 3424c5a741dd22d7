//! Route table module
//!
//! The complete list of routes the server answers. Matching walks the
//! table in order and the first hit wins; anything unmatched becomes a
//! 404 at the handler boundary.

use hyper::Method;

/// Whitelisted static directory trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticTree {
    Ui,
    Assets,
}

impl StaticTree {
    /// URL prefix the tree is mounted under, trailing slash included.
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::Ui => "/UI/",
            Self::Assets => "/Assets/",
        }
    }

    /// Content type served when the file extension is unknown.
    pub const fn default_content_type(self) -> &'static str {
        match self {
            Self::Ui => "text/html",
            Self::Assets => "application/json",
        }
    }
}

/// Handler a matched route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// The entry page at "/" and "/index.html"
    EntryPage,
    /// A file under one of the whitelisted trees
    Tree(StaticTree),
    /// GET /api/strings
    Strings,
    /// POST /api/upload
    Upload,
    /// POST /api/save-tags
    SaveTags,
}

impl RouteTarget {
    /// Whether the request body is collected before dispatch.
    pub const fn expects_body(self) -> bool {
        matches!(self, Self::Upload | Self::SaveTags)
    }
}

/// Path matching rule for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoutePattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl RoutePattern {
    fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path.starts_with(prefix),
        }
    }
}

/// A single route table entry.
struct Route {
    method: Method,
    pattern: RoutePattern,
    target: RouteTarget,
}

/// Route table in match order.
static ROUTES: [Route; 7] = [
    Route {
        method: Method::GET,
        pattern: RoutePattern::Exact("/"),
        target: RouteTarget::EntryPage,
    },
    Route {
        method: Method::GET,
        pattern: RoutePattern::Exact("/index.html"),
        target: RouteTarget::EntryPage,
    },
    Route {
        method: Method::GET,
        pattern: RoutePattern::Prefix(StaticTree::Ui.url_prefix()),
        target: RouteTarget::Tree(StaticTree::Ui),
    },
    Route {
        method: Method::GET,
        pattern: RoutePattern::Prefix(StaticTree::Assets.url_prefix()),
        target: RouteTarget::Tree(StaticTree::Assets),
    },
    Route {
        method: Method::GET,
        pattern: RoutePattern::Prefix("/api/strings"),
        target: RouteTarget::Strings,
    },
    Route {
        method: Method::POST,
        pattern: RoutePattern::Exact("/api/upload"),
        target: RouteTarget::Upload,
    },
    Route {
        method: Method::POST,
        pattern: RoutePattern::Exact("/api/save-tags"),
        target: RouteTarget::SaveTags,
    },
];

/// Find the target for a request line. Returns None when no route
/// matches, leaving the 404 wording to the caller.
pub fn match_route(method: &Method, path: &str) -> Option<RouteTarget> {
    ROUTES
        .iter()
        .find(|route| route.method == *method && route.pattern.matches(path))
        .map(|route| route.target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_page_routes() {
        assert_eq!(
            match_route(&Method::GET, "/"),
            Some(RouteTarget::EntryPage)
        );
        assert_eq!(
            match_route(&Method::GET, "/index.html"),
            Some(RouteTarget::EntryPage)
        );
        // Only the two exact paths serve the entry page
        assert_eq!(match_route(&Method::GET, "/index.htm"), None);
        assert_eq!(match_route(&Method::GET, "/Index.html"), None);
    }

    #[test]
    fn test_tree_routes() {
        assert_eq!(
            match_route(&Method::GET, "/UI/panel.css"),
            Some(RouteTarget::Tree(StaticTree::Ui))
        );
        assert_eq!(
            match_route(&Method::GET, "/Assets/Portrait/Strings.json"),
            Some(RouteTarget::Tree(StaticTree::Assets))
        );
        // Prefix requires the trailing slash
        assert_eq!(match_route(&Method::GET, "/UI"), None);
        assert_eq!(match_route(&Method::GET, "/Assets"), None);
        // Tree names are case sensitive
        assert_eq!(match_route(&Method::GET, "/ui/panel.css"), None);
    }

    #[test]
    fn test_strings_route_is_prefix_match() {
        assert_eq!(
            match_route(&Method::GET, "/api/strings"),
            Some(RouteTarget::Strings)
        );
        // The query string never reaches the matcher, but trailing path
        // characters do and still match
        assert_eq!(
            match_route(&Method::GET, "/api/strings/extra"),
            Some(RouteTarget::Strings)
        );
    }

    #[test]
    fn test_post_routes_are_exact() {
        assert_eq!(
            match_route(&Method::POST, "/api/upload"),
            Some(RouteTarget::Upload)
        );
        assert_eq!(
            match_route(&Method::POST, "/api/save-tags"),
            Some(RouteTarget::SaveTags)
        );
        assert_eq!(match_route(&Method::POST, "/api/upload/extra"), None);
        assert_eq!(match_route(&Method::POST, "/api/unknown"), None);
    }

    #[test]
    fn test_method_mismatch_does_not_route() {
        assert_eq!(match_route(&Method::POST, "/"), None);
        assert_eq!(match_route(&Method::GET, "/api/upload"), None);
        assert_eq!(match_route(&Method::HEAD, "/"), None);
        assert_eq!(match_route(&Method::PUT, "/api/save-tags"), None);
    }

    #[test]
    fn test_expects_body() {
        assert!(RouteTarget::Upload.expects_body());
        assert!(RouteTarget::SaveTags.expects_body());
        assert!(!RouteTarget::EntryPage.expects_body());
        assert!(!RouteTarget::Strings.expects_body());
        assert!(!RouteTarget::Tree(StaticTree::Ui).expects_body());
    }

    #[test]
    fn test_tree_defaults() {
        assert_eq!(StaticTree::Ui.default_content_type(), "text/html");
        assert_eq!(StaticTree::Assets.default_content_type(), "application/json");
    }
}
