//! Execution-context collaborators.
//!
//! Tag assembly never talks to a web framework directly. Everything it needs
//! from the outside world comes through two seams:
//!
//! - [`RequestContext`] answers "what page is being rendered right now"
//!   (current URL, query parameters, locale). A batch/CLI caller has no
//!   request, so every accessor is optional.
//! - [`UrlResolver`] generates URLs the library cannot derive on its own:
//!   sized image variants and named routes. Both return `Result`; callers
//!   downgrade failures to a plain base-URL join rather than propagating.

use crate::config::{ImageSizes, Size};
use crate::debug;
use crate::error::BuildError;
use rustc_hash::FxHashMap;
use url::Url;

// ============================================================================
// request context
// ============================================================================

/// The page request currently being rendered, if any.
pub trait RequestContext: Send + Sync {
    /// Full URL of the current request. `None` in batch/CLI contexts.
    fn current_url(&self) -> Option<String>;

    /// A query parameter of the current request.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Path component of the current request, with leading slash.
    fn path(&self) -> Option<String>;

    /// Active content locale.
    fn locale(&self) -> String;

    /// 1-based page number from the `page` query parameter.
    fn page_number(&self) -> u32 {
        self.query_param("page")
            .and_then(|p| p.parse().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1)
    }
}

/// Context for batch generation: no live request, fixed locale.
#[derive(Debug, Clone)]
pub struct BatchContext {
    locale: String,
}

impl BatchContext {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl RequestContext for BatchContext {
    fn current_url(&self) -> Option<String> {
        None
    }

    fn query_param(&self, _name: &str) -> Option<String> {
        None
    }

    fn path(&self) -> Option<String> {
        None
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}

/// A fixed request, for servers that capture URL + query up front and for
/// tests.
#[derive(Debug, Clone)]
pub struct StaticRequest {
    url: String,
    query: FxHashMap<String, String>,
    locale: String,
}

impl StaticRequest {
    /// Build from a full URL; query parameters are parsed out of it.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let mut query = FxHashMap::default();
        if let Ok(parsed) = Url::parse(&url) {
            for (k, v) in parsed.query_pairs() {
                query.insert(k.into_owned(), v.into_owned());
            }
        }
        Self {
            url,
            query,
            locale: "en".into(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Add or override a query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }
}

impl RequestContext for StaticRequest {
    fn current_url(&self) -> Option<String> {
        Some(self.url.clone())
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn path(&self) -> Option<String> {
        Url::parse(&self.url).ok().map(|u| u.path().to_string())
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}

// ============================================================================
// url resolver
// ============================================================================

/// Generates URLs the library cannot build itself.
pub trait UrlResolver: Send + Sync {
    /// URL of `path` resized to `size`, e.g. through an image CDN or a
    /// resizing route.
    fn image_url(&self, path: &str, size: Size) -> Result<String, BuildError>;

    /// URL of the named route with the given parameters.
    fn route(&self, name: &str, params: &[(&str, &str)]) -> Result<String, BuildError>;
}

/// Default resolver: serves images as plain static assets under the base
/// URL, ignoring the requested size. Knows no named routes.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl UrlResolver for AssetResolver {
    fn image_url(&self, path: &str, _size: Size) -> Result<String, BuildError> {
        Ok(join_base(&self.base_url, path))
    }

    fn route(&self, name: &str, _params: &[(&str, &str)]) -> Result<String, BuildError> {
        Err(BuildError::UnknownRoute(name.to_string()))
    }
}

/// Join a path onto a base URL without doubling slashes.
pub(crate) fn join_base(base: &str, path: &str) -> String {
    if let Ok(base) = Url::parse(base) {
        if let Ok(joined) = base.join(path.trim_start_matches('/')) {
            return joined.to_string();
        }
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// ============================================================================
// image resolution
// ============================================================================

/// Resolves content image paths to platform-sized URLs.
pub(crate) struct Images<'a> {
    resolver: &'a dyn UrlResolver,
    sizes: &'a ImageSizes,
    base_url: &'a str,
}

impl<'a> Images<'a> {
    pub fn new(resolver: &'a dyn UrlResolver, sizes: &'a ImageSizes, base_url: &'a str) -> Self {
        Self {
            resolver,
            sizes,
            base_url,
        }
    }

    pub fn sizes(&self) -> &ImageSizes {
        self.sizes
    }

    /// Resolve `path` to a URL sized for the given platform preset.
    ///
    /// Absolute http(s) URLs pass through untouched. Relative paths go to
    /// the resolver (reduced to their basename when a sized-image route is
    /// configured, since the route locates the file itself); resolver
    /// failures fall back to a plain base-URL join.
    pub fn resolve(&self, path: &str, size: Size) -> String {
        let path = path.trim();
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let relative = path.trim_start_matches('/');
        let lookup = if self.sizes.route.is_some() {
            basename(relative)
        } else {
            relative
        };

        match self.resolver.image_url(lookup, size) {
            Ok(url) => url,
            Err(err) => {
                debug!("image"; "{err}, using static asset url");
                join_base(self.base_url, relative)
            }
        }
    }

    pub fn og(&self, path: &str) -> String {
        self.resolve(path, self.sizes.og)
    }

    pub fn twitter(&self, path: &str) -> String {
        self.resolve(path, self.sizes.twitter)
    }

    pub fn linkedin(&self, path: &str) -> String {
        self.resolve(path, self.sizes.linkedin)
    }

    pub fn logo(&self, path: &str) -> String {
        self.resolve(path, self.sizes.logo)
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_context_has_no_request() {
        let ctx = BatchContext::new("fr");
        assert_eq!(ctx.current_url(), None);
        assert_eq!(ctx.path(), None);
        assert_eq!(ctx.locale(), "fr");
        assert_eq!(ctx.page_number(), 1);
    }

    #[test]
    fn test_static_request_parses_query() {
        let ctx = StaticRequest::new("https://acme.example/news/tech?page=3&q=rust");
        assert_eq!(
            ctx.current_url().as_deref(),
            Some("https://acme.example/news/tech?page=3&q=rust")
        );
        assert_eq!(ctx.path().as_deref(), Some("/news/tech"));
        assert_eq!(ctx.query_param("q").as_deref(), Some("rust"));
        assert_eq!(ctx.page_number(), 3);
    }

    #[test]
    fn test_page_number_ignores_garbage() {
        let ctx = StaticRequest::new("https://acme.example/?page=banana");
        assert_eq!(ctx.page_number(), 1);
        let ctx = StaticRequest::new("https://acme.example/?page=0");
        assert_eq!(ctx.page_number(), 1);
    }

    #[test]
    fn test_asset_resolver_joins_base() {
        let resolver = AssetResolver::new("https://acme.example");
        let url = resolver
            .image_url("images/cover.jpg", Size::new(1200, 630))
            .unwrap();
        assert_eq!(url, "https://acme.example/images/cover.jpg");
        assert!(resolver.route("post.show", &[]).is_err());
    }

    #[test]
    fn test_join_base_handles_slashes() {
        assert_eq!(
            join_base("https://acme.example/", "/a/b.jpg"),
            "https://acme.example/a/b.jpg"
        );
        assert_eq!(join_base("not a url", "a.jpg"), "not a url/a.jpg");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let resolver = AssetResolver::new("https://acme.example");
        let sizes = ImageSizes::default();
        let images = Images::new(&resolver, &sizes, "https://acme.example");
        assert_eq!(
            images.og("https://cdn.example/pic.jpg"),
            "https://cdn.example/pic.jpg"
        );
    }

    #[test]
    fn test_basename_applied_when_route_configured() {
        struct RouteResolver;
        impl UrlResolver for RouteResolver {
            fn image_url(&self, path: &str, size: Size) -> Result<String, BuildError> {
                Ok(format!(
                    "https://img.example/{}/{}",
                    size.as_param(),
                    path
                ))
            }
            fn route(&self, name: &str, _: &[(&str, &str)]) -> Result<String, BuildError> {
                Err(BuildError::UnknownRoute(name.to_string()))
            }
        }

        let mut sizes = ImageSizes::default();
        sizes.route = Some("image.sized".into());
        let images = Images::new(&RouteResolver, &sizes, "https://acme.example");
        assert_eq!(
            images.og("uploads/2024/cover.jpg"),
            "https://img.example/1200x630/cover.jpg"
        );
    }

    #[test]
    fn test_resolver_failure_falls_back_to_asset_url() {
        struct FailingResolver;
        impl UrlResolver for FailingResolver {
            fn image_url(&self, path: &str, _: Size) -> Result<String, BuildError> {
                Err(BuildError::ImageUrl {
                    path: path.to_string(),
                    reason: "cdn down".into(),
                })
            }
            fn route(&self, name: &str, _: &[(&str, &str)]) -> Result<String, BuildError> {
                Err(BuildError::UnknownRoute(name.to_string()))
            }
        }

        let sizes = ImageSizes::default();
        let images = Images::new(&FailingResolver, &sizes, "https://acme.example");
        assert_eq!(
            images.twitter("images/cover.jpg"),
            "https://acme.example/images/cover.jpg"
        );
    }
}
