//! Page classification and extracted page data.

mod extract;

pub use extract::Extractor;

/// The kind of page being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageType {
    #[default]
    Home,
    Post,
    Category,
    Product,
    Search,
    Tag,
    Author,
    Archive,
    Page,
}

impl PageType {
    /// Parse a page-type name; anything unrecognized falls back to `Home`.
    pub fn parse(s: &str) -> Self {
        match s {
            "post" => Self::Post,
            "category" => Self::Category,
            "product" => Self::Product,
            "search" => Self::Search,
            "tag" => Self::Tag,
            "author" => Self::Author,
            "archive" => Self::Archive,
            "page" => Self::Page,
            _ => Self::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Post => "post",
            Self::Category => "category",
            Self::Product => "product",
            Self::Search => "search",
            Self::Tag => "tag",
            Self::Author => "author",
            Self::Archive => "archive",
            Self::Page => "page",
        }
    }
}

/// Everything the builders need to know about the current page.
///
/// Built once per `for_page` call and immutable afterwards; the source model
/// stays alongside it in the service for relation access.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// schema.org type driving the page-level JSON-LD.
    pub schema: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub robots: String,
    /// ISO-8601, present on posts.
    pub published_at: Option<String>,
    pub modified_at: Option<String>,
}
