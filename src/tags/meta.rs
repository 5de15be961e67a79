//! Title, description, canonical, generic metas and hreflang alternates.

use crate::utils::html;

/// How a meta entry renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    /// `<meta name="..." content="...">`
    Name,
    /// `<meta property="..." content="...">`
    Property,
    /// `<link rel="..." href="...">`
    Link,
    /// `<meta http-equiv="..." content="...">`
    HttpEquiv,
}

/// Names allowed to appear more than once.
const MULTI_VALUE: &[&str] = &["article:tag"];

#[derive(Debug, Clone)]
struct MetaEntry {
    name: String,
    content: String,
    kind: MetaKind,
}

#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    title: Option<String>,
    description: Option<String>,
    canonical: Option<String>,
    metas: Vec<MetaEntry>,
    alternates: Vec<(String, String)>,
}

impl MetaTags {
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_canonical(&mut self, url: impl Into<String>) -> &mut Self {
        self.canonical = Some(url.into());
        self
    }

    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Add a meta entry. Repeating a (name, kind) pair overwrites the
    /// earlier entry in place, except for multi-value names like
    /// `article:tag` which append.
    pub fn add_meta(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        kind: MetaKind,
    ) -> &mut Self {
        let name = name.into();
        let content = content.into();

        if !MULTI_VALUE.contains(&name.as_str()) {
            if let Some(entry) = self
                .metas
                .iter_mut()
                .find(|e| e.name == name && e.kind == kind)
            {
                entry.content = content;
                return self;
            }
        }

        self.metas.push(MetaEntry {
            name,
            content,
            kind,
        });
        self
    }

    /// `<link rel="alternate" hreflang="...">` entry.
    pub fn add_alternate(
        &mut self,
        locale: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        self.alternates.push((locale.into(), url.into()));
        self
    }

    pub fn generate(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html::escape(title)));
        }
        if let Some(description) = &self.description {
            html.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                html::escape_attr(description)
            ));
        }
        if let Some(canonical) = &self.canonical {
            html.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                html::escape_attr(canonical)
            ));
        }

        for entry in &self.metas {
            let name = html::escape_attr(&entry.name);
            let content = html::escape_attr(&entry.content);
            match entry.kind {
                MetaKind::Link => {
                    html.push_str(&format!("<link rel=\"{name}\" href=\"{content}\">\n"));
                }
                MetaKind::HttpEquiv => {
                    html.push_str(&format!(
                        "<meta http-equiv=\"{name}\" content=\"{content}\">\n"
                    ));
                }
                MetaKind::Property => {
                    html.push_str(&format!(
                        "<meta property=\"{name}\" content=\"{content}\">\n"
                    ));
                }
                MetaKind::Name => {
                    html.push_str(&format!("<meta name=\"{name}\" content=\"{content}\">\n"));
                }
            }
        }

        for (locale, url) in &self.alternates {
            html.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
                html::escape_attr(locale),
                html::escape_attr(url)
            ));
        }

        html
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
