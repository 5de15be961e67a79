//! Twitter Card values, rendered under the `twitter:` prefix.

use crate::utils::html;

#[derive(Debug, Clone, Default)]
pub struct TwitterCard {
    /// Insertion-ordered, last write wins in place.
    values: Vec<(String, String)>,
}

impl TwitterCard {
    pub fn set_type(&mut self, card: impl Into<String>) -> &mut Self {
        self.add_value("card", card)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.add_value("title", title)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.add_value("description", description)
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.add_value("image", url)
    }

    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.values.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.values.push((key, value));
        }
        self
    }

    pub fn generate(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.values {
            out.push_str(&format!(
                "<meta name=\"twitter:{}\" content=\"{}\">\n",
                html::escape_attr(key),
                html::escape_attr(value)
            ));
        }
        out
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_prefixed_keys() {
        let mut card = TwitterCard::default();
        card.set_type("summary_large_image");
        card.set_title("Acme");
        card.add_value("label1", "Reading time");
        card.add_value("data1", "3 min read");

        let html = card.generate();
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(html.contains("<meta name=\"twitter:label1\" content=\"Reading time\">"));
        assert!(html.contains("<meta name=\"twitter:data1\" content=\"3 min read\">"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut card = TwitterCard::default();
        card.set_title("first");
        card.set_title("second");
        let html = card.generate();
        assert_eq!(html.matches("twitter:title").count(), 1);
        assert!(html.contains("second"));
    }

    #[test]
    fn test_content_escaped() {
        let mut card = TwitterCard::default();
        card.set_title("Q&A \"live\"");
        assert!(card
            .generate()
            .contains("content=\"Q&amp;A &quot;live&quot;\""));
    }
}
