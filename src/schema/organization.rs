//! Publisher organization document.

use super::doc;
use crate::config::SeoConfig;
use crate::site::SiteData;
use serde_json::{Map, Value, json};

/// NewsMediaOrganization with `@id` anchored at the site URL.
pub fn organization(site: &SiteData, config: &SeoConfig) -> Map<String, Value> {
    let org = &config.organization;

    let mut schema = doc("NewsMediaOrganization");
    schema.insert("@id".into(), json!(format!("{}#organization", site.url)));
    schema.insert(
        "name".into(),
        json!(org.name.clone().unwrap_or_else(|| site.publisher.clone())),
    );
    schema.insert("url".into(), json!(site.url));
    schema.insert(
        "logo".into(),
        json!({
            "@type": "ImageObject",
            "url": site.logo,
            "width": org.logo_width,
            "height": org.logo_height,
        }),
    );

    if let Some(alternate) = &org.alternate_name {
        schema.insert("alternateName".into(), json!(alternate));
    }
    if let Some(description) = &org.description {
        schema.insert("description".into(), json!(description));
    }
    if !org.same_as.is_empty() {
        schema.insert("sameAs".into(), json!(org.same_as));
    }

    if let Some(email) = &org.contact_point.email {
        let mut contact = Map::new();
        contact.insert("@type".into(), json!("ContactPoint"));
        contact.insert("contactType".into(), json!(org.contact_point.contact_type));
        contact.insert("email".into(), json!(email));
        if !org.contact_point.available_language.is_empty() {
            contact.insert(
                "availableLanguage".into(),
                json!(org.contact_point.available_language),
            );
        }
        if let Some(area) = &org.contact_point.area_served {
            contact.insert("areaServed".into(), json!(area));
        }
        schema.insert("contactPoint".into(), Value::Object(contact));
    }

    if let Some(country) = &org.address.address_country {
        schema.insert(
            "address".into(),
            json!({
                "@type": "PostalAddress",
                "addressCountry": country,
                "addressLocality": org.address.address_locality.clone().unwrap_or_default(),
            }),
        );
    }

    if let Some(founded) = &org.founding_date {
        schema.insert("foundingDate".into(), json!(founded));
    }
    if let Some(principles) = &org.publishing_principles {
        schema.insert("publishingPrinciples".into(), json!(principles));
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            name: "Acme".into(),
            description: String::new(),
            logo: "https://acme.example/logo.png".into(),
            url: "https://acme.example".into(),
            locale: "en".into(),
            publisher: "Acme Media".into(),
        }
    }

    #[test]
    fn test_minimal_organization() {
        let schema = organization(&site(), &SeoConfig::default());
        assert_eq!(schema["@id"], "https://acme.example#organization");
        assert_eq!(schema["name"], "Acme Media");
        assert_eq!(schema["logo"]["width"], 265);
        assert!(!schema.contains_key("contactPoint"));
        assert!(!schema.contains_key("sameAs"));
    }

    #[test]
    fn test_full_organization() {
        let mut config = SeoConfig::default();
        config.organization.name = Some("Acme Holdings".into());
        config.organization.same_as = vec!["https://x.com/acme".into()];
        config.organization.contact_point.email = Some("hi@acme.example".into());
        config.organization.address.address_country = Some("US".into());
        config.organization.founding_date = Some("2012-04-01".into());

        let schema = organization(&site(), &config);
        assert_eq!(schema["name"], "Acme Holdings");
        assert_eq!(schema["sameAs"][0], "https://x.com/acme");
        assert_eq!(schema["contactPoint"]["contactType"], "customer service");
        assert_eq!(schema["address"]["addressCountry"], "US");
        assert_eq!(schema["foundingDate"], "2012-04-01");
    }
}
