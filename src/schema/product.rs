//! Product document with offer, rating and attribute normalization.

use super::doc;
use crate::config::SeoConfig;
use crate::context::join_base;
use crate::model::{Fields, Model};
use crate::page::PageData;
use crate::site::SiteData;
use serde_json::{Map, Value, json};

pub fn product(
    page: &PageData,
    model: &Model,
    site: &SiteData,
    config: &SeoConfig,
    current_url: &str,
) -> Map<String, Value> {
    let fields = model.fields();

    let mut schema = doc("Product");
    schema.insert("name".into(), json!(page.title));
    schema.insert("description".into(), json!(page.description));
    schema.insert(
        "image".into(),
        Value::Array(images(page.image.as_deref(), site, config)),
    );
    schema.insert("url".into(), json!(current_url));

    for key in ["sku", "mpn", "gtin"] {
        if let Some(value) = fields.raw(key).filter(|v| !v.is_null()) {
            schema.insert(key.into(), value.clone());
        }
    }

    if let Some(brand) = fields.get("brand") {
        if let Some(name) = brand.str_first(&["name", "title"]).or_else(|| brand.as_str()) {
            let mut node = Map::new();
            node.insert("@type".into(), json!("Brand"));
            node.insert("name".into(), json!(name));
            if let Some(logo) = brand.str_first(&["logo"]) {
                node.insert("logo".into(), json!(logo));
            }
            schema.insert("brand".into(), Value::Object(node));
        }
    }

    if let Some(category) = fields.get("category") {
        if let Some(name) = category.str_first(&["name", "title"]).or_else(|| category.as_str()) {
            schema.insert("category".into(), json!(name));
        }
    }

    if let Some(rating) = aggregate_from_reviews(fields) {
        schema.insert("aggregateRating".into(), rating);
    }

    if let Some(offer) = offer(fields, config, current_url) {
        schema.insert("offers".into(), offer);
    }

    for key in ["color", "size", "material", "weight", "height", "width", "depth"] {
        if let Some(value) = fields.raw(key).filter(|v| !v.is_null()) {
            schema.insert(key.into(), value.clone());
        }
    }

    schema
}

fn images(image: Option<&str>, site: &SiteData, config: &SeoConfig) -> Vec<Value> {
    let image = match image.filter(|i| !i.is_empty()) {
        Some(image) => image.to_string(),
        None => config.defaults.image.clone(),
    };
    let url = if image.starts_with("http://") || image.starts_with("https://") {
        image
    } else {
        join_base(&site.url, &image)
    };
    vec![json!(url)]
}

fn aggregate_from_reviews(fields: Fields<'_>) -> Option<Value> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for review in fields.items("reviews") {
        if let Some(rating) = review.f64_first(&["rating", "rating_value"]) {
            sum += rating;
            count += 1;
        }
    }
    if count == 0 || sum <= 0.0 {
        return None;
    }
    let average = sum / f64::from(count);
    Some(json!({
        "@type": "AggregateRating",
        "ratingValue": average,
        "bestRating": 5.0,
        "worstRating": 1.0,
        "ratingCount": count,
        "reviewCount": count,
    }))
}

fn offer(fields: Fields<'_>, config: &SeoConfig, current_url: &str) -> Option<Value> {
    let price = numeric(fields, &["price", "sale_price", "current_price"])?;

    let currency = fields
        .str_first(&["currency", "price_currency"])
        .unwrap_or(&config.ecommerce.default_currency)
        .to_string();

    let availability = if let Some(value) = fields.raw("availability") {
        match value.as_str() {
            Some(s) => normalize_availability(s),
            None => in_stock_url(value.as_bool().unwrap_or(true)),
        }
    } else if let Some(in_stock) = fields.bool_first(&["in_stock"]) {
        in_stock_url(in_stock)
    } else if let Some(quantity) = fields.f64_first(&["stock_quantity"]) {
        in_stock_url(quantity > 0.0)
    } else {
        in_stock_url(true)
    };

    let mut offer = Map::new();
    offer.insert("@type".into(), json!("Offer"));
    offer.insert("price".into(), json!(format!("{price:.2}")));
    offer.insert("priceCurrency".into(), json!(currency.clone()));
    offer.insert("availability".into(), json!(availability));
    offer.insert("url".into(), json!(current_url));

    if let Some(seller) = fields.rel_first(&["seller"]) {
        if let Some(name) = seller.str_first(&["name", "title"]) {
            offer.insert(
                "seller".into(),
                json!({ "@type": "Organization", "name": name }),
            );
        }
    }

    if let Some(valid_until) = fields.str_first(&["sale_end_date"]) {
        offer.insert("priceValidUntil".into(), json!(valid_until));
    }

    if let Some(condition) = fields.str_first(&["condition"]) {
        offer.insert("itemCondition".into(), json!(normalize_condition(condition)));
    }

    if let Some(shipping) = numeric(fields, &["shipping_cost"]) {
        offer.insert(
            "shippingDetails".into(),
            json!({
                "@type": "OfferShippingDetails",
                "shippingRate": {
                    "@type": "MonetaryAmount",
                    "value": shipping,
                    "currency": currency,
                },
            }),
        );
    }

    Some(Value::Object(offer))
}

/// Number or numeric string.
fn numeric(fields: Fields<'_>, keys: &[&str]) -> Option<f64> {
    fields
        .f64_first(keys)
        .or_else(|| fields.str_first(keys).and_then(|s| s.parse().ok()))
}

fn in_stock_url(in_stock: bool) -> &'static str {
    if in_stock {
        "https://schema.org/InStock"
    } else {
        "https://schema.org/OutOfStock"
    }
}

fn normalize_availability(availability: &str) -> &'static str {
    match availability.to_lowercase().as_str() {
        "in stock" | "instock" | "available" | "1" | "true" => "https://schema.org/InStock",
        "out of stock" | "outofstock" | "unavailable" | "0" | "false" => {
            "https://schema.org/OutOfStock"
        }
        "preorder" | "pre-order" => "https://schema.org/PreOrder",
        "backorder" | "back-order" => "https://schema.org/BackOrder",
        "discontinued" => "https://schema.org/Discontinued",
        _ => "https://schema.org/InStock",
    }
}

fn normalize_condition(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "new" | "brand new" => "https://schema.org/NewCondition",
        "used" | "pre-owned" => "https://schema.org/UsedCondition",
        "refurbished" | "refurb" => "https://schema.org/RefurbishedCondition",
        "damaged" => "https://schema.org/DamagedCondition",
        _ => "https://schema.org/NewCondition",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json as j;

    fn site() -> SiteData {
        SiteData {
            name: "Acme".into(),
            description: String::new(),
            logo: String::new(),
            url: "https://acme.example".into(),
            locale: "en".into(),
            publisher: "Acme".into(),
        }
    }

    fn page() -> PageData {
        PageData {
            title: "Widget - Acme".into(),
            description: "A widget.".into(),
            image: Some("products/widget.jpg".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_offer_from_price_and_stock() {
        let model = Model::from(j!({
            "price": 19.5,
            "in_stock": false,
            "condition": "refurbished",
        }));
        let schema = product(
            &page(),
            &model,
            &site(),
            &SeoConfig::default(),
            "https://acme.example/widget",
        );
        let offer = &schema["offers"];
        assert_eq!(offer["price"], "19.50");
        assert_eq!(offer["priceCurrency"], "USD");
        assert_eq!(offer["availability"], "https://schema.org/OutOfStock");
        assert_eq!(offer["itemCondition"], "https://schema.org/RefurbishedCondition");
    }

    #[test]
    fn test_no_price_no_offer() {
        let model = Model::from(j!({ "name": "Widget" }));
        let schema = product(&page(), &model, &site(), &SeoConfig::default(), "u");
        assert!(!schema.contains_key("offers"));
    }

    #[test]
    fn test_string_price_and_availability() {
        let model = Model::from(j!({
            "price": "12.4",
            "availability": "PreOrder",
            "currency": "EUR",
        }));
        let schema = product(&page(), &model, &site(), &SeoConfig::default(), "u");
        assert_eq!(schema["offers"]["price"], "12.40");
        assert_eq!(schema["offers"]["priceCurrency"], "EUR");
        assert_eq!(schema["offers"]["availability"], "https://schema.org/PreOrder");
    }

    #[test]
    fn test_aggregate_rating_averages_reviews() {
        let model = Model::from(j!({
            "reviews": [{ "rating": 4 }, { "rating": 5 }, { "comment": "no rating" }],
        }));
        let schema = product(&page(), &model, &site(), &SeoConfig::default(), "u");
        let rating = &schema["aggregateRating"];
        assert_eq!(rating["ratingValue"], 4.5);
        assert_eq!(rating["ratingCount"], 2);
    }

    #[test]
    fn test_brand_string_and_object() {
        let model = Model::from(j!({ "brand": "Acme" }));
        let schema = product(&page(), &model, &site(), &SeoConfig::default(), "u");
        assert_eq!(schema["brand"]["name"], "Acme");

        let model = Model::from(j!({ "brand": { "name": "Acme", "logo": "b.png" } }));
        let schema = product(&page(), &model, &site(), &SeoConfig::default(), "u");
        assert_eq!(schema["brand"]["logo"], "b.png");
    }

    #[test]
    fn test_default_image_when_missing() {
        let mut data = page();
        data.image = None;
        let schema = product(&data, &Model::empty(), &site(), &SeoConfig::default(), "u");
        assert_eq!(schema["image"][0], "https://acme.example/images/default.jpg");
    }

    #[test]
    fn test_attribute_passthrough() {
        let model = Model::from(j!({ "sku": "W-1", "color": "red", "weight": "2kg" }));
        let schema = product(&page(), &model, &site(), &SeoConfig::default(), "u");
        assert_eq!(schema["sku"], "W-1");
        assert_eq!(schema["color"], "red");
        assert_eq!(schema["weight"], "2kg");
    }
}
