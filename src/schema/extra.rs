//! Ad-hoc schema builders driven by the service's `add_*` operations.

use super::doc;
use regex::Regex;
use serde_json::{Map, Value, json};
use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default)]
pub struct EventInput {
    pub name: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub location_address: Option<String>,
    pub image: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub item_name: String,
    pub rating_value: f64,
    pub best_rating: f64,
    pub review_body: Option<String>,
    pub author_name: Option<String>,
    pub date_published: Option<String>,
}

impl ReviewInput {
    pub fn new(item_name: impl Into<String>, rating_value: f64) -> Self {
        Self {
            item_name: item_name.into(),
            rating_value,
            best_rating: 5.0,
            review_body: None,
            author_name: None,
            date_published: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum HowToStep {
    Text(String),
    Detailed {
        name: Option<String>,
        text: Option<String>,
        image: Option<String>,
        url: Option<String>,
    },
}

/// FAQPage from question/answer pairs; empty pairs are dropped, and an
/// all-empty input yields an empty document.
pub fn faq(faqs: &[Faq]) -> Map<String, Value> {
    let entities: Vec<Value> = faqs
        .iter()
        .filter(|f| !f.question.is_empty() && !f.answer.is_empty())
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question,
                "acceptedAnswer": { "@type": "Answer", "text": f.answer },
            })
        })
        .collect();

    if entities.is_empty() {
        return Map::new();
    }

    let mut schema = doc("FAQPage");
    schema.insert("mainEntity".into(), Value::Array(entities));
    schema
}

pub fn event(input: &EventInput) -> Map<String, Value> {
    let mut schema = doc("Event");
    schema.insert("name".into(), json!(input.name));
    schema.insert("startDate".into(), json!(input.start_date));

    if let Some(end) = &input.end_date {
        schema.insert("endDate".into(), json!(end));
    }
    if let Some(description) = &input.description {
        schema.insert("description".into(), json!(description));
    }
    if let Some(image) = &input.image {
        schema.insert("image".into(), json!(image));
    }

    if input.location_name.is_some() || input.location_address.is_some() {
        let mut location = Map::new();
        location.insert("@type".into(), json!("Place"));
        if let Some(name) = &input.location_name {
            location.insert("name".into(), json!(name));
        }
        if let Some(address) = &input.location_address {
            location.insert(
                "address".into(),
                json!({ "@type": "PostalAddress", "streetAddress": address }),
            );
        }
        schema.insert("location".into(), Value::Object(location));
    }

    if let Some(organizer) = &input.organizer_name {
        let mut node = Map::new();
        node.insert("@type".into(), json!("Organization"));
        node.insert("name".into(), json!(organizer));
        if let Some(url) = &input.organizer_url {
            node.insert("url".into(), json!(url));
        }
        schema.insert("organizer".into(), Value::Object(node));
    }

    schema
}

pub fn review(input: &ReviewInput) -> Map<String, Value> {
    let mut schema = doc("Review");
    schema.insert(
        "itemReviewed".into(),
        json!({ "@type": "Thing", "name": input.item_name }),
    );
    schema.insert(
        "reviewRating".into(),
        json!({
            "@type": "Rating",
            "ratingValue": input.rating_value.to_string(),
            "bestRating": input.best_rating.to_string(),
        }),
    );

    if let Some(body) = &input.review_body {
        schema.insert("reviewBody".into(), json!(body));
    }
    if let Some(author) = &input.author_name {
        schema.insert(
            "author".into(),
            json!({ "@type": "Person", "name": author }),
        );
    }
    if let Some(date) = &input.date_published {
        schema.insert("datePublished".into(), json!(date));
    }

    schema
}

pub fn aggregate_rating(
    rating_value: f64,
    rating_count: u64,
    best_rating: f64,
    worst_rating: f64,
) -> Map<String, Value> {
    let mut schema = doc("AggregateRating");
    schema.insert("ratingValue".into(), json!(rating_value));
    schema.insert("bestRating".into(), json!(best_rating));
    schema.insert("worstRating".into(), json!(worst_rating));
    schema.insert("ratingCount".into(), json!(rating_count));
    schema.insert("reviewCount".into(), json!(rating_count));
    schema
}

pub fn brand(name: &str, logo: Option<&str>, url: Option<&str>) -> Map<String, Value> {
    let mut schema = doc("Brand");
    schema.insert("name".into(), json!(name));
    if let Some(logo) = logo {
        schema.insert("logo".into(), json!(logo));
    }
    if let Some(url) = url {
        schema.insert("url".into(), json!(url));
    }
    schema
}

/// HowTo with 1-based step positions; no steps yields an empty document.
pub fn how_to(
    name: &str,
    steps: &[HowToStep],
    description: Option<&str>,
    image: Option<&str>,
) -> Map<String, Value> {
    if steps.is_empty() {
        return Map::new();
    }

    let mut schema = doc("HowTo");
    schema.insert("name".into(), json!(name));
    if let Some(description) = description {
        schema.insert("description".into(), json!(description));
    }
    if let Some(image) = image {
        schema.insert("image".into(), json!(image));
    }

    let rendered: Vec<Value> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let mut node = Map::new();
            node.insert("@type".into(), json!("HowToStep"));
            node.insert("position".into(), json!(index + 1));
            match step {
                HowToStep::Text(text) => {
                    node.insert("text".into(), json!(text));
                }
                HowToStep::Detailed {
                    name,
                    text,
                    image,
                    url,
                } => {
                    if let Some(text) = text {
                        node.insert("text".into(), json!(text));
                    }
                    if let Some(name) = name {
                        node.insert("name".into(), json!(name));
                    }
                    if let Some(image) = image {
                        node.insert("image".into(), json!(image));
                    }
                    if let Some(url) = url {
                        node.insert("url".into(), json!(url));
                    }
                }
            }
            Value::Object(node)
        })
        .collect();
    schema.insert("step".into(), Value::Array(rendered));

    schema
}

static HOURS_DAYS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Mo|Tu|We|Th|Fr|Sa|Su)(?:-(Mo|Tu|We|Th|Fr|Sa|Su))?").unwrap()
});
static HOURS_TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}:\d{2}").unwrap());

/// LocalBusiness (or a subtype) from a loosely-shaped input map.
///
/// Scalar passthrough keys are re-emitted as-is; address, geo, opening
/// hours, ratings and reviews are normalized into their schema.org shapes.
pub fn local_business(data: &Map<String, Value>) -> Map<String, Value> {
    let business_type = data
        .get("businessType")
        .and_then(Value::as_str)
        .unwrap_or("LocalBusiness");

    let mut schema = doc(business_type);
    schema.insert(
        "name".into(),
        json!(data.get("name").and_then(Value::as_str).unwrap_or("")),
    );
    schema.insert(
        "description".into(),
        json!(data.get("description").and_then(Value::as_str).unwrap_or("")),
    );

    if let Some(address) = data.get("address").and_then(Value::as_object) {
        let mut node = Map::new();
        node.insert("@type".into(), json!("PostalAddress"));
        for key in [
            "streetAddress",
            "addressLocality",
            "addressRegion",
            "postalCode",
            "addressCountry",
        ] {
            if let Some(value) = address.get(key) {
                node.insert(key.into(), value.clone());
            }
        }
        schema.insert("address".into(), Value::Object(node));
    }

    if let Some(geo) = data.get("geo").and_then(Value::as_object) {
        let mut node = Map::new();
        node.insert("@type".into(), json!("GeoCoordinates"));
        for key in ["latitude", "longitude"] {
            if let Some(value) = geo.get(key).and_then(Value::as_f64) {
                node.insert(key.into(), json!(value));
            }
        }
        schema.insert("geo".into(), Value::Object(node));
    }

    for key in ["telephone", "email", "url", "logo"] {
        if let Some(value) = data.get(key).filter(|v| !v.is_null()) {
            schema.insert(key.into(), value.clone());
        }
    }

    if let Some(image) = data.get("image") {
        let images = match image {
            Value::Array(list) => list.clone(),
            other => vec![other.clone()],
        };
        schema.insert("image".into(), Value::Array(images));
    }

    if let Some(hours) = data.get("openingHours") {
        let entries = match hours {
            Value::Array(list) => list.clone(),
            other => vec![other.clone()],
        };
        let specs: Vec<Value> = entries
            .iter()
            .map(|entry| match entry {
                Value::String(spec) => opening_hours_spec(spec),
                Value::Object(map) => {
                    let mut node = Map::new();
                    node.insert("@type".into(), json!("OpeningHoursSpecification"));
                    node.extend(map.clone());
                    Value::Object(node)
                }
                other => other.clone(),
            })
            .collect();
        schema.insert("openingHoursSpecification".into(), Value::Array(specs));
    }

    if let Some(range) = data.get("priceRange").filter(|v| !v.is_null()) {
        schema.insert("priceRange".into(), range.clone());
    }

    for key in ["paymentAccepted", "currenciesAccepted", "servesCuisine"] {
        if let Some(value) = data.get(key) {
            let list = match value {
                Value::Array(list) => list.clone(),
                other => vec![other.clone()],
            };
            schema.insert(key.into(), Value::Array(list));
        }
    }

    if let Some(rating) = data.get("aggregateRating").and_then(Value::as_object) {
        schema.insert(
            "aggregateRating".into(),
            json!({
                "@type": "AggregateRating",
                "ratingValue": rating.get("ratingValue").cloned().unwrap_or(json!(0)),
                "bestRating": rating.get("bestRating").cloned().unwrap_or(json!(5.0)),
                "worstRating": rating.get("worstRating").cloned().unwrap_or(json!(1.0)),
                "ratingCount": rating.get("ratingCount").cloned().unwrap_or(json!(0)),
            }),
        );
    }

    if let Some(reviews) = data.get("review") {
        let entries = match reviews {
            Value::Array(list) => list.clone(),
            other => vec![other.clone()],
        };
        let normalized: Vec<Value> = entries
            .into_iter()
            .map(|entry| match entry {
                Value::Object(map) => {
                    let mut node = Map::new();
                    node.insert("@type".into(), json!("Review"));
                    node.extend(map);
                    Value::Object(node)
                }
                other => other,
            })
            .collect();
        schema.insert("review".into(), Value::Array(normalized));
    }

    for key in ["menu", "hasMap"] {
        if let Some(value) = data.get(key).filter(|v| !v.is_null()) {
            schema.insert(key.into(), value.clone());
        }
    }

    schema
}

/// Parse "Mo-Fr 09:00-17:00" style strings.
fn opening_hours_spec(spec: &str) -> Value {
    let day_of_week = HOURS_DAYS_RE
        .find(spec)
        .map(|m| m.as_str().to_string());
    let mut times = HOURS_TIME_RE.find_iter(spec);
    let opens = times.next().map(|m| m.as_str().to_string());
    let closes = times.next().map(|m| m.as_str().to_string());

    json!({
        "@type": "OpeningHoursSpecification",
        "dayOfWeek": day_of_week,
        "opens": opens,
        "closes": closes,
    })
}
