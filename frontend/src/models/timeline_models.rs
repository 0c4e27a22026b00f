use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::config;
use crate::models::common::{dedup_by_key, non_blank, EntryKey, RawScalar};

/// One milestone of the "Our Journey" timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub id: EntryKey,
    pub year: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawTimelineEntry {
    id: Option<RawScalar>,
    year: Option<RawScalar>,
    title: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

/// The timeline asset is served either as a bare array or wrapped in
/// `{ "timeline": [...] }`. A wrapper with a missing or null `timeline` holds no entries.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum TimelinePayload {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default)]
        timeline: Option<Vec<Value>>,
    },
}

impl TimelinePayload {
    pub fn into_entries(self) -> Vec<TimelineEntry> {
        let records = match self {
            TimelinePayload::Wrapped { timeline } => timeline.unwrap_or_default(),
            TimelinePayload::Bare(records) => records,
        };
        let entries = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| normalize(position, record))
            .collect();
        dedup_by_key(entries, |entry: &TimelineEntry| &entry.id)
    }
}

fn normalize(position: usize, record: Value) -> Option<TimelineEntry> {
    let raw: RawTimelineEntry = match serde_json::from_value(record) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Skipping timeline record {}: {}", position, e);
            return None;
        }
    };
    let Some(id) = raw.id.and_then(RawScalar::into_text) else {
        warn!("Skipping timeline record {}: missing id", position);
        return None;
    };
    let Some(title) = non_blank(raw.title) else {
        warn!("Skipping timeline record {}: missing title", position);
        return None;
    };
    Some(TimelineEntry {
        id: EntryKey::new(id),
        year: raw.year.and_then(RawScalar::into_text).unwrap_or_default(),
        title,
        description: raw.description.unwrap_or_default(),
        image: non_blank(raw.image).map(|path| config::asset_url(&path)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Vec<TimelineEntry> {
        serde_json::from_value::<TimelinePayload>(value)
            .map(TimelinePayload::into_entries)
            .unwrap_or_else(|e| panic!("payload should parse: {}", e))
    }

    #[test]
    fn wrapped_and_bare_payloads_agree() {
        let records = json!([
            { "id": "1", "year": "2020", "title": "Prototype", "description": "d1", "image": "/img/a.jpg" },
            { "id": "2", "year": "2021", "title": "Launch", "description": "d2", "image": "/img/b.jpg" }
        ]);
        let wrapped = parse(json!({ "timeline": records.clone() }));
        let bare = parse(records);
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[0].id, EntryKey::new("1"));
        assert_eq!(wrapped[1].image.as_deref(), Some("/img/b.jpg"));
    }

    #[test]
    fn coerces_numeric_ids_and_years() {
        let entries = parse(json!([{ "id": 3, "year": 2022, "title": "Dual Basket" }]));
        assert_eq!(entries[0].id.as_str(), "3");
        assert_eq!(entries[0].year, "2022");
        assert_eq!(entries[0].description, "");
        assert_eq!(entries[0].image, None);
    }

    #[test]
    fn drops_records_without_identity_or_title() {
        let entries = parse(json!([
            { "year": "2019", "title": "No id" },
            { "id": "2", "year": "2020" },
            { "id": "3", "title": "   " },
            "not an object",
            { "id": "4", "title": "Kept", "image": "" }
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "4");
        assert_eq!(entries[0].image, None);
    }

    #[test]
    fn relative_images_resolve_against_asset_root() {
        let entries = parse(json!([{ "id": "1", "title": "t", "image": "fryer.png" }]));
        assert_eq!(entries[0].image.as_deref(), Some("/img/fryer.png"));
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let entries = parse(json!([
            { "id": "1", "title": "first" },
            { "id": 1, "title": "second" }
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "first");
    }

    #[test]
    fn empty_payload_is_not_an_error() {
        assert!(parse(json!({ "timeline": [] })).is_empty());
        assert!(parse(json!([])).is_empty());
        assert!(parse(json!({ "timeline": null })).is_empty());
        assert!(parse(json!({})).is_empty());
        assert!(parse(json!({ "items": [{ "id": "1", "title": "elsewhere" }] })).is_empty());
    }

    #[test]
    fn unexpected_top_level_shape_is_rejected() {
        assert!(serde_json::from_value::<TimelinePayload>(json!({ "timeline": 5 })).is_err());
        assert!(serde_json::from_value::<TimelinePayload>(json!({ "timeline": "2020" })).is_err());
        assert!(serde_json::from_value::<TimelinePayload>(json!("timeline")).is_err());
        assert!(serde_json::from_value::<TimelinePayload>(json!(null)).is_err());
    }
}
