use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::config;
use crate::models::common::{dedup_by_key, non_blank, EntryKey, RawScalar};

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeEntry {
    pub id: EntryKey,
    pub title: String,
    pub image: Option<String>,
    pub time: String,
    pub description: String,
    pub vegan: bool,
}

#[derive(Deserialize, Debug)]
struct RawRecipeEntry {
    id: Option<RawScalar>,
    title: Option<String>,
    image: Option<String>,
    time: Option<RawScalar>,
    description: Option<String>,
    #[serde(default)]
    vegan: bool,
}

/// `GET /recipes` answers with a bare array.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct RecipesPayload(Vec<Value>);

impl RecipesPayload {
    pub fn into_entries(self) -> Vec<RecipeEntry> {
        let entries = self
            .0
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| normalize(position, record))
            .collect();
        dedup_by_key(entries, |entry: &RecipeEntry| &entry.id)
    }
}

fn normalize(position: usize, record: Value) -> Option<RecipeEntry> {
    let raw: RawRecipeEntry = match serde_json::from_value(record) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Skipping recipe record {}: {}", position, e);
            return None;
        }
    };
    let Some(id) = raw.id.and_then(RawScalar::into_text) else {
        warn!("Skipping recipe record {}: missing id", position);
        return None;
    };
    let Some(title) = non_blank(raw.title) else {
        warn!("Skipping recipe record {}: missing title", position);
        return None;
    };
    Some(RecipeEntry {
        id: EntryKey::new(id),
        title,
        image: non_blank(raw.image).map(|name| config::asset_url(&name)),
        time: raw.time.and_then(RawScalar::into_text).unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        vegan: raw.vegan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Vec<RecipeEntry> {
        serde_json::from_value::<RecipesPayload>(value)
            .map(RecipesPayload::into_entries)
            .unwrap_or_else(|e| panic!("payload should parse: {}", e))
    }

    #[test]
    fn parses_recipe_list() {
        let recipes = parse(json!([
            { "id": 1, "title": "Crispy Fries", "image": "fries.jpg", "time": "15 min", "description": "Golden.", "vegan": true },
            { "id": 2, "title": "Chicken Wings", "image": "wings.jpg", "time": "25 min", "description": "Spicy.", "vegan": false }
        ]));
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id.as_str(), "1");
        assert_eq!(recipes[0].image.as_deref(), Some("/img/fries.jpg"));
        assert!(recipes[0].vegan);
        assert!(!recipes[1].vegan);
        assert_eq!(recipes[1].time, "25 min");
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let recipes = parse(json!([{ "id": "x", "title": "Toast" }]));
        assert_eq!(
            recipes[0],
            RecipeEntry {
                id: EntryKey::new("x"),
                title: "Toast".to_string(),
                image: None,
                time: String::new(),
                description: String::new(),
                vegan: false,
            }
        );
    }

    #[test]
    fn malformed_records_are_dropped() {
        let recipes = parse(json!([
            { "title": "No id" },
            { "id": 5, "title": "Bad vegan flag", "vegan": "yes" },
            { "id": 6, "title": "Kept" }
        ]));
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id.as_str(), "6");
    }

    #[test]
    fn wrapped_object_is_not_a_recipe_list() {
        assert!(serde_json::from_value::<RecipesPayload>(json!({ "recipes": [] })).is_err());
    }
}
