//! Mapping of upstream JSON payloads into display records.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::error::ApiError;
use crate::types::{RecipeDetail, RecipeHit, SearchOutcome};

pub(crate) fn parse_json(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::MalformedPayload(format!("invalid JSON: {e}")))
}

/// Extract search results from a `complexSearch` payload.
///
/// An empty `results` array is reported as [`SearchOutcome::NoMatches`];
/// a payload without a `results` array at all is malformed.
pub(crate) fn extract_search_results(json: &Value) -> Result<SearchOutcome, ApiError> {
    let results = json
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::MalformedPayload("missing results array".to_string()))?;

    let hits = collect_hits(results);
    if hits.is_empty() {
        Ok(SearchOutcome::NoMatches)
    } else {
        Ok(SearchOutcome::Matches(hits))
    }
}

/// Extract the random discovery feed from a `/recipes/random` payload.
pub(crate) fn extract_random_feed(json: &Value) -> Result<Vec<RecipeHit>, ApiError> {
    let recipes = json
        .get("recipes")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::MalformedPayload("missing recipes array".to_string()))?;

    Ok(collect_hits(recipes))
}

fn collect_hits(items: &[Value]) -> Vec<RecipeHit> {
    items
        .iter()
        .filter_map(|item| {
            let id = item.get("id").and_then(Value::as_i64)?;
            let title = item.get("title").and_then(Value::as_str)?;
            Some(RecipeHit {
                id,
                title: title.trim().to_string(),
            })
        })
        .collect()
}

/// Extract recipe detail from a `/recipes/{id}/information` payload.
///
/// A missing `title` is a malformed payload. Everything else degrades:
/// image defaults to empty, ingredients to an empty list, instructions to
/// an empty string.
pub(crate) fn extract_detail(recipe_id: i64, json: &Value) -> Result<RecipeDetail, ApiError> {
    let title = json
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::MalformedPayload("missing title".to_string()))?
        .trim()
        .to_string();

    let image_url = json
        .get("image")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let ingredients = json
        .get("extendedIngredients")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("original").and_then(Value::as_str))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let instructions = json
        .get("instructions")
        .and_then(Value::as_str)
        .map(instructions_to_text)
        .unwrap_or_default();

    Ok(RecipeDetail {
        id: recipe_id,
        title,
        image_url,
        ingredients,
        instructions,
    })
}

/// Strip markup from an upstream instructions field.
///
/// Instructions usually arrive as `<ol><li>...</li></ol>`; list items become
/// one step per line, in document order. Payloads without list items fall
/// back to paragraph blocks, then to the bare text content.
pub fn instructions_to_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);

    let li = Selector::parse("li").expect("Invalid selector");
    let steps: Vec<String> = fragment
        .select(&li)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect();
    if !steps.is_empty() {
        return steps.join("\n");
    }

    let p = Selector::parse("p").expect("Invalid selector");
    let blocks: Vec<String> = fragment
        .select(&p)
        .map(element_text)
        .filter(|s| !s.is_empty())
        .collect();
    if !blocks.is_empty() {
        return blocks.join("\n\n");
    }

    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_become_lines() {
        let html = "<ol><li>Boil water.</li><li>Add salt.</li><li>Serve.</li></ol>";
        assert_eq!(
            instructions_to_text(html),
            "Boil water.\nAdd salt.\nServe."
        );
    }

    #[test]
    fn test_nested_markup_inside_items_is_flattened() {
        let html = "<ol><li>Whisk the <b>eggs</b>\n  until fluffy</li></ol>";
        assert_eq!(instructions_to_text(html), "Whisk the eggs until fluffy");
    }

    #[test]
    fn test_paragraphs_fall_back_to_blocks() {
        let html = "<p>Preheat the oven.</p><p>Bake for an hour.</p>";
        assert_eq!(
            instructions_to_text(html),
            "Preheat the oven.\n\nBake for an hour."
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(instructions_to_text("Boil it."), "Boil it.");
    }

    #[test]
    fn test_empty_markup_yields_empty_string() {
        assert_eq!(instructions_to_text(""), "");
        assert_eq!(instructions_to_text("  "), "");
    }

    #[test]
    fn test_detail_missing_title_is_malformed() {
        let json = serde_json::json!({"id": 7, "instructions": "Boil it."});
        let err = extract_detail(7, &json).unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload(_)));
    }

    #[test]
    fn test_detail_defaults_for_optional_fields() {
        let json = serde_json::json!({"title": "Soup"});
        let detail = extract_detail(42, &json).unwrap();
        assert_eq!(detail.id, 42);
        assert_eq!(detail.title, "Soup");
        assert_eq!(detail.image_url, "");
        assert!(detail.ingredients.is_empty());
        assert_eq!(detail.instructions, "");
    }

    #[test]
    fn test_detail_flattens_ingredient_display_strings() {
        let json = serde_json::json!({
            "title": "Soup",
            "extendedIngredients": [
                {"original": "2 cups water", "name": "water"},
                {"original": " 1 tsp salt "},
                {"name": "no display string"}
            ]
        });
        let detail = extract_detail(1, &json).unwrap();
        assert_eq!(detail.ingredients, vec!["2 cups water", "1 tsp salt"]);
    }

    #[test]
    fn test_empty_results_is_no_matches() {
        let json = serde_json::json!({"results": [], "totalResults": 0});
        assert_eq!(
            extract_search_results(&json).unwrap(),
            SearchOutcome::NoMatches
        );
    }

    #[test]
    fn test_missing_results_array_is_malformed() {
        let json = serde_json::json!({"status": "ok"});
        assert!(matches!(
            extract_search_results(&json),
            Err(ApiError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_results_map_to_hits_in_order() {
        let json = serde_json::json!({
            "results": [
                {"id": 11, "title": "Minestrone"},
                {"id": 22, "title": "Ramen"}
            ]
        });
        let SearchOutcome::Matches(hits) = extract_search_results(&json).unwrap() else {
            panic!("expected matches");
        };
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 11);
        assert_eq!(hits[1].title, "Ramen");
    }
}
