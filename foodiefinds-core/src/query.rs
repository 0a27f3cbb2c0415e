//! Search query construction.
//!
//! Every list-valued parameter (`intolerances`, `diet`, `includeIngredients`)
//! is serialized as a comma-joined string. That is the stable wire contract;
//! the upstream API accepts it for all three.

use reqwest::Url;

pub const DEFAULT_RESULT_COUNT: u32 = 10;
pub const MAX_RESULT_COUNT: u32 = 100;

/// Result ordering hint for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultOrder {
    /// Upstream relevance order; deterministic, no sort parameter sent.
    #[default]
    Relevance,
    /// Shuffled results, for discovery pages.
    Random,
}

/// A recipe search request, before serialization.
///
/// Empty label lists are empty filters: the parameter is omitted entirely
/// rather than sent as an empty string.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub terms: Option<String>,
    pub include_ingredients: Vec<String>,
    pub intolerances: Vec<String>,
    pub diets: Vec<String>,
    /// Result-count cap; defaults to [`DEFAULT_RESULT_COUNT`].
    pub number: Option<u32>,
    pub order: ResultOrder,
}

impl SearchQuery {
    /// Append this query's parameters to a request URL.
    ///
    /// Parameters are appended in a fixed order so the same query always
    /// produces the same URL.
    pub fn apply_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();

        if let Some(terms) = self.terms.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.append_pair("query", terms);
        }
        if !self.include_ingredients.is_empty() {
            pairs.append_pair(
                "includeIngredients",
                &join_labels(&self.include_ingredients),
            );
        }
        if !self.intolerances.is_empty() {
            pairs.append_pair("intolerances", &join_labels(&self.intolerances));
        }
        if !self.diets.is_empty() {
            pairs.append_pair("diet", &join_labels(&self.diets));
        }
        pairs.append_pair("number", &self.result_count().to_string());
        if self.order == ResultOrder::Random {
            pairs.append_pair("sort", "random");
        }
    }

    /// The effective result-count cap, clamped to 1..=[`MAX_RESULT_COUNT`].
    pub fn result_count(&self) -> u32 {
        self.number
            .unwrap_or(DEFAULT_RESULT_COUNT)
            .clamp(1, MAX_RESULT_COUNT)
    }
}

fn join_labels(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(query: &SearchQuery) -> String {
        let mut url = Url::parse("https://api.test/recipes/complexSearch").unwrap();
        query.apply_to(&mut url);
        url.query().unwrap_or_default().to_string()
    }

    #[test]
    fn test_empty_query_only_carries_count() {
        let query = SearchQuery::default();
        assert_eq!(serialize(&query), "number=10");
    }

    #[test]
    fn test_labels_are_comma_joined() {
        let query = SearchQuery {
            intolerances: vec!["Peanut".to_string(), "Shellfish".to_string()],
            diets: vec!["Vegan".to_string(), "Gluten Free".to_string()],
            ..Default::default()
        };
        let serialized = serialize(&query);
        assert!(serialized.contains("intolerances=Peanut%2CShellfish"));
        assert!(serialized.contains("diet=Vegan%2CGluten+Free"));
    }

    #[test]
    fn test_empty_label_lists_omit_parameters() {
        let query = SearchQuery {
            terms: Some("soup".to_string()),
            ..Default::default()
        };
        let serialized = serialize(&query);
        assert!(!serialized.contains("intolerances"));
        assert!(!serialized.contains("diet"));
        assert!(!serialized.contains("includeIngredients"));
    }

    #[test]
    fn test_blank_terms_are_dropped() {
        let query = SearchQuery {
            terms: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!serialize(&query).contains("query="));
    }

    #[test]
    fn test_random_order_adds_sort() {
        let query = SearchQuery {
            order: ResultOrder::Random,
            ..Default::default()
        };
        assert!(serialize(&query).ends_with("sort=random"));
    }

    #[test]
    fn test_count_is_clamped() {
        let query = SearchQuery {
            number: Some(5000),
            ..Default::default()
        };
        assert_eq!(query.result_count(), MAX_RESULT_COUNT);

        let query = SearchQuery {
            number: Some(0),
            ..Default::default()
        };
        assert_eq!(query.result_count(), 1);
    }

    #[test]
    fn test_parameter_order_is_stable() {
        let query = SearchQuery {
            terms: Some("pasta".to_string()),
            include_ingredients: vec!["tomato".to_string()],
            intolerances: vec!["Egg".to_string()],
            diets: vec!["Vegetarian".to_string()],
            number: Some(5),
            order: ResultOrder::Random,
        };
        assert_eq!(
            serialize(&query),
            "query=pasta&includeIngredients=tomato&intolerances=Egg&diet=Vegetarian&number=5&sort=random"
        );
    }
}
