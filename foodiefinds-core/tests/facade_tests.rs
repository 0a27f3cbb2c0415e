//! Façade tests driven through the mock HTTP client.
//!
//! The mock matches on the exact request URL, so these tests pin down the
//! query serialization contract as well as the response mapping.

use std::sync::Arc;

use foodiefinds_core::{
    ApiError, MockClient, RecipeHit, ResultOrder, SearchOutcome, SearchQuery, SpoonacularClient,
};
use reqwest::Url;

const BASE: &str = "https://api.test";
const KEY: &str = "test-key";

fn client(mock: MockClient) -> SpoonacularClient {
    SpoonacularClient::with_http(Arc::new(mock), Url::parse(BASE).unwrap(), KEY)
}

/// Build the URL the client is expected to request, using the same URL API
/// the client uses so percent-encoding matches exactly.
fn expected_url(segments: &[&str], pairs: &[(&str, &str)]) -> String {
    let mut url = Url::parse(BASE).unwrap();
    url.path_segments_mut().unwrap().extend(segments);
    for (key, value) in pairs {
        url.query_pairs_mut().append_pair(key, value);
    }
    url.to_string()
}

#[tokio::test]
async fn search_serializes_preferences_as_comma_joined_lists() {
    let url = expected_url(
        &["recipes", "complexSearch"],
        &[
            ("query", "pasta"),
            ("intolerances", "Peanut,Tree Nut"),
            ("diet", "Vegan"),
            ("number", "10"),
            ("apiKey", KEY),
        ],
    );
    let mock = MockClient::new().with_body(
        &url,
        r#"{"results": [{"id": 716429, "title": "Pasta with Garlic"}], "totalResults": 1}"#,
    );

    let query = SearchQuery {
        terms: Some("pasta".to_string()),
        intolerances: vec!["Peanut".to_string(), "Tree Nut".to_string()],
        diets: vec!["Vegan".to_string()],
        ..Default::default()
    };

    let outcome = client(mock).search(&query).await.unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Matches(vec![RecipeHit {
            id: 716429,
            title: "Pasta with Garlic".to_string(),
        }])
    );
}

#[tokio::test]
async fn search_with_no_preferences_sends_no_filter_parameters() {
    let url = expected_url(
        &["recipes", "complexSearch"],
        &[("query", "soup"), ("number", "10"), ("apiKey", KEY)],
    );
    let mock = MockClient::new().with_body(&url, r#"{"results": [{"id": 1, "title": "Soup"}]}"#);

    let query = SearchQuery {
        terms: Some("soup".to_string()),
        ..Default::default()
    };

    // A mismatched URL would miss the mock and fail; reaching Matches proves
    // the empty preference sets were omitted entirely.
    assert!(matches!(
        client(mock).search(&query).await.unwrap(),
        SearchOutcome::Matches(_)
    ));
}

#[tokio::test]
async fn search_reports_empty_results_as_no_matches() {
    let url = expected_url(
        &["recipes", "complexSearch"],
        &[("number", "10"), ("apiKey", KEY)],
    );
    let mock = MockClient::new().with_body(&url, r#"{"results": [], "totalResults": 0}"#);

    let outcome = client(mock).search(&SearchQuery::default()).await.unwrap();
    assert_eq!(outcome, SearchOutcome::NoMatches);
}

#[tokio::test]
async fn search_surfaces_upstream_status_code() {
    let url = expected_url(
        &["recipes", "complexSearch"],
        &[("number", "10"), ("apiKey", KEY)],
    );
    let mock = MockClient::new().with_status(&url, 402, r#"{"message": "quota exhausted"}"#);

    let err = client(mock)
        .search(&SearchQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UpstreamStatus(402)));
}

#[tokio::test]
async fn search_with_random_order_requests_shuffled_results() {
    let url = expected_url(
        &["recipes", "complexSearch"],
        &[("number", "10"), ("sort", "random"), ("apiKey", KEY)],
    );
    let mock = MockClient::new().with_body(&url, r#"{"results": [{"id": 3, "title": "Stew"}]}"#);

    let query = SearchQuery {
        order: ResultOrder::Random,
        ..Default::default()
    };
    assert!(client(mock).search(&query).await.is_ok());
}

#[tokio::test]
async fn detail_maps_full_payload() {
    let url = expected_url(
        &["recipes", "716429", "information"],
        &[("includeNutrition", "false"), ("apiKey", KEY)],
    );
    let mock = MockClient::new().with_body(
        &url,
        r#"{
            "id": 716429,
            "title": "Pasta with Garlic",
            "image": "https://img.test/716429.jpg",
            "extendedIngredients": [
                {"original": "8 oz spaghetti"},
                {"original": "3 cloves garlic, minced"}
            ],
            "instructions": "<ol><li>Boil the pasta.</li><li>Saute the garlic.</li></ol>"
        }"#,
    );

    let detail = client(mock).detail(716429).await.unwrap();
    assert_eq!(detail.title, "Pasta with Garlic");
    assert_eq!(detail.image_url, "https://img.test/716429.jpg");
    assert_eq!(
        detail.ingredients,
        vec!["8 oz spaghetti", "3 cloves garlic, minced"]
    );
    assert_eq!(detail.instructions, "Boil the pasta.\nSaute the garlic.");
}

#[tokio::test]
async fn detail_without_title_is_malformed_payload() {
    let url = expected_url(
        &["recipes", "5", "information"],
        &[("includeNutrition", "false"), ("apiKey", KEY)],
    );
    let mock = MockClient::new().with_body(&url, r#"{"id": 5, "instructions": "Stir."}"#);

    let err = client(mock).detail(5).await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedPayload(_)));
}

#[tokio::test]
async fn detail_transport_failure_is_a_request_error() {
    let mock = MockClient::new();
    let err = client(mock).detail(5).await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

#[tokio::test]
async fn random_feed_maps_recipe_list() {
    let url = expected_url(
        &["recipes", "random"],
        &[
            ("limitLicense", "true"),
            ("number", "10"),
            ("apiKey", KEY),
        ],
    );
    let mock = MockClient::new().with_body(
        &url,
        r#"{"recipes": [{"id": 9, "title": "Chili"}, {"id": 10, "title": "Curry"}]}"#,
    );

    let feed = client(mock).random_feed(10).await.unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].title, "Chili");
}

#[tokio::test]
async fn non_json_body_is_malformed_payload() {
    let url = expected_url(
        &["recipes", "random"],
        &[
            ("limitLicense", "true"),
            ("number", "10"),
            ("apiKey", KEY),
        ],
    );
    let mock = MockClient::new().with_body(&url, "<html>maintenance page</html>");

    let err = client(mock).random_feed(10).await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedPayload(_)));
}
