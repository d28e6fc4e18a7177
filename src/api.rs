// API client module: contains a small blocking HTTP client that talks to
// the HoosHungry GraphQL backend. It is intentionally small and
// synchronous; the program makes exactly one request per run.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The one query this client ever sends. Variables carry the hall id and
/// the fixed demo preferences.
const RECOMMEND_QUERY: &str = r#"
  query Recommend($hallId: Int!, $prefs: PreferenceInput!, $limit: Int) {
    recommend(hallId: $hallId, prefs: $prefs, limit: $limit) {
      id
      name
      calories
      vegan
      vegetarian
      popularityScore
      score
    }
  }
"#;

const RECOMMEND_LIMIT: i64 = 10;

/// Scoring and filtering parameters sent to the server. Field names
/// mirror the backend's `PreferenceInput` GraphQL type. The three weights
/// are passed through as-is; the server owns any normalization.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceInput {
    pub vegan_only: bool,
    pub vegetarian_only: bool,
    pub max_calories: Option<i32>,
    pub query: String,
    pub popularity_weight: f64,
    pub dietary_weight: f64,
    pub calorie_weight: f64,
}

/// The fixed demo preferences: no dietary filters, a 700 kcal cap, a
/// "pizza" text query, and popularity-leaning weights.
impl Default for PreferenceInput {
    fn default() -> Self {
        PreferenceInput {
            vegan_only: false,
            vegetarian_only: false,
            max_calories: Some(700),
            query: "pizza".into(),
            popularity_weight: 0.45,
            dietary_weight: 0.35,
            calorie_weight: 0.20,
        }
    }
}

/// Variables object for the `recommend` query.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecommendVariables {
    pub hall_id: i64,
    pub limit: i64,
    pub prefs: PreferenceInput,
}

/// Standard GraphQL request body: `{query, variables}`.
#[derive(Serialize, Debug)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: RecommendVariables,
}

impl GraphqlRequest {
    /// Build the fixed request for one hall. Everything but the hall id
    /// is a constant.
    pub fn recommend(hall_id: i64) -> Self {
        GraphqlRequest {
            query: RECOMMEND_QUERY,
            variables: RecommendVariables {
                hall_id,
                limit: RECOMMEND_LIMIT,
                prefs: PreferenceInput::default(),
            },
        }
    }
}

/// One ranked item from the backend. `calories`, `vegan` and
/// `vegetarian` are nullable upstream; display sentinels are applied in
/// the accessors rather than at parse time.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedItem {
    pub id: i64,
    pub name: String,
    pub calories: Option<i64>,
    pub vegan: Option<bool>,
    pub vegetarian: Option<bool>,
    pub popularity_score: f64,
    pub score: f64,
}

impl RecommendedItem {
    /// Calories with the `-1` sentinel for missing data.
    pub fn kcal(&self) -> i64 {
        self.calories.unwrap_or(-1)
    }

    /// Vegan flag, treating missing data as `false`.
    pub fn is_vegan(&self) -> bool {
        self.vegan.unwrap_or(false)
    }

    /// Vegetarian flag, treating missing data as `false`.
    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian.unwrap_or(false)
    }
}

/// GraphQL response envelope. `errors` stays untyped; it is only ever
/// pretty-printed into a diagnostic.
#[derive(Deserialize, Debug)]
struct GraphqlResponse {
    data: Option<RecommendData>,
    errors: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
struct RecommendData {
    recommend: Vec<RecommendedItem>,
}

/// Blocking client holding a reqwest client and the endpoint URL.
#[derive(Clone)]
pub struct RecommendClient {
    client: Client,
    endpoint: String,
}

impl RecommendClient {
    /// Create a client for the given endpoint. The request timeout is a
    /// sane default so a dead endpoint fails instead of hanging forever.
    pub fn new(endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(RecommendClient { client, endpoint })
    }

    /// POST the fixed `recommend` query for one hall and return the
    /// ranked items. Every failure mode is terminal: non-200 status,
    /// a GraphQL `errors` field, or a body that is not the expected
    /// envelope.
    pub fn recommend(&self, hall_id: i64) -> Result<Vec<RecommendedItem>> {
        let body = GraphqlRequest::recommend(hall_id);
        let res = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .with_context(|| format!("Failed to reach {}", self.endpoint))?;

        let status = res.status();
        let text = res.text().unwrap_or_else(|_| "".into());
        if status != StatusCode::OK {
            bail!("HTTP {}\n{}", status.as_u16(), text);
        }

        let envelope: GraphqlResponse =
            serde_json::from_str(&text).context("Malformed response body (expected JSON)")?;
        if let Some(errors) = envelope.errors {
            let pretty = serde_json::to_string_pretty(&errors)
                .unwrap_or_else(|_| errors.to_string());
            bail!("GraphQL errors:\n{}", pretty);
        }
        match envelope.data {
            Some(data) => Ok(data.recommend),
            None => bail!("Malformed response body (missing data.recommend)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_variables_carry_hall_id_and_fixed_constants() {
        let body = serde_json::to_value(GraphqlRequest::recommend(7)).unwrap();
        assert_eq!(body["variables"]["hallId"], json!(7));
        assert_eq!(body["variables"]["limit"], json!(10));
        let prefs = &body["variables"]["prefs"];
        assert_eq!(prefs["veganOnly"], json!(false));
        assert_eq!(prefs["vegetarianOnly"], json!(false));
        assert_eq!(prefs["maxCalories"], json!(700));
        assert_eq!(prefs["query"], json!("pizza"));
        assert_eq!(prefs["popularityWeight"], json!(0.45));
        assert_eq!(prefs["dietaryWeight"], json!(0.35));
        assert_eq!(prefs["calorieWeight"], json!(0.20));
    }

    #[test]
    fn query_document_requests_all_item_fields() {
        for field in [
            "id",
            "name",
            "calories",
            "vegan",
            "vegetarian",
            "popularityScore",
            "score",
        ] {
            assert!(RECOMMEND_QUERY.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn item_sentinels_cover_missing_fields() {
        let item: RecommendedItem = serde_json::from_value(json!({
            "id": 3,
            "name": "Mystery Soup",
            "calories": null,
            "vegan": null,
            "vegetarian": null,
            "popularityScore": 0.2,
            "score": 0.41
        }))
        .unwrap();
        assert_eq!(item.kcal(), -1);
        assert!(!item.is_vegan());
        assert!(!item.is_vegetarian());
    }

    #[test]
    fn item_parses_populated_fields() {
        let item: RecommendedItem = serde_json::from_value(json!({
            "id": 1,
            "name": "Veggie Pizza",
            "calories": 650,
            "vegan": false,
            "vegetarian": true,
            "popularityScore": 0.8,
            "score": 0.91
        }))
        .unwrap();
        assert_eq!(item.kcal(), 650);
        assert!(!item.is_vegan());
        assert!(item.is_vegetarian());
        assert_eq!(item.score, 0.91);
    }
}
