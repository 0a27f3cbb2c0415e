//! Preference aggregation: resolve a user's association rows to the label
//! strings the external API expects.

use diesel::prelude::*;
use foodiefinds_core::SearchQuery;
use uuid::Uuid;

use crate::schema::{allergies, diet_prefs, user_allergies, user_diet_prefs};

/// A user's active preference labels.
///
/// Both sets are empty (never an error) for a user with no associations;
/// callers treat that as an unfiltered search, not a special case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub allergies: Vec<String>,
    pub diets: Vec<String>,
}

impl Preferences {
    /// Compose a search query from free-text terms, required ingredients,
    /// and these preference sets.
    pub fn into_query(self, terms: Option<String>, include_ingredients: Vec<String>) -> SearchQuery {
        SearchQuery {
            terms,
            include_ingredients,
            intolerances: self.allergies,
            diets: self.diets,
            ..Default::default()
        }
    }
}

pub fn load_preferences(conn: &mut PgConnection, user_id: Uuid) -> QueryResult<Preferences> {
    let allergy_labels = user_allergies::table
        .inner_join(allergies::table)
        .filter(user_allergies::user_id.eq(user_id))
        .select(allergies::name)
        .order(allergies::name.asc())
        .load::<String>(conn)?;

    let diet_labels = user_diet_prefs::table
        .inner_join(diet_prefs::table)
        .filter(user_diet_prefs::user_id.eq(user_id))
        .select(diet_prefs::name)
        .order(diet_prefs::name.asc())
        .load::<String>(conn)?;

    Ok(Preferences {
        allergies: allergy_labels,
        diets: diet_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_preferences_build_an_unfiltered_query() {
        let query = Preferences::default().into_query(Some("soup".to_string()), Vec::new());
        assert!(query.intolerances.is_empty());
        assert!(query.diets.is_empty());
        assert_eq!(query.terms.as_deref(), Some("soup"));
    }

    #[test]
    fn test_preference_labels_flow_into_query_filters() {
        let prefs = Preferences {
            allergies: vec!["Peanut".to_string()],
            diets: vec!["Vegan".to_string(), "Gluten Free".to_string()],
        };
        let query = prefs.into_query(None, vec!["tomato".to_string()]);
        assert_eq!(query.intolerances, vec!["Peanut"]);
        assert_eq!(query.diets, vec!["Vegan", "Gluten Free"]);
        assert_eq!(query.include_ingredients, vec!["tomato"]);
    }
}
