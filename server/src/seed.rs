//! Reference vocabulary, created once at startup if the tables are empty.
//!
//! The labels are the upstream API's intolerance and diet vocabularies;
//! association rows point at these, users never own them.

use diesel::prelude::*;

use crate::models::{NewAllergy, NewDietPref};
use crate::schema::{allergies, diet_prefs};

pub const ALLERGY_VOCAB: &[&str] = &[
    "Dairy", "Egg", "Gluten", "Grain", "Peanut", "Seafood", "Sesame", "Shellfish", "Soy",
    "Sulfite", "Tree Nut", "Wheat",
];

pub const DIET_VOCAB: &[&str] = &[
    "Gluten Free",
    "Ketogenic",
    "Vegetarian",
    "Lacto-Vegetarian",
    "Ovo-Vegetarian",
    "Vegan",
    "Pescetarian",
    "Paleo",
    "Primal",
    "Whole30",
];

pub fn seed_reference_data(conn: &mut PgConnection) -> QueryResult<()> {
    let existing: i64 = allergies::table.count().get_result(conn)?;
    if existing == 0 {
        let rows: Vec<NewAllergy> = ALLERGY_VOCAB.iter().map(|&name| NewAllergy { name }).collect();
        diesel::insert_into(allergies::table)
            .values(&rows)
            .execute(conn)?;
        tracing::info!(count = ALLERGY_VOCAB.len(), "seeded allergy vocabulary");
    }

    let existing: i64 = diet_prefs::table.count().get_result(conn)?;
    if existing == 0 {
        let rows: Vec<NewDietPref> = DIET_VOCAB.iter().map(|&name| NewDietPref { name }).collect();
        diesel::insert_into(diet_prefs::table)
            .values(&rows)
            .execute(conn)?;
        tracing::info!(count = DIET_VOCAB.len(), "seeded diet vocabulary");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        let allergies: HashSet<_> = ALLERGY_VOCAB.iter().collect();
        assert_eq!(allergies.len(), ALLERGY_VOCAB.len());

        let diets: HashSet<_> = DIET_VOCAB.iter().collect();
        assert_eq!(diets.len(), DIET_VOCAB.len());
    }

    #[test]
    fn test_labels_fit_the_column() {
        for label in ALLERGY_VOCAB.iter().chain(DIET_VOCAB) {
            assert!(!label.trim().is_empty());
            assert!(label.len() <= 64);
        }
    }
}
