use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::allergies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Allergy {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::allergies)]
pub struct NewAllergy<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::diet_prefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DietPref {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::diet_prefs)]
pub struct NewDietPref<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_allergies)]
pub struct NewUserAllergy {
    pub user_id: Uuid,
    pub allergy_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_diet_prefs)]
pub struct NewUserDietPref {
    pub user_id: Uuid,
    pub diet_pref_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::fav_recipes)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub recipe_id: i64,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::user_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub photo_url: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_recipes)]
pub struct NewUserRecipe<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub photo_url: Option<&'a str>,
    pub ingredients: &'a str,
    pub instructions: &'a str,
}
