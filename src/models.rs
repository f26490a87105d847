use serde::Deserialize;

/// Payload for create and update. Same shape as a movie minus the id;
/// serde rejects missing or mistyped fields before any database work.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub category: String,
    pub duration: i32,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}
