use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};

use crate::{
    entities::movie,
    error::{ApiError, ApiResult},
    models::NewMovie,
};

/// All SQL access for the movies table. Cloned into each handler via
/// `AppState`; tests construct one over an in-memory database.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> ApiResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// True if a movie with this name exists, optionally ignoring one id
    /// (update must not conflict with the row it is updating).
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> ApiResult<bool> {
        let mut query = movie::Entity::find().filter(movie::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(movie::Column::Id.ne(id));
        }
        Ok(query.one(&self.db).await?.is_some())
    }

    pub async fn list(&self, category: Option<&str>) -> ApiResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(category) = category {
            query = query.filter(movie::Column::Category.eq(category));
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn insert(&self, new: NewMovie) -> ApiResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            name: Set(new.name),
            category: Set(new.category),
            duration: Set(new.duration),
            price: Set(new.price),
        };
        model.insert(&self.db).await.map_err(translate_unique)
    }

    pub async fn update(&self, id: i32, new: NewMovie) -> ApiResult<Option<movie::Model>> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut active: movie::ActiveModel = existing.into();
        active.name = Set(new.name);
        active.category = Set(new.category);
        active.duration = Set(new.duration);
        active.price = Set(new.price);
        let updated = active.update(&self.db).await.map_err(translate_unique)?;
        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> ApiResult<u64> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

/// The unique index on `name` backstops the pre-insert existence check;
/// a concurrent duplicate surfaces here instead of as a 500.
fn translate_unique(err: DbErr) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::NameExists,
        _ => err.into(),
    }
}
