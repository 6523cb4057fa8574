use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    // Identifier is assigned by the caller, not by the database
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

/// Next free identifier: max(id) + 1, or 1 for an empty table.
///
/// The read and the subsequent insert are not atomic, so two concurrent
/// id-less creates can pick the same value; the loser's insert fails with
/// a key conflict.
pub async fn next_id(db: &DatabaseConnection) -> Result<i32, ModelError> {
    let last = Entity::find()
        .order_by_desc(Column::Id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    match last {
        None => Ok(1),
        Some(m) => m
            .id
            .checked_add(1)
            .ok_or_else(|| ModelError::Validation("id space exhausted".into())),
    }
}

/// Insert a user. When `id` is absent an identifier is allocated; a
/// caller-supplied duplicate id surfaces as a database error.
pub async fn create(
    db: &DatabaseConnection,
    id: Option<i32>,
    name: &str,
) -> Result<Model, ModelError> {
    validate_name(name)?;
    let id = match id {
        Some(id) => id,
        None => next_id(db).await?,
    };
    let am = ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Delete by id; returns whether a row was actually removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_not_be_blank() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }
}
