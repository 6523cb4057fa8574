use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use models::user;

/// All users, in storage order. No pagination or filtering.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    let users = user::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(users)
}

/// Create a user. The identifier is caller-supplied or allocated by the
/// entity layer when absent.
pub async fn create_user(
    db: &DatabaseConnection,
    id: Option<i32>,
    name: &str,
) -> Result<user::Model, ServiceError> {
    let created = user::create(db, id, name).await?;
    Ok(created)
}

/// Overwrite an existing user's name. Updating an id that does not exist
/// fails with NotFound instead of creating a row.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
) -> Result<user::Model, ServiceError> {
    user::validate_name(name)?;
    let mut am: user::ActiveModel = user::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?
        .into();
    am.name = Set(name.to_string());
    let updated = am
        .update(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a user by id; a missing id is reported as NotFound, never a
/// silent no-op.
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    if user::delete(db, id).await? {
        Ok(())
    } else {
        Err(ServiceError::not_found("user"))
    }
}
