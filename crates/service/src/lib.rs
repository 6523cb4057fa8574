//! Service layer delegating CRUD operations to the entity layer.
pub mod errors;
pub mod user_service;

#[cfg(test)]
mod test_support;
