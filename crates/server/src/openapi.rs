use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub name: String,
}

#[derive(ToSchema)]
pub struct CreateUserInputDoc {
    pub id: Option<i32>,
    pub name: String,
}

#[derive(ToSchema)]
pub struct UpdateUserInputDoc {
    pub id: i32,
    pub name: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::get_users,
        crate::routes::users::add_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            CreateUserInputDoc,
            UpdateUserInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
