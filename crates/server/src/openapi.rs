use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct RegisterRequest { pub email: String, pub name: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct ProductInputDoc {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: Option<String>,
    pub category: String,
    pub is_offer: Option<bool>,
    pub in_stock: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct ClientInputDoc {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub document_id: String,
    pub email: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct OrderItemDoc {
    pub category: String,
    pub subcategory: String,
    pub option: String,
    pub price: f64,
}

#[derive(utoipa::ToSchema)]
pub struct OrderInputDoc {
    pub client_id: Uuid,
    pub equipment: String,
    pub problem: Option<String>,
    pub urgency: String,
    pub items: Vec<OrderItemDoc>,
    pub total: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::auth::register,
        crate::auth::login,
        crate::routes::catalog::list_products,
        crate::routes::catalog::facets,
        crate::routes::catalog::get_product,
        crate::routes::catalog::workshop_services,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::settings::list,
        crate::routes::settings::put,
        crate::routes::stats::dashboard,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            ProductInputDoc,
            ClientInputDoc,
            OrderItemDoc,
            OrderInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "catalog"),
        (name = "admin")
    )
)]
pub struct ApiDoc;
