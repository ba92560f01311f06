//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::loader_requests::create_loader_request,
        handlers::loader_requests::list_loader_requests,
        handlers::loader_requests::get_loader_request,
        handlers::report::download_report,
        handlers::logo::upload_logo,
    ),
    components(schemas(
        ErrorResponse,
        gudang_core::models::CreateLoaderRequest,
        gudang_core::models::LoaderRequestResponse,
        gudang_core::models::Shift,
        gudang_core::models::Transaction,
        handlers::health::HealthResponse,
        handlers::loader_requests::CreateResponse,
        handlers::loader_requests::ListResponse,
        handlers::loader_requests::GetResponse,
        handlers::logo::LogoResponse,
    )),
    tags(
        (name = "loader-requests", description = "Warehouse loader-request records"),
        (name = "logo", description = "Company logo asset"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
