use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "resource-provisioner-mock API",
        version = "1.0.0",
        description = "Test double for a resource provisioning backend"
    ),
    paths(
        handlers::health::health_handler,
        handlers::start_vm::start_virtual_machine,
        handlers::start_vm::start_virtual_machine_get
    ),
    components(
        schemas(
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "provisioning", description = "Mocked resource provisioning commands")
    )
)]
pub struct ApiDoc;
