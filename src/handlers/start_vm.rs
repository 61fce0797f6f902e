use crate::routes;
use axum::http::{StatusCode, Uri};

/// PUT /start_virtual_machine/{id} handler - Pretend to start a virtual machine
///
/// The identifier is accepted but has no effect; every call succeeds with an
/// empty 204. The segment is never decoded, so undecodable ids still match.
#[utoipa::path(
    put,
    path = routes::START_VIRTUAL_MACHINE,
    params(
        ("id" = String, Path, description = "Identifier of the virtual machine to start")
    ),
    responses(
        (status = 204, description = "Start request accepted")
    ),
    tag = "provisioning"
)]
pub async fn start_virtual_machine(uri: Uri) -> StatusCode {
    tracing::info!(path = %uri.path(), "start_virtual_machine (PUT)");
    StatusCode::NO_CONTENT
}

/// GET /start_virtual_machine/{id} handler - Same contract as the PUT variant
#[utoipa::path(
    get,
    path = routes::START_VIRTUAL_MACHINE,
    params(
        ("id" = String, Path, description = "Identifier of the virtual machine to start")
    ),
    responses(
        (status = 204, description = "Start request accepted")
    ),
    tag = "provisioning"
)]
pub async fn start_virtual_machine_get(uri: Uri) -> StatusCode {
    tracing::info!(path = %uri.path(), "start_virtual_machine (GET)");
    StatusCode::NO_CONTENT
}
