// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const START_VIRTUAL_MACHINE: &str = "/start_virtual_machine/{id}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
