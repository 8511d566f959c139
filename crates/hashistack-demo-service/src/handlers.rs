//! Request handlers.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
    http::Uri,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use hashistack_demo_lib::optional::{display_name, length, safe_find};
use hashistack_demo_lib::{UpstreamResult, UserInfo};
use hashistack_demo_service_shared::{AppState, ProblemDetails, RequestId, from_lib_error};

pub const GREETING: &str = "Hello from Spring Boot (simple HashiStack example)";
pub const DB_USER_NOT_SET: &str = "(not set)";
pub const NULL_SAFETY_MESSAGE: &str = "Null safety example - Spring Boot 4.0.0 with Java 25";
pub const EMAIL_NOT_FOUND: &str = "Not found";

pub const SPRING_BOOT_VERSION: &str = "4.0.0";
pub const JAVA_VERSION: &str = "25";
pub const VERSION_MESSAGE: &str = "Running with enhanced null safety features";

const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";

/// Body of `GET /hello`. Exactly one of each `*_raw` / `*_error` pair is set.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    message: &'static str,
    db_user: String,
    db_pass_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    consul_services_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consul_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vault_secret_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vault_error: Option<String>,
}

/// Split an upstream outcome into its `(raw, error)` response keys.
fn into_keys(result: UpstreamResult) -> (Option<String>, Option<String>) {
    match result {
        Ok(body) => (Some(body), None),
        Err(e) => (None, Some(e.to_string())),
    }
}

/// Handle GET /hello.
///
/// Always answers 200; upstream failures are reported in the body.
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    let db_user = state
        .env()
        .var("DB_USER")
        .unwrap_or_else(|| DB_USER_NOT_SET.to_string());
    let db_pass_present = state.env().is_set("DB_PASS");

    let endpoints = state.endpoints();
    let (consul_services_raw, consul_error) =
        into_keys(state.client().get(&endpoints.consul_services, &[]).await);
    let (vault_secret_raw, vault_error) = into_keys(
        state
            .client()
            .get(
                &endpoints.vault_secret,
                &[(VAULT_TOKEN_HEADER, state.vault_token())],
            )
            .await,
    );

    info!(
        db_pass_present,
        consul_ok = consul_error.is_none(),
        vault_ok = vault_error.is_none(),
        "hello served"
    );

    Json(HelloResponse {
        message: GREETING,
        db_user,
        db_pass_present,
        consul_services_raw,
        consul_error,
        vault_secret_raw,
        vault_error,
    })
}

/// Query parameters of `GET /null-safety-demo`; all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NullSafetyQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserInfoView {
    id: String,
    name: String,
    contact: String,
}

impl From<&UserInfo> for UserInfoView {
    fn from(info: &UserInfo) -> Self {
        Self {
            id: info.id().to_string(),
            name: info.name().to_string(),
            contact: info.contact_info().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NullSafetyResponse {
    display_name: String,
    email_found: bool,
    email_value: String,
    email_length: usize,
    user_info: UserInfoView,
    message: &'static str,
}

/// Handle GET /null-safety-demo.
pub async fn null_safety_demo(
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<NullSafetyQuery>, QueryRejection>,
) -> Result<Json<NullSafetyResponse>, ProblemDetails> {
    let Query(query) = query.map_err(|rejection| {
        warn!(request_id = %request_id, error = %rejection, "rejected query");
        ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
    })?;

    let email = query.email.as_deref();
    let display_name = display_name(query.first_name.as_deref(), query.last_name.as_deref());
    let found = safe_find(email);

    let user_info = UserInfo::new(
        Some(format!("user-{}", timestamp_nanos())),
        Some(display_name.clone()),
        query.email.clone(),
        None,
    )
    .map_err(|e| from_lib_error(&e, request_id.as_str()))?;

    Ok(Json(NullSafetyResponse {
        email_found: found.is_some(),
        email_value: found.unwrap_or_else(|| EMAIL_NOT_FOUND.to_string()),
        email_length: length(email),
        user_info: UserInfoView::from(&user_info),
        display_name,
        message: NULL_SAFETY_MESSAGE,
    }))
}

fn timestamp_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

/// Body of `GET /version`. Field order is the serialized key order.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    spring_boot_version: &'static str,
    java_version: &'static str,
    message: &'static str,
}

/// Handle GET /version.
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        spring_boot_version: SPRING_BOOT_VERSION,
        java_version: JAVA_VERSION,
        message: VERSION_MESSAGE,
    })
}

/// Fallback for paths no route matches.
pub async fn not_found(Extension(request_id): Extension<RequestId>, uri: Uri) -> ProblemDetails {
    ProblemDetails::not_found(uri.path(), request_id.as_str())
}
