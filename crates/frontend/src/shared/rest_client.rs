//! Generic REST client for the school backend.
//!
//! Every resource follows the same pattern:
//! - `GET    /{path}?page&limit&search&sortBy&sortDir` → list envelope
//! - `GET    /{path}/{id}`                              → entity envelope
//! - `POST   /{path}`                                   → create
//! - `PUT    /{path}` (primary key inline in the body)  → update
//! - `DELETE /{path}/{id}`                              → delete
//!
//! The bearer token is read from storage on every call.

use contracts::domain::a001_student::Student;
use contracts::domain::a002_teacher::Teacher;
use contracts::domain::a003_user::User;
use contracts::domain::a004_grade::Grade;
use contracts::domain::a005_course::Course;
use contracts::domain::a006_shift::Shift;
use contracts::domain::a007_academic_level::AcademicLevel;
use contracts::domain::a008_cycle::Cycle;
use contracts::domain::common::{Entity, Resource};
use contracts::shared::list_envelope::{
    decode_entity, decode_list_page, has_list_field, server_message, ListPage,
};
use contracts::shared::list_state::{ListQuery, SortDirection, PAGE_SIZE_OPTIONS};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

/// Dropdown entry for reference fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

fn resource_url(resource: Resource) -> String {
    api_url(&format!("/{}", resource.path()))
}

fn item_url(resource: Resource, id: &str) -> String {
    api_url(&format!("/{}/{}", resource.path(), urlencoding::encode(id)))
}

/// Interprets a finished HTTP exchange.
///
/// Non-2xx statuses become `ApiError::Server` when the body carries a
/// `message`, `ApiError::Status` otherwise. An empty 2xx body is `Null`.
pub(crate) fn interpret_response(status: u16, ok: bool, text: &str) -> Result<Value, ApiError> {
    let parsed = if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(text)
    };

    if !ok {
        let message = parsed.ok().as_ref().and_then(server_message);
        return Err(ApiError::from_status(status, message));
    }

    parsed.map_err(|e| ApiError::Other(format!("Respuesta inválida del servidor: {}", e)))
}

async fn finish(method: &str, url: &str, result: Result<Response, gloo_net::Error>) -> Result<Value, ApiError> {
    let response = result.map_err(|e| {
        log::error!("{} {} failed: {}", method, url, e);
        ApiError::Unreachable
    })?;

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Other(e.to_string()))?;

    let outcome = interpret_response(status, ok, &text);
    if let Err(err) = &outcome {
        log::error!("{} {} -> {}: {}", method, url, status, err);
        if err.is_unauthorized() {
            storage::clear_token();
        }
    }
    outcome
}

// ============================================================================
// Reads
// ============================================================================

/// Fetch one page of a resource list
pub async fn fetch_page<E: DeserializeOwned>(
    resource: Resource,
    query: &ListQuery,
) -> Result<ListPage<E>, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Other(e.to_string()))?;
    let url = format!("{}?{}", resource_url(resource), qs);
    log::debug!("GET {}", url);

    let result = with_auth(Request::get(&url)).send().await;
    let body = finish("GET", &url, result).await?;

    if !has_list_field(&body, resource.list_field()) {
        log::warn!(
            "`{}` missing or not an array in GET /{}; showing an empty list",
            resource.list_field(),
            resource.path()
        );
    }
    Ok(decode_list_page(&body, resource.list_field(), query.limit)?)
}

/// Fetch a single entity
pub async fn fetch_one<E: DeserializeOwned>(resource: Resource, id: &str) -> Result<E, ApiError> {
    let url = item_url(resource, id);
    log::debug!("GET {}", url);

    let result = with_auth(Request::get(&url)).send().await;
    let body = finish("GET", &url, result).await?;
    Ok(decode_entity(&body, resource.entity_field())?)
}

/// Load `{value, label}` pairs for a reference dropdown: every page at the
/// largest page size, default sort.
pub async fn fetch_options(resource: Resource) -> Result<Vec<SelectOption>, ApiError> {
    let query = ListQuery {
        page: 1,
        limit: PAGE_SIZE_OPTIONS[PAGE_SIZE_OPTIONS.len() - 1],
        search: String::new(),
        sort_by: resource.default_sort_field().to_string(),
        sort_dir: SortDirection::Asc,
    };
    match resource {
        Resource::Students => options::<Student>(&query).await,
        Resource::Teachers => options::<Teacher>(&query).await,
        Resource::Users => options::<User>(&query).await,
        Resource::Grades => options::<Grade>(&query).await,
        Resource::Courses => options::<Course>(&query).await,
        Resource::Shifts => options::<Shift>(&query).await,
        Resource::AcademicLevels => options::<AcademicLevel>(&query).await,
        Resource::Cycles => options::<Cycle>(&query).await,
    }
}

async fn options<E: Entity + DeserializeOwned>(query: &ListQuery) -> Result<Vec<SelectOption>, ApiError> {
    let mut query = query.clone();
    let mut options = Vec::new();
    loop {
        let page = fetch_page::<E>(E::RESOURCE, &query).await?;
        options.extend(page.items.iter().map(|e| SelectOption {
            value: e.id_string(),
            label: e.display_name(),
        }));
        match next_page(query.page, &page) {
            Some(next) => query.page = next,
            None => break,
        }
    }
    log::debug!("{} options for /{}", options.len(), E::RESOURCE.path());
    Ok(options)
}

/// Page to request after `current`, while the server reports more pages
/// and keeps returning rows
fn next_page<E>(current: u32, page: &ListPage<E>) -> Option<u32> {
    (current < page.total_pages && !page.items.is_empty()).then_some(current + 1)
}

// ============================================================================
// Writes
// ============================================================================

/// Body of `PUT /{path}`: the draft plus the primary key field
pub(crate) fn update_body<D: Serialize>(resource: Resource, id: i64, draft: &D) -> Result<Value, ApiError> {
    let mut body = serde_json::to_value(draft).map_err(|e| ApiError::Other(e.to_string()))?;
    match body.as_object_mut() {
        Some(object) => {
            object.insert(resource.id_field().to_string(), Value::from(id));
            Ok(body)
        }
        None => Err(ApiError::Other("El formulario no produjo un objeto JSON".to_string())),
    }
}

/// Create an entity; returns the server's message, if any
pub async fn create<D: Serialize>(resource: Resource, draft: &D) -> Result<Option<String>, ApiError> {
    let url = resource_url(resource);
    log::debug!("POST {}", url);

    let request = with_auth(Request::post(&url))
        .json(draft)
        .map_err(|e| ApiError::Other(e.to_string()))?;
    let body = finish("POST", &url, request.send().await).await?;
    Ok(server_message(&body))
}

/// Update an entity; the primary key travels inside the body
pub async fn update<D: Serialize>(resource: Resource, id: i64, draft: &D) -> Result<Option<String>, ApiError> {
    let url = resource_url(resource);
    log::debug!("PUT {} ({}={})", url, resource.id_field(), id);

    let body = update_body(resource, id, draft)?;
    let request = with_auth(Request::put(&url))
        .json(&body)
        .map_err(|e| ApiError::Other(e.to_string()))?;
    let body = finish("PUT", &url, request.send().await).await?;
    Ok(server_message(&body))
}

/// Delete an entity
pub async fn delete(resource: Resource, id: &str) -> Result<Option<String>, ApiError> {
    let url = item_url(resource, id);
    log::debug!("DELETE {}", url);

    let result = with_auth(Request::delete(&url)).send().await;
    let body = finish("DELETE", &url, result).await?;
    Ok(server_message(&body))
}
