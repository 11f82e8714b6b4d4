//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Routing itself is a pure function over method, path and body so it can be
//! exercised without opening a socket.

use std::io::{Cursor, Read as _};

use serde::{Serialize, de::DeserializeOwned};
use ::tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiError, ApiResponse, FilterLogsRequest};
use crate::manifest::API_NAMESPACE;

const SERIALIZE_FAILURE_BODY: &str = r#"{"success":false,"error":{"code":"INTERNAL_ERROR","message":"Failed to serialize response"}}"#;

/// Status code and JSON body produced by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: String,
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve plugin endpoints on `addr` until the process is stopped
pub fn serve(addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("serving {API_NAMESPACE} on http://{addr}");

    for mut request in server.incoming_requests() {
        let response = handle_api_request(&mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
pub fn handle_api_request(request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    if method == Method::Post {
        if let Err(e) = request.as_reader().read_to_string(&mut body) {
            let error = ApiError::bad_request(format!("Failed to read request body: {e}"));
            return into_response(error_reply(&error));
        }
    }

    let reply = route(&method, &url, &body);
    log::debug!("{method} {url} -> {}", reply.status);
    into_response(reply)
}

/// Map a request to its handler
///
/// Paths are matched below the plugin namespace; the query string is ignored.
#[must_use]
pub fn route(method: &Method, url: &str, body: &str) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    let Some(api_path) = path.strip_prefix(API_NAMESPACE) else {
        return not_found_reply(&format!("API endpoint not found: {method} {path}"));
    };

    // Validate: GET /levels/{name}/validate
    if let (&Method::Get, Some(name)) = (method, validate_target(api_path)) {
        return handle_result(api::validate_level(name));
    }

    match (method, api_path) {
        (&Method::Get, "/levels") => success_reply(&api::list_levels()),
        (&Method::Get, "/levels/detail") => envelope(&api::level_details()),
        (&Method::Get, "/info") => envelope(&api::plugin_info()),

        // POST /logs/filter - filter records
        (&Method::Post, "/logs/filter") => match parse_json::<FilterLogsRequest>(body) {
            Ok(req) => envelope(&api::filter_logs(&req)),
            Err(e) => error_reply(&e),
        },

        // Level detail: GET /levels/{name}
        _ if *method == Method::Get && api_path.starts_with("/levels/") => {
            let name = api_path.strip_prefix("/levels/").unwrap_or("");
            if name.contains('/') {
                not_found_reply(&format!("API endpoint not found: {method} {path}"))
            } else {
                handle_result(api::get_level(name))
            }
        },

        // 404 for unknown API routes
        _ => not_found_reply(&format!("API endpoint not found: {method} {path}")),
    }
}

/// Level name in `/levels/{name}/validate`, if the path has that shape
fn validate_target(api_path: &str) -> Option<&str> {
    api_path
        .strip_prefix("/levels/")
        .and_then(|rest| rest.strip_suffix("/validate"))
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => envelope(&data),
        Err(e) => error_reply(&e),
    }
}

fn envelope<T: Serialize>(data: &T) -> Reply {
    success_reply(&ApiResponse::success(data))
}

fn success_reply<T: Serialize>(data: &T) -> Reply {
    json_reply(data, 200)
}

fn error_reply(error: &ApiError) -> Reply {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    json_reply(&response, error.status_code())
}

fn not_found_reply(message: &str) -> Reply {
    error_reply(&ApiError::not_found(message))
}

/// Serialize `data` as the reply body
///
/// A body that cannot be serialized becomes a 500 carrying the standard
/// error envelope.
#[must_use]
pub fn json_reply<T: Serialize>(data: &T, status: u16) -> Reply {
    match serde_json::to_string(data) {
        Ok(body) => Reply { status, body },
        Err(e) => {
            log::error!("failed to serialize response: {e}");
            let error = ApiError::internal(format!("Failed to serialize response: {e}"));
            let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
            let body = serde_json::to_string(&response)
                .unwrap_or_else(|_| SERIALIZE_FAILURE_BODY.to_string());
            Reply {
                status: error.status_code(),
                body,
            }
        },
    }
}

fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
