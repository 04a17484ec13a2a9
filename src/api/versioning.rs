//! API version negotiation.
//!
//! Clients select a version with the `X-Version` header or the `ver` /
//! `version` query parameter (header wins, then `ver`, then `version`). When
//! none is given the configured default applies, read from
//! [`crate::config::SharedConfig`] on every request so that a configuration
//! reload takes effect immediately. Groups that do not serve the default's
//! major version answer unversioned requests with their own first version.
//!
//! Each route group declares the versions it serves. A request is matched on
//! the major version; the matched [`ApiVersion`] is stored in the request
//! extensions for handlers to pick up with `Extension<ApiVersion>`. Every
//! response from a versioned group carries an `api-supported-versions` header.
//!
//! ```text
//! GET /api/camps                 -> default (1.1), bare array
//! GET /api/camps?ver=2.0         -> 2.0, {Count, Results} envelope
//! GET /api/camps  X-Version: 3   -> 400 UnsupportedApiVersion
//! ```

use std::fmt;
use std::str::FromStr;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::error::AppError;
use crate::state::AppState;

/// Request header carrying the requested version.
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("x-version");

/// Response header listing the versions served by a route group.
pub const SUPPORTED_VERSIONS_HEADER: HeaderName =
    HeaderName::from_static("api-supported-versions");

/// Query parameters checked in order when the header is absent.
const VERSION_QUERY_KEYS: [&str; 2] = ["ver", "version"];

/// An API version in `major.minor` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    pub major: u16,
    pub minor: u16,
}

impl ApiVersion {
    pub const V1_1: ApiVersion = ApiVersion::new(1, 1);
    pub const V2_0: ApiVersion = ApiVersion::new(2, 0);

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

/// Versions served by the camps resource.
pub const CAMPS_VERSIONS: &[ApiVersion] = &[ApiVersion::V1_1, ApiVersion::V2_0];

/// Versions served by every other versioned resource.
pub const STANDARD_VERSIONS: &[ApiVersion] = &[ApiVersion::V1_1];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid API version '{0}'")]
pub struct ParseApiVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseApiVersionError;

    /// Parses `"2"`, `"2.0"` or `"1.1"`. A missing minor part means `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseApiVersionError(s.to_string());
        let trimmed = s.trim();

        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (trimmed, None),
        };

        let major = major.parse::<u16>().map_err(|_| invalid())?;
        let minor = match minor {
            Some(minor) => minor.parse::<u16>().map_err(|_| invalid())?,
            None => 0,
        };

        Ok(Self::new(major, minor))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Extracts the raw requested version, if the client sent one.
pub fn requested_version(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    let from_header = headers
        .get(&VERSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(version) = from_header {
        return Some(version.to_string());
    }

    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query?.as_bytes())
        .into_owned()
        .collect();

    VERSION_QUERY_KEYS.iter().find_map(|key| {
        pairs
            .iter()
            .find(|(k, v)| k.eq_ignore_ascii_case(key) && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
    })
}

/// Resolves the version that serves a request.
///
/// Without a requested version the configured default applies. A group that
/// does not serve the default's major version falls back to its first
/// supported version.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the requested version cannot be
/// parsed or when no supported version shares its major number.
pub fn negotiate(
    requested: Option<&str>,
    default: ApiVersion,
    supported: &[ApiVersion],
) -> Result<ApiVersion, AppError> {
    let serving = |version: ApiVersion| {
        supported
            .iter()
            .copied()
            .find(|s| s.major == version.major)
    };

    let Some(raw) = requested else {
        return serving(default)
            .or_else(|| supported.first().copied())
            .ok_or_else(|| AppError::internal("route group serves no API version"));
    };

    let version = raw.parse::<ApiVersion>().map_err(|_| {
        AppError::bad_request(
            format!("Invalid API version '{raw}'"),
            json!({ "code": "InvalidApiVersion" }),
        )
    })?;

    serving(version).ok_or_else(|| {
        AppError::bad_request(
            format!("The HTTP resource does not support the API version '{version}'"),
            json!({
                "code": "UnsupportedApiVersion",
                "supported": supported_list(supported),
            }),
        )
    })
}

fn supported_list(supported: &[ApiVersion]) -> String {
    supported
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

async fn dispatch(
    supported: &'static [ApiVersion],
    state: &AppState,
    mut req: Request,
    next: Next,
) -> Response {
    let default = state.config.current().default_api_version;
    let requested = requested_version(req.headers(), req.uri().query());

    let mut response = match negotiate(requested.as_deref(), default, supported) {
        Ok(version) => {
            tracing::debug!(%version, "API version resolved");
            req.extensions_mut().insert(version);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    };

    if let Ok(value) = HeaderValue::from_str(&supported_list(supported)) {
        response
            .headers_mut()
            .insert(SUPPORTED_VERSIONS_HEADER, value);
    }

    response
}

/// Version negotiation for the camps resource (1.1 and 2.0).
///
/// ```rust,ignore
/// let camps = Router::new()
///     .route("/camps", get(list_camps_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), versioning::camps_layer));
/// ```
pub async fn camps_layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    dispatch(CAMPS_VERSIONS, &state, req, next).await
}

/// Version negotiation for talks, speakers and operations (1.1 only).
pub async fn standard_layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    dispatch(STANDARD_VERSIONS, &state, req, next).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(version: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(VERSION_HEADER, HeaderValue::from_static(version));
        headers
    }

    #[test]
    fn test_parse_versions() {
        assert_eq!("1.1".parse::<ApiVersion>().unwrap(), ApiVersion::V1_1);
        assert_eq!("2.0".parse::<ApiVersion>().unwrap(), ApiVersion::V2_0);
        assert_eq!("2".parse::<ApiVersion>().unwrap(), ApiVersion::V2_0);
        assert_eq!(" 1.1 ".parse::<ApiVersion>().unwrap(), ApiVersion::V1_1);
    }

    #[test]
    fn test_parse_invalid_versions() {
        assert!("".parse::<ApiVersion>().is_err());
        assert!("abc".parse::<ApiVersion>().is_err());
        assert!("1.".parse::<ApiVersion>().is_err());
        assert!("1.1.1".parse::<ApiVersion>().is_err());
        assert!("-1".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiVersion::V1_1.to_string(), "1.1");
        assert_eq!(ApiVersion::new(2, 0).to_string(), "2.0");
    }

    #[test]
    fn test_header_takes_precedence_over_query() {
        let requested = requested_version(&headers("2.0"), Some("ver=1.1"));
        assert_eq!(requested.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_ver_takes_precedence_over_version() {
        let requested = requested_version(&HeaderMap::new(), Some("version=1.1&ver=2.0"));
        assert_eq!(requested.as_deref(), Some("2.0"));

        let requested = requested_version(&HeaderMap::new(), Some("includeTalks=true&version=2"));
        assert_eq!(requested.as_deref(), Some("2"));
    }

    #[test]
    fn test_no_version_requested() {
        assert_eq!(requested_version(&HeaderMap::new(), None), None);
        assert_eq!(requested_version(&HeaderMap::new(), Some("ver=")), None);
        assert_eq!(requested_version(&headers(" "), Some("other=1")), None);
    }

    #[test]
    fn test_negotiate_uses_default_when_unspecified() {
        let version = negotiate(None, ApiVersion::V1_1, CAMPS_VERSIONS).unwrap();
        assert_eq!(version, ApiVersion::V1_1);

        let version = negotiate(None, ApiVersion::V2_0, CAMPS_VERSIONS).unwrap();
        assert_eq!(version, ApiVersion::V2_0);
    }

    #[test]
    fn test_negotiate_falls_back_when_group_lacks_default() {
        let version = negotiate(None, ApiVersion::V2_0, STANDARD_VERSIONS).unwrap();
        assert_eq!(version, ApiVersion::V1_1);

        // An explicit request is still held to the group's versions.
        assert!(negotiate(Some("2.0"), ApiVersion::V2_0, STANDARD_VERSIONS).is_err());
    }

    #[test]
    fn test_negotiate_matches_major_version() {
        let version = negotiate(Some("1.0"), ApiVersion::V1_1, CAMPS_VERSIONS).unwrap();
        assert_eq!(version, ApiVersion::V1_1);

        let version = negotiate(Some("2"), ApiVersion::V1_1, CAMPS_VERSIONS).unwrap();
        assert_eq!(version, ApiVersion::V2_0);
    }

    #[test]
    fn test_negotiate_rejects_unsupported_version() {
        let err = negotiate(Some("2.0"), ApiVersion::V1_1, STANDARD_VERSIONS).unwrap_err();

        let info = err.to_error_info();
        assert_eq!(info.details["code"], "UnsupportedApiVersion");
        assert_eq!(info.details["supported"], "1.1");
    }

    #[test]
    fn test_negotiate_rejects_invalid_version() {
        let err = negotiate(Some("latest"), ApiVersion::V1_1, CAMPS_VERSIONS).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_error_info().details["code"], "InvalidApiVersion");
    }

    #[test]
    fn test_supported_list() {
        assert_eq!(supported_list(CAMPS_VERSIONS), "1.1, 2.0");
    }
}
