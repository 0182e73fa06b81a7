//! Locale and region routing.
//!
//! [`resolve`] is a pure decision over a request path and its
//! `Accept-Language` header. [`locale_routing`] is the axum middleware that
//! applies the decision to a live request.

use crate::i18n::{Locale, LocaleRegistry};
use crate::regions::RegionRegistry;
use axum::extract::Request;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::uri::{PathAndQuery, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{debug, warn};

/// What to do with an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve the request as-is.
    Continue,
    /// Send the client elsewhere with a temporary redirect.
    RedirectTo(String),
    /// Serve a different path without telling the client.
    RewriteTo(String),
}

/// Path prefixes that never go through locale routing.
const EXCLUDED_PREFIXES: [&str; 3] = ["api", "_next", "_vercel"];

/// Whether a path is internal (API, framework assets or a static file).
///
/// A path is excluded when its first segment starts with one of the
/// excluded prefixes or when it contains a dot anywhere.
pub fn is_excluded_path(path: &str) -> bool {
    if path.contains('.') {
        return true;
    }

    let trimmed = path.trim_start_matches('/');
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Decide how to route a request path.
///
/// Rules, first match wins:
/// 1. `/{locale}/{region}` with both valid: continue
/// 2. `/`: redirect to the locale detected from `Accept-Language`
/// 3. `/{locale}`: continue (region selection page)
/// 4. `/{locale}/{unknown}`: redirect to `/{locale}`
/// 5. anything else: continue
///
/// Empty segments are ignored, so trailing and doubled slashes do not
/// produce phantom segments. Matching is case-sensitive.
pub fn resolve(path: &str, accept_language: Option<&str>) -> RoutingDecision {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let seg0 = segments.next();
    let seg1 = segments.next();

    let locale = seg0.filter(|code| LocaleRegistry::get().is_supported(code));
    let region_valid = seg1.is_some_and(|code| RegionRegistry::get().is_valid(code));

    match (locale, seg1) {
        (Some(_), Some(_)) if region_valid => RoutingDecision::Continue,
        _ if path == "/" => {
            let detected = Locale::detect(accept_language);
            RoutingDecision::RedirectTo(format!("/{}", detected))
        }
        (Some(_), None) => RoutingDecision::Continue,
        (Some(locale), Some(_)) => RoutingDecision::RedirectTo(format!("/{}", locale)),
        (None, _) => RoutingDecision::Continue,
    }
}

/// Middleware applying [`resolve`] to every non-excluded request.
///
/// Redirects use `307 Temporary Redirect` so the method is preserved.
pub async fn locale_routing(mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if is_excluded_path(&path) {
        return next.run(request).await;
    }

    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    match resolve(&path, accept_language) {
        RoutingDecision::Continue => next.run(request).await,
        RoutingDecision::RedirectTo(target) => {
            debug!("Redirecting {} -> {}", path, target);
            Redirect::temporary(&target).into_response()
        }
        RoutingDecision::RewriteTo(target) => {
            debug!("Rewriting {} -> {}", path, target);
            match rewrite_path(request.uri(), &target) {
                Some(uri) => *request.uri_mut() = uri,
                None => warn!("Ignoring invalid rewrite target: {}", target),
            }
            next.run(request).await
        }
    }
}

/// Replace the path of `uri`, keeping its query string.
fn rewrite_path(uri: &Uri, path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}
