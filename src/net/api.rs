//! REST API helpers for the tag service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since tagging is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, String>`; the error string carries the
//! server's `message`/`error` payload field when present so callers can put
//! it straight into a toast. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RelatedGroups, Tag, TagAssociationRow};

#[cfg(any(test, feature = "hydrate"))]
fn record_tags_endpoint(record_id: &str) -> String {
    format!("/api/records/{record_id}/tags")
}

#[cfg(any(test, feature = "hydrate"))]
fn tag_attach_endpoint(tag_id: &str) -> String {
    format!("/api/tags/{tag_id}/attach")
}

#[cfg(any(test, feature = "hydrate"))]
fn tag_detach_endpoint(tag_id: &str) -> String {
    format!("/api/tags/{tag_id}/detach")
}

#[cfg(any(test, feature = "hydrate"))]
fn tag_records_endpoint(tag_id: &str) -> String {
    format!("/api/tags/{tag_id}/records")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Pull a human-readable failure message out of an error response body,
/// preferring `message` over `error`.
#[cfg(any(test, feature = "hydrate"))]
pub fn error_body_message(body: &serde_json::Value) -> Option<&str> {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("error").and_then(serde_json::Value::as_str))
}

#[cfg(feature = "hydrate")]
async fn response_error(what: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    if let Ok(body) = resp.json::<serde_json::Value>().await {
        if let Some(msg) = error_body_message(&body) {
            return msg.to_owned();
        }
    }
    request_failed_message(what, status)
}

/// List the tags currently attached to a record via
/// `GET /api/records/{record_id}/tags`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn list_tags_for_record(record_id: &str) -> Result<Vec<TagAssociationRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_tags_endpoint(record_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("tag listing", resp).await);
        }
        resp.json::<Vec<TagAssociationRow>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record_id;
        Err("not available on server".to_owned())
    }
}

/// Search all tags by query text via `GET /api/tags/search?q={query}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn search_tags(query: &str) -> Result<Vec<Tag>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/tags/search")
            .query([("q", query)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("tag search", resp).await);
        }
        resp.json::<Vec<Tag>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Attach an existing tag to a record via `POST /api/tags/{tag_id}/attach`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn attach_tag(tag_id: &str, record_id: &str, object_type: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = tag_attach_endpoint(tag_id);
        let payload = serde_json::json!({
            "record_id": record_id,
            "object_type": object_type,
        });
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("tag attach", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tag_id, record_id, object_type);
        Err("not available on server".to_owned())
    }
}

/// Detach a tag from a record via `POST /api/tags/{tag_id}/detach`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn detach_tag(tag_id: &str, record_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = tag_detach_endpoint(tag_id);
        let payload = serde_json::json!({ "record_id": record_id });
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("tag detach", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tag_id, record_id);
        Err("not available on server".to_owned())
    }
}

/// Find-or-create a tag by name and attach it via `POST /api/tags`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn create_tag_and_attach(
    name: &str,
    record_id: &str,
    object_type: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "record_id": record_id,
            "object_type": object_type,
        });
        let resp = gloo_net::http::Request::post("/api/tags")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("tag create", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, record_id, object_type);
        Err("not available on server".to_owned())
    }
}

/// Fetch all records sharing a tag via `GET /api/tags/{tag_id}/records`.
/// The response maps object type name to raw rows, in server order.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn find_records_by_tag(tag_id: &str) -> Result<RelatedGroups, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = tag_records_endpoint(tag_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(response_error("related records", resp).await);
        }
        resp.json::<RelatedGroups>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tag_id;
        Err("not available on server".to_owned())
    }
}
