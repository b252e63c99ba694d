//! Construction of the outbound request for a destination.
//!
//! | Method              | Body            | Query string          |
//! |---------------------|-----------------|-----------------------|
//! | GET                 | none            | payload keys / values |
//! | DELETE              | none            | none                  |
//! | POST / PUT / PATCH  | payload as JSON | none                  |
//!
//! Destination headers are applied last, so a configured `Content-Type`
//! replaces the JSON default.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use datapusher_core::http_method::HttpMethod;
use datapusher_core::query::payload_query_pairs;
use datapusher_db::models::destination::HeaderMapping;

use crate::error::DeliveryError;

/// Build the request for one destination. Nothing is sent.
pub fn build_request(
    client: &Client,
    method: HttpMethod,
    url: &str,
    headers: &HeaderMapping,
    payload: &Value,
) -> Result<RequestBuilder, DeliveryError> {
    let header_map = to_header_map(headers)?;

    let mut builder = client.request(reqwest_method(method), url);
    if method.carries_json_body() {
        builder = builder.json(payload);
    } else if method == HttpMethod::Get {
        let pairs = payload_query_pairs(payload);
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
    }

    Ok(builder.headers(header_map))
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Convert a stored header mapping into a typed [`HeaderMap`].
pub fn to_header_map(headers: &HeaderMapping) -> Result<HeaderMap, DeliveryError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| DeliveryError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| DeliveryError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use reqwest::header::CONTENT_TYPE;
    use serde_json::json;

    fn build(method: HttpMethod, headers: &HeaderMapping, payload: &Value) -> reqwest::Request {
        build_request(&Client::new(), method, "http://h1/ep", headers, payload)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn get_sends_payload_as_query_without_body() {
        let req = build(HttpMethod::Get, &HeaderMapping::new(), &json!({"x": 1}));
        assert_eq!(req.method(), reqwest::Method::GET);
        assert_eq!(req.url().as_str(), "http://h1/ep?x=1");
        assert!(req.body().is_none());
    }

    #[test]
    fn get_with_empty_payload_has_no_query() {
        let req = build(HttpMethod::Get, &HeaderMapping::new(), &json!({}));
        assert_eq!(req.url().query(), None);
    }

    #[test]
    fn get_keeps_existing_query_on_url() {
        let req = build_request(
            &Client::new(),
            HttpMethod::Get,
            "http://h1/ep?fixed=1",
            &HeaderMapping::new(),
            &json!({"x": "a b"}),
        )
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(req.url().query(), Some("fixed=1&x=a+b"));
    }

    #[test]
    fn delete_sends_nothing() {
        let req = build(HttpMethod::Delete, &HeaderMapping::new(), &json!({"x": 1}));
        assert_eq!(req.method(), reqwest::Method::DELETE);
        assert_eq!(req.url().query(), None);
        assert!(req.body().is_none());
    }

    #[test]
    fn write_methods_send_payload_as_json_body() {
        let payload = json!({"x": 1, "nested": {"y": [1, 2]}});
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
            let req = build(method, &HeaderMapping::new(), &payload);
            assert_eq!(req.method().as_str(), method.as_str());
            assert_eq!(req.url().query(), None);
            assert_eq!(req.headers()[CONTENT_TYPE], "application/json");

            let body = req.body().and_then(|b| b.as_bytes()).unwrap();
            let sent: Value = serde_json::from_slice(body).unwrap();
            assert_eq!(sent, payload);
        }
    }

    #[test]
    fn body_presence_follows_method() {
        for method in HttpMethod::ALL {
            let req = build(method, &HeaderMapping::new(), &json!({"x": 1}));
            assert_eq!(req.body().is_some(), method.carries_json_body(), "{method}");
        }
    }

    #[test]
    fn large_integers_and_key_order_reach_the_body_unchanged() {
        let raw = r#"{"order_id":123456789012345678901234567890,"b":1,"a":2.50}"#;
        let payload: Value = serde_json::from_str(raw).unwrap();

        let req = build(HttpMethod::Post, &HeaderMapping::new(), &payload);
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(std::str::from_utf8(body).unwrap(), raw);

        let req = build(HttpMethod::Get, &HeaderMapping::new(), &payload);
        assert_eq!(
            req.url().query(),
            Some("order_id=123456789012345678901234567890&b=1&a=2.50")
        );
    }

    #[test]
    fn destination_headers_are_applied() {
        let headers = HeaderMapping::from([("X-K".to_string(), "v".to_string())]);
        let req = build(HttpMethod::Post, &headers, &json!({"x": 1}));
        assert_eq!(req.headers()["x-k"], "v");
    }

    #[test]
    fn configured_content_type_wins() {
        let headers =
            HeaderMapping::from([("Content-Type".to_string(), "application/vnd.x+json".to_string())]);
        let req = build(HttpMethod::Put, &headers, &json!({"x": 1}));
        assert_eq!(req.headers().get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(req.headers()[CONTENT_TYPE], "application/vnd.x+json");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let headers = HeaderMapping::from([("bad header".to_string(), "v".to_string())]);
        let err = build_request(&Client::new(), HttpMethod::Get, "http://h1/ep", &headers, &json!({}))
            .unwrap_err();
        assert_matches!(err, DeliveryError::InvalidHeader { name, .. } if name == "bad header");
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let headers = HeaderMapping::from([("X-K".to_string(), "line\nbreak".to_string())]);
        assert!(to_header_map(&headers).is_err());
    }
}
