use super::*;
use crate::net::testing::{BASE, anonymous_client, client_with_token};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn prepare_attaches_bearer_token_and_json_content_type() {
    let (client, _) = client_with_token("tok-1");
    let req = client.prepare("/roles", RequestOptions::get());
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, format!("{BASE}/roles"));
    assert_eq!(req.header("authorization"), Some("Bearer tok-1"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
}

#[test]
fn prepare_omits_authorization_without_token() {
    let (client, _) = anonymous_client();
    let req = client.prepare("/roles", RequestOptions::get());
    assert_eq!(req.header("Authorization"), None);
}

#[test]
fn prepare_treats_empty_token_as_absent() {
    let (client, _) = client_with_token("");
    let req = client.prepare("/roles", RequestOptions::get());
    assert_eq!(req.header("Authorization"), None);
}

#[test]
fn prepare_omits_content_type_for_multipart() {
    let (client, _) = client_with_token("t");
    let options = RequestOptions::new(Method::Post).multipart(vec![("a".to_owned(), FormPart::Text("1".to_owned()))]);
    let req = client.prepare("/progresses", options);
    assert_eq!(req.header("Content-Type"), None);
    assert_eq!(req.header("Authorization"), Some("Bearer t"));
}

#[test]
fn prepare_encodes_query_in_order() {
    let (client, _) = anonymous_client();
    let options = RequestOptions::get().page(10, 20).query("verifiedBy", "Ana María");
    let req = client.prepare("/progresses", options);
    assert_eq!(req.url, format!("{BASE}/progresses?limit=10&offset=20&verifiedBy=Ana+Mar%C3%ADa"));
}

#[test]
fn new_trims_trailing_slash_from_base() {
    let client = ApiClient::new("http://api.test/", std::sync::Arc::new(crate::util::storage::MemoryStorage::new()), ());
    assert_eq!(client.base_url(), "http://api.test");
}

#[test]
fn encode_segment_escapes_reserved_characters() {
    assert_eq!(encode_segment("abc-123"), "abc-123");
    assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    assert_eq!(encode_segment("a+b"), "a%2Bb");
}

#[test]
fn http_error_message_prefers_backend_message() {
    assert_eq!(http_error_message(400, r#"{"message":"Nombre requerido"}"#), "Nombre requerido");
}

#[test]
fn http_error_message_falls_back_to_status() {
    assert_eq!(http_error_message(500, ""), "HTTP error! status: 500");
    assert_eq!(http_error_message(502, "<html>bad gateway</html>"), "HTTP error! status: 502");
    assert_eq!(http_error_message(400, r#"{"error":"x"}"#), "HTTP error! status: 400");
    assert_eq!(http_error_message(400, r#"{"message":""}"#), "HTTP error! status: 400");
}

#[test]
fn decode_response_yields_none_for_non_json_success() {
    let raw = RawResponse { status: 200, content_type: Some("text/plain".to_owned()), body: "ok".to_owned() };
    assert_eq!(decode_response::<Value>(raw), Ok(None));

    let no_type = RawResponse { status: 204, content_type: None, body: String::new() };
    assert_eq!(decode_response::<Value>(no_type), Ok(None));
}

#[test]
fn decode_response_accepts_json_with_charset() {
    let raw = RawResponse {
        status: 200,
        content_type: Some("application/json; charset=utf-8".to_owned()),
        body: r#"{"id":1}"#.to_owned(),
    };
    assert_eq!(decode_response::<Value>(raw), Ok(Some(json!({ "id": 1 }))));
}

#[test]
fn decode_response_reports_shape_mismatch() {
    let raw = RawResponse::json(200, r#"{"id":1}"#);
    assert!(matches!(decode_response::<Vec<Value>>(raw), Err(ApiError::Decode(_))));
}

#[test]
fn request_maps_transport_failure_to_network_error() {
    let (client, transport) = client_with_token("t");
    transport.reply(Err("Failed to fetch".to_owned()));
    let result = block_on(client.request::<Value>("/roles", RequestOptions::get()));
    assert_eq!(result, Err(ApiError::Network("Failed to fetch".to_owned())));
}

#[test]
fn request_maps_error_status_to_http_error() {
    let (client, transport) = client_with_token("t");
    transport.reply_json(403, json!({ "message": "Sin permisos" }));
    let result = block_on(client.request::<Value>("/roles", RequestOptions::get()));
    assert_eq!(result, Err(ApiError::Http { status: 403, message: "Sin permisos".to_owned() }));
}

#[test]
fn every_call_yields_exactly_one_of_data_or_error() {
    let (client, transport) = client_with_token("t");
    transport
        .reply_json(200, json!([1, 2]))
        .reply_json(500, json!({}))
        .reply(Err("offline".to_owned()))
        .reply(Ok(RawResponse::json(200, "")));
    let outcomes: Vec<ApiResult<Option<Value>>> =
        (0..4).map(|_| block_on(client.request::<Value>("/x", RequestOptions::get()))).collect();
    assert_eq!(outcomes[0], Ok(Some(json!([1, 2]))));
    assert!(outcomes[1].is_err());
    assert!(outcomes[2].is_err());
    assert_eq!(outcomes[3], Ok(None));
}

#[test]
fn request_list_treats_no_content_as_empty() {
    let (client, _) = client_with_token("t");
    let rows: Vec<Value> = block_on(client.request_list("/roles", RequestOptions::get())).expect("ok");
    assert!(rows.is_empty());
}

#[test]
fn execute_discards_body() {
    let (client, transport) = client_with_token("t");
    transport.reply_json(200, json!({ "deleted": true }));
    assert_eq!(block_on(client.execute("/roles/1", RequestOptions::delete())), Ok(()));
}

#[test]
fn json_options_serialize_body() {
    let options = RequestOptions::new(Method::Post).json(&json!({ "name": "admin" })).expect("encodes");
    assert_eq!(options.body, RequestBody::Json(r#"{"name":"admin"}"#.to_owned()));
}
