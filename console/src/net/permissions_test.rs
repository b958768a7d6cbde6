use super::*;
use crate::net::error::ApiError;
use crate::net::testing::{BASE, anonymous_client, client_with_token};
use crate::net::transport::RequestBody;
use futures::executor::block_on;
use serde_json::json;

#[test]
fn get_all_issues_paginated_get() {
    let (client, transport) = client_with_token("t");
    transport.reply_json(200, json!([{ "id": 1, "name": "roles.read" }]));

    let permissions = block_on(client.permissions().get_all(50, 100)).expect("list");

    assert_eq!(transport.last().url, format!("{BASE}/permissions?limit=50&offset=100"));
    assert_eq!(permissions[0].name, "roles.read");
}

#[test]
fn crud_routes_match_item_paths() {
    let (client, transport) = client_with_token("t");
    let payload = NamePayload { name: "hives.write".to_owned(), description: Some("Editar colmenas".to_owned()) };
    block_on(client.permissions().create(&payload)).expect("create");
    block_on(client.permissions().get_by_id("4")).expect("get");
    block_on(client.permissions().update("4", &payload)).expect("update");
    block_on(client.permissions().delete("4")).expect("delete");

    let seen: Vec<(Method, String)> = transport.requests().into_iter().map(|r| (r.method, r.url)).collect();
    assert_eq!(
        seen,
        vec![
            (Method::Post, format!("{BASE}/permissions")),
            (Method::Get, format!("{BASE}/permissions/4")),
            (Method::Put, format!("{BASE}/permissions/4")),
            (Method::Delete, format!("{BASE}/permissions/4")),
        ]
    );
    assert_eq!(
        transport.requests()[0].body,
        RequestBody::Json(r#"{"name":"hives.write","description":"Editar colmenas"}"#.to_owned())
    );
}

#[test]
fn unauthenticated_error_surfaces_status() {
    let (client, transport) = anonymous_client();
    transport.reply_json(401, json!({ "message": "No autorizado" }));
    let err = block_on(client.permissions().get_all(10, 0)).expect_err("unauthorized");
    assert!(err.is_unauthorized());
    assert_eq!(err, ApiError::Http { status: 401, message: "No autorizado".to_owned() });
    assert_eq!(transport.last().header("Authorization"), None);
}
