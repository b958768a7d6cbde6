use super::*;
use crate::net::error::ApiError;

fn permission(id: &str, name: &str) -> Permission {
    Permission { id: id.to_owned(), name: name.to_owned(), description: None }
}

#[test]
fn toggles_mark_held_permissions() {
    let catalogue = vec![permission("1", "roles.read"), permission("2", "roles.write"), permission("3", "users.read")];
    let assigned = vec![permission("2", "roles.write")];

    let toggles = permission_toggles(&catalogue, &assigned);

    let held: Vec<_> = toggles.iter().map(|(p, held)| (p.name.as_str(), *held)).collect();
    assert_eq!(held, [("roles.read", false), ("roles.write", true), ("users.read", false)]);
}

#[test]
fn assignments_outside_catalogue_are_ignored() {
    let catalogue = vec![permission("1", "roles.read")];
    let assigned = vec![permission("9", "legacy")];
    assert_eq!(permission_toggles(&catalogue, &assigned), vec![(permission("1", "roles.read"), false)]);
}

#[test]
fn empty_catalogue_yields_no_rows() {
    assert!(permission_toggles(&[], &[permission("1", "x")]).is_empty());
}

fn network_error() -> ApiError {
    ApiError::Network("Failed to fetch".to_owned())
}

#[test]
fn reopening_for_another_role_does_not_inherit_assignments() {
    let catalogue = vec![permission("1", "roles.read"), permission("2", "roles.write")];
    let mut assigned = Snapshot::default();
    let generation = assigned.begin();
    assigned.resolve(generation, Ok(vec![permission("1", "roles.read")]));

    assigned.clear();
    let generation = assigned.begin();
    assigned.resolve(generation, Err(network_error()));

    let held: Vec<_> = permission_toggles(&catalogue, &assigned.items).into_iter().map(|(_, held)| held).collect();
    assert_eq!(held, [false, false]);
    assert_eq!(assigned.error.as_deref(), Some("Failed to fetch"));
}

#[test]
fn previous_role_fetch_is_dropped_after_clear() {
    let mut assigned = Snapshot::default();
    let previous_role = assigned.begin();
    assigned.clear();
    let current_role = assigned.begin();

    assert!(!assigned.resolve(previous_role, Ok(vec![permission("1", "roles.read")])));
    assert!(assigned.is_empty());
    assert!(assigned.resolve(current_role, Ok(vec![permission("2", "roles.write")])));
    assert_eq!(assigned.items, vec![permission("2", "roles.write")]);
}

#[test]
fn toggles_wait_for_first_assignment_fetch() {
    let mut catalogue = Snapshot::default();
    let generation = catalogue.begin();
    catalogue.resolve(generation, Ok(vec![permission("1", "roles.read")]));

    let mut assigned = Snapshot::default();
    let generation = assigned.begin();
    assigned.resolve(generation, Ok(vec![permission("1", "roles.read")]));
    assert!(!toggles_pending(&catalogue, &assigned));

    assigned.clear();
    assigned.begin();
    assert!(toggles_pending(&catalogue, &assigned));
}

#[test]
fn toggles_pending_while_catalogue_loads() {
    let mut catalogue = Snapshot::<Permission>::default();
    catalogue.begin();
    assert!(toggles_pending(&catalogue, &Snapshot::default()));
}
