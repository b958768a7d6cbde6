use super::*;

#[test]
fn navigation_covers_every_admin_route_in_order() {
    let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(labels, ["Progreso", "Roles", "Permisos", "Usuarios"]);
    assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('/')));
}
