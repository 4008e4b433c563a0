use seatkit_core::data::categories::*;

#[test]
fn test_add_and_lookup_category() {
    let mut catalog = CategoryCatalog::new();
    assert!(catalog.is_empty());

    let id = catalog.add_category("Press", 45, "#123456", "#fefefe");
    assert_eq!(catalog.len(), 1);

    let category = catalog.get_by_label("Press").unwrap();
    assert_eq!(category.id, id);
    assert_eq!(category.weight, 45);
    assert_eq!(catalog.suggested_score("Press"), 45);
}

#[test]
fn test_update_category() {
    let mut catalog = CategoryCatalog::new();
    let id = catalog.add_category("Press", 45, "#123456", "#fefefe");

    if let Some(category) = catalog.get_mut(&id) {
        category.weight = 10;
        category.label = "Media".to_string();
    }

    assert!(catalog.get_by_label("Press").is_none());
    assert_eq!(catalog.suggested_score("Media"), 10);
}

#[test]
fn test_remove_category_falls_back_to_default_style() {
    let mut catalog = CategoryCatalog::with_presets();
    let id = catalog.get_by_label("Mayor").unwrap().id.clone();

    let removed = catalog.remove_category(&id);
    assert!(removed.is_some());

    let style = catalog.style_for("Mayor");
    assert_eq!(style.weight, 0);
    assert_eq!(style.color, FALLBACK_ZONE_COLOR);
    assert_eq!(style.person_color, FALLBACK_PERSON_COLOR);
}

#[test]
fn test_ids_stay_unique_after_removal() {
    let mut catalog = CategoryCatalog::new();
    let a = catalog.add_category("A", 1, "#000", "#fff");
    catalog.remove_category(&a);
    let b = catalog.add_category("B", 2, "#000", "#fff");
    assert_ne!(a, b);
}

#[test]
fn test_default_is_presets() {
    let catalog = CategoryCatalog::default();
    assert_eq!(catalog.suggested_score("Staff"), 0);
    assert_eq!(catalog.suggested_score("Legislator"), 85);
}
