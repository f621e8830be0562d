use shoplist_core::{Item, ItemValidationError};

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let mut item = Item::with_id("11111111-2222-4333-8444-555555555555", "Apples", 10, None);
    item.notes = Some("Pink Lady".to_string());
    item.toggle_purchased();

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["name"], "Apples");
    assert_eq!(json["quantity"], 10);
    assert_eq!(json["notes"], "Pink Lady");
    assert_eq!(json["purchased"], true);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn missing_notes_serialize_as_null() {
    let item = Item::with_id("a", "Toothpaste", 1, None);

    let json = serde_json::to_value(&item).unwrap();
    assert!(json["notes"].is_null());
    assert_eq!(json["purchased"], false);
}

#[test]
fn toggle_returns_new_state() {
    let mut item = Item::with_id("a", "Ground meat", 1, None);

    assert!(item.toggle_purchased());
    assert!(!item.toggle_purchased());
}

#[test]
fn validation_error_messages_are_readable() {
    assert_eq!(
        ItemValidationError::NonPositiveQuantity(-2).to_string(),
        "item quantity must be positive, got -2"
    );
    assert_eq!(
        ItemValidationError::EmptyName.to_string(),
        "item name must not be empty"
    );
}
