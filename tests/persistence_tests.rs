use aws_sdk_dynamodb::types::AttributeValue;
use workshop::core::models::Interaction;
use workshop::persistence::dynamo::to_item;

#[test]
fn test_item_has_all_string_attributes() {
    let interaction = Interaction::new("Hello AWS!".to_string(), "Hi!".to_string());
    let item = to_item(&interaction);

    assert_eq!(item.len(), 4);
    assert_eq!(item["id"], AttributeValue::S(interaction.id.clone()));
    assert_eq!(
        item["timestamp"],
        AttributeValue::S(interaction.timestamp.clone())
    );
    assert_eq!(
        item["user_input"],
        AttributeValue::S("Hello AWS!".to_string())
    );
    assert_eq!(item["ai_response"], AttributeValue::S("Hi!".to_string()));
}

#[test]
fn test_new_interaction_has_fresh_id_and_iso_timestamp() {
    let a = Interaction::new("same".to_string(), "reply".to_string());
    let b = Interaction::new("same".to_string(), "reply".to_string());

    assert_ne!(a.id, b.id);
    assert!(uuid::Uuid::parse_str(&a.id).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&a.timestamp).is_ok());
    assert!(a.timestamp.ends_with('Z'));
}
