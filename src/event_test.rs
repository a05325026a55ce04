use super::*;

#[test]
fn events_serialize_with_kind_tag() {
    let json = serde_json::to_value(StoreEvent::StreamingChanged { active: true }).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "streaming_changed", "active": true}));

    let json = serde_json::to_value(StoreEvent::MessageAppended { index: 3 }).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "message_appended", "index": 3}));

    let json = serde_json::to_value(StoreEvent::SimConfigReplaced).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "sim_config_replaced"}));

    let json = serde_json::to_value(StoreEvent::SimConfigCleared).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "sim_config_cleared"}));
}

#[test]
fn events_round_trip() {
    for event in [
        StoreEvent::StreamingChanged { active: false },
        StoreEvent::MessageAppended { index: 0 },
        StoreEvent::SimConfigReplaced,
        StoreEvent::SimConfigCleared,
    ] {
        let json = serde_json::to_string(&event).unwrap();
        let restored: StoreEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}
