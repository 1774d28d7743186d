use serde_json::json;

use super::*;
use crate::gateway::Method;
use crate::test_helpers::{harness, offer_json};

fn message_json(id: &str, sender: &str, offer: serde_json::Value) -> serde_json::Value {
    json!({
        "_id": id,
        "sender": sender,
        "receiver": { "_id": "o1", "name": "Sala Sur" },
        "content": "Hola",
        "oferta": offer,
        "read": false,
        "createdAt": "2030-01-10T10:00:00.000Z"
    })
}

#[test]
fn conversation_summary_decodes_inbox_row() {
    let row: ConversationSummary = serde_json::from_value(json!({
        "userId": "o1",
        "userName": "Sala Sur",
        "ofertaTitulo": "Boda en Sevilla",
        "ultimoMensaje": "¿Tocáis a las 8?",
        "fecha": "2030-01-10T10:00:00.000Z",
        "noLeidos": 2
    }))
    .unwrap();
    assert!(row.has_unread());
    assert_eq!(row.offer_title.as_deref(), Some("Boda en Sevilla"));
}

#[test]
fn related_offer_is_first_message_with_one() {
    let messages: Vec<Message> = serde_json::from_value(json!([
        message_json("1", "m1", json!(null)),
        message_json("2", "o1", offer_json("of7")),
        message_json("3", "m1", json!("of8")),
    ]))
    .unwrap();

    assert_eq!(related_offer_id(&messages), Some("of7"));
    assert!(messages[0].is_from("m1"));
    assert!(!messages[1].is_from("m1"));
    assert_eq!(related_offer_id(&messages[..1]), None);
}

#[test]
fn poll_interval_is_thirty_seconds() {
    assert_eq!(CONVERSATION_POLL_INTERVAL.as_secs(), 30);
}

#[tokio::test]
async fn blank_message_is_rejected_locally() {
    let h = harness();
    let err = send(&h.gateway, &NewMessage::new("o1", "   \n")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert!(h.transport.requests().is_empty());
}

#[tokio::test]
async fn send_includes_offer_only_when_known() {
    let h = harness();
    h.transport.push_json(201, json!({ "_id": "x" }));
    h.transport.push_json(201, json!({ "_id": "y" }));

    send(&h.gateway, &NewMessage::new("o1", "Hola")).await.unwrap();
    send(&h.gateway, &NewMessage::new("o1", "Hola").about_offer(Some("of1"))).await.unwrap();

    let reqs = h.transport.requests();
    assert_eq!(reqs[0].url, "http://api.test/api/chat/mensajes");
    assert_eq!(reqs[0].body, Some(json!({ "receiver": "o1", "content": "Hola" })));
    assert_eq!(reqs[1].body, Some(json!({ "receiver": "o1", "content": "Hola", "oferta": "of1" })));
}

#[tokio::test]
async fn thread_and_mark_read_paths() {
    let h = harness();
    h.transport.push_json(200, json!([]));
    h.transport.push_json(200, json!({ "msg": "ok" }));
    h.transport.push_json(200, json!([]));

    assert!(thread(&h.gateway, "o1").await.unwrap().is_empty());
    mark_read(&h.gateway, "o1").await.unwrap();
    assert!(conversations(&h.gateway).await.unwrap().is_empty());

    let reqs = h.transport.requests();
    assert_eq!(reqs[0].url, "http://api.test/api/chat/mensajes/o1");
    assert_eq!((reqs[1].method, reqs[1].url.as_str()), (Method::Put, "http://api.test/api/chat/mensajes/leer/o1"));
    assert_eq!(reqs[2].url, "http://api.test/api/chat/conversaciones");
}
