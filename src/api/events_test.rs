use serde_json::json;
use time::macros::datetime;

use super::*;
use crate::test_helpers::harness;

const NOW: OffsetDateTime = datetime!(2030-06-15 12:00 UTC);

fn event(id: &str, date: &str, rated: bool) -> Event {
    serde_json::from_value(json!({
        "_id": id,
        "titulo": "Concierto",
        "fechaEvento": date,
        "musicos": [{ "_id": "m1", "name": "Ana" }],
        "organizador": "o1",
        "calificado": rated
    }))
    .unwrap()
}

#[test]
fn past_detection_handles_timestamps_and_dates() {
    assert!(is_past("2030-06-15T11:59:59.000Z", NOW));
    assert!(!is_past("2030-06-15T12:00:00Z", NOW));
    assert!(is_past("2030-06-15", NOW));
    assert!(!is_past("2030-06-16", NOW));
    assert!(is_past("2030-06-15T13:00:00+02:00", NOW));
}

#[test]
fn unparseable_dates_are_never_past() {
    assert!(!is_past("", NOW));
    assert!(!is_past("mañana", NOW));
    let undated: Event = serde_json::from_value(json!({ "_id": "e0" })).unwrap();
    assert!(!undated.is_past(NOW));
}

#[test]
fn partition_keeps_order() {
    let events = vec![event("a", "2030-01-01", false), event("b", "2031-01-01", false), event("c", "2029-01-01", true)];
    let (upcoming, past) = partition(&events, NOW);
    assert_eq!(upcoming.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(past.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn only_musicians_rate_unrated_past_events() {
    let past = event("a", "2030-01-01", false);
    assert!(past.can_rate(&Role::Musician, NOW));
    assert!(!past.can_rate(&Role::Organizer, NOW));
    assert!(!past.can_rate(&Role::from_wire("musico"), NOW));
    assert!(!event("b", "2030-01-01", true).can_rate(&Role::Musician, NOW));
    assert!(!event("c", "2031-01-01", false).can_rate(&Role::Musician, NOW));
    assert_eq!(past.organizer.as_ref().map(|o| o.id.as_str()), Some("o1"));
}

#[tokio::test]
async fn history_endpoint_depends_on_role() {
    let h = harness();
    h.transport.push_json(200, json!([]));
    h.transport.push_json(200, json!([]));
    h.transport.push_json(200, json!([]));

    history(&h.gateway, &Role::Organizer).await.unwrap();
    history(&h.gateway, &Role::Musician).await.unwrap();
    history(&h.gateway, &Role::from_wire("organizador")).await.unwrap();

    let urls: Vec<String> = h.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://api.test/api/eventos/historial/organizador",
            "http://api.test/api/eventos/historial/musico",
            "http://api.test/api/eventos/historial/musico",
        ]
    );
}

#[tokio::test]
async fn rate_validates_score_before_sending() {
    let h = harness();
    for bad in [0, 6] {
        let err = rate(&h.gateway, "e1", bad, "").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
    assert!(h.transport.requests().is_empty());

    h.transport.push_json(200, json!({ "msg": "Calificación registrada" }));
    rate(&h.gateway, "e1", 5, "  Genial  ").await.unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.url, "http://api.test/api/eventos/e1/calificar");
    assert_eq!(req.body, Some(json!({ "calificacion": 5, "comentario": "Genial" })));
}
