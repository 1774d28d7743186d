use super::*;
use serde_json::json;

fn summary(unread: u32, offer: Option<&str>) -> ConversationSummary {
    serde_json::from_value(json!({
        "userId": "o1",
        "userName": "Sala Sur",
        "ofertaTitulo": offer,
        "ultimoMensaje": "¿Sigue disponible?",
        "noLeidos": unread,
    }))
    .unwrap()
}

#[test]
fn unread_total_sums_every_conversation() {
    assert_eq!(unread_total(&[summary(2, None), summary(0, None), summary(3, None)]), 5);
    assert_eq!(unread_total(&[]), 0);
}

#[test]
fn preview_prefixes_offer_title_when_present() {
    assert_eq!(preview(&summary(0, Some("Jazz en la terraza"))), "Jazz en la terraza: ¿Sigue disponible?");
    assert_eq!(preview(&summary(0, None)), "¿Sigue disponible?");
    assert_eq!(preview(&summary(0, Some(""))), "¿Sigue disponible?");
}
