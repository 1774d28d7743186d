use super::*;

#[test]
fn from_result_keeps_value_or_user_message() {
    let ok: Loadable<u32> = Loadable::from_result(Ok(3));
    assert_eq!(ok.ready(), Some(&3));
    assert_eq!(ok.error(), None);

    let failed: Loadable<u32> = Loadable::from_result(Err(ApiError::Status {
        status: 404,
        message: "Oferta no encontrada".to_owned(),
    }));
    assert_eq!(failed.error(), Some("Oferta no encontrada"));
    assert!(failed.ready().is_none());
}

#[test]
fn loading_is_neither_ready_nor_failed() {
    let state: Loadable<()> = Loadable::Loading;
    assert!(state.is_loading());
    assert!(state.ready().is_none());
    assert!(state.error().is_none());
}
