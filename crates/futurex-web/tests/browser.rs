use futurex_core::{FilterColumn, FlagStore, Notice, NoticeConfig, Region};
use futurex_web::browser::{region_dom_id, LocalStorageFlags};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn region_ids_are_distinct() {
    let ids = [
        region_dom_id(Region::TimeDropdown),
        region_dom_id(Region::Filter(FilterColumn::ModelName)),
        region_dom_id(Region::Filter(FilterColumn::AgentFramework)),
    ];
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let flags = LocalStorageFlags;
    flags.set("futurex_browser_test_flag", "true").unwrap();
    assert_eq!(
        flags.get("futurex_browser_test_flag").unwrap().as_deref(),
        Some("true")
    );
}

#[wasm_bindgen_test]
fn notice_dismissal_persists_in_local_storage() {
    let config = NoticeConfig {
        enabled: true,
        storage_key: "futurex_browser_test_notice".to_string(),
    };
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(&config.storage_key);
    }

    let notice = Notice::new(config.clone(), LocalStorageFlags);
    assert!(notice.should_show());
    notice.dismiss();

    let reloaded = Notice::new(config, LocalStorageFlags);
    assert!(!reloaded.should_show());
}
