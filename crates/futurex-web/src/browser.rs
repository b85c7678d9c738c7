//! Browser-backed implementations of the core collaborator traits.

use std::collections::HashMap;

use futurex_core::{Analytics, FilterColumn, FlagStore, FutureXError, OutsidePointer, Region};
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{MouseEvent, Node};

/// DOM id of the element that bounds a popover region.
pub fn region_dom_id(region: Region) -> &'static str {
    match region {
        Region::TimeDropdown => "time-selector",
        Region::Filter(FilterColumn::ModelName) => "filter-model-name",
        Region::Filter(FilterColumn::AgentFramework) => "filter-agent-framework",
    }
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// One `mousedown` listener on the document per open region. A press outside
/// the region's root element is reported through `outside`.
pub struct DomOutsidePointer {
    outside: RwSignal<Option<Region>>,
    listeners: HashMap<Region, Closure<dyn FnMut(MouseEvent)>>,
}

impl DomOutsidePointer {
    pub fn new(outside: RwSignal<Option<Region>>) -> Self {
        Self {
            outside,
            listeners: HashMap::new(),
        }
    }
}

impl OutsidePointer for DomOutsidePointer {
    fn subscribe(&mut self, region: Region) {
        let Some(doc) = document() else { return };
        let outside = self.outside;

        let on_mousedown = Closure::wrap(Box::new(move |e: MouseEvent| {
            let Some(root) = document().and_then(|d| d.get_element_by_id(region_dom_id(region))) else {
                return;
            };
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !root.contains(target.as_ref()) {
                outside.set(Some(region));
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        match doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref()) {
            Ok(()) => {
                self.listeners.insert(region, on_mousedown);
            }
            Err(_) => log_error("failed to attach outside-click listener"),
        }
    }

    fn unsubscribe(&mut self, region: Region) {
        let Some(on_mousedown) = self.listeners.remove(&region) else { return };
        if let Some(doc) = document() {
            let _ = doc.remove_event_listener_with_callback(
                "mousedown",
                on_mousedown.as_ref().unchecked_ref(),
            );
        }
    }
}

/// `window.localStorage`, when the browser grants it.
pub struct LocalStorageFlags;

impl LocalStorageFlags {
    fn storage() -> futurex_core::Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| FutureXError::Storage("localStorage unavailable".to_string()))
    }
}

impl FlagStore for LocalStorageFlags {
    fn get(&self, key: &str) -> futurex_core::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| FutureXError::Storage(format!("failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> futurex_core::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| FutureXError::Storage(format!("failed to write {key}")))
    }
}

/// Logs analytics events to the browser console.
pub struct ConsoleAnalytics {
    pub enabled: bool,
}

impl Analytics for ConsoleAnalytics {
    fn emit(&self, event: &str, props: &Value) {
        if self.enabled {
            web_sys::console::log_2(&JsValue::from_str(event), &JsValue::from_str(&props.to_string()));
        }
    }
}

pub fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
