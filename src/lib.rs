#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod observer;
mod reveal;
mod showcase;

thread_local! {
    static MOUNTED: RefCell<Option<showcase::ShowcaseMount>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.get_element_by_id(constants::HOST_ID).is_none() {
        log::info!("no #{} on this page; nothing to mount", constants::HOST_ID);
        return Ok(());
    }
    // Cards need one layout pass before the cycle width can be measured.
    dom::next_frame().await?;
    mount_into(&document, constants::HOST_ID)
}

fn mount_into(document: &web::Document, host_id: &str) -> anyhow::Result<()> {
    let already = MOUNTED.with(|m| m.borrow().is_some());
    if already {
        log::warn!("[mount] showcase already mounted; ignoring");
        return Ok(());
    }
    let mount = showcase::mount(document, host_id)?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(mount));
    Ok(())
}

/// Mount the showcase into the element with id `host_id`.
#[wasm_bindgen]
pub fn mount_showcase(host_id: &str) -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount_into(&document, host_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Tear the mounted showcase down. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount_showcase() {
    let taken = MOUNTED.with(|m| m.borrow_mut().take());
    drop(taken);
}
