use crate::constants::{CARD_CLASS, CONTAINER_CLASS, TITLE_CLASS, TRACK_CLASS};
use reel_core::catalog::{HINT_DESKTOP, HINT_MOBILE, HINT_SUFFIX, SECTION_TAGLINE, SECTION_TITLE};
use reel_core::Item;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve on the next animation frame, once layout for the current DOM has
/// been computed.
pub async fn next_frame() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.request_animation_frame(&resolve);
    });
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}

/// Best-effort inline style write. A failed write only loses one frame.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

fn element(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>().map_err(|e| js_err(e.into()))
}

fn text(
    document: &web::Document,
    tag: &str,
    class: &str,
    content: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

/// Elements the controllers need after the section is built.
pub struct SectionRefs {
    pub title: web::HtmlElement,
    pub container: web::HtmlElement,
    pub track: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
}

fn card(document: &web::Document, item: &Item, slot: usize) -> anyhow::Result<web::HtmlElement> {
    let root = element(document, "div", CARD_CLASS)?;
    root.set_attribute("data-key", &item.key(slot)).map_err(js_err)?;

    let img = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| js_err(e.into()))?;
    img.set_src(&item.image_url);
    img.set_alt(&item.title);
    img.set_draggable(false);
    img.set_attribute("loading", "lazy").map_err(js_err)?;
    root.append_child(&img).map_err(js_err)?;

    let caption = element(document, "div", "showcase-caption")?;
    caption
        .append_child(&text(document, "span", "showcase-category", &item.category)?)
        .map_err(js_err)?;
    caption
        .append_child(&text(document, "h3", "showcase-card-title", &item.title)?)
        .map_err(js_err)?;
    root.append_child(&caption).map_err(js_err)?;
    Ok(root)
}

/// Replace the host's children with the showcase section.
pub fn build_section(
    document: &web::Document,
    host: &web::HtmlElement,
    display: &[Item],
) -> anyhow::Result<SectionRefs> {
    host.set_text_content(None);

    let title = text(document, "h2", TITLE_CLASS, SECTION_TITLE)?;
    host.append_child(&title).map_err(js_err)?;
    host.append_child(&text(document, "p", "showcase-tagline", SECTION_TAGLINE)?)
        .map_err(js_err)?;

    let container = element(document, "div", CONTAINER_CLASS)?;
    let track = element(document, "div", TRACK_CLASS)?;
    set_style(&track, "cursor", "grab");
    set_style(&track, "user-select", "none");
    set_style(&track, "will-change", "transform");

    let mut cards = Vec::with_capacity(display.len());
    for (slot, item) in display.iter().enumerate() {
        let c = card(document, item, slot)?;
        track.append_child(&c).map_err(js_err)?;
        cards.push(c);
    }
    container.append_child(&track).map_err(js_err)?;
    host.append_child(&container).map_err(js_err)?;

    let hint = element(document, "p", "showcase-hint")?;
    hint.append_child(&text(document, "span", "desktop-up", HINT_DESKTOP)?)
        .map_err(js_err)?;
    hint.append_child(&text(document, "span", "mobile-only", HINT_MOBILE)?)
        .map_err(js_err)?;
    hint.append_child(&document.create_text_node(HINT_SUFFIX))
        .map_err(js_err)?;
    host.append_child(&hint).map_err(js_err)?;

    Ok(SectionRefs {
        title,
        container,
        track,
        cards,
    })
}
