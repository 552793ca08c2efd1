//! Thin, fallible wrappers over the `web-sys` calls the page relies on.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::error::SiteError;
use crate::scroll::reactor::{ScrollInput, SectionGeometry};

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body() -> Result<HtmlElement, SiteError> {
    document()?.body().ok_or(SiteError::NoBody)
}

pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, SiteError> {
    document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

pub fn element_text(id: &str) -> Result<Option<String>, SiteError> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|element| element.text_content()))
}

pub fn scroll_y() -> Result<f64, SiteError> {
    Ok(window()?.scroll_y()?)
}

pub fn inner_width() -> Result<f64, SiteError> {
    Ok(window()?.inner_width()?.as_f64().unwrap_or(0.0))
}

pub fn inner_height() -> Result<f64, SiteError> {
    Ok(window()?.inner_height()?.as_f64().unwrap_or(0.0))
}

pub fn document_height() -> Result<f64, SiteError> {
    Ok(body()?.scroll_height() as f64)
}

pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), SiteError> {
    Ok(element.style().set_property(property, value)?)
}

pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    let classes = element.class_list();
    let toggled = if on { classes.add_1(class) } else { classes.remove_1(class) };
    Ok(toggled?)
}

/// Every `section[id]` in document order with its layout box.
pub fn section_geometry() -> Result<Vec<SectionGeometry>, SiteError> {
    let sections = document()?.query_selector_all("section[id]")?;
    let mut geometry = Vec::with_capacity(sections.length() as usize);
    for index in 0..sections.length() {
        let Some(section) = sections
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        geometry.push(SectionGeometry {
            id: section.id().as_str().into(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
            is_hero: section.class_list().contains("hero"),
        });
    }
    Ok(geometry)
}

pub fn measure(scroll_y: f64, shape_count: usize) -> Result<ScrollInput, SiteError> {
    Ok(ScrollInput {
        scroll_y,
        viewport_height: inner_height()?,
        shape_count,
        sections: section_geometry()?,
    })
}

/// Smoothly brings `element` into view, moving as little as possible.
pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Value of whichever form control fired `event`.
pub fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// True when the event target lies outside every one of `containers`.
pub fn is_outside(event: &Event, containers: &[Option<Element>]) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    containers
        .iter()
        .flatten()
        .all(|container| !container.contains(Some(&target)))
}

/// Fires `on_enter` the first time `element` intersects the viewport,
/// then stops observing. Disconnects when dropped.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    pub fn once<F>(element: &Element, threshold: f64, root_margin: &str, mut on_enter: F) -> Result<Self, SiteError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .find(|entry| entry.is_intersecting());
            if let Some(entry) = entered {
                observer.unobserve(&entry.target());
                on_enter();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
