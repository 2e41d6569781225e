use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::DomError;
use crate::motion::parallax::ContainerBounds;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn viewport_height(window: &Window) -> Result<f64, DomError> {
    window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_string()))
}

/// Document-relative top edge and height of `element`.
pub fn element_bounds(window: &Window, element: &Element) -> Result<ContainerBounds, DomError> {
    let rect = element.get_bounding_client_rect();
    Ok(ContainerBounds {
        top: rect.top() + window.scroll_y()?,
        height: rect.height(),
    })
}

/// Scrolls the section with the given id into view. Smoothness comes from
/// `scroll-behavior: smooth` on the root element.
pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    element.scroll_into_view();
    Ok(())
}

pub fn set_style(element: &Element, style: &str) {
    if let Err(err) = element.set_attribute("style", style) {
        warn!("failed to apply style: {}", DomError::from(err));
    }
}

/// A callback registered on the window for a set of events. The listener is
/// removed when this value is dropped.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(
        events: &'static [&'static str],
        callback: impl FnMut() + 'static,
    ) -> Result<Self, DomError> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        for event in events {
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        }
        Ok(Self {
            window,
            events,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("failed to remove `{}` listener: {}", event, DomError::from(err));
            }
        }
    }
}
