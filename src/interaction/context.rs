use yew::prelude::*;

use crate::interaction::pointer::PointerPosition;
use crate::signal::Signal;

/// Input signals shared by everything on one page view. Created by the page
/// and handed down through a context provider.
#[derive(Clone, PartialEq, Default)]
pub struct InteractionContext {
    /// Raw pointer position, updated on every `mousemove`.
    pub pointer: Signal<PointerPosition>,
    /// Progress of the page container through the viewport, in [0, 1].
    pub scroll: Signal<f64>,
}

impl InteractionContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The surrounding [`InteractionContext`], or a detached one when rendered
/// outside a provider so the component still renders with default values.
#[hook]
pub fn use_interaction() -> InteractionContext {
    let detached = use_memo(|_| InteractionContext::new(), ());
    use_context::<InteractionContext>().unwrap_or_else(|| (*detached).clone())
}
