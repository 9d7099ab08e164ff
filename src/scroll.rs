//! Post-render hook that brings the active sidebar entry into view.

/// DOM id carried by the sidebar link of the current page.
pub const ACTIVE_ITEM_ID: &str = "sidebar-active-item";

/// Runs `callback` once the current render and paint have finished.
///
/// In the browser this is a zero-delay timer; elsewhere there is no paint
/// to wait for and the callback is dropped.
pub fn defer_after_paint(callback: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(callback);
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            0,
        ) {
            tracing::warn!("failed to schedule post-render callback: {:?}", err);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(callback);
        tracing::trace!("no paint cycle off wasm, post-render callback skipped");
    }
}

/// Scrolls the element with `id` to the vertical center of its scroll
/// container. Missing elements are ignored.
pub fn scroll_into_center(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Auto);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        options.set_inline(web_sys::ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Schedules [`scroll_into_center`] for the active sidebar entry.
pub fn scroll_active_item_after_paint() {
    defer_after_paint(|| scroll_into_center(ACTIVE_ITEM_ID));
}
