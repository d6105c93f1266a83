use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

/// One-shot visibility flag for entrance animations: flips to true the
/// first time the node's top edge comes within 85% of the viewport
/// height, and stays true afterwards.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let window = web_sys::window().unwrap();
                let fired = Rc::new(Cell::new(false));

                let check = Closure::wrap(Box::new({
                    let window = window.clone();
                    move || {
                        if fired.get() {
                            return;
                        }
                        if let Some(element) = node.cast::<web_sys::HtmlElement>() {
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(0.0);
                            if element.get_bounding_client_rect().top() < viewport * 0.85 {
                                fired.set(true);
                                visible.set(true);
                            }
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref())
                    .unwrap();

                // Elements already on screen reveal without scrolling.
                check
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            check.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            node,
        );
    }

    *visible
}
