use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view. The `reveal`
/// and `visible` styles live in index.html. Once revealed, content stays
/// visible; the window listener is removed on unmount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let fired = use_mut_ref(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let check_window = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if *fired.borrow() {
                        return;
                    }
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let rect = element.get_bounding_client_rect();
                        let window_height =
                            check_window.inner_height().unwrap().as_f64().unwrap();
                        if rect.top() < window_height * 0.88 {
                            *fired.borrow_mut() = true;
                            visible.set(true);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check for content already in view on mount
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let mut class = classes!("reveal", props.class.clone());
    if *visible {
        class.push("visible");
    }

    html! {
        <div ref={node} {class}>
            { for props.children.iter() }
        </div>
    }
}
