use std::{cell::RefCell, rc::Rc};

use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::motion::{MotionPreset, RevealTracker, Trigger, Visibility};

/// Intersection subscription for one element, disconnected on drop.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

enum RevealWatch {
    Frame { _frame: AnimationFrame },
    Viewport { _observer: ViewportObserver },
    Idle,
}

fn watch_mount(node: NodeRef, on_visible: Callback<()>) -> RevealWatch {
    let frame = request_animation_frame(move |_| {
        // Reading layout commits the initial pose, so the switch to the
        // resting pose is transitioned instead of applied instantly.
        if let Some(element) = node.cast::<Element>() {
            let _ = element.get_bounding_client_rect();
        }
        on_visible.emit(());
    });
    RevealWatch::Frame { _frame: frame }
}

fn watch_viewport(node: NodeRef, on_visible: Callback<()>) -> RevealWatch {
    let Some(element) = node.cast::<Element>() else {
        return RevealWatch::Idle;
    };

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let fallback = (Rc::clone(&tracker), on_visible.clone());
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if tracker.borrow_mut().observe(intersecting) {
                observer.disconnect();
                on_visible.emit(());
            }
        },
    );

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&element);
            RevealWatch::Viewport {
                _observer: ViewportObserver {
                    observer,
                    _callback: callback,
                },
            }
        }
        Err(err) => {
            warn!(error = ?err, "IntersectionObserver unavailable; revealing immediately");
            let (tracker, on_visible) = fallback;
            if tracker.borrow_mut().reveal_now() {
                on_visible.emit(());
            }
            RevealWatch::Idle
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub preset: MotionPreset,
    /// Position in a rendered list; scales the preset's stagger.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub name: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Wraps children in an element that eases from the preset's initial pose to
/// rest the first time it is revealed, and never reverses.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visibility = use_state(Visibility::default);

    let on_visible = {
        let visibility = visibility.setter();
        let name = props.name.clone();
        let index = props.index;
        Callback::from(move |()| {
            debug!(element = %name, index, "revealed");
            visibility.set(Visibility::Visible);
        })
    };

    {
        let node = node.clone();
        let trigger = props.preset.trigger;
        let already_visible = *visibility == Visibility::Visible;
        use_effect_with(trigger, move |trigger| {
            let watch = if already_visible {
                RevealWatch::Idle
            } else {
                match trigger {
                    Trigger::Mount => watch_mount(node, on_visible),
                    Trigger::Viewport => watch_viewport(node, on_visible),
                }
            };
            move || drop(watch)
        });
    }

    let delay = props.preset.delay_for(props.index);
    let style = props.preset.style(*visibility, delay);

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { props.children.clone() }
        </div>
    }
}
