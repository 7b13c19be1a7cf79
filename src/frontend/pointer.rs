use std::{cell::RefCell, rc::Rc};

use gloo::{
    events::EventListener,
    render::{request_animation_frame, AnimationFrame},
};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;

use crate::pointer::{FrameCoalescer, FrameRequest, PointerPosition};

/// Window-wide `mousemove` subscription for one mount of the view.
///
/// Dropping the tracker removes the listener and cancels any outstanding
/// frame, so nothing is written after teardown.
struct PointerTracker {
    coalescer: Rc<RefCell<FrameCoalescer>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    listener: Option<EventListener>,
}

impl PointerTracker {
    fn attach(setter: UseStateSetter<PointerPosition>) -> Self {
        let coalescer = Rc::new(RefCell::new(FrameCoalescer::new()));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let listener = window().map(|win| {
            let coalescer = Rc::clone(&coalescer);
            let frame = Rc::clone(&frame);
            EventListener::new(&win, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let position =
                    PointerPosition::new(f64::from(event.client_x()), f64::from(event.client_y()));
                if coalescer.borrow_mut().record(position) != FrameRequest::Schedule {
                    return;
                }

                let handle = {
                    let coalescer = Rc::clone(&coalescer);
                    let frame = Rc::clone(&frame);
                    let setter = setter.clone();
                    request_animation_frame(move |_| {
                        frame.borrow_mut().take();
                        let next = coalescer.borrow_mut().on_frame();
                        if let Some(next) = next {
                            setter.set(next);
                        }
                    })
                };
                *frame.borrow_mut() = Some(handle);
            })
        });

        debug!(attached = listener.is_some(), "pointer tracking started");
        Self {
            coalescer,
            frame,
            listener,
        }
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        self.listener.take();
        self.coalescer.borrow_mut().detach();
        self.frame.borrow_mut().take();
        debug!("pointer tracking stopped");
    }
}

/// Latest mouse position, updated at most once per animation frame.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state(PointerPosition::default);

    {
        let setter = position.setter();
        use_effect_with((), move |_| {
            let tracker = PointerTracker::attach(setter);
            move || drop(tracker)
        });
    }

    *position
}
