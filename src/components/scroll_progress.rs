use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config::PROGRESS_SPRING;
use crate::error::SiteResult;
use crate::motion::dom;
use crate::motion::frame::FrameLoop;
use crate::motion::listener::WindowListener;
use crate::motion::scroll;
use crate::motion::spring::Spring;

struct ProgressTracking {
    _scroll: WindowListener,
    _resize: WindowListener,
    _frames: Rc<FrameLoop>,
}

fn track_progress(bar: NodeRef) -> SiteResult<ProgressTracking> {
    let spring = Rc::new(RefCell::new(Spring::new(PROGRESS_SPRING, 0.0)));

    let frames = {
        let spring = spring.clone();
        Rc::new(FrameLoop::new(move |dt| {
            let mut spring = spring.borrow_mut();
            let scale = spring.step(dt);
            if let Some(element) = bar.cast::<Element>() {
                let style = format!("transform: scaleX({:.4});", scale);
                if let Err(err) = element.set_attribute("style", &style) {
                    log::warn!("failed to update scroll progress: {:?}", err);
                }
            }
            !spring.is_at_rest()
        })?)
    };

    let update = {
        let frames = frames.clone();
        Rc::new(move || match dom::scroll_metrics() {
            Ok((offset, document_height, viewport)) => {
                spring
                    .borrow_mut()
                    .set_target(scroll::progress(offset, document_height, viewport));
                frames.wake();
            }
            Err(err) => log::warn!("could not read scroll position: {}", err),
        })
    };
    update();

    let on_scroll = update.clone();
    let scroll_listener = WindowListener::new("scroll", move |_| on_scroll())?;
    let resize_listener = WindowListener::new("resize", move |_| update())?;

    Ok(ProgressTracking {
        _scroll: scroll_listener,
        _resize: resize_listener,
        _frames: frames,
    })
}

/// Thin bar across the top of the viewport that fills as the page scrolls.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let bar = use_node_ref();

    {
        let bar = bar.clone();
        use_effect_with_deps(
            move |_| {
                let tracking = track_progress(bar)
                    .map_err(|err| log::warn!("scroll progress unavailable: {}", err))
                    .ok();
                move || drop(tracking)
            },
            (),
        );
    }

    html! {
        <div ref={bar} class="scroll-progress" style="transform: scaleX(0);" aria-hidden="true"></div>
    }
}
