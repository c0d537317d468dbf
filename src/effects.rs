//! Per-element interaction effects: ripple feedback, parallax decoration,
//! the hero typewriter, scroll throttling and resize debouncing, and the
//! image fade-in/fallback behavior.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    HtmlElement, HtmlImageElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config;

/// Placement of a ripple inside its host: sized to the larger host
/// dimension and centered on the pointer offset.
pub struct RippleGeometry {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

pub fn ripple_geometry(width: f64, height: f64, offset_x: f64, offset_y: f64) -> RippleGeometry {
    let size = width.max(height);
    RippleGeometry {
        size,
        x: offset_x - size / 2.0,
        y: offset_y - size / 2.0,
    }
}

/// Appends a transient ripple span at the click position; the span removes
/// itself after the ripple animation has played out.
pub fn spawn_ripple(target: &HtmlElement, event: &MouseEvent) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let rect = target.get_bounding_client_rect();
    let geometry = ripple_geometry(
        rect.width(),
        rect.height(),
        event.client_x() as f64 - rect.left(),
        event.client_y() as f64 - rect.top(),
    );

    if let Ok(ripple) = document.create_element("span") {
        ripple.set_class_name("ripple");
        if let Some(html) = ripple.dyn_ref::<HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("width", &format!("{}px", geometry.size));
            let _ = style.set_property("height", &format!("{}px", geometry.size));
            let _ = style.set_property("left", &format!("{}px", geometry.x));
            let _ = style.set_property("top", &format!("{}px", geometry.y));
        }
        let _ = target.append_child(&ripple);
        Timeout::new(config::RIPPLE_DURATION_MS, move || ripple.remove()).forget();
    }
}

/// The fixed-size ripple variant the service links use: a 20px dot fired
/// from the center of the host.
pub fn spawn_centered_ripple(target: &HtmlElement) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Ok(ripple) = document.create_element("span") {
        ripple.set_class_name("ripple");
        if let Some(html) = ripple.dyn_ref::<HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("left", "50%");
            let _ = style.set_property("top", "50%");
            let _ = style.set_property("width", "20px");
            let _ = style.set_property("height", "20px");
            let _ = style.set_property("margin-left", "-10px");
            let _ = style.set_property("margin-top", "-10px");
        }
        let _ = target.style().set_property("position", "relative");
        let _ = target.append_child(&ripple);
        Timeout::new(config::RIPPLE_DURATION_MS, move || ripple.remove()).forget();
    }
}

/// Transform for a decorative shape at the given scroll offset; deeper
/// shapes in document order drift faster.
pub fn parallax_transform(scrolled: f64, index: usize) -> String {
    let speed = 0.5 + index as f64 * 0.2;
    format!(
        "translateY({}px) rotate({}deg)",
        -(scrolled * speed),
        scrolled * 0.1
    )
}

/// Applies the parallax transform to every decorative shape currently in
/// the document.
pub fn run_parallax(scrolled: f64) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(shapes) = document.query_selector_all(".shape, .star") {
            for index in 0..shapes.length() {
                if let Some(shape) = shapes
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                {
                    let _ = shape
                        .style()
                        .set_property("transform", &parallax_transform(scrolled, index as usize));
                }
            }
        }
    }
}

/// 3D tilt for the quote container, following the pointer within the box.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / 20.0;
    let rotate_y = (width / 2.0 - x) / 20.0;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-2px)")
}

pub const TILT_REST: &str =
    "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(0px)";

/// Gate allowing at most one scheduled firing per window; `try_arm`
/// refuses until the pending firing reports back through `fire`.
#[derive(Default)]
pub struct Throttle {
    in_flight: bool,
}

impl Throttle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_arm(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    pub fn fire(&mut self) {
        self.in_flight = false;
    }
}

/// Trailing-edge debounce: every burst member arms a new generation, and
/// only the wakeup holding the newest generation is still current when its
/// timer fires.
#[derive(Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Reveals a fixed string one character per step. Consumed once exhausted;
/// there is no way to rewind it.
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn step(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedHeadingProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Heading that types itself in, one character per tick.
#[function_component(TypedHeading)]
pub fn typed_heading(props: &TypedHeadingProps) -> Html {
    let shown = use_state(String::new);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |text: &AttrValue| {
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let typewriter = Typewriter::new(text);

                if !typewriter.is_done() {
                    let typewriter = Rc::new(RefCell::new(typewriter));
                    let handle_clone = handle.clone();
                    let interval = Interval::new(config::TYPING_SPEED_MS, move || {
                        match typewriter.borrow_mut().step() {
                            Some(prefix) => shown.set(prefix),
                            None => {
                                if let Some(interval) = handle_clone.borrow_mut().take() {
                                    drop(interval);
                                }
                            }
                        }
                    });
                    *handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.text.clone(),
        );
    }

    html! {
        <h1 class={props.class.clone()}>{ (*shown).clone() }</h1>
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Button that plays the ripple at the click point and logs the
/// interaction before delegating to the caller's handler.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let node = use_node_ref();

    let onclick = {
        let node = node.clone();
        let delegate = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(button) = node.cast::<HtmlElement>() {
                spawn_ripple(&button, &event);
                gloo_console::log!("Button clicked:", button.class_name());
            }
            delegate.emit(event);
        })
    };

    html! {
        <button ref={node} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </button>
    }
}

/// Smooth-scrolls the first match of `selector` into view.
pub fn scroll_to_anchor(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(Some(target)) = document.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Spreads the floating decorations out in time so they do not bob in
/// lockstep.
pub fn randomize_float_timing() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(floats) = document.query_selector_all(".floating-tooth, .floating-star") {
            for index in 0..floats.length() {
                if let Some(float) = floats
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                {
                    let delay = js_sys::Math::random() * 2.0;
                    let duration = 3.0 + js_sys::Math::random() * 2.0;
                    let style = float.style();
                    let _ = style.set_property("animation-delay", &format!("{delay}s"));
                    let _ = style.set_property("animation-duration", &format!("{duration}s"));
                }
            }
        }
    }
}

/// Fades every image in as it loads; the banner image additionally swaps
/// to a fallback URL if loading fails.
pub fn init_image_loading() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    if let Ok(images) = document.query_selector_all("img") {
        for index in 0..images.length() {
            if let Some(image) = images
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
            {
                let style = image.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transition", "opacity 0.3s ease");

                let loaded = image.clone();
                let on_load = Closure::wrap(Box::new(move || {
                    let _ = loaded.style().set_property("opacity", "1");
                }) as Box<dyn FnMut()>);
                let _ = image
                    .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
                on_load.forget();

                // Cached images may never emit a load event.
                if image.complete() {
                    let _ = image.style().set_property("opacity", "1");
                }
            }
        }
    }

    if let Ok(Some(banner)) = document.query_selector(".banner-image img") {
        if let Ok(banner) = banner.dyn_into::<HtmlImageElement>() {
            let fallback = banner.clone();
            let on_error = Closure::wrap(Box::new(move || {
                gloo_console::error!("Banner image failed to load, using fallback");
                fallback.set_src(config::BANNER_FALLBACK_URL);
            }) as Box<dyn FnMut()>);
            let _ = banner
                .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
            on_error.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_centers_on_pointer() {
        let geometry = ripple_geometry(200.0, 50.0, 30.0, 20.0);
        assert_eq!(geometry.size, 200.0);
        assert_eq!(geometry.x, 30.0 - 100.0);
        assert_eq!(geometry.y, 20.0 - 100.0);
    }

    #[test]
    fn ripple_uses_larger_dimension() {
        let geometry = ripple_geometry(40.0, 90.0, 0.0, 0.0);
        assert_eq!(geometry.size, 90.0);
    }

    #[test]
    fn parallax_speed_scales_with_index() {
        assert_eq!(parallax_transform(100.0, 0), "translateY(-50px) rotate(10deg)");
        assert_eq!(parallax_transform(100.0, 2), "translateY(-90px) rotate(10deg)");
    }

    #[test]
    fn tilt_is_flat_at_center() {
        let transform = tilt_transform(100.0, 40.0, 200.0, 80.0);
        assert_eq!(
            transform,
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-2px)"
        );
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        let transform = tilt_transform(200.0, 80.0, 200.0, 80.0);
        assert_eq!(
            transform,
            "perspective(1000px) rotateX(2deg) rotateY(-5deg) translateY(-2px)"
        );
    }

    #[test]
    fn throttle_admits_one_firing_per_window() {
        let mut throttle = Throttle::new();
        assert!(throttle.try_arm());
        assert!(!throttle.try_arm());
        assert!(!throttle.try_arm());
        throttle.fire();
        assert!(throttle.try_arm());
    }

    #[test]
    fn debouncer_keeps_only_trailing_generation() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.arm();
        let second = debouncer.arm();
        let third = debouncer.arm();

        assert!(!debouncer.is_current(first));
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }

    #[test]
    fn typewriter_reveals_one_char_per_step() {
        let mut typewriter = Typewriter::new("abc");
        assert_eq!(typewriter.step().as_deref(), Some("a"));
        assert_eq!(typewriter.step().as_deref(), Some("ab"));
        assert_eq!(typewriter.step().as_deref(), Some("abc"));
        assert!(typewriter.is_done());
        assert_eq!(typewriter.step(), None);
        assert_eq!(typewriter.step(), None);
    }

    #[test]
    fn empty_typewriter_is_born_exhausted() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_done());
        assert_eq!(typewriter.step(), None);
    }
}
