//! Scroll-triggered reveal coordination built on `IntersectionObserver`.
//!
//! Elements are registered with a one-shot token; a token fires at most
//! once no matter how many intersection entries the browser delivers, and
//! the element is unobserved right after its first firing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;

const TOKEN_ATTR: &str = "data-reveal-token";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token(usize);

/// Tracks which registered elements have already fired.
#[derive(Default)]
pub struct Registry {
    fired: Vec<bool>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> Token {
        self.fired.push(false);
        Token(self.fired.len() - 1)
    }

    /// Returns true exactly once per token.
    pub fn fire(&mut self, token: Token) -> bool {
        match self.fired.get_mut(token.0) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: config::OBSERVER_THRESHOLD,
            root_margin: config::OBSERVER_ROOT_MARGIN,
        }
    }
}

/// How a revealed element is transitioned to its visible state.
#[derive(Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Adds the `visible` and `animated` classes.
    Classes,
    /// Writes the resting opacity/transform inline, for markup that starts
    /// hidden through inline-styleable defaults.
    InlineFade,
}

impl RevealMode {
    fn apply(self, element: &Element) {
        match self {
            RevealMode::Classes => {
                let _ = element.class_list().add_2("visible", "animated");
            }
            RevealMode::InlineFade => {
                if let Some(html) = element.dyn_ref::<HtmlElement>() {
                    let style = html.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                }
            }
        }
    }
}

/// A mounted observer over every element matching a selector. Dropping the
/// watcher disconnects the observer.
pub struct Watcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Watcher {
    pub fn mount(
        selector: &str,
        options: ObserveOptions,
        on_enter: impl Fn(Element) + 'static,
    ) -> Option<Watcher> {
        let document = web_sys::window()?.document()?;
        let nodes = document.query_selector_all(selector).ok()?;
        let registry = Rc::new(RefCell::new(Registry::new()));

        let callback_registry = registry.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let fired = target
                        .get_attribute(TOKEN_ATTR)
                        .and_then(|raw| raw.parse::<usize>().ok())
                        .map(|slot| callback_registry.borrow_mut().fire(Token(slot)))
                        .unwrap_or(false);
                    if !fired {
                        continue;
                    }
                    observer.unobserve(&target);
                    on_enter(target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;

        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    let token = registry.borrow_mut().register();
                    let _ = element.set_attribute(TOKEN_ATTR, &token.0.to_string());
                    observer.observe(&element);
                }
            }
        }

        Some(Watcher {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reads an element's `data-delay` attribute; anything unparsable counts
/// as no delay.
pub fn parse_delay(attr: Option<String>) -> u32 {
    attr.and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Observes every match of `selector` and reveals each one after its
/// `data-delay`, at most once.
pub fn mount_reveal(
    selector: &str,
    options: ObserveOptions,
    mode: RevealMode,
) -> Option<Watcher> {
    Watcher::mount(selector, options, move |element| {
        let delay = parse_delay(element.get_attribute("data-delay"));
        if delay == 0 {
            mode.apply(&element);
        } else {
            Timeout::new(delay, move || mode.apply(&element)).forget();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_fires_each_token_once() {
        let mut registry = Registry::new();
        let first = registry.register();
        let second = registry.register();

        assert!(registry.fire(first));
        assert!(!registry.fire(first));
        assert!(!registry.fire(first));
        assert!(registry.fire(second));
        assert!(!registry.fire(second));
    }

    #[test]
    fn registry_ignores_unknown_tokens() {
        let mut registry = Registry::new();
        assert!(!registry.fire(Token(3)));
    }

    #[test]
    fn delay_parses_plain_milliseconds() {
        assert_eq!(parse_delay(Some("200".into())), 200);
        assert_eq!(parse_delay(Some(" 150 ".into())), 150);
    }

    #[test]
    fn malformed_delay_degrades_to_zero() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("".into())), 0);
        assert_eq!(parse_delay(Some("fast".into())), 0);
        assert_eq!(parse_delay(Some("-100".into())), 0);
        assert_eq!(parse_delay(Some("1.5".into())), 0);
    }
}
