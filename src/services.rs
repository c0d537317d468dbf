//! Service records and the card components built from them: the full
//! services grid with sibling dimming and keyboard activation, and the
//! lighter preview cards the landing page shows.

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::effects;

#[derive(PartialEq)]
pub struct Service {
    pub id: u32,
    pub icon_class: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        icon_class: "fas fa-stethoscope",
        title: "General Dental Care",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 2,
        icon_class: "fas fa-tools",
        title: "Dental Implants",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 3,
        icon_class: "fas fa-sparkles",
        title: "Cosmetic Dentistry",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 4,
        icon_class: "fas fa-shield-alt",
        title: "Teeth Whitening",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 5,
        icon_class: "fas fa-heart",
        title: "Pediatric Dental Care",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 6,
        icon_class: "fas fa-bolt",
        title: "Advanced Oral Care",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 7,
        icon_class: "fas fa-smile",
        title: "Comfort Dentistry",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
    Service {
        id: 8,
        icon_class: "fas fa-star",
        title: "Smile Renewal",
        description: "We are excited to meet you and provide the best dental care for your family.",
    },
];

/// Card padding for the current viewport; tighter below the mobile
/// breakpoint.
pub fn card_padding_rem(viewport_width: f64) -> &'static str {
    if viewport_width <= config::MOBILE_BREAKPOINT_PX {
        "2rem"
    } else {
        "2.5rem"
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Pose {
    Rest,
    Pressed,
    Lifted,
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
    pub index: usize,
    pub hovered: Option<usize>,
    pub on_hover: Callback<Option<usize>>,
    pub padding: &'static str,
    pub loading: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let pose = use_state(|| Pose::Rest);
    let touched = use_state(|| false);
    let read_more = use_node_ref();

    let activate = {
        let pose = pose.clone();
        let title = props.service.title;
        move || {
            pose.set(Pose::Pressed);
            let pose = pose.clone();
            Timeout::new(config::BUTTON_PRESS_MS, move || pose.set(Pose::Lifted)).forget();
            gloo_console::log!("Clicked on", title);
        }
    };

    let onclick = {
        let activate = activate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            activate();
        })
    };

    let onkeydown = {
        let activate = activate.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" || event.key() == " " {
                event.prevent_default();
                activate();
            }
        })
    };

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(index)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        let pose = pose.clone();
        Callback::from(move |_: MouseEvent| {
            pose.set(Pose::Rest);
            on_hover.emit(None);
        })
    };

    let ontouchstart = {
        let touched = touched.clone();
        Callback::from(move |_: TouchEvent| touched.set(true))
    };
    let ontouchend = {
        let touched = touched.clone();
        Callback::from(move |_: TouchEvent| {
            let touched = touched.clone();
            Timeout::new(config::TOUCH_RELEASE_MS, move || touched.set(false)).forget();
        })
    };

    let on_read_more = {
        let read_more = read_more.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(link) = read_more.cast::<HtmlElement>() {
                effects::spawn_centered_ripple(&link);
            }
            gloo_console::log!("Navigating to service details...");
        })
    };

    // The outer element belongs to the reveal observer, which writes its
    // opacity/transform inline; everything that re-renders lives on the
    // inner element so those writes survive.
    let mut inner_style = format!("padding: {};", props.padding);
    if *touched {
        inner_style.push_str(" transform: scale(0.98); transition: transform 0.1s ease;");
    } else {
        match props.hovered {
            Some(hovered) if hovered == props.index => inner_style.push_str(" z-index: 10;"),
            Some(_) => inner_style.push_str(" opacity: 0.7; transform: scale(0.95);"),
            None => match *pose {
                Pose::Rest => {}
                Pose::Pressed => inner_style.push_str(" transform: translateY(-8px) scale(0.98);"),
                Pose::Lifted => inner_style.push_str(" transform: translateY(-12px) scale(1);"),
            },
        }
    }

    html! {
        <div class="service-card-services-section">
            <div
                class={classes!(
                    "service-card-inner",
                    props.loading.then(|| "loading"),
                    (*touched).then(|| "touch-active"),
                )}
                style={inner_style}
                tabindex="0"
                role="button"
                aria-label={format!("{} service", props.service.title)}
                onclick={onclick}
                onkeydown={onkeydown}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
                ontouchstart={ontouchstart}
                ontouchend={ontouchend}
            >
                <div class="icon-container-services-section">
                    <i class={classes!("service-icon-services-section", props.service.icon_class)}></i>
                </div>
                <h3 class="service-title-services-section">{ props.service.title }</h3>
                <p class="service-description-services-section">{ props.service.description }</p>
                <a
                    ref={read_more}
                    href="#"
                    class="read-more-btn-services-section"
                    aria-label={format!("Read more about {}", props.service.title)}
                    onclick={on_read_more}
                >
                    <span>{"Read More"}</span>
                    <div class="btn-icon-services-section">
                        <i class="fas fa-chevron-right"></i>
                    </div>
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewCardProps {
    pub service: &'static Service,
}

/// The landing-page teaser card: plain hover lift and touch feedback, no
/// grid coupling.
#[function_component(PreviewCard)]
pub fn preview_card(props: &PreviewCardProps) -> Html {
    let hovered = use_state(|| false);
    let touched = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let ontouchstart = {
        let touched = touched.clone();
        Callback::from(move |_: TouchEvent| touched.set(true))
    };
    let ontouchend = {
        let touched = touched.clone();
        Callback::from(move |_: TouchEvent| {
            let touched = touched.clone();
            Timeout::new(config::TOUCH_RELEASE_MS, move || touched.set(false)).forget();
        })
    };

    let style = if *touched {
        "transition: transform 0.1s ease; transform: scale(0.98);"
    } else if *hovered {
        "transition: transform 0.3s ease; transform: translateY(-10px) scale(1.02);"
    } else {
        "transition: transform 0.3s ease; transform: translateY(0) scale(1);"
    };

    // Outer element is reveal-owned; the hover/touch styling re-renders on
    // the inner one.
    html! {
        <div class="service-card fade-in">
            <div
                class={classes!("service-card-inner", (*touched).then(|| "touch-active"))}
                style={style}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
                ontouchstart={ontouchstart}
                ontouchend={ontouchend}
            >
                <i class={props.service.icon_class}></i>
                <h3>{ props.service.title }</h3>
                <p>{ props.service.description }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_tightens_at_mobile_widths() {
        assert_eq!(card_padding_rem(375.0), "2rem");
        assert_eq!(card_padding_rem(768.0), "2rem");
        assert_eq!(card_padding_rem(769.0), "2.5rem");
        assert_eq!(card_padding_rem(1440.0), "2.5rem");
    }

    #[test]
    fn services_have_unique_ids() {
        for (index, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.id as usize, index + 1);
        }
    }
}
