use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::effects::{Debouncer, RippleButton};
use crate::reveal::{self, ObserveOptions, RevealMode};
use crate::services::{card_padding_rem, ServiceCard, SERVICES};

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let hovered = use_state(|| None::<usize>);
    let padding = use_state(|| card_padding_rem(viewport_width()));
    let loaded = use_state(|| 0usize);
    let ready = use_state(|| false);

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |index: Option<usize>| hovered.set(index))
    };

    {
        let padding = padding.clone();
        let loaded = loaded.clone();
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                ready.set(true);

                // Cards surface one by one while the section settles.
                for index in 0..SERVICES.len() {
                    let loaded = loaded.clone();
                    Timeout::new(
                        (index as u32 + 1) * config::CARD_LOADING_STEP_MS,
                        move || loaded.set(index + 1),
                    )
                    .forget();
                }

                let watcher = reveal::mount_reveal(
                    ".service-card-services-section",
                    ObserveOptions::default(),
                    RevealMode::InlineFade,
                );

                let debouncer = Rc::new(RefCell::new(Debouncer::new()));
                let resize_callback = Closure::wrap(Box::new(move || {
                    let generation = debouncer.borrow_mut().arm();
                    let debouncer = debouncer.clone();
                    let padding = padding.clone();
                    Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                        if debouncer.borrow().is_current(generation) {
                            padding.set(card_padding_rem(viewport_width()));
                        }
                    })
                    .forget();
                }) as Box<dyn FnMut()>);

                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    drop(watcher);
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_view_all = Callback::from(|_: MouseEvent| {
        gloo_console::log!("Viewing all services...");
    });
    let on_play_video = Callback::from(|_: MouseEvent| {
        gloo_console::log!("Playing video...");
    });

    let body_style = if *ready {
        "opacity: 1; transition: opacity 0.5s ease-in-out;"
    } else {
        "opacity: 0;"
    };

    html! {
        <div class="services-section-body" style={body_style}>
            <style>
                {r#"
                    .services-section-body {
                        padding: 8rem 8vw 5rem;
                    }
                    .services-header {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 3rem;
                    }
                    .services-header h1 { font-size: 2.6rem; color: #0f172a; }
                    .services-header p { color: #64748b; line-height: 1.7; }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .service-card-services-section {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: all 0.6s ease-out;
                    }
                    .service-card-services-section .service-card-inner {
                        background: #fff;
                        border-radius: 18px;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        cursor: pointer;
                        outline-offset: 4px;
                        height: 100%;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .service-card-inner.loading {
                        filter: saturate(0.4);
                    }
                    .icon-container-services-section {
                        width: 56px;
                        height: 56px;
                        border-radius: 14px;
                        background: rgba(59, 130, 246, 0.12);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.25rem;
                    }
                    .service-title-services-section { color: #0f172a; }
                    .service-description-services-section { color: #64748b; line-height: 1.6; }
                    .read-more-btn-services-section {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #1d4ed8;
                        text-decoration: none;
                        font-weight: 600;
                        overflow: hidden;
                    }
                    .services-footer {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                "#}
            </style>

            <header class="services-header">
                <h1>{"Our Dental Services"}</h1>
                <p>
                    {"From routine check-ups to full smile renewals, every treatment is \
                      delivered by a team that takes the time to know you."}
                </p>
            </header>

            <div id="servicesGrid" class="services-grid">
                {
                    SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard
                            key={service.id.to_string()}
                            service={service}
                            index={index}
                            hovered={*hovered}
                            on_hover={on_hover.clone()}
                            padding={*padding}
                            loading={index >= *loaded}
                        />
                    }).collect::<Html>()
                }
            </div>

            <div class="services-footer">
                <RippleButton class="view-all-btn" onclick={on_view_all}>
                    {"View All Services"}
                </RippleButton>
                <RippleButton class="play-video-btn" onclick={on_play_video}>
                    {"▶ Watch Our Clinic Tour"}
                </RippleButton>
            </div>
        </div>
    }
}
