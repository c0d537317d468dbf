use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod counter;
mod effects;
mod reveal;
mod services;
mod testimonials;
mod pages {
    pub mod home;
    pub mod services;
}

use effects::RippleButton;
use pages::home::Home;
use pages::services::ServicesPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scrolled = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scrolled > config::NAVBAR_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let jump_to_testimonials = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            effects::scroll_to_anchor("#testimonials");
        })
    };

    let nav_style = if *is_scrolled {
        config::NAVBAR_STYLE_SCROLLED
    } else {
        config::NAVBAR_STYLE_TOP
    };
    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav class="navbar" style={nav_style}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"BrightSmile Dental"}
                </Link<Route>>

                <button id="mobile-menu-toggle" class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-menu" class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <a href="#testimonials" class="nav-link" onclick={jump_to_testimonials}>
                        {"Testimonials"}
                    </a>
                    <RippleButton class="appointment-btn">
                        {"Book Appointment"}
                    </RippleButton>
                </div>
            </div>
        </nav>
    }
}

/// Utility classes and keyframes shared by every page: ripple and touch
/// feedback, the scroll-reveal states, and the navbar shell.
#[function_component(GlobalStyles)]
fn global_styles() -> Html {
    html! {
        <style>
            {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                    background: #ffffff;
                }
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-weight: 800;
                    font-size: 1.3rem;
                    color: #1d4ed8;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #334155;
                    text-decoration: none;
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #334155;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #fff;
                        padding: 1.5rem;
                        box-shadow: 0 12px 24px rgba(15, 23, 42, 0.12);
                    }
                    .nav-menu.mobile-menu-open { display: flex; }
                }
                .appointment-btn, .cta-btn, .appointment-btn-footer,
                .view-all-btn, .play-video-btn {
                    position: relative;
                    overflow: hidden;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 1.8rem;
                    font-weight: 700;
                    cursor: pointer;
                    background: #1d4ed8;
                    color: #fff;
                    margin-right: 0.75rem;
                }
                .cta-btn, .play-video-btn {
                    background: transparent;
                    color: #1d4ed8;
                    border: 2px solid #1d4ed8;
                }
                .ripple {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.3);
                    transform: scale(0);
                    animation: ripple-animation 0.6s linear;
                    pointer-events: none;
                }
                @keyframes ripple-animation {
                    to { transform: scale(4); opacity: 0; }
                }
                .touch-active {
                    transform: scale(0.98);
                    transition: transform 0.1s ease;
                }
                .fade-in, .animate-on-scroll {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: all 0.6s ease-out;
                }
                .fade-in.visible, .animate-on-scroll.animated {
                    opacity: 1;
                    transform: translateY(0);
                }
                .fade-in-up {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: all 0.6s ease-out;
                }
                .fade-in-up.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .view-all-link {
                    color: #1d4ed8;
                    font-weight: 700;
                    text-decoration: none;
                }
            "#}
        </style>
    }
}

#[function_component]
fn App() -> Html {
    // Fade the page in once the app has mounted.
    use_effect_with_deps(
        move |_| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let style = body.style();
                let _ = style.set_property("transition", "opacity 0.5s");
                let _ = style.set_property("opacity", "1");
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
