use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::counter;
use crate::effects::{self, RippleButton, Throttle, TypedHeading};
use crate::reveal::{self, ObserveOptions, RevealMode};
use crate::services::{PreviewCard, SERVICES};
use crate::testimonials::Testimonials;
use crate::Route;

struct Stat {
    target: i64,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { target: 25, label: "Years of Experience" },
    Stat { target: 15, label: "Specialist Dentists" },
    Stat { target: 5000, label: "Happy Patients" },
    Stat { target: 12, label: "Care Awards" },
];

#[derive(PartialEq)]
struct BlogPost {
    title: &'static str,
    excerpt: &'static str,
    image_url: &'static str,
    delay: u32,
}

const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Five Habits for a Healthier Smile",
        excerpt: "Small daily routines protect your teeth far better than any single treatment.",
        image_url: "https://images.pexels.com/photos/3845625/pexels-photo-3845625.jpeg?auto=compress&cs=tinysrgb&w=600",
        delay: 0,
    },
    BlogPost {
        title: "What to Expect From Your First Visit",
        excerpt: "A walkthrough of the check-up, cleaning and care plan we build together.",
        image_url: "https://images.pexels.com/photos/6812540/pexels-photo-6812540.jpeg?auto=compress&cs=tinysrgb&w=600",
        delay: 150,
    },
    BlogPost {
        title: "Whitening, Safely",
        excerpt: "How professional whitening differs from the kits on the shelf.",
        image_url: "https://images.pexels.com/photos/4269942/pexels-photo-4269942.jpeg?auto=compress&cs=tinysrgb&w=600",
        delay: 300,
    },
];

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    post: &'static BlogPost,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = if *hovered {
        "transform: translateY(-10px) rotateY(2deg);"
    } else {
        "transform: translateY(0) rotateY(0deg);"
    };

    html! {
        <article
            class="blog-card fade-in-up"
            data-delay={props.post.delay.to_string()}
            style={style}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <img src={props.post.image_url} alt={props.post.title} loading="lazy" />
            <h3>{ props.post.title }</h3>
            <p>{ props.post.excerpt }</p>
        </article>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Wire up the observers and scroll-driven effects once the sections
    // exist in the document.
    use_effect_with_deps(
        move |_| {
            let watchers: Vec<reveal::Watcher> = [
                reveal::mount_reveal(
                    ".fade-in, .animate-on-scroll",
                    ObserveOptions::default(),
                    RevealMode::Classes,
                ),
                reveal::mount_reveal(
                    ".fade-in-up",
                    ObserveOptions {
                        threshold: config::BLOG_OBSERVER_THRESHOLD,
                        root_margin: config::BLOG_OBSERVER_ROOT_MARGIN,
                    },
                    RevealMode::Classes,
                ),
                counter::observe_stats(),
            ]
            .into_iter()
            .flatten()
            .collect();

            effects::randomize_float_timing();
            effects::init_image_loading();

            let throttle = Rc::new(RefCell::new(Throttle::new()));
            let scroll_callback = Closure::wrap(Box::new({
                let throttle = throttle.clone();
                move || {
                    if throttle.borrow_mut().try_arm() {
                        let throttle = throttle.clone();
                        Timeout::new(config::SCROLL_THROTTLE_MS, move || {
                            throttle.borrow_mut().fire();
                            let scrolled = web_sys::window()
                                .and_then(|w| w.scroll_y().ok())
                                .unwrap_or(0.0);
                            effects::run_parallax(scrolled);
                        })
                        .forget();
                    }
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                drop(watchers);
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    let scroll_to_testimonials =
        Callback::from(|_: MouseEvent| effects::scroll_to_anchor("#testimonials"));

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        padding: 8rem 2rem 4rem;
                        background: linear-gradient(160deg, #eff6ff 0%, #ffffff 60%);
                        overflow: hidden;
                    }
                    .hero-content {
                        max-width: 560px;
                        margin-left: 6vw;
                        z-index: 2;
                    }
                    .hero-title {
                        font-size: 3rem;
                        color: #0f172a;
                        min-height: 3.6rem;
                    }
                    .hero-subtitle {
                        color: #475569;
                        font-size: 1.15rem;
                        line-height: 1.7;
                        margin: 1.5rem 0 2rem;
                    }
                    .banner-image {
                        position: absolute;
                        right: 6vw;
                        width: 420px;
                        z-index: 1;
                    }
                    .banner-image img {
                        width: 100%;
                        border-radius: 28px;
                    }
                    .shape, .star {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(59, 130, 246, 0.12);
                        pointer-events: none;
                    }
                    .shape-1 { width: 160px; height: 160px; top: 15%; left: 55%; }
                    .shape-2 { width: 90px; height: 90px; top: 60%; left: 70%; }
                    .star-1 { width: 24px; height: 24px; top: 30%; left: 40%; background: rgba(250, 204, 21, 0.5); }
                    .star-2 { width: 16px; height: 16px; top: 70%; left: 35%; background: rgba(250, 204, 21, 0.5); }
                    @keyframes float-bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-14px); }
                    }
                    .floating-tooth, .floating-star {
                        position: absolute;
                        font-size: 1.6rem;
                        animation: float-bob 4s ease-in-out infinite;
                        pointer-events: none;
                    }
                    .floating-tooth { top: 20%; right: 12%; }
                    .floating-star { bottom: 18%; right: 28%; }
                    .stats-section {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        padding: 4rem 8vw;
                        background: #1d4ed8;
                    }
                    .stat-item { text-align: center; color: #fff; }
                    .stat-number { font-size: 2.6rem; font-weight: 800; display: block; }
                    .stat-label { opacity: 0.85; }
                    .services-preview {
                        padding: 5rem 8vw;
                        text-align: center;
                    }
                    .services-preview-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        margin: 3rem 0 2rem;
                    }
                    .service-card .service-card-inner {
                        background: #fff;
                        border-radius: 18px;
                        padding: 2rem;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        text-align: left;
                        height: 100%;
                    }
                    .blog-section { padding: 5rem 8vw; background: #f8fbff; }
                    .blog-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .blog-card {
                        background: #fff;
                        border-radius: 18px;
                        overflow: hidden;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .blog-card img { width: 100%; height: 180px; object-fit: cover; }
                    .blog-card h3, .blog-card p { padding: 0 1.25rem; }
                    .blog-card p { padding-bottom: 1.25rem; color: #64748b; }
                    .footer-cta {
                        padding: 5rem 2rem;
                        text-align: center;
                        background: #0f172a;
                        color: #fff;
                    }
                    .section-title { font-size: 2.2rem; color: #0f172a; text-align: center; }
                    .footer-cta .section-title { color: #fff; }
                "#}
            </style>

            <header class="hero">
                <div class="shape shape-1"></div>
                <div class="shape shape-2"></div>
                <div class="star star-1"></div>
                <div class="star star-2"></div>
                <span class="floating-tooth">{"🦷"}</span>
                <span class="floating-star">{"✨"}</span>

                <div class="hero-content">
                    <TypedHeading class="hero-title" text="Your Smile Deserves the Best Care" />
                    <p class="hero-subtitle fade-in">
                        {"Modern, gentle dentistry for the whole family. Book a visit and meet \
                          the team behind thousands of healthy smiles."}
                    </p>
                    <RippleButton class="appointment-btn">
                        {"Book Appointment"}
                    </RippleButton>
                    <RippleButton class="cta-btn" onclick={scroll_to_testimonials}>
                        {"Hear From Patients"}
                    </RippleButton>
                </div>
                <div class="banner-image">
                    <img
                        src="https://images.pexels.com/photos/6812540/pexels-photo-6812540.jpeg?auto=compress&cs=tinysrgb&w=1260"
                        alt="Dentist welcoming a patient"
                    />
                </div>
            </header>

            <section class="stats-section">
                {
                    STATS.iter().map(|stat| html! {
                        <div class="stat-item">
                            <span class="stat-number" data-target={stat.target.to_string()}>{"0"}</span>
                            <span class="stat-label">{ stat.label }</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="services-preview">
                <h2 class="section-title fade-in">{"Care That Covers Everything"}</h2>
                <div class="services-preview-grid">
                    {
                        SERVICES.iter().take(3).map(|service| html! {
                            <PreviewCard key={service.id.to_string()} service={service} />
                        }).collect::<Html>()
                    }
                </div>
                <Link<Route> to={Route::Services} classes="view-all-link">
                    {"View All Services"}
                </Link<Route>>
            </section>

            <Testimonials />

            <section class="blog-section">
                <h2 class="section-title fade-in">{"From Our Blog"}</h2>
                <div class="blog-grid">
                    {
                        BLOG_POSTS.iter().map(|post| html! {
                            <BlogCard post={post} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="footer-cta">
                <h2 class="section-title animate-on-scroll">{"Ready for a Brighter Smile?"}</h2>
                <p>{"Appointments available six days a week, with same-day emergency care."}</p>
                <RippleButton class="appointment-btn-footer">
                    {"Book Your Visit"}
                </RippleButton>
            </section>
        </div>
    }
}
