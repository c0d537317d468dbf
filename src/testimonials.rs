//! Testimonial carousel: a rotation cursor over a fixed set of quotes, a
//! fade-out/swap/fade-in choreography with a per-slot stagger, and an
//! auto-advance timer that pauses while the pointer is over the section.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::effects;

#[derive(PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar_url: &'static str,
    pub image_url: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I want to say thank you to my doctor Steve! Vivamus sagittis massa vitae \
                bibendum rhoncus. Duis cursus. Thank you for helping me overcome my fear of \
                the dentist! Vivamus sagittis massa vitae bibendum rhoncus. Duis cursus.",
        name: "Robert Lee",
        role: "software engineer",
        avatar_url: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=100",
        image_url: "https://images.pexels.com/photos/6812472/pexels-photo-6812472.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    Testimonial {
        quote: "Outstanding service and care! The team here is incredibly professional and \
                made me feel comfortable throughout my entire treatment. I couldn't be \
                happier with the results and the overall experience.",
        name: "Sarah Johnson",
        role: "marketing director",
        avatar_url: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=100",
        image_url: "https://images.pexels.com/photos/6812465/pexels-photo-6812465.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    Testimonial {
        quote: "Exceptional medical care with a personal touch. The staff is knowledgeable, \
                caring, and always goes above and beyond to ensure patient satisfaction. \
                Highly recommend this practice!",
        name: "Michael Chen",
        role: "business analyst",
        avatar_url: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=100",
        image_url: "https://images.pexels.com/photos/6812470/pexels-photo-6812470.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
];

/// Cursor over a fixed-length list; stays inside `[0, len)` and wraps at
/// both ends. Operations return the new index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1);
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

/// Where the swap choreography currently is. `Settling` is the faded-out
/// gap before the content swap; `Entering` is the staggered fade back in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SwapPhase {
    Resting,
    Settling,
    Entering,
}

/// Number of content slots swapped per rotation: quote, name, role,
/// avatar, image.
pub const SLOT_COUNT: usize = 5;

pub fn slot_delay_ms(slot: usize) -> u32 {
    slot as u32 * config::SWAP_STAGGER_MS
}

/// How long after the swap the last slot is still fading in.
pub fn enter_duration_ms() -> u32 {
    slot_delay_ms(SLOT_COUNT - 1) + config::SWAP_FADE_MS
}

/// Inline style for one slot in the given phase.
pub fn slot_style(phase: SwapPhase, slot: usize) -> String {
    match phase {
        SwapPhase::Resting => {
            "opacity: 1; transform: translateY(0); transition: all 0.5s ease;".to_string()
        }
        SwapPhase::Settling => {
            "opacity: 0; transform: translateY(20px); transition: all 0.5s ease;".to_string()
        }
        SwapPhase::Entering => format!(
            "opacity: 1; transform: translateY(0); transition: all 0.5s ease; transition-delay: {}ms;",
            slot_delay_ms(slot)
        ),
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Control {
    Prev,
    Next,
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let rotation = use_state(|| Rotation::new(TESTIMONIALS.len()));
    let phase = use_state(|| SwapPhase::Resting);
    let paused = use_state(|| false);
    let pressed = use_state(|| None::<Control>);
    let tilt = use_state(|| effects::TILT_REST.to_string());
    let rating_lifted = use_state(|| false);

    // Fade out, swap after the settle delay, then stagger the slots back in.
    let show = {
        let rotation = rotation.clone();
        let phase = phase.clone();
        Callback::from(move |next: Rotation| {
            phase.set(SwapPhase::Settling);
            let rotation = rotation.clone();
            let phase = phase.clone();
            Timeout::new(config::SWAP_SETTLE_MS, move || {
                rotation.set(next);
                phase.set(SwapPhase::Entering);
                let phase = phase.clone();
                Timeout::new(enter_duration_ms(), move || {
                    phase.set(SwapPhase::Resting);
                })
                .forget();
            })
            .forget();
        })
    };

    let press = {
        let pressed = pressed.clone();
        move |control: Control| {
            pressed.set(Some(control));
            let pressed = pressed.clone();
            Timeout::new(config::BUTTON_PRESS_MS, move || pressed.set(None)).forget();
        }
    };

    let on_next = {
        let rotation = rotation.clone();
        let show = show.clone();
        let press = press.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *rotation;
            next.advance();
            show.emit(next);
            press(Control::Next);
        })
    };

    let on_prev = {
        let rotation = rotation.clone();
        let show = show.clone();
        let press = press.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *rotation;
            next.retreat();
            show.emit(next);
            press(Control::Prev);
        })
    };

    // Auto-advance while unpaused. Re-arming on every cursor change drops
    // the previous interval first, so at most one timer is ever live.
    {
        let show = show.clone();
        use_effect_with_deps(
            move |(paused, cursor): &(bool, Rotation)| {
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if !*paused {
                    let cursor = *cursor;
                    let interval = Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                        let mut next = cursor;
                        next.advance();
                        show.emit(next);
                    });
                    *handle.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (*paused, *rotation),
        );
    }

    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let on_tilt = {
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(container) = event
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            {
                let rect = container.get_bounding_client_rect();
                tilt.set(effects::tilt_transform(
                    event.client_x() as f64 - rect.left(),
                    event.client_y() as f64 - rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };
    let on_tilt_reset = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(effects::TILT_REST.to_string()))
    };

    let rating_enter = {
        let rating_lifted = rating_lifted.clone();
        Callback::from(move |_: MouseEvent| rating_lifted.set(true))
    };
    let rating_leave = {
        let rating_lifted = rating_lifted.clone();
        Callback::from(move |_: MouseEvent| rating_lifted.set(false))
    };

    let testimonial = &TESTIMONIALS[rotation.index()];
    let control_style = |control: Control| {
        if *pressed == Some(control) {
            "transform: scale(0.95);"
        } else {
            "transform: scale(1);"
        }
    };
    let rating_style = if *rating_lifted {
        "transform: translateY(-8px);"
    } else {
        "transform: translateY(-3px);"
    };

    html! {
        <section id="testimonials" class="testimonials-section fade-in">
            <style>
                {r#"
                    .testimonials-section {
                        padding: 5rem 2rem;
                        background: #f8fbff;
                    }
                    .testimonial-content {
                        display: flex;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        align-items: center;
                    }
                    .testimonial-image {
                        width: 380px;
                        border-radius: 24px;
                        object-fit: cover;
                    }
                    .quote-container {
                        background: #fff;
                        border-radius: 20px;
                        padding: 2.5rem;
                        box-shadow: 0 12px 40px rgba(30, 64, 175, 0.08);
                        transition: transform 0.2s ease;
                    }
                    .quote-text {
                        font-size: 1.1rem;
                        line-height: 1.7;
                        color: #334155;
                    }
                    .client-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .client-avatar img {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .client-name {
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .client-role {
                        color: #64748b;
                        font-size: 0.9rem;
                        text-transform: capitalize;
                    }
                    .testimonial-controls button {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        border: 1px solid #cbd5f5;
                        background: #fff;
                        cursor: pointer;
                        margin-right: 0.75rem;
                        transition: transform 0.15s ease;
                    }
                    .rating-card {
                        background: #fff;
                        border-radius: 16px;
                        padding: 1.25rem 1.75rem;
                        box-shadow: 0 8px 24px rgba(30, 64, 175, 0.12);
                        display: inline-block;
                        margin-top: 2rem;
                        transition: transform 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .testimonial-content {
                            flex-direction: column;
                        }
                        .testimonial-image {
                            width: 100%;
                        }
                    }
                "#}
            </style>
            <h2 class="section-title">{"What Our Patients Say"}</h2>
            <div class="testimonial-content" onmouseenter={pause} onmouseleave={resume}>
                <img
                    class="testimonial-image"
                    style={slot_style(*phase, 4)}
                    src={testimonial.image_url}
                    alt="Patient at the practice"
                />
                <div
                    class="quote-container"
                    style={format!("transform: {};", *tilt)}
                    onmousemove={on_tilt}
                    onmouseleave={on_tilt_reset}
                >
                    <p class="quote-text" style={slot_style(*phase, 0)}>
                        { format!("\"{}\"", testimonial.quote) }
                    </p>
                    <div class="client-row">
                        <div class="client-avatar">
                            <img
                                style={slot_style(*phase, 3)}
                                src={testimonial.avatar_url}
                                alt={testimonial.name}
                            />
                        </div>
                        <div>
                            <div class="client-name" style={slot_style(*phase, 1)}>
                                { testimonial.name }
                            </div>
                            <div class="client-role" style={slot_style(*phase, 2)}>
                                { testimonial.role }
                            </div>
                        </div>
                    </div>
                    <div class="testimonial-controls">
                        <button
                            class="prev-btn"
                            style={control_style(Control::Prev)}
                            onclick={on_prev}
                            aria-label="Previous testimonial"
                        >
                            {"‹"}
                        </button>
                        <button
                            class="next-btn"
                            style={control_style(Control::Next)}
                            onclick={on_next}
                            aria-label="Next testimonial"
                        >
                            {"›"}
                        </button>
                    </div>
                </div>
            </div>
            <div
                class="rating-card"
                style={rating_style}
                onmouseenter={rating_enter}
                onmouseleave={rating_leave}
            >
                <span class="rating-score">{"4.9"}</span>
                <span class="rating-label">{" / 5 from 600+ patient reviews"}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lap_returns_to_start() {
        for len in 1..=6 {
            let mut rotation = Rotation::new(len);
            for _ in 0..len {
                rotation.advance();
            }
            assert_eq!(rotation.index(), 0, "len {len}");
        }
    }

    #[test]
    fn retreat_undoes_advance_everywhere() {
        let len = 5;
        for start in 0..len {
            let mut rotation = Rotation::new(len);
            for _ in 0..start {
                rotation.advance();
            }

            rotation.advance();
            rotation.retreat();
            assert_eq!(rotation.index(), start);

            rotation.retreat();
            rotation.advance();
            assert_eq!(rotation.index(), start);
        }
    }

    #[test]
    fn three_testimonials_cycle() {
        let mut rotation = Rotation::new(3);
        assert_eq!(rotation.advance(), 1);
        assert_eq!(rotation.advance(), 2);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn retreat_wraps_below_zero() {
        let mut rotation = Rotation::new(3);
        assert_eq!(rotation.retreat(), 2);
    }

    #[test]
    fn single_entry_rotation_is_a_fixed_point() {
        let mut rotation = Rotation::new(1);
        assert_eq!(rotation.advance(), 0);
        assert_eq!(rotation.retreat(), 0);
    }

    #[test]
    fn slots_stagger_in_hundred_ms_steps() {
        let delays: Vec<u32> = (0..SLOT_COUNT).map(slot_delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn enter_phase_outlives_last_slot_fade() {
        assert_eq!(enter_duration_ms(), 400 + 500);
    }

    #[test]
    fn settling_hides_and_offsets_slots() {
        let style = slot_style(SwapPhase::Settling, 2);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(20px)"));
        assert!(!style.contains("transition-delay"));
    }

    #[test]
    fn entering_staggers_by_slot() {
        assert!(slot_style(SwapPhase::Entering, 0).contains("transition-delay: 0ms"));
        assert!(slot_style(SwapPhase::Entering, 3).contains("transition-delay: 300ms"));
    }

    #[test]
    fn resting_style_carries_no_delay() {
        let style = slot_style(SwapPhase::Resting, 1);
        assert!(style.contains("opacity: 1"));
        assert!(!style.contains("transition-delay"));
    }

    #[test]
    fn testimonial_list_is_nonempty() {
        assert!(!TESTIMONIALS.is_empty());
    }
}
