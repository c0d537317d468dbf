// Site-wide tuning constants. Every duration, threshold and breakpoint the
// animation modules use lives here.

pub const OBSERVER_THRESHOLD: f64 = 0.1;
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const BLOG_OBSERVER_THRESHOLD: f64 = 0.2;
pub const BLOG_OBSERVER_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const STATS_OBSERVER_THRESHOLD: f64 = 0.5;

pub const RIPPLE_DURATION_MS: u32 = 600;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const TYPING_SPEED_MS: u32 = 100;

pub const SWAP_SETTLE_MS: u32 = 250;
pub const SWAP_STAGGER_MS: u32 = 100;
pub const SWAP_FADE_MS: u32 = 500;
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const BUTTON_PRESS_MS: u32 = 150;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAVBAR_STYLE_TOP: &str =
    "background: rgba(255, 255, 255, 0.95); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);";
pub const NAVBAR_STYLE_SCROLLED: &str =
    "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.15);";

pub const SCROLL_THROTTLE_MS: u32 = 16;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const TOUCH_RELEASE_MS: u32 = 300;
pub const CARD_LOADING_STEP_MS: u32 = 200;

pub const BANNER_FALLBACK_URL: &str =
    "https://images.pexels.com/photos/287237/pexels-photo-287237.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";
