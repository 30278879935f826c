//! Entrance animation capability
//!
//! Elements on the landing screen fade and slide in through an injected
//! driver. The driver is chosen once at startup from the motion preference:
//! the animated one eases progress over each element's delay/duration
//! window, the immediate one reports every element as already settled.
//! Call sites never check the preference themselves.

use crate::motion::MotionPreference;

/// How far an element slides up while entering, in logical pixels
const SLIDE_DISTANCE: f32 = 40.0;

/// One element's entrance window, in seconds from screen start
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    pub delay: f32,
    pub duration: f32,
}

impl Entrance {
    pub const fn new(delay: f32, duration: f32) -> Self {
        Self { delay, duration }
    }

    /// Opacity at time `t`, per the driver
    pub fn opacity(&self, t: f32, driver: &dyn EntranceDriver) -> f32 {
        driver.progress(t, self)
    }

    /// Upward slide offset at time `t`; 0 once settled
    pub fn offset_y(&self, t: f32, driver: &dyn EntranceDriver) -> f32 {
        (1.0 - driver.progress(t, self)) * SLIDE_DISTANCE
    }
}

/// Entrance progress source. Implementations map elapsed screen time to a
/// settledness value in [0, 1] for a given entrance window.
pub trait EntranceDriver {
    fn progress(&self, t: f32, entrance: &Entrance) -> f32;
}

/// Eased entrances (the normal path)
pub struct Animated;

impl EntranceDriver for Animated {
    fn progress(&self, t: f32, entrance: &Entrance) -> f32 {
        if entrance.duration <= 0.0 {
            return if t >= entrance.delay { 1.0 } else { 0.0 };
        }
        let linear = ((t - entrance.delay) / entrance.duration).clamp(0.0, 1.0);
        ease_out_cubic(linear)
    }
}

/// Final state applied instantly (reduced motion)
pub struct Immediate;

impl EntranceDriver for Immediate {
    fn progress(&self, _t: f32, _entrance: &Entrance) -> f32 {
        1.0
    }
}

/// Pick the driver once, at composition time
pub fn driver_for(prefs: MotionPreference) -> Box<dyn EntranceDriver> {
    match prefs {
        MotionPreference::Full => Box::new(Animated),
        MotionPreference::Reduced => Box::new(Immediate),
    }
}

/// Decelerating ease, fast start and soft landing
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
