//! Timing value objects

mod duration;

pub use duration::{
    Duration, DEFAULT_DISMISSAL_TICKS, DEFAULT_GRACE_MILLIS, DEFAULT_TICK_MILLIS,
};
