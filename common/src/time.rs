use std::time::Instant;

/// Frame timer yielding the elapsed seconds between consecutive ticks.
///
/// There is no previous tick right after creation or `pause`, so the next
/// `tick` yields exactly 0.0 instead of measuring against some unrelated
/// earlier instant.
pub struct FrameClock {
    previous_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous_tick: None,
        }
    }

    /// Elapsed seconds since the previous tick, 0.0 if there is none.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = match self.previous_tick {
            Some(previous) => {
                let elapsed = now - previous;
                elapsed.as_secs() as f64 + elapsed.subsec_nanos() as f64 / 1e9
            }
            None => 0.0,
        };
        self.previous_tick = Some(now);
        delta
    }

    /// Forget the previous tick. The next `tick` yields 0.0 again.
    pub fn pause(&mut self) {
        self.previous_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert!(clock.tick() >= 0.0);
    }

    #[test]
    fn pause_resets_the_previous_tick() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.pause();
        assert_eq!(clock.tick(), 0.0);
    }
}
