use std::{collections::VecDeque, time::Instant};

/// Frame counter over a sliding window of the last few seconds.
pub struct FpsCounter {
    window_secs: u64,
    frames: VecDeque<Instant>,
}

impl FpsCounter {
    pub fn new(window_secs: u64) -> FpsCounter {
        Self {
            window_secs: window_secs.max(1),
            frames: VecDeque::new(),
        }
    }

    /// Record a frame and drop the frames that slid out of the window.
    pub fn add_frame(&mut self) {
        let now = Instant::now();
        while let Some(&oldest) = self.frames.front() {
            if (now - oldest).as_secs() >= self.window_secs {
                self.frames.pop_front();
            } else {
                break;
            }
        }
        self.frames.push_back(now);
    }

    pub fn fps(&self) -> usize {
        self.frames.len() / self.window_secs as usize
    }
}
