use std::time::{Duration, Instant};

// used to block on a skipped frame when no frame rate cap is set
const IDLE_FRAME: Duration = Duration::from_micros(16_667);

/// Sleeps between frames to hold an optional frame rate cap.
#[derive(Debug)]
pub struct Pacer {
    frame_dur: Option<Duration>,
    next_frame: Instant,
}

impl Pacer {
    #[must_use]
    pub fn new(fps: Option<u32>) -> Self {
        Self {
            frame_dur: fps
                .filter(|&fps| fps > 0)
                .map(|fps| Duration::from_secs(1) / fps),
            next_frame: Instant::now(),
        }
    }

    /// How long to wait at `now` before the next frame may go out, and
    /// schedules the frame after it. A loop that fell behind is rescheduled
    /// from `now` instead of bursting to catch up.
    pub fn delay(&mut self, now: Instant) -> Option<Duration> {
        let frame_dur = self.frame_dur?;

        if now < self.next_frame {
            let delay = self.next_frame - now;
            self.next_frame += frame_dur;
            Some(delay)
        } else {
            self.next_frame = now + frame_dur;
            None
        }
    }

    /// How long to block for when a frame was skipped. Nothing presented
    /// means vsync didn't hold the loop back either.
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        self.frame_dur.unwrap_or(IDLE_FRAME)
    }

    pub fn wait(&mut self) {
        if let Some(delay) = self.delay(Instant::now()) {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_never_waits() {
        let mut pacer = Pacer::new(None);
        assert_eq!(pacer.delay(Instant::now()), None);
        let mut pacer = Pacer::new(Some(0));
        assert_eq!(pacer.delay(Instant::now()), None);
    }

    #[test]
    fn idle_timeout_is_never_zero() {
        assert_eq!(Pacer::new(None).idle_timeout(), IDLE_FRAME);
        assert_eq!(
            Pacer::new(Some(50)).idle_timeout(),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn capped_waits_for_the_rest_of_the_frame() {
        let start = Instant::now();
        let mut pacer = Pacer {
            frame_dur: Some(Duration::from_millis(20)),
            next_frame: start,
        };

        // first frame goes out right away
        assert_eq!(pacer.delay(start), None);
        assert_eq!(
            pacer.delay(start + Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(
            pacer.delay(start + Duration::from_millis(21)),
            Some(Duration::from_millis(19))
        );
    }

    #[test]
    fn late_frames_reschedule_from_now() {
        let start = Instant::now();
        let mut pacer = Pacer {
            frame_dur: Some(Duration::from_millis(10)),
            next_frame: start,
        };

        let late = start + Duration::from_millis(100);
        assert_eq!(pacer.delay(late), None);
        assert_eq!(
            pacer.delay(late + Duration::from_millis(4)),
            Some(Duration::from_millis(6))
        );
    }
}
