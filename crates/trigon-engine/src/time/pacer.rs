use std::time::{Duration, Instant};

/// Schedules redraw requests at a preferred frame rate.
///
/// Deadlines advance by exactly one interval per presented frame so the cadence
/// does not drift. After a stall longer than one interval the schedule restarts
/// from the current time instead of bursting to catch up.
///
/// Without a preferred rate the pacer is always due and redraw pacing is left to
/// the present mode.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Option<Duration>,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(preferred_fps: Option<u32>) -> Self {
        let interval = preferred_fps
            .filter(|fps| *fps > 0)
            .map(|fps| Duration::from_secs_f64(1.0 / fps as f64));
        Self { interval, next: None }
    }

    #[inline]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Deadline of the next redraw, if one has been scheduled.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns `true` when a redraw should be requested at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|next| now >= next)
    }

    /// Records a frame rendered at `now` and returns the next deadline.
    pub fn schedule(&mut self, now: Instant) -> Option<Instant> {
        let interval = self.interval?;

        let next = match self.next {
            Some(prev) if prev + interval > now => prev + interval,
            _ => now + interval,
        };

        self.next = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaced_is_always_due() {
        let mut pacer = FramePacer::new(None);
        let now = Instant::now();
        assert_eq!(pacer.schedule(now), None);
        assert!(pacer.is_due(now));
    }

    #[test]
    fn zero_fps_means_unpaced() {
        assert_eq!(FramePacer::new(Some(0)).interval(), None);
    }

    #[test]
    fn deadlines_advance_by_one_interval() {
        let mut pacer = FramePacer::new(Some(60));
        let interval = pacer.interval().unwrap();
        let t0 = Instant::now();

        let d1 = pacer.schedule(t0).unwrap();
        assert_eq!(d1, t0 + interval);
        assert!(!pacer.is_due(t0));
        assert!(pacer.is_due(d1));

        // Rendered slightly late; the cadence stays anchored to the schedule.
        let d2 = pacer.schedule(d1 + Duration::from_millis(2)).unwrap();
        assert_eq!(d2, d1 + interval);
    }

    #[test]
    fn stall_resynchronizes_to_now() {
        let mut pacer = FramePacer::new(Some(60));
        let interval = pacer.interval().unwrap();
        let t0 = Instant::now();
        pacer.schedule(t0);

        let late = t0 + Duration::from_secs(1);
        assert_eq!(pacer.schedule(late), Some(late + interval));
        assert_eq!(pacer.deadline(), Some(late + interval));
    }
}
