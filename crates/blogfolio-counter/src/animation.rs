use std::time::Duration;

/// Number of ticks the count-up animation aims for.
pub const ANIMATION_STEPS: u64 = 50;
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Count-up animation from 0 to a target in integer steps.
///
/// Each call to `next` yields the value to display on the next tick; the last
/// value is always the target, after which the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct CountAnimation {
    target: u64,
    step: u64,
    current: u64,
    interval: Duration,
    done: bool,
}

impl CountAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        let step = target.div_ceil(ANIMATION_STEPS).max(1);
        let interval = if target == 0 {
            duration
        } else {
            duration.mul_f64(step as f64 / target as f64)
        };
        Self {
            target,
            step,
            current: 0,
            interval,
            done: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Iterator for CountAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_single_frame() {
        let frames: Vec<u64> = CountAnimation::new(0, DEFAULT_DURATION).collect();
        assert_eq!(frames, vec![0]);
    }

    #[test]
    fn test_small_target_counts_by_one() {
        let anim = CountAnimation::new(3, DEFAULT_DURATION);
        assert_eq!(anim.step(), 1);
        let interval = anim.interval().as_millis();
        assert!((333..=334).contains(&interval));
        let frames: Vec<u64> = anim.collect();
        assert_eq!(frames, vec![1, 2, 3]);
    }

    #[test]
    fn test_large_target_takes_about_fifty_ticks() {
        let anim = CountAnimation::new(1_234, DEFAULT_DURATION);
        assert_eq!(anim.step(), 25);
        let frames: Vec<u64> = anim.collect();
        assert_eq!(frames.len(), 50);
        assert_eq!(frames.first(), Some(&25));
        assert_eq!(frames.last(), Some(&1_234));
        assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_total_time_is_roughly_the_duration() {
        let anim = CountAnimation::new(10_000, DEFAULT_DURATION);
        let ticks = anim.clone().count() as u32;
        let total = anim.interval() * ticks;
        assert!(total >= Duration::from_millis(950) && total <= Duration::from_millis(1050));
    }
}
