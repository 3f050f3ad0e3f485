/// Leading-edge throttle: the first call runs, calls arriving within
/// `interval_ms` of the last accepted one are dropped.
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl ThrottleGate {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_accepted_ms: None,
        }
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            // A clock that went backwards reopens the gate instead of
            // blocking forever.
            if now_ms >= last && now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_runs() {
        let mut gate = ThrottleGate::new(100);
        assert!(gate.try_acquire(0.0));
    }

    #[test]
    fn drops_calls_inside_the_interval() {
        let mut gate = ThrottleGate::new(100);
        assert!(gate.try_acquire(1_000.0));
        assert!(!gate.try_acquire(1_010.0));
        assert!(!gate.try_acquire(1_099.9));
        assert!(gate.try_acquire(1_100.0));
        assert!(!gate.try_acquire(1_150.0));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut gate = ThrottleGate::new(100);
        assert!(gate.try_acquire(0.0));
        for now in [20.0, 40.0, 60.0, 80.0] {
            assert!(!gate.try_acquire(now));
        }
        assert!(gate.try_acquire(100.0));
    }

    #[test]
    fn runs_at_most_once_per_interval_under_bursts() {
        let mut gate = ThrottleGate::new(100);
        let accepted = (0..1_000)
            .map(|tick| f64::from(tick))
            .filter(|now| gate.try_acquire(*now))
            .count();
        assert_eq!(accepted, 10);
    }

    #[test]
    fn clock_regression_reopens_gate() {
        let mut gate = ThrottleGate::new(100);
        assert!(gate.try_acquire(500.0));
        assert!(gate.try_acquire(10.0));
    }
}
