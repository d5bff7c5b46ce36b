//! HP/MP pools.
//!
//! A pool stores both its current and maximum value. The maximum only grows
//! on level-up, and every mutation keeps `current <= maximum`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    /// `current / maximum`, or 0 for a zero-capacity meter.
    pub fn ratio(&self) -> f32 {
        if self.maximum == 0 {
            0.0
        } else {
            self.current as f32 / self.maximum as f32
        }
    }

    /// Adds up to `amount`, capped at the maximum. Returns the amount restored.
    ///
    /// A meter already above its maximum is pulled back to it and reports 0.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current.saturating_sub(before)
    }

    /// Removes exactly `amount` if available; otherwise leaves the meter untouched.
    pub fn try_consume(&mut self, amount: u32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }

    /// Raises the maximum without touching the current value.
    pub fn grow(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_current() {
        let meter = ResourceMeter::new(150, 100);
        assert_eq!(meter.current, 100);
        assert!(meter.is_full());
    }

    #[test]
    fn restore_caps_at_maximum() {
        let mut meter = ResourceMeter::new(90, 100);
        assert_eq!(meter.restore(25), 10);
        assert_eq!(meter.current, 100);
        assert_eq!(meter.restore(u32::MAX), 0);
    }

    #[test]
    fn restore_on_overfull_meter_reports_nothing() {
        let mut meter = ResourceMeter {
            current: 150,
            maximum: 100,
        };
        assert_eq!(meter.restore(10), 0);
        assert_eq!(meter.current, 100);
    }

    #[test]
    fn try_consume_is_all_or_nothing() {
        let mut meter = ResourceMeter::new(10, 100);
        assert!(!meter.try_consume(11));
        assert_eq!(meter.current, 10);
        assert!(meter.try_consume(10));
        assert_eq!(meter.current, 0);
    }

    #[test]
    fn grow_leaves_current_alone() {
        let mut meter = ResourceMeter::new(40, 100);
        meter.grow(10);
        assert_eq!(meter, ResourceMeter::new(40, 110));
        assert_eq!(ResourceMeter::default().ratio(), 0.0);
    }
}
