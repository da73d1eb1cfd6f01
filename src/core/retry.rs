/// Caps how many times a repeating task runs before it stops itself.
#[derive(Clone, Copy, Debug)]
pub struct RetryBudget {
    attempts: u32,
    max: u32,
}

impl RetryBudget {
    pub fn new(max: u32) -> Self {
        Self { attempts: 0, max }
    }

    /// Records one attempt; false once the cap is reached.
    pub fn tick(&mut self) -> bool {
        if self.attempts >= self.max {
            return false;
        }
        self.attempts += 1;
        true
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    pub fn exhausted(&self) -> bool {
        self.attempts >= self.max
    }
}
