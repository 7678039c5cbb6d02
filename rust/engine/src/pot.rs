/// The shared stake both players bet into. The value is non-negative by
/// construction and is mutated only by the engine: bets add to it, a win
/// clears it, and risk resolution halves or doubles it before transfer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pot {
    value: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn add_cash(&mut self, amount: u32) {
        self.value = self.value.saturating_add(amount);
    }

    pub fn clear(&mut self) {
        self.value = 0;
    }

    /// Halve the pot, rounding down on odd values.
    pub fn halve(&mut self) {
        self.value /= 2;
    }

    /// Double the pot, saturating at `u32::MAX`.
    pub fn double(&mut self) {
        self.value = self.value.saturating_mul(2);
    }
}
