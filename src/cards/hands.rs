use super::hand::Hand;

/// Every n-card subset of the live deck, in ascending bit order.
///
/// Walks fixed-popcount u64 masks with Gosper's hack and skips any
/// mask touching a dead card. Nothing is buffered, so a full river
/// runout (C(48,5) = 1.7M boards) costs a single u64 of state.
/// Choosing zero cards yields the empty hand exactly once.
pub struct HandIterator {
    next: u64,
    dead: u64,
    size: usize,
    done: bool,
}

impl HandIterator {
    /// C(live, size) without materializing anything
    pub fn combinations(&self) -> usize {
        let live = Hand::full().size() - Hand::from(self.dead).size();
        (0..self.size).fold(1, |x, i| x * (live - i) / (i + 1))
    }

    /// smallest mask above this one with the same popcount
    fn permute(x: u64) -> u64 {
        let lowest = x & x.wrapping_neg();
        let ripple = x + lowest;
        let ones = ((x ^ ripple) >> 2) / lowest;
        ripple | ones
    }

    fn beyond(x: u64) -> bool {
        x & !Hand::mask() != 0
    }

    fn advance(&mut self) {
        loop {
            self.next = Self::permute(self.next);
            if Self::beyond(self.next) {
                self.done = true;
                break;
            }
            if self.next & self.dead == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let hand = Hand::from(self.next);
        match self.size {
            0 => self.done = true,
            _ => self.advance(),
        }
        Some(hand)
    }
}

/// choose `n` cards from everything outside `dead`
impl From<(usize, Hand)> for HandIterator {
    fn from((n, dead): (usize, Hand)) -> Self {
        let dead = u64::from(dead);
        let live = Hand::full().size() - Hand::from(dead).size();
        let mut this = Self {
            next: (1u64 << n) - 1,
            dead,
            size: n,
            done: n > live,
        };
        if n > 0 && !this.done && this.next & dead != 0 {
            this.advance();
        }
        this
    }
}
