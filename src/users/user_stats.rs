#[derive(Debug)]
pub struct UserStats {
    pub transaction_count: u32,
    pub card_present_count: u32,
}

impl UserStats {
    pub fn new() -> Self {
        Self {
            transaction_count: 0,
            card_present_count: 0,
        }
    }

    pub fn observe(&mut self, card_present: bool) {
        self.transaction_count += 1;
        if card_present {
            self.card_present_count += 1;
        }
    }

    /// Share of this user's transactions with the card present, rounded
    /// half away from zero to a whole percentage.
    pub fn percent_card_present(&self) -> u8 {
        if self.transaction_count == 0 {
            return 0;
        }
        let ratio = f64::from(self.card_present_count) / f64::from(self.transaction_count);
        (ratio * 100.0).round() as u8
    }
}
