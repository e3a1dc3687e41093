//! Session-scoped sales log.
//!
//! Created empty at session start, appended only by
//! [`Checkout::commit`](crate::checkout::Checkout::commit), read by reporting.

use serde::Serialize;

use crate::money::Money;
use crate::types::Receipt;

/// Receipts recorded during one session, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SalesLog {
    receipts: Vec<Receipt>,
}

impl SalesLog {
    pub fn new() -> Self {
        SalesLog::default()
    }

    pub(crate) fn append(&mut self, receipt: Receipt) -> &Receipt {
        self.receipts.push(receipt);
        let last = self.receipts.len() - 1;
        &self.receipts[last]
    }

    /// Number the next receipt will carry.
    pub(crate) fn next_number(&self) -> u32 {
        u32::try_from(self.receipts.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn last(&self) -> Option<&Receipt> {
        self.receipts.last()
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Sum of all receipt totals.
    pub fn revenue(&self) -> Money {
        self.receipts.iter().map(Receipt::total).sum()
    }

    /// Units sold across all receipts.
    pub fn units_sold(&self) -> i64 {
        self.receipts.iter().map(Receipt::total_quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{ProductId, ReceiptLine};

    fn receipt(number: u32, quantity: i64, unit_cents: i64) -> Receipt {
        let line = ReceiptLine {
            product_id: ProductId::new(1),
            name: "Keyboard".to_string(),
            quantity,
            unit_price: Money::from_cents(unit_cents),
        };
        let total = line.subtotal();
        Receipt::new(number, Utc::now(), vec![line], total)
    }

    #[test]
    fn test_empty_log() {
        let log = SalesLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.revenue().is_zero());
        assert_eq!(log.next_number(), 1);
    }

    #[test]
    fn test_append_and_aggregates() {
        let mut log = SalesLog::new();
        log.append(receipt(1, 2, 1000));
        let last = log.append(receipt(2, 1, 550));
        assert_eq!(last.number(), 2);

        assert_eq!(log.len(), 2);
        assert_eq!(log.revenue().cents(), 2550);
        assert_eq!(log.units_sold(), 3);
        assert_eq!(log.next_number(), 3);
    }
}
