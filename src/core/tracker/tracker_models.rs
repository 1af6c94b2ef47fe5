// Domain models for the stock tracker.
//
// Everything in here is plain data keyed by primitive u64 identifiers, so
// the Discord layer is the only place that knows what a "user" really is.

use serde::Serialize;

/// The two things people can bring in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consumable {
    Food,
    Drink,
}

impl Consumable {
    pub fn label(&self) -> &'static str {
        match self {
            Consumable::Food => "Food",
            Consumable::Drink => "Drink",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Consumable::Food => "🍔",
            Consumable::Drink => "🧃",
        }
    }
}

/// Per-user contribution and payment figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContributionRecord {
    pub food: u64,
    pub drink: u64,
    /// Currency already paid out to this user.
    pub paid: u64,
}

impl ContributionRecord {
    /// Combined food + drink, used for leaderboard ranking.
    pub fn combined(&self) -> u64 {
        self.food.saturating_add(self.drink)
    }
}

/// A user's entry in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub user_id: u64,
    #[serde(flatten)]
    pub record: ContributionRecord,
}

/// All contributions plus the running stock totals.
///
/// Entries are kept in first-contribution order. The totals go up on every
/// add, but removals only touch the totals and never a user's record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    total_food: u64,
    total_drink: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self, kind: Consumable) -> u64 {
        match kind {
            Consumable::Food => self.total_food,
            Consumable::Drink => self.total_drink,
        }
    }

    pub fn record(&self, user_id: u64) -> Option<&ContributionRecord> {
        self.entries
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| &entry.record)
    }

    /// Entries sorted by combined contribution, highest first.
    /// The sort is stable, so ties keep insertion order.
    pub fn ranked(&self) -> Vec<&LedgerEntry> {
        let mut ranked: Vec<&LedgerEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.record.combined().cmp(&a.record.combined()));
        ranked
    }

    fn record_mut(&mut self, user_id: u64) -> Option<&mut ContributionRecord> {
        self.entries
            .iter_mut()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| &mut entry.record)
    }

    fn entry_or_default(&mut self, user_id: u64) -> &mut ContributionRecord {
        let position = match self.entries.iter().position(|e| e.user_id == user_id) {
            Some(position) => position,
            None => {
                self.entries.push(LedgerEntry {
                    user_id,
                    record: ContributionRecord::default(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].record
    }

    fn total_mut(&mut self, kind: Consumable) -> &mut u64 {
        match kind {
            Consumable::Food => &mut self.total_food,
            Consumable::Drink => &mut self.total_drink,
        }
    }

    /// Credit `amount` of `kind` to a user, creating their record if needed.
    /// Returns the new global total for that kind.
    pub fn add(&mut self, user_id: u64, kind: Consumable, amount: u64) -> u64 {
        let record = self.entry_or_default(user_id);
        match kind {
            Consumable::Food => record.food = record.food.saturating_add(amount),
            Consumable::Drink => record.drink = record.drink.saturating_add(amount),
        }

        let total = self.total_mut(kind);
        *total = total.saturating_add(amount);
        *total
    }

    /// Take `amount` off the global total only, floored at zero.
    /// Returns the new global total for that kind.
    pub fn remove_from_total(&mut self, kind: Consumable, amount: u64) -> u64 {
        let total = self.total_mut(kind);
        *total = total.saturating_sub(amount);
        *total
    }

    /// Add `amount` to a user's paid figure. Returns false for unknown users.
    pub fn credit_paid(&mut self, user_id: u64, amount: u64) -> bool {
        match self.record_mut(user_id) {
            Some(record) => {
                record.paid = record.paid.saturating_add(amount);
                true
            }
            None => false,
        }
    }

    /// Drop every record and zero both totals.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_food = 0;
        self.total_drink = 0;
    }
}

/// Who triggered an interaction, reduced to what the handlers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: u64,
    pub role_ids: Vec<u64>,
}

impl Actor {
    pub fn new(user_id: u64, role_ids: Vec<u64>) -> Self {
        Self { user_id, role_ids }
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}
