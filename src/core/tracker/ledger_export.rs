// JSON snapshot of the ledger for admins. Nothing ever reads it back.

use super::tracker_models::{Consumable, Ledger, LedgerEntry};
use super::valuation::owed;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ExportedEntry<'a> {
    #[serde(flatten)]
    entry: &'a LedgerEntry,
    owed: u64,
}

#[derive(Debug, Serialize)]
struct LedgerExport<'a> {
    exported_at: DateTime<Utc>,
    total_food: u64,
    total_drink: u64,
    contributors: Vec<ExportedEntry<'a>>,
}

pub fn export_json(ledger: &Ledger, exported_at: DateTime<Utc>) -> Result<String, serde_json::Error> {
    let export = LedgerExport {
        exported_at,
        total_food: ledger.total(Consumable::Food),
        total_drink: ledger.total(Consumable::Drink),
        contributors: ledger
            .ranked()
            .into_iter()
            .map(|entry| ExportedEntry {
                entry,
                owed: owed(entry.record.food, entry.record.drink),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&export)
}
