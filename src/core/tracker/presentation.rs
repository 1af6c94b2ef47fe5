// Text rendering for the panel, the leaderboard and the audit log.
//
// These functions never mutate the ledger and never fail. Name lookups are
// passed in as a callback so this module stays free of Discord types.

use super::tracker_actions::LogEntry;
use super::tracker_models::{Consumable, Ledger};
use super::valuation::owed;

/// Discord rejects message content longer than this.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Room kept at the end of a truncated leaderboard for the overflow line.
const OVERFLOW_RESERVE: usize = 32;

pub const EMPTY_LEADERBOARD: &str = "No contributions yet.";
pub const LEADERBOARD_HEADER: &str = "**🍽️ Food & Drink Leaderboard**";

pub fn render_stock(total_food: u64, total_drink: u64) -> String {
    format!(
        "**📦 Current Stock**\n🍔 Food: {}\n🧃 Drinks: {}",
        total_food, total_drink
    )
}

pub fn render_ledger_stock(ledger: &Ledger) -> String {
    render_stock(
        ledger.total(Consumable::Food),
        ledger.total(Consumable::Drink),
    )
}

/// Leaderboard ranked by combined contribution.
///
/// `resolve_name` returns `None` on a lookup miss, in which case the raw
/// user ID is shown instead.
pub fn render_leaderboard(ledger: &Ledger, resolve_name: impl Fn(u64) -> Option<String>) -> String {
    if ledger.is_empty() {
        return EMPTY_LEADERBOARD.to_string();
    }

    let ranked = ledger.ranked();
    let mut output = String::from(LEADERBOARD_HEADER);
    let mut used = output.chars().count();

    for (index, entry) in ranked.iter().enumerate() {
        let record = &entry.record;
        let name = resolve_name(entry.user_id).unwrap_or_else(|| entry.user_id.to_string());
        let outstanding = owed(record.food, record.drink) as i64 - record.paid as i64;

        let line = format!(
            "**{}** - 🍔 {} | 🧃 {} | 💰 Owed: £{} | ✅ Paid: £{}",
            name,
            record.food,
            record.drink,
            format_number(outstanding),
            format_number(record.paid as i64)
        );

        let line_len = line.chars().count() + 1;
        if used + line_len > MAX_MESSAGE_LEN - OVERFLOW_RESERVE {
            let remaining = ranked.len() - index;
            output.push_str(&format!("\n…and {} more", remaining));
            break;
        }

        output.push('\n');
        output.push_str(&line);
        used += line_len;
    }

    output
}

/// One line for the audit log channel.
pub fn render_log_line(entry: &LogEntry) -> String {
    match entry {
        LogEntry::Added {
            actor_id,
            kind,
            amount,
            total,
        } => format!(
            "{} <@{}> added {} {}. Total: {}",
            kind.emoji(),
            actor_id,
            amount,
            kind.label(),
            total
        ),
        LogEntry::Removed {
            actor_id,
            kind,
            amount,
            total,
        } => format!(
            "❌ <@{}> removed {} {}. Total: {}",
            actor_id,
            amount,
            kind.label(),
            total
        ),
        LogEntry::MarkedPaid {
            actor_id,
            target_id,
            amount,
        } => format!(
            "✅ <@{}> marked <@{}> as paid (£{}).",
            actor_id,
            target_id,
            format_number(*amount as i64)
        ),
        LogEntry::Reset { actor_id } => format!("🧹 <@{}> reset all data.", actor_id),
    }
}

/// Format a number with commas for readability
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if n < 0 {
        result.insert(0, '-');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(100000), "100,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1234567), "-1,234,567");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_render_stock() {
        assert_eq!(
            render_stock(150, 50),
            "**📦 Current Stock**\n🍔 Food: 150\n🧃 Drinks: 50"
        );
    }

    #[test]
    fn test_empty_leaderboard() {
        let ledger = Ledger::new();
        assert_eq!(render_leaderboard(&ledger, |_| None), EMPTY_LEADERBOARD);
    }

    #[test]
    fn test_leaderboard_lines_and_fallback_name() {
        let mut ledger = Ledger::new();
        ledger.add(1, Consumable::Food, 50);
        ledger.add(2, Consumable::Drink, 50);
        ledger.add(2, Consumable::Drink, 50);

        let rendered = render_leaderboard(&ledger, |id| (id == 2).then(|| "Bea".to_string()));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], LEADERBOARD_HEADER);
        assert_eq!(
            lines[1],
            "**Bea** - 🍔 0 | 🧃 100 | 💰 Owed: £200,000 | ✅ Paid: £0"
        );
        assert_eq!(
            lines[2],
            "**1** - 🍔 50 | 🧃 0 | 💰 Owed: £100,000 | ✅ Paid: £0"
        );
    }

    #[test]
    fn test_leaderboard_outstanding_goes_negative_after_double_payment() {
        let mut ledger = Ledger::new();
        ledger.add(1, Consumable::Food, 50);
        ledger.credit_paid(1, 100_000);
        ledger.credit_paid(1, 100_000);

        let rendered = render_leaderboard(&ledger, |_| Some("Al".to_string()));
        assert!(rendered.contains("💰 Owed: £-100,000 | ✅ Paid: £200,000"));
    }

    #[test]
    fn test_leaderboard_truncates_to_message_limit() {
        let mut ledger = Ledger::new();
        for user_id in 0..200 {
            ledger.add(user_id, Consumable::Food, 50);
        }

        let rendered = render_leaderboard(&ledger, |id| Some(format!("member-{id}")));
        assert!(rendered.chars().count() <= MAX_MESSAGE_LEN);
        assert!(rendered.lines().last().unwrap_or_default().starts_with("…and "));
    }

    #[test]
    fn test_log_lines() {
        let added = LogEntry::Added {
            actor_id: 7,
            kind: Consumable::Food,
            amount: 50,
            total: 150,
        };
        assert_eq!(render_log_line(&added), "🍔 <@7> added 50 Food. Total: 150");

        let removed = LogEntry::Removed {
            actor_id: 7,
            kind: Consumable::Drink,
            amount: 50,
            total: 0,
        };
        assert_eq!(
            render_log_line(&removed),
            "❌ <@7> removed 50 Drink. Total: 0"
        );

        let paid = LogEntry::MarkedPaid {
            actor_id: 7,
            target_id: 8,
            amount: 200_000,
        };
        assert_eq!(
            render_log_line(&paid),
            "✅ <@7> marked <@8> as paid (£200,000)."
        );

        assert_eq!(
            render_log_line(&LogEntry::Reset { actor_id: 7 }),
            "🧹 <@7> reset all data."
        );
    }
}
