// src/format.rs
//
// Display helpers for the presentation layer. They read domain values and
// never feed anything back into the store.

use crate::domain::{SpaceStatus, SponsorTier};

const LAKH: i64 = 100_000;
const CRORE: i64 = 10_000_000;

/// Stats-card style: `₹1.2Cr`, `₹17.3L`, or the grouped amount below a lakh.
pub fn format_compact_inr(amount: i64) -> String {
    if amount >= CRORE {
        format!("₹{}Cr", one_decimal(amount, CRORE))
    } else if amount >= LAKH {
        format!("₹{}L", one_decimal(amount, LAKH))
    } else {
        format_inr(amount)
    }
}

/// Full amount with Indian digit grouping: `₹17,25,000`.
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(amount.unsigned_abs()))
}

/// `amount / unit` rounded half-up to one decimal place. Callers pass
/// `amount >= unit > 0`.
fn one_decimal(amount: i64, unit: i64) -> String {
    let tenths = (i128::from(amount) * 10 + i128::from(unit) / 2) / i128::from(unit);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Last three digits, then pairs: 1725000 -> "17,25,000".
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn tier_label(tier: Option<SponsorTier>) -> &'static str {
    match tier {
        None => "🎯 All Tiers",
        Some(SponsorTier::Platinum) => "🏆 Platinum",
        Some(SponsorTier::Gold) => "🥇 Gold",
        Some(SponsorTier::Silver) => "🥈 Silver",
        Some(SponsorTier::Bronze) => "🥉 Bronze",
    }
}

pub fn status_label(status: SpaceStatus) -> &'static str {
    match status {
        SpaceStatus::Available => "Available",
        SpaceStatus::Unavailable => "Unavailable",
        SpaceStatus::Booked => "Booked",
        SpaceStatus::Allotted => "Allotted",
    }
}

pub fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

/// "1 Sponsor Found", "3 Sponsors Found".
pub fn result_heading(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} Sponsor{plural} Found")
}
