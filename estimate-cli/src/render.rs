//! Terminal rendering for estimates.
//!
//! All rounding happens here, at the display boundary; the breakdown values
//! arrive unrounded from the engine.

use std::fmt::Write as _;

use estimate_core::calculations::common::round_half_up;
use estimate_core::calculations::LakhRange;
use estimate_core::models::{CostBreakdown, PriceBand};
use rust_decimal::Decimal;

/// Formats a rupee amount with Indian digit grouping, e.g. `₹1,50,000.00`.
///
/// Indian grouping puts the last three digits together and then groups by
/// two: 12345678 → 1,23,45,678.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let text = format!("{rounded:.2}");
    let (sign, text) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    let n = digits.len();
    for (i, digit) in digits.iter().enumerate() {
        let remaining = n - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("{sign}₹{grouped}.{frac_part}")
}

/// Formats a quick-estimate lakh range, e.g. `₹2.8L – ₹3.0L`.
pub fn format_lakh_range(range: &LakhRange) -> String {
    format!("₹{}L – ₹{}L", range.min, range.max)
}

/// Renders the full detailed-estimate breakdown as printable text.
pub fn render_breakdown(breakdown: &CostBreakdown, band: &PriceBand) -> String {
    let mut out = String::new();

    for (key, room) in &breakdown.per_room {
        let _ = writeln!(out, "{key} ({} sqft floor)", room.floor_area);
        let _ = writeln!(out, "  material   {:>16}", format_inr(room.material_cost));
        if room.finish_cost > Decimal::ZERO {
            let _ = writeln!(out, "  finish     {:>16}", format_inr(room.finish_cost));
        }
        if room.counter_cost > Decimal::ZERO {
            let _ = writeln!(out, "  counter    {:>16}", format_inr(room.counter_cost));
        }
        if room.appliance_cost > Decimal::ZERO {
            let _ = writeln!(out, "  appliances {:>16}", format_inr(room.appliance_cost));
        }
        let _ = writeln!(out, "  hardware   {:>16}", format_inr(room.hardware_cost));
        let _ = writeln!(out, "  labor      {:>16}", format_inr(room.labor_cost));
        let _ = writeln!(out, "  subtotal   {:>16}", format_inr(room.subtotal));
    }

    let _ = writeln!(
        out,
        "rooms total  {:>16}",
        format_inr(breakdown.pre_surcharge_total)
    );
    for (kind, amount) in &breakdown.additional_costs {
        let _ = writeln!(out, "  {:<11}{:>16}", kind.as_str(), format_inr(*amount));
    }
    let _ = writeln!(out, "TOTAL        {:>16}", format_inr(breakdown.total));
    let _ = writeln!(
        out,
        "expected range {} to {}",
        format_inr(band.min),
        format_inr(band.max)
    );

    out
}
