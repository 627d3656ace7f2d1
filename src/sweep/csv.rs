use super::report::SweepRow;
use std::fmt::Write;

/// Header row of the existing capacity reports, reproduced verbatim.
pub(crate) const CSV_HEADER: &str = "Config,DDP Capacity (GiB),90% Pool Depletion(GiB), DRD Effective supported (2:1), DRD Effective (3:1), DRD Effective (4:1), DRS Effective (2:1), DRS Effective (2.5:1), DRS Effective (3:1), DRS Effective (3.5:1), DRS Effective (4:1)";

/// Shortest round-trip decimal, always with a fractional digit (`27000.0`).
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Render the sweep as comma-separated text, header first.
pub(crate) fn render_csv(rows: &[SweepRow]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + rows.len() * 96);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for row in rows {
        let _ = write!(
            out,
            "{},{},{}",
            row.config,
            row.entry.ddp_capacity_gib,
            format_decimal(row.dp90_gib)
        );
        for cell in &row.effective {
            let _ = write!(out, ",{}", cell.effective_gib);
        }
        out.push('\n');
    }

    out
}
