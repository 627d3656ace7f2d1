mod csv;
mod report;

pub(crate) use csv::render_csv;
pub(crate) use report::{sweep_report, ReductionColumn, SweepRow, REDUCTION_COLUMNS};

#[cfg(test)]
pub(crate) use self::{
    csv::CSV_HEADER,
    report::{sweep_entries, MAX_SWEEP_DRIVES, MIN_SWEEP_DRIVES, WIDE_STRIPE_MIN_DRIVES},
};
