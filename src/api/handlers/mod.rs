mod catalog;
mod effective;
mod plan;
mod settings;
mod sse;
mod status;
mod sweep;

pub(super) use catalog::get_catalog;
pub(super) use effective::convert_effective;
pub(super) use plan::handle_plan;
pub(super) use settings::{get_settings, update_settings};
pub(super) use sse::sse_events;
pub(super) use status::get_status;
pub(super) use sweep::{get_sweep, get_sweep_csv};
