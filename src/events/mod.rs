mod hub;

pub(crate) use hub::{Event, EventHub};
