//! Net name classification and filtering

mod filter;
mod power;

pub use filter::{filter_strings, Pattern};
pub use power::{
    classify_power_nets, filter_power_nets, parse_voltage, ClassifiedPowerNets, ExplicitNet,
    RailNet, POWER_EXCLUDE_REGEX, POWER_INCLUDE_REGEX,
};
