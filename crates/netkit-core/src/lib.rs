//! Net name inference helpers for PCB editor extensions
//!
//! Infers differential pairs and power rails from flat lists of net names,
//! plus the small color and Markdown helpers an editor panel needs.

pub mod color;
pub mod config;
pub mod diffpair;
pub mod error;
pub mod host;
pub mod markdown;
pub mod nets;
pub mod suffix;

pub use color::{ColorInput, ColorRgba, Rgb};
pub use config::{NetkitConfig, PowerFilter};
pub use diffpair::{
    identify_diff_pairs_simple, identify_new_diff_pairs, DiffPair, DiffPairResult,
    EqualLengthGroup,
};
pub use error::NetkitError;
pub use host::HostContext;
pub use markdown::md_to_html;
pub use nets::{classify_power_nets, filter_power_nets, filter_strings, ClassifiedPowerNets, Pattern};
