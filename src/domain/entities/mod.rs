//! Domain Entities

mod default_output_rule;

pub use default_output_rule::DefaultOutputRule;
