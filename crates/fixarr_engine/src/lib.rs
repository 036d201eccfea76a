pub mod array;
pub mod config;
pub mod element;
pub mod report;

pub use array::{FixedArray, Partition};
pub use config::{
    CONFIG_FILE_NAME, Config, GeometricConfig, OutputFormat, StrideConfig, load_config,
    load_config_or_default,
};
pub use element::{Element, ElementCategory};
pub use report::{ArrayReport, GeometricReport, StrideReport};
