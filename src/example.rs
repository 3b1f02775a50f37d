//! Training examples and the annotation reader that produces them.

pub mod example_struct;
pub mod reader;


pub use example_struct::Example;
pub use reader::{
    InstanceReader,
    read_instances,
};
