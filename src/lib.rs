pub mod args;
pub mod boilerplate;
pub mod context;
pub mod discovery;
pub mod execute;
pub mod flags;

pub use args::{GeneratorArgs, default_source_tree, invoking_program_name, source_tree_from};
pub use context::{GenerationContext, NameSystems};
pub use discovery::DiscoveryBuilder;
