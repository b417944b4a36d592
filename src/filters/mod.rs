pub mod apply;
pub mod ast;

pub use apply::apply_filters;
pub use ast::{FilterCondition, FilterOptions, FilterPipeline, RoleFilter};
