//! Component property metadata.
//!
//! Defines the property descriptor model that documentation pages render as
//! prop tables, the extractor trait implemented by static-analysis backends,
//! and a lightweight extractor for TypeScript props interfaces.

pub mod interface;
pub mod model;
pub mod traits;

pub use interface::InterfaceExtractor;
pub use model::{
    DefaultValue, EnumValue, EnumValues, PropDescriptor, PropsDoc, TypeDescriptor, UnionMembers,
};
pub use traits::{ExtractError, PropsExtractor};
