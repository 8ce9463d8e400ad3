//! Documentation-tree compiler for component style guides.
//!
//! Turns a declarative configuration (component patterns, a nested section
//! tree, per-component example and design assets) into a single tree whose
//! resource-backed fields are deferred references. A separate resolution
//! stage dereferences those handles before rendering.

pub mod components;
pub mod config;
pub mod entry;
pub mod error;
pub mod locator;
pub mod naming;
pub mod paths;
pub mod reference;
pub mod resolve;
pub mod section;
pub mod serialize;
pub mod tree;

pub use components::{build_component_list, resolve_components, ComponentSpec};
pub use config::{ConfigError, PathLineFn, StyleguideConfig};
pub use entry::{build_entry, has_slice, resolve_examples, ComponentEntry, PropsSlot};
pub use error::CompileError;
pub use locator::{AssetLocator, SiblingLocator};
pub use naming::name_fallback;
pub use reference::{HandleError, ResourceKind, ResourceRef};
pub use resolve::{LoadError, LoaderRegistry, ResolveError, ResourceLoader};
pub use section::{build_section, build_sections, SectionDef, SectionNode};
pub use serialize::{serialize, to_json_string};
pub use tree::{compile, DocumentationTree, SimplifiedConfig};
