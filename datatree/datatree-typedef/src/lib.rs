//! Type definitions for expression autocompletion over an application data tree.
//!
//! [DataTreeTypeDefCreator] turns the widgets, actions, JS objects and the global
//! `appsmith` object of a [datatree_core::DataTree] into a tern style [Def],
//! together with an index of entity kinds used for ranking suggestions.

#![forbid(unsafe_code)]

pub mod config;
pub mod creator;
pub mod def;
pub mod entity_definitions;
pub mod flatten;
pub mod function;
pub mod infer;
pub mod registry;
pub mod setters;
pub mod widgets;

pub use config::Config;
pub use creator::{DataTreeDefEntityInformation, DataTreeTypeDefCreator, EntityInfo, TypeDefOutput};
pub use def::{Def, DefValue, ExtraDefs};
pub use registry::{AutocompleteDefinitions, WidgetDefinitionRegistry, WidgetRegistry};
pub use setters::{DisabledPropertyGate, SetterGate};
