use std::{fmt::Debug, sync::Arc};

use datatree_core::{EntityConfig, entity::WidgetEntity};
use fnv::FnvHashMap;

use crate::{
    def::{Def, ExtraDefs},
    widgets,
};

pub type DefinitionsGenerator =
    dyn Fn(&WidgetEntity, &mut ExtraDefs, Option<&EntityConfig>) -> Def + Send + Sync;

/// The autocomplete definitions of a widget kind
#[derive(Clone)]
pub enum AutocompleteDefinitions {
    Static(Def),
    /// Definitions that depend on the widget instance
    Generator(Arc<DefinitionsGenerator>),
}

impl AutocompleteDefinitions {
    pub fn generate(
        &self,
        entity: &WidgetEntity,
        extra_defs: &mut ExtraDefs,
        entity_config: Option<&EntityConfig>,
    ) -> Def {
        match self {
            Self::Static(def) => def.clone(),
            Self::Generator(generator) => generator(entity, extra_defs, entity_config),
        }
    }
}

impl Debug for AutocompleteDefinitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(def) => f.debug_tuple("Static").field(def).finish(),
            Self::Generator(_) => f.debug_tuple("Generator").finish_non_exhaustive(),
        }
    }
}

pub trait WidgetDefinitionRegistry {
    /// `None` means the widget kind has no autocompletion.
    fn autocomplete_definitions(&self, widget_type: &str) -> Option<&AutocompleteDefinitions>;
}

#[derive(Clone, Default, Debug)]
pub struct WidgetRegistry {
    definitions: FnvHashMap<String, AutocompleteDefinitions>,
}

impl WidgetRegistry {
    pub fn with_builtin_widgets() -> Self {
        let mut registry = Self::default();
        widgets::register_builtin_widgets(&mut registry);
        registry
    }

    pub fn register(
        &mut self,
        widget_type: impl Into<String>,
        definitions: AutocompleteDefinitions,
    ) -> &mut Self {
        self.definitions.insert(widget_type.into(), definitions);
        self
    }

    pub fn register_static(&mut self, widget_type: impl Into<String>, def: Def) -> &mut Self {
        self.register(widget_type, AutocompleteDefinitions::Static(def))
    }

    pub fn register_generator(
        &mut self,
        widget_type: impl Into<String>,
        generator: impl Fn(&WidgetEntity, &mut ExtraDefs, Option<&EntityConfig>) -> Def
        + Send
        + Sync
        + 'static,
    ) -> &mut Self {
        self.register(
            widget_type,
            AutocompleteDefinitions::Generator(Arc::new(generator)),
        )
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl WidgetDefinitionRegistry for WidgetRegistry {
    fn autocomplete_definitions(&self, widget_type: &str) -> Option<&AutocompleteDefinitions> {
        self.definitions.get(widget_type)
    }
}
