use datatree_core::{
    ConfigTree, DataTree, DataTreeEntity, EntityType, FunctionSamples,
    entity::{JsActionEntity, WidgetEntity},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    config::Config,
    def::{DEFINE_KEY, Def, DefValue, ExtraDefs},
    entity_definitions::{action_def, appsmith_def},
    flatten::flatten_def,
    function::generate_js_function_type_def,
    infer::generate_type_def,
    registry::WidgetDefinitionRegistry,
    setters::{DisabledPropertyGate, SetterGate, add_setters_to_definitions},
};

/// The entity key of the global singleton
pub const APPSMITH_KEY: &str = "appsmith";

static DEFAULT_SETTER_GATE: DisabledPropertyGate = DisabledPropertyGate;

/// What autocomplete ranking needs to know about an entity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DataTreeDefEntityInformation {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(rename = "subType")]
    pub sub_type: String,
}

impl DataTreeDefEntityInformation {
    pub fn new(entity_type: EntityType, sub_type: impl Into<String>) -> Self {
        Self {
            entity_type,
            sub_type: sub_type.into(),
        }
    }
}

pub type EntityInfo = IndexMap<String, DataTreeDefEntityInformation>;

#[derive(Clone, Serialize, Debug)]
pub struct TypeDefOutput {
    pub def: Def,
    #[serde(rename = "entityInfo")]
    pub entity_info: EntityInfo,
}

/// Projects a data tree into a hint engine definition and an entity info index.
///
/// The creator holds no state between calls, every call starts from scratch.
pub struct DataTreeTypeDefCreator<'r> {
    registry: &'r dyn WidgetDefinitionRegistry,
    setter_gate: &'r dyn SetterGate,
    config: Config,
}

impl<'r> DataTreeTypeDefCreator<'r> {
    pub fn new(registry: &'r dyn WidgetDefinitionRegistry) -> Self {
        Self {
            registry,
            setter_gate: &DEFAULT_SETTER_GATE,
            config: Config::default(),
        }
    }

    pub fn with_setter_gate(self, setter_gate: &'r dyn SetterGate) -> Self {
        Self {
            setter_gate,
            ..self
        }
    }

    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    pub fn create(
        &self,
        data_tree: &DataTree,
        samples: &FunctionSamples,
        config_tree: &ConfigTree,
    ) -> TypeDefOutput {
        let mut extra_defs = ExtraDefs::with_prefix(self.config.extra_def_prefix.clone());
        let mut def = Def::named(self.config.def_name.clone());
        let mut entity_info = EntityInfo::default();

        for (entity_name, entity) in data_tree.iter() {
            match entity {
                DataTreeEntity::Widget(widget) => {
                    let Some(widget_def) =
                        self.widget_def(entity_name, widget, config_tree, &mut extra_defs)
                    else {
                        trace!(
                            "no autocomplete definitions for `{entity_name}` ({})",
                            widget.widget_type()
                        );
                        continue;
                    };

                    def.insert(entity_name.clone(), widget_def);
                    flatten_def(&mut def, entity_name);
                    entity_info.insert(
                        entity_name.clone(),
                        DataTreeDefEntityInformation::new(
                            EntityType::Widget,
                            widget.widget_type(),
                        ),
                    );
                }
                DataTreeEntity::Action(action) => {
                    def.insert(entity_name.clone(), action_def(action, &mut extra_defs));
                    flatten_def(&mut def, entity_name);
                    entity_info.insert(
                        entity_name.clone(),
                        DataTreeDefEntityInformation::new(
                            EntityType::Action,
                            EntityType::Action.as_str(),
                        ),
                    );
                }
                DataTreeEntity::Appsmith(appsmith) => {
                    def.insert(APPSMITH_KEY, appsmith_def(appsmith, &mut extra_defs));
                    entity_info.insert(
                        APPSMITH_KEY.to_string(),
                        DataTreeDefEntityInformation::new(
                            EntityType::Appsmith,
                            EntityType::Appsmith.as_str(),
                        ),
                    );
                }
                DataTreeEntity::JsAction(js_action) => {
                    def.insert(
                        entity_name.clone(),
                        js_action_def(
                            entity_name,
                            js_action,
                            samples,
                            config_tree,
                            &mut extra_defs,
                        ),
                    );
                    entity_info.insert(
                        entity_name.clone(),
                        DataTreeDefEntityInformation::new(
                            EntityType::JsAction,
                            EntityType::JsAction.as_str(),
                        ),
                    );
                }
            }
        }

        if !extra_defs.is_empty() {
            debug!("{} auxiliary definitions", extra_defs.len());
            def.insert(DEFINE_KEY, extra_defs.into_def());
        }

        TypeDefOutput { def, entity_info }
    }

    fn widget_def(
        &self,
        entity_name: &str,
        widget: &WidgetEntity,
        config_tree: &ConfigTree,
        extra_defs: &mut ExtraDefs,
    ) -> Option<Def> {
        let definitions = self
            .registry
            .autocomplete_definitions(widget.widget_type())?;
        let entity_config = config_tree.get(entity_name);

        let mut widget_def = definitions.generate(widget, extra_defs, entity_config);
        add_setters_to_definitions(&mut widget_def, widget, entity_config, self.setter_gate);

        Some(widget_def)
    }
}

/// Functions and variables of a JS object. The result is already flat.
fn js_action_def(
    entity_name: &str,
    js_action: &JsActionEntity,
    samples: &FunctionSamples,
    config_tree: &ConfigTree,
    extra_defs: &mut ExtraDefs,
) -> Def {
    let mut def = Def::default();

    let Some(entity_config) = config_tree.get(entity_name) else {
        trace!("no config for JS object `{entity_name}`");
        return def;
    };

    for (function_name, meta) in &entity_config.meta {
        let function_def = generate_js_function_type_def(
            samples,
            &format!("{entity_name}.{function_name}"),
            &meta.arguments,
            extra_defs,
        );
        let data = function_def
            .get("data")
            .cloned()
            .unwrap_or_else(DefValue::unknown);

        def.insert(function_name.clone(), function_def);
        def.insert(format!("{function_name}.data"), data);
    }

    for variable in &entity_config.variables {
        let value = js_action.0.get(variable).unwrap_or(&Value::Null);
        def.insert(variable.clone(), generate_type_def(value, Some(extra_defs)));
    }

    def
}
