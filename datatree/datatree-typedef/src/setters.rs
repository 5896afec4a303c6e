use datatree_core::{
    EntityConfig,
    config::SetterConfig,
    entity::WidgetEntity,
};
use serde_json::Value;
use tracing::trace;

use crate::def::Def;

pub const PROMISE_TYPE: &str = "+Promise[:t=[!0.<i>.:t]]";

/// Decides whether a declared setter applies to a widget in its current state.
#[cfg_attr(
    any(test, feature = "unimock"),
    unimock::unimock(api = SetterGateMock)
)]
pub trait SetterGate {
    fn should_add_setter(&self, setter: &SetterConfig, entity: &WidgetEntity) -> bool;
}

/// Rejects a setter while the widget property named by its `disabled` path is truthy.
#[derive(Clone, Copy, Default, Debug)]
pub struct DisabledPropertyGate;

impl SetterGate for DisabledPropertyGate {
    fn should_add_setter(&self, setter: &SetterConfig, entity: &WidgetEntity) -> bool {
        match &setter.disabled {
            None => true,
            Some(path) => !entity.properties().get_path(path).is_some_and(is_truthy),
        }
    }
}

/// JavaScript truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn setter_type_def(setter: &SetterConfig) -> String {
    format!("fn(value:{}) -> {PROMISE_TYPE}", setter.setter_type)
}

/// Add a function entry to `definitions` for every applicable setter of the widget.
pub fn add_setters_to_definitions(
    definitions: &mut Def,
    entity: &WidgetEntity,
    entity_config: Option<&EntityConfig>,
    gate: &dyn SetterGate,
) {
    let Some(setters) = entity_config.and_then(|config| config.setters.as_ref()) else {
        return;
    };

    for (setter_name, setter) in setters {
        if gate.should_add_setter(setter, entity) {
            definitions.insert(setter_name.clone(), setter_type_def(setter));
        } else {
            trace!("setter `{setter_name}` not applicable");
        }
    }
}
