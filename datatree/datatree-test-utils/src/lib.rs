#![forbid(unsafe_code)]

use datatree_core::{ConfigTree, DataTree, FunctionSamples};
use datatree_typedef::{Config, DataTreeTypeDefCreator, TypeDefOutput, WidgetRegistry};
use serde_json::Value;
use tracing::debug;
use unimock::Unimock;

pub mod json_utils;

/// `pretty_assertions::assert_eq` with named `expected` and `actual` arguments,
/// so the diff is always colored the same way around.
#[macro_export]
macro_rules! expect_eq {
    (expected = $expected:expr, actual = $actual:expr $(,)?) => {
        pretty_assertions::assert_eq!($expected, $actual);
    };
    (actual = $actual:expr, expected = $expected:expr $(,)?) => {
        pretty_assertions::assert_eq!($expected, $actual);
    };
}

/// A data tree snapshot with everything needed to run the type def creator on it.
pub struct TypeDefTest {
    data_tree: DataTree,
    config_tree: ConfigTree,
    samples: FunctionSamples,
    registry: WidgetRegistry,
    config: Config,
    setter_gate: Option<Unimock>,
}

impl TypeDefTest {
    /// Uses the built-in widget registry
    #[track_caller]
    pub fn new(data_tree: Value) -> Self {
        Self {
            data_tree: DataTree::from_json(data_tree).expect("invalid data tree"),
            config_tree: ConfigTree::default(),
            samples: FunctionSamples::default(),
            registry: WidgetRegistry::with_builtin_widgets(),
            config: Config::default(),
            setter_gate: None,
        }
    }

    #[track_caller]
    pub fn with_config_tree(self, config_tree: Value) -> Self {
        Self {
            config_tree: ConfigTree::from_json(config_tree).expect("invalid config tree"),
            ..self
        }
    }

    pub fn with_sample(mut self, full_function_name: &str, value: Value) -> Self {
        self.samples.insert(full_function_name.to_string(), value);
        self
    }

    pub fn with_registry(self, registry: WidgetRegistry) -> Self {
        Self { registry, ..self }
    }

    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    pub fn with_mock_setter_gate(self, setter_gate_clause: impl unimock::Clause) -> Self {
        Self {
            setter_gate: Some(Unimock::new(setter_gate_clause)),
            ..self
        }
    }

    pub fn create(&self) -> TypeDefOutput {
        let creator =
            DataTreeTypeDefCreator::new(&self.registry).with_config(self.config.clone());
        let creator = match &self.setter_gate {
            Some(setter_gate) => creator.with_setter_gate(setter_gate),
            None => creator,
        };

        let output = creator.create(&self.data_tree, &self.samples, &self.config_tree);
        debug!("entity info: {:?}", output.entity_info);
        output
    }

    /// The created definition as JSON
    pub fn def_json(&self) -> Value {
        serde_json::to_value(self.create().def).expect("def is always serializable")
    }
}
