use datatree_core::{FunctionSamples, config::Variable};
use fnv::FnvHashSet;
use itertools::Itertools;

use crate::{
    def::{Def, DefValue, ExtraDefs, TYPE_KEY},
    flatten::is_valid_variable_name,
    infer::generate_type_def,
};

/// Signature of a JS function from its declared arguments.
///
/// Repeated names keep their first occurrence, invalid names are dropped.
/// Every argument is typed `?`.
pub fn functions_args_type(args: &[Variable]) -> String {
    let mut seen = FnvHashSet::default();

    let arg_names: Vec<&str> = args
        .iter()
        .map(|arg| arg.name.as_str())
        .filter(|name| is_valid_variable_name(name))
        .filter(|name| seen.insert(*name))
        .collect();

    if arg_names.is_empty() {
        "fn()".to_string()
    } else {
        format!(
            "fn({})",
            arg_names.iter().map(|name| format!("{name}: ?")).join(", ")
        )
    }
}

/// `{ "!type": <signature>, "data": <type of the last return value> }`
pub fn generate_js_function_type_def(
    samples: &FunctionSamples,
    full_function_name: &str,
    arguments: &[Variable],
    extra_defs: &mut ExtraDefs,
) -> Def {
    let data = match samples.get(full_function_name) {
        Some(sample) => generate_type_def(sample, Some(extra_defs)),
        None => DefValue::unknown(),
    };

    Def::from_iter([
        (TYPE_KEY, DefValue::Type(functions_args_type(arguments))),
        ("data", data),
    ])
}
