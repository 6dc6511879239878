//! Native libraries: the builtins scope, methods of the builtin container
//! and file types, and the importable `system` and `time` modules.

mod builtins;
mod file;
mod list;
mod map;
mod string;
mod system;
mod time;

use blue_value::types::{FILE, LIST, MAP, STRING};
use blue_value::Value;
use rustc_hash::FxHashMap;

use crate::print_handler::SharedPrintHandler;
use crate::RuntimeConfig;

pub(crate) use builtins::scope as builtins_scope;

/// Attach the method tables of `string`, `list`, `map` and `file`. Type descriptors
/// are process-wide, so only the first call in a process does anything.
pub(crate) fn attach_type_methods() {
    let attached = [
        STRING.attach(&string::METHODS, &[]),
        LIST.attach(&list::METHODS, &[]),
        MAP.attach(&map::METHODS, &[]),
        FILE.attach(&file::METHODS, &[]),
    ];
    if attached.iter().any(|done| *done) {
        tracing::debug!("attached builtin type methods");
    }
}

/// Modules that `import` resolves before searching the filesystem.
pub(crate) fn native_modules(
    config: &RuntimeConfig,
    print: &SharedPrintHandler,
) -> FxHashMap<&'static str, Value> {
    let mut modules = FxHashMap::default();
    modules.insert("system", system::module(config, print));
    modules.insert("time", time::module());
    tracing::debug!(count = modules.len(), "registered native modules");
    modules
}
