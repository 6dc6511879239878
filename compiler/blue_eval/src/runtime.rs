//! Process-wide interpreter state.
//!
//! A [`Runtime`] owns what every evaluator in a program shares: the
//! builtins scope, the native modules, the module cache and the print
//! handler. It is `Sync`; each thread that runs Blue code builds its own
//! [`Evaluator`] against a shared runtime.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use blue_ir::NodeRef;
use blue_parse::ParseMode;
use blue_value::errors::syntax_error;
use blue_value::{EvalError, EvalResult, Scope, Value};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::loader::{self, LoadError};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{libs, Evaluator, RuntimeConfig};

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Where `print` output goes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Runtime {
        libs::attach_type_methods();
        let print = self.print_handler.unwrap_or_else(stdout_handler);
        Runtime {
            builtins: libs::builtins_scope(),
            natives: libs::native_modules(&self.config, &print),
            modules: Mutex::new(FxHashMap::default()),
            print,
            config: self.config,
        }
    }
}

pub struct Runtime {
    config: RuntimeConfig,
    builtins: Scope,
    natives: FxHashMap<&'static str, Value>,
    /// Loaded script modules by canonical path.
    modules: Mutex<FxHashMap<PathBuf, Value>>,
    print: SharedPrintHandler,
}

impl Runtime {
    pub fn new(config: RuntimeConfig) -> Self {
        RuntimeBuilder::new().config(config).build()
    }

    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn builtins(&self) -> &Scope {
        &self.builtins
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Number of script modules loaded so far.
    pub fn loaded_modules(&self) -> usize {
        self.modules.lock().len()
    }

    /// Resolve and load the module `dotted` (`a.b.c`), running its body on
    /// first use only.
    ///
    /// The module is cached before its body runs, so a cyclic import sees
    /// the partially initialised module instead of loading it again. A body
    /// that fails is evicted so a later import retries.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn import(&self, dotted: &str) -> EvalResult {
        if let Some(native) = self.natives.get(dotted) {
            return Ok(native.clone());
        }
        let path = loader::resolve(&self.config.search_path, dotted)
            .ok_or_else(|| LoadError::NotFound(dotted.to_string()))?;
        let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if let Some(cached) = self.modules.lock().get(&key).cloned() {
            tracing::trace!(path = %key.display(), "module cache hit");
            return Ok(cached);
        }

        let root = loader::read_module(&path)?;
        let name = dotted.rsplit('.').next().unwrap_or(dotted);
        let shown = path.display().to_string();
        let globals = Scope::new();
        let module = Value::module(name, shown.as_str(), globals.clone());
        self.modules.lock().insert(key.clone(), module.clone());
        tracing::debug!(path = %shown, "loading module");

        let mut evaluator = Evaluator::new(self, globals, shown.as_str());
        if let Err(err) = evaluator.run(&root) {
            self.modules.lock().remove(&key);
            return Err(err);
        }
        Ok(module)
    }

    /// Run a script file with fresh globals, which are returned.
    pub fn run_file(&self, path: &Path) -> Result<Scope, EvalError> {
        let root = loader::read_module(path)?;
        let globals = Scope::new();
        Evaluator::new(self, globals.clone(), path.display().to_string()).run(&root)?;
        Ok(globals)
    }

    /// Run source text with fresh globals, reporting errors against `path`.
    pub fn run_source(&self, source: &str, path: &str) -> Result<Scope, EvalError> {
        let root = parse(source, ParseMode::File, path)?;
        let globals = Scope::new();
        Evaluator::new(self, globals.clone(), path).run(&root)?;
        Ok(globals)
    }
}

/// Parse `source`, turning a front-end error into a traced syntax error.
pub fn parse(source: &str, mode: ParseMode, path: &str) -> Result<NodeRef, EvalError> {
    blue_parse::parse(source, mode).map_err(|err| {
        syntax_error(err.message()).with_frame(
            Arc::from(path),
            err.line(),
            Arc::from(err.source_line()),
        )
    })
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("loaded_modules", &self.loaded_modules())
            .finish_non_exhaustive()
    }
}
