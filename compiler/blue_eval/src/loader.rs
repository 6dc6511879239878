//! Resolving `import a.b` to a script file and reading it.
//!
//! Each search root is tried in order. Under a root, `a/b/b.bl` wins when
//! `a/b` is a directory; otherwise `a/b.bl` is used.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use blue_ir::NodeRef;
use blue_parse::{ParseError, ParseMode};
use blue_value::errors::{module_not_found, syntax_error};
use blue_value::{EvalError, EvalErrorKind};
use thiserror::Error;

/// Extension of Blue script files.
pub const SCRIPT_EXTENSION: &str = "bl";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load module '{0}'")]
    NotFound(String),
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl From<LoadError> for EvalError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(dotted) => module_not_found(&dotted),
            LoadError::Read { .. } => EvalError::new(EvalErrorKind::Io, err.to_string()),
            LoadError::Parse { path, source } => syntax_error(source.message()).with_frame(
                Arc::from(path.display().to_string()),
                source.line(),
                Arc::from(source.source_line()),
            ),
        }
    }
}

/// Find the file `dotted` names under the first root that has it.
pub fn resolve(search_path: &[PathBuf], dotted: &str) -> Option<PathBuf> {
    let parts: Vec<&str> = dotted.split('.').collect();
    let last = parts.last()?;
    let relative: PathBuf = parts.iter().collect();
    search_path.iter().find_map(|root| {
        let candidate = root.join(&relative);
        if candidate.is_dir() {
            let inner = candidate.join(last).with_extension(SCRIPT_EXTENSION);
            if inner.is_file() {
                return Some(inner);
            }
        }
        let sibling = candidate.with_extension(SCRIPT_EXTENSION);
        sibling.is_file().then_some(sibling)
    })
}

/// Read and parse a script file.
pub fn read_module(path: &Path) -> Result<NodeRef, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    blue_parse::parse(&source, ParseMode::File).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn directory_module_wins_over_sibling() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pkg/util")).unwrap();
        fs::write(dir.path().join("pkg/util/util.bl"), "x = 1").unwrap();
        fs::write(dir.path().join("pkg/util.bl"), "x = 2").unwrap();
        let found = resolve(&[dir.path().to_path_buf()], "pkg.util").unwrap();
        assert_eq!(found, dir.path().join("pkg/util/util.bl"));
    }

    #[test]
    fn roots_are_tried_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("m.bl"), "").unwrap();
        let roots = [first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(resolve(&roots, "m").unwrap(), second.path().join("m.bl"));
        assert!(resolve(&roots, "missing").is_none());
    }

    #[test]
    fn parse_failure_becomes_syntax_error_with_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bl");
        fs::write(&path, "x = )\n").unwrap();
        let err: EvalError = read_module(&path).unwrap_err().into();
        assert_eq!(err.kind, EvalErrorKind::Syntax);
        assert_eq!(err.trace.len(), 1);
        assert_eq!(err.trace[0].line, 1);
    }

    #[test]
    fn not_found_message() {
        let err: EvalError = LoadError::NotFound("a.b".into()).into();
        assert_eq!(err.message, "failed to load module 'a.b'");
    }
}
