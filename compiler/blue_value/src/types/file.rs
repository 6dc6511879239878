//! `file`: a disk file opened with `file(path, mode)`, or a process stream.

use super::{Construct, Representable};
use crate::args::parse_args;
use crate::errors::{io_error, EvalResult};
use crate::value::{FileMode, FileObject, Heap, Stream, Value};

pub(super) struct FileType;

fn file(value: &Value) -> &Heap<FileObject> {
    match value {
        Value::File(f) => f,
        other => unreachable!("file protocol applied to {}", other.type_name()),
    }
}

impl Representable for FileType {
    fn repr(&self, value: &Value) -> String {
        let f = file(value);
        let state = if f.is_open() { "open" } else { "closed" };
        format!("<{state} file '{}', mode='{}'>", f.name, f.mode)
    }
}

/// `file(path[, mode[, perm]])`; mode defaults to `"r"`, perm (unix only)
/// to `0o666`.
impl Construct for FileType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("s|si", args)?;
        let path = args.str(0).unwrap_or_default();
        let mode = args.str(1).unwrap_or("r");
        let perm = args
            .int(2)
            .and_then(|perm| u32::try_from(perm).ok())
            .unwrap_or(0o666);
        let handle = FileMode::parse(mode)?
            .options(perm)
            .open(path)
            .map_err(|err| io_error(&err))?;
        tracing::debug!(path, mode, "opened file");
        Ok(Value::file(path, mode, Stream::Disk(handle)))
    }
}
