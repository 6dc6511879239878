#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod expr_tests;
mod stmt_tests;

use crate::{parse, ParseMode};

/// Dump of the statements under the root, without the root line.
fn dump(source: &str) -> String {
    let root = parse(source, ParseMode::File).unwrap();
    root.children.iter().map(|c| c.dump()).collect()
}

fn error(source: &str) -> String {
    parse(source, ParseMode::File).unwrap_err().message()
}
