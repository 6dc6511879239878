//! The interactive loop.
//!
//! A [`Session`] owns one evaluator and the entry being typed. Lines are
//! accumulated until every block opener (`def`, `if`, `while`, `for`,
//! `class`) is closed by an `end`, then the entry is parsed and run against
//! the session's globals. Failures are handed back to the caller and the
//! session carries on.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, Write};
use std::path::Path;

use blue_eval::{parse, Evaluator, Runtime};
use blue_lexer::{LexErrorKind, TokenKind};
use blue_parse::ParseMode;
use blue_value::{EvalError, Scope};

pub const PROMPT: &str = ">> ";
pub const CONTINUATION_PROMPT: &str = ">>> ";

/// Path reported in traces of entries typed at the prompt.
const STDIN_PATH: &str = "<stdin>";

/// What happened to a fed line.
#[derive(Debug)]
pub enum Feed {
    /// A block is still open.
    NeedMore,
    /// The entry ran to completion.
    Done,
    /// The entry failed.
    Failed(EvalError),
    /// The entry called `system.exit`.
    Exit(i32),
}

pub struct Session<'rt> {
    evaluator: Evaluator<'rt>,
    pending: String,
}

impl<'rt> Session<'rt> {
    pub fn new(runtime: &'rt Runtime) -> Self {
        Session {
            evaluator: Evaluator::new(runtime, Scope::new(), STDIN_PATH),
            pending: String::new(),
        }
    }

    pub fn prompt(&self) -> &'static str {
        if self.pending.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        }
    }

    pub fn globals(&self) -> &Scope {
        self.evaluator.globals()
    }

    /// Lines of the entry still waiting for its `end`.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Add `line` to the current entry and run the entry once it is closed.
    pub fn feed(&mut self, line: &str) -> Feed {
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(line);
        if open_blocks(&self.pending) > 0 {
            return Feed::NeedMore;
        }

        let source = std::mem::take(&mut self.pending);
        if source.trim().is_empty() {
            return Feed::Done;
        }
        match self.execute(&source) {
            Ok(()) => Feed::Done,
            Err(err) => match err.exit_code() {
                Some(code) => Feed::Exit(code),
                None => Feed::Failed(err),
            },
        }
    }

    fn execute(&mut self, source: &str) -> Result<(), EvalError> {
        let root = parse(source, ParseMode::Interactive, STDIN_PATH)?;
        self.evaluator.run(&root)
    }
}

/// Number of blocks left open in `source`.
///
/// An unterminated long comment keeps the entry open. Other scan errors
/// count as closed so the parser gets to report them.
pub fn open_blocks(source: &str) -> usize {
    match blue_lexer::tokenize(source) {
        Ok(tokens) => tokens.iter().fold(0, |depth: usize, token| {
            if token.kind.opens_block() {
                depth + 1
            } else if token.kind == TokenKind::End {
                depth.saturating_sub(1)
            } else {
                depth
            }
        }),
        Err(err) if err.kind == LexErrorKind::UnterminatedComment => 1,
        Err(_) => 0,
    }
}

/// Append-only history file. Failing to open or write it never interrupts
/// the session.
struct History {
    file: Option<File>,
}

impl History {
    fn open(path: Option<&Path>) -> Self {
        let file = path.and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| tracing::debug!(path = %path.display(), %err, "history disabled"))
                .ok()
        });
        History { file }
    }

    fn append(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Some(file) = &mut self.file {
            if let Err(err) = writeln!(file, "{line}") {
                tracing::debug!(%err, "history write failed");
                self.file = None;
            }
        }
    }
}

/// Read entries from stdin until end of input or `system.exit`.
pub fn run_repl(runtime: &Runtime) -> i32 {
    let mut session = Session::new(runtime);
    let mut history = History::open(runtime.config().history_file.as_deref());
    let out = runtime.print_handler();
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        out.print(session.prompt());
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                out.println("");
                return 0;
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {err}");
                return 1;
            }
        }

        let entry = line.trim_end_matches(['\n', '\r']);
        history.append(entry);
        match session.feed(entry) {
            Feed::NeedMore | Feed::Done => {}
            Feed::Failed(err) => eprintln!("{}", err.render()),
            Feed::Exit(code) => return code,
        }
    }
}
