//! Whole programs.

use bluec::commands::run_script;
use pretty_assertions::assert_eq;

use crate::common::{project, run, runtime};

#[test]
fn prime_sieve() {
    let src = "
def primes(limit)
  flags = []
  for i in 0..limit do flags.append(true) end
  found = []
  for n in 2..limit do
    if flags[n] do
      found.append(n)
      m = n * n
      while m < limit do
        flags[m] = false
        m += n
      end
    end
  end
  return found
end
print primes(30)
";
    assert_eq!(run(src), "[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]\n");
}

#[test]
fn word_count() {
    let src = "
text = \"the cat and the hat and the bat\"
counts = {}
for word in text.split() do
  if counts.has(word) do
    counts[word] += 1
  else
    counts[word] = 1
  end
end
for word, n in counts do
  print [word, n]
end
";
    assert_eq!(
        run(src),
        "[the, 3]\n[cat, 1]\n[and, 2]\n[hat, 1]\n[bat, 1]\n"
    );
}

#[test]
fn stack_class() {
    let src = "
class Stack
  def __init__(self)
    self.items = []
  end
  def push(self, x) self.items.append(x) end
  def pop(self) return self.items.pop() end
  def size(self) return len(self.items) end
end
s = new Stack()
for i in 1..4 do s.push(i * i) end
print s.size()
print s.pop()
print s.items
";
    assert_eq!(run(src), "3\n9\n[1, 4]\n");
}

#[test]
fn recursion_and_large_integers() {
    let src = "
def fact(n)
  if n <= 1 do return 1 end
  return n * fact(n - 1)
end
print fact(20)
";
    assert_eq!(run(src), "2432902008176640000\n");
}

#[test]
fn semicolons_and_comments() {
    let src = "
=== a long comment
spanning lines ===
a = 1; b = 2 # trailing
print a + b
";
    assert_eq!(run(src), "3\n");
}

#[test]
fn script_imports_a_sibling_module() {
    let dir = project(&[
        ("shapes.bl", "class Square\n  def __init__(self, side) self.side = side end\n  def area(self) return self.side * self.side end\nend\n"),
        ("main.bl", "import shapes\nsq = shapes.Square(4)\nprint sq.area()\n"),
    ]);
    let rt = runtime(vec![dir.path().to_path_buf()]);
    assert_eq!(run_script(&rt, &dir.path().join("main.bl")), 0);
    assert_eq!(rt.print_handler().captured(), "16\n");
}

#[test]
fn failing_script_reports_the_full_trace() {
    let dir = project(&[
        ("calc.bl", "def divide(a, b)\n  return a / b\nend\n"),
        ("main.bl", "import calc\nprint \"before\"\ncalc.divide(1, 0)\n"),
    ]);
    let rt = runtime(vec![dir.path().to_path_buf()]);
    let err = rt.run_file(&dir.path().join("main.bl")).unwrap_err();
    assert_eq!(err.message, "int division by zero");
    let lines: Vec<u32> = err.trace.iter().map(|frame| frame.line).collect();
    assert_eq!(lines, vec![2, 3]);
    assert!(err.trace[0].path.ends_with("calc.bl"));
    assert!(err.trace[1].path.ends_with("main.bl"));
    assert!(err.render().ends_with("calc.divide(1, 0)\nint division by zero"));
    assert_eq!(rt.print_handler().captured(), "before\n");

    assert_eq!(run_script(&rt, &dir.path().join("main.bl")), 1);
}

#[test]
fn exit_status_comes_from_system_exit() {
    let dir = project(&[("quit.bl", "import system\nprint \"bye\"\nsystem.exit(4)\nprint \"unreachable\"\n")]);
    let rt = runtime(Vec::new());
    assert_eq!(run_script(&rt, &dir.path().join("quit.bl")), 4);
    assert_eq!(rt.print_handler().captured(), "bye\n");
}
