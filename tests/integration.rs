use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

// ── helpers ──────────────────────────────────────────────────────────────────

fn pyhl_bin() -> PathBuf {
    // CARGO_BIN_EXE_pyhl is set by cargo test for integration tests
    PathBuf::from(env!("CARGO_BIN_EXE_pyhl"))
}

struct TempPy {
    dir: tempfile::TempDir,
    files: Vec<PathBuf>,
}

impl TempPy {
    fn new() -> Self {
        Self {
            dir: tempfile::TempDir::new().unwrap(),
            files: Vec::new(),
        }
    }

    fn file(&mut self, name: &str, content: &str) -> &mut Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        self.files.push(path);
        self
    }

    /// Run pyhl on every file with the given extra args.  Returns (stdout, stderr, exit_code).
    fn run(&self, extra: &[&str]) -> (String, String, i32) {
        let mut cmd = Command::new(pyhl_bin());
        cmd.args(&self.files).args(extra).arg("--color").arg("never");
        let out = cmd.output().expect("failed to run pyhl");
        (
            String::from_utf8_lossy(&out.stdout).into_owned(),
            String::from_utf8_lossy(&out.stderr).into_owned(),
            out.status.code().unwrap_or(-1),
        )
    }
}

/// Pipe `input` through pyhl.  Returns (stdout, exit_code).
fn run_stdin(input: &str, args: &[&str]) -> (String, i32) {
    let mut child = Command::new(pyhl_bin())
        .args(args)
        .arg("--color")
        .arg("never")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run pyhl");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&out.stdout).into_owned(),
        out.status.code().unwrap_or(-1),
    )
}

// ── html fragment ─────────────────────────────────────────────────────────────

#[test]
fn test_single_file_prints_exact_fragment() {
    let mut t = TempPy::new();
    t.file("f.py", "def f(self):\n    return 1\n");
    let (out, _, code) = t.run(&[]);
    assert_eq!(code, 0);
    assert_eq!(
        out,
        "<span class=\"k\">def</span> f(<span class=\"o\">self</span>):\n    \
         <span class=\"k\">return</span> <span class=\"n\">1</span>\n"
    );
}

#[test]
fn test_stdin_is_default_input() {
    let (out, code) = run_stdin("print('<hi>')", &[]);
    assert_eq!(code, 0);
    assert_eq!(
        out,
        "<span class=\"nb\">print</span>(<span class=\"s\">&#039;&lt;hi&gt;&#039;</span>)"
    );
}

#[test]
fn test_dash_reads_stdin() {
    let (out, code) = run_stdin("x = 1", &["-"]);
    assert_eq!(code, 0);
    assert_eq!(out, "x = <span class=\"n\">1</span>");
}

#[test]
fn test_empty_stdin_prints_nothing() {
    let (out, code) = run_stdin("", &[]);
    assert_eq!(code, 0);
    assert_eq!(out, "");
}

#[test]
fn test_several_files_are_labelled() {
    let mut t = TempPy::new();
    t.file("a.py", "import os");
    t.file("b.py", "x = 2\n");
    let (out, _, code) = t.run(&[]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4, "got: {out}");
    assert!(lines[0].starts_with("<!-- ") && lines[0].ends_with("a.py -->"));
    assert_eq!(lines[1], "<span class=\"k\">import</span> os");
    assert!(lines[2].ends_with("b.py -->"));
    assert_eq!(lines[3], "x = <span class=\"n\">2</span>");
}

// ── directories ──────────────────────────────────────────────────────────────

#[test]
fn test_directory_is_searched_for_python_files() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.py"), "# one\n").unwrap();
    std::fs::write(dir.path().join("b.py"), "# two\n").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "# not python\n").unwrap();

    let out = Command::new(pyhl_bin())
        .arg(dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout.contains("<span class=\"c\"># one</span>"));
    assert!(stdout.contains("<span class=\"c\"># two</span>"));
    assert!(!stdout.contains("not python"));
}

#[test]
fn test_exclude_flag() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("tests")).unwrap();
    std::fs::write(dir.path().join("tests/test_a.py"), "# skipped\n").unwrap();
    std::fs::write(dir.path().join("app.py"), "# kept\n").unwrap();

    let out = Command::new(pyhl_bin())
        .arg(dir.path())
        .args(["--exclude", "tests"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("# kept"));
    assert!(!stdout.contains("# skipped"));
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn test_missing_path_exits_2() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = Command::new(pyhl_bin())
        .arg(dir.path().join("nope.py"))
        .args(["--color", "never"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: "), "got: {stderr}");
    assert!(stderr.contains("nope.py"));
}

#[test]
fn test_malformed_python_still_highlights() {
    let mut t = TempPy::new();
    t.file("broken.py", "def f(:\n    '''never closed\n");
    let (out, _, code) = t.run(&[]);
    assert_eq!(code, 0);
    assert!(out.contains("<span class=\"s\">&#039;&#039;&#039;never closed\n</span>"));
}

// ── other formats ────────────────────────────────────────────────────────────

#[test]
fn test_document_format() {
    let mut t = TempPy::new();
    t.file("a.py", "x = 1\n");
    t.file("b.py", "y = 2\n");
    let (out, _, code) = t.run(&["--format", "document", "--title", "Demo & co"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("<title>Demo &amp; co</title>"));
    assert_eq!(out.matches("<pre class=\"pyhl\">").count(), 2);
    assert!(out.trim_end().ends_with("</html>"));
}

#[test]
fn test_ansi_format_without_colour_is_source() {
    let src = "@dataclass\nclass P:\n    x: int = 0  # field\n";
    let (out, code) = run_stdin(src, &["--format", "ansi"]);
    assert_eq!(code, 0);
    assert_eq!(out, src);
}

#[test]
fn test_ansi_format_with_colour_has_escapes() {
    let (out, code) = run_stdin("def f(): pass", &["--format", "ansi", "--color", "always"]);
    assert_eq!(code, 0);
    assert!(out.contains("\x1b["), "expected ANSI escapes, got {out:?}");
    assert!(out.contains("def"));
}

#[test]
fn test_ansi_format_replaces_control_characters() {
    let (out, code) = run_stdin("s = '\x1b]0;pwned\x07'  # \x1b[2J\n", &["--format", "ansi"]);
    assert_eq!(code, 0);
    assert!(!out.contains('\x1b'), "raw escape reached the terminal: {out:?}");
    assert!(!out.contains('\x07'));
    assert_eq!(out, "s = '\u{fffd}]0;pwned\u{fffd}'  # \u{fffd}[2J\n");
}

#[test]
fn test_spans_format_is_valid_json() {
    let (out, code) = run_stdin("x = 'a'\nprint(x)", &["--format", "spans"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(v["count"], 1);
    let file = &v["files"][0];
    assert_eq!(file["file"], "<stdin>");
    assert_eq!(file["lines"], 2);
    let spans = file["spans"].as_array().unwrap();
    assert_eq!(spans[0]["kind"], "identifier");
    assert_eq!(spans[0]["text"], "x");
    let string = spans.iter().find(|s| s["kind"] == "quoted_string").unwrap();
    assert_eq!(string["text"], "'a'");
    assert_eq!(string["start"], 4);
    assert_eq!(string["col"], 5);
    let print = spans.iter().find(|s| s["kind"] == "builtin").unwrap();
    assert_eq!(print["line"], 2);
    assert_eq!(print["col"], 1);
}
