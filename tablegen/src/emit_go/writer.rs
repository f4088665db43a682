/// Indentation-aware string builder for emitting Go source code.
/// Indents with tabs, as gofmt does.
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            depth: 0,
        }
    }

    /// Write a line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        self.write_indent(self.depth);
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write `text` verbatim and increase indent. The caller supplies the
    /// opening brace so composite literals (`&[]Region{`) and blocks
    /// (`func f() {`) share one method.
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    /// Decrease indent and write `text`, usually `}` or `},`.
    pub fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Decrease indent without writing anything.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write a `case`/`default` label one level left of the statements it
    /// guards, matching gofmt's switch layout.
    pub fn label(&mut self, text: &str) {
        self.write_indent(self.depth.saturating_sub(1));
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push('\t');
        }
    }
}

/// Escape a string for embedding in a Go interpreted string literal.
pub fn escape_go(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}
