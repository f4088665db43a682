/// Indentation-aware string builder for emitting Rust source code.
/// Uses 4-space indentation, as rustfmt does.
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

    /// Write a line at the current indentation level. Empty lines carry no
    /// trailing whitespace.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str("    ");
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Write `text` verbatim and increase indent. `text` ends with the
    /// opening delimiter: `{`, `[` or `(`.
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    /// Decrease indent and write the closing `text`, e.g. `}` or `],`.
    pub fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escape a string for embedding in a Rust double-quoted string literal.
pub fn escape_rs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut w = CodeWriter::new();
        w.open("fn f() {");
        w.line("g();");
        w.close("}");
        assert_eq!(w.finish(), "fn f() {\n    g();\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut w = CodeWriter::new();
        w.open("mod m {");
        w.line("");
        w.close("}");
        assert_eq!(w.finish(), "mod m {\n\n}\n");
    }

    #[test]
    fn test_nested_array() {
        let mut w = CodeWriter::new();
        w.open("static X: [&[u8]; 1] = [");
        w.open("&[");
        w.line("1,");
        w.close("],");
        w.close("];");
        assert_eq!(w.finish(), "static X: [&[u8]; 1] = [\n    &[\n        1,\n    ],\n];\n");
    }

    #[test]
    fn test_escape_rs() {
        assert_eq!(escape_rs("Coeur d'Alene"), "Coeur d'Alene");
        assert_eq!(escape_rs("a\"b"), "a\\\"b");
        assert_eq!(escape_rs("a\\b"), "a\\\\b");
        assert_eq!(escape_rs("a\nb"), "a\\nb");
        assert_eq!(escape_rs("a\0b"), "a\\0b");
        assert_eq!(escape_rs("\u{1b}[0m"), "\\u{1b}[0m");
    }
}
