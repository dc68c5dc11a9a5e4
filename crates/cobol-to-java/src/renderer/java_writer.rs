// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Simple line-based writer for generating Java code with proper indentation.

/// One indentation level.
pub const INDENT: &str = "    ";

/// Writer context for generating Java code.
/// Tracks indentation and handles line-based output.
pub struct JavaWriter {
    out: String,
    indent: usize,
    at_line_start: bool,
}

impl JavaWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write a string, handling indentation at line starts.
    /// Empty lines are left without indentation.
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.out.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    for _ in 0..self.indent {
                        self.out.push_str(INDENT);
                    }
                }
                self.at_line_start = false;
                self.out.push(c);
            }
        }
    }

    /// Write a complete line (adds newline at end).
    /// Embedded newlines start further lines at the current indentation.
    pub fn line(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write an empty line (just a newline).
    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Increase indentation for subsequent lines.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation for subsequent lines.
    pub fn dedent(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
    }

    /// Write `header`, the lines produced by `body` one level deeper, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.indent();
        body(self);
        self.dedent();
        self.line("}");
    }

    /// Write items each on their own line using a render function.
    pub fn lines_with<I, T, F>(&mut self, items: I, mut render: F)
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        for item in items {
            render(self, item);
            self.newline();
        }
    }

    /// Get the underlying output (consumes self).
    pub fn into_inner(self) -> String {
        self.out
    }
}

impl Default for JavaWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render to a string.
pub fn render_to_string<F>(f: F) -> String
where
    F: FnOnce(&mut JavaWriter),
{
    let mut writer = JavaWriter::new();
    f(&mut writer);
    writer.into_inner()
}
