//! Indentation-aware code writer.
//!
//! A [`CodeWriter`] is a tree of text lines and nested writers. Processors
//! compose the tree top-down (scopes, sections, doc comments) and render it
//! once at the end; indentation and blank-line framing come from where a block
//! sits in the tree, never from the text inside it.

use coredts_schema::Documented;
use std::fmt;

/// Default nesting unit for scopes.
pub const DEFAULT_INDENT: &str = "    ";

const COMMENT_FIRST_LINE: &str = "/**";
const COMMENT_LAST_LINE: &str = " */";
const COMMENT_PREFIX: &str = " * ";
const SCOPE_LAST_LINE: &str = "}";

#[derive(Debug, Clone)]
enum Chunk {
    Line(String),
    Block(CodeWriter),
}

/// Recursive container of code lines.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    chunks: Vec<Chunk>,
    nested_indent: String,
    first_line: Option<String>,
    last_line: Option<String>,
    content_prefix: String,
    wrap_with_new_lines: bool,
    remove_empty: bool,
    first_line_index: Option<usize>,
}

impl CodeWriter {
    /// Creates an empty root writer using [`DEFAULT_INDENT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Creates an empty root writer with a custom nesting unit.
    #[must_use]
    pub fn with_indent(nested_indent: impl Into<String>) -> Self {
        Self {
            chunks: Vec::new(),
            nested_indent: nested_indent.into(),
            first_line: None,
            last_line: None,
            content_prefix: String::new(),
            wrap_with_new_lines: false,
            remove_empty: false,
            first_line_index: None,
        }
    }

    fn child(
        nested_indent: &str,
        first_line: Option<String>,
        last_line: Option<String>,
        content_prefix: &str,
        wrap_with_new_lines: bool,
        remove_empty: bool,
    ) -> Self {
        let first_line = first_line.filter(|line| !line.is_empty());
        let last_line = last_line.filter(|line| !line.is_empty());
        let mut chunks = Vec::new();
        let mut first_line_index = None;
        if let Some(line) = &first_line {
            chunks.push(Chunk::Line(line.clone()));
            first_line_index = Some(0);
        }

        Self {
            chunks,
            nested_indent: nested_indent.to_string(),
            first_line,
            last_line,
            content_prefix: content_prefix.to_string(),
            wrap_with_new_lines,
            remove_empty,
            first_line_index,
        }
    }

    fn push_block(&mut self, block: CodeWriter) -> &mut CodeWriter {
        self.chunks.push(Chunk::Block(block));
        match self.chunks.last_mut() {
            Some(Chunk::Block(block)) => block,
            _ => unreachable!("a block was just pushed"),
        }
    }

    fn is_comment(&self) -> bool {
        self.first_line.as_deref() == Some(COMMENT_FIRST_LINE)
    }

    /// Appends a line. Empty lines are dropped.
    pub fn add(&mut self, line: impl Into<String>) -> &mut Self {
        let line = line.into();
        if !line.is_empty() {
            self.chunks.push(Chunk::Line(line));
        }
        self
    }

    /// Appends several lines in order. Empty lines are dropped.
    pub fn add_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.add(line);
        }
        self
    }

    /// Appends a line when one is given.
    pub fn add_opt<S: Into<String>>(&mut self, line: Option<S>) -> &mut Self {
        if let Some(line) = line {
            self.add(line);
        }
        self
    }

    /// Opens a section.
    ///
    /// A named section starts with a `// <name>` line and disappears from the
    /// output when nothing else is added to it. A nameless section is only a
    /// grouping unit.
    pub fn section(&mut self, name: Option<&str>) -> &mut CodeWriter {
        self.open_section(name, false)
    }

    /// Opens a named section framed by blank lines.
    pub fn spaced_section(&mut self, name: &str) -> &mut CodeWriter {
        self.open_section(Some(name), true)
    }

    fn open_section(&mut self, name: Option<&str>, wrap_with_new_lines: bool) -> &mut CodeWriter {
        let section = Self::child(
            &self.nested_indent,
            name.map(|name| format!("// {name}")),
            None,
            "",
            wrap_with_new_lines,
            true,
        );
        self.push_block(section)
    }

    /// Opens a nameless section holding the given line.
    pub fn add_as_section(&mut self, line: impl Into<String>) -> &mut CodeWriter {
        let section = self.section(None);
        section.add(line);
        section
    }

    /// Opens a braces scope closed by `}`.
    ///
    /// Interior lines are indented by one nesting unit and the block is framed
    /// by blank lines.
    pub fn scope(&mut self, declaration: impl Into<String>) -> &mut CodeWriter {
        self.scope_with_end(declaration, Some(SCOPE_LAST_LINE))
    }

    /// Opens a scope with a custom closing line, or none.
    ///
    /// Without a closing line the scope is a framed one-liner such as a type
    /// alias, and its interior is not indented.
    pub fn scope_with_end(
        &mut self,
        declaration: impl Into<String>,
        last_line: Option<&str>,
    ) -> &mut CodeWriter {
        let scope = Self::child(
            &self.nested_indent,
            Some(declaration.into()),
            last_line.map(str::to_string),
            "",
            true,
            false,
        );
        self.push_block(scope)
    }

    /// Returns the leading doc comment, creating it if absent.
    pub fn comment(&mut self) -> &mut CodeWriter {
        let has_comment = matches!(self.chunks.first(), Some(Chunk::Block(block)) if block.is_comment());
        if !has_comment {
            let comment = Self::child(
                "",
                Some(COMMENT_FIRST_LINE.to_string()),
                Some(COMMENT_LAST_LINE.to_string()),
                COMMENT_PREFIX,
                false,
                false,
            );
            self.chunks.insert(0, Chunk::Block(comment));
            if let Some(index) = self.first_line_index.as_mut() {
                *index += 1;
            }
        }

        match self.chunks.first_mut() {
            Some(Chunk::Block(block)) => block,
            _ => unreachable!("a comment block is always first"),
        }
    }

    /// Adds the description and `@deprecated` tag of an item to the doc comment.
    ///
    /// Does nothing when the item has neither.
    pub fn add_description_and_deprecation_for(&mut self, item: &impl Documented) -> &mut Self {
        let docs = item.docs();
        let description = docs.description();
        let deprecated = docs.is_deprecated();
        if description.is_none() && !deprecated {
            return self;
        }

        let deprecation = deprecated.then(|| {
            format!(
                "@deprecated {}",
                docs.deprecation_message.as_deref().unwrap_or_default()
            )
        });
        self.comment().add_opt(description).add_opt(deprecation);
        self
    }

    /// Adds a nameless section with one line and its documentation.
    pub fn add_definition_line(
        &mut self,
        line: impl Into<String>,
        item: &impl Documented,
    ) -> &mut Self {
        self.add_as_section(line)
            .add_description_and_deprecation_for(item);
        self
    }

    /// Adds one definition line per item.
    pub fn add_definition_lines<'i, T, F>(
        &mut self,
        items: impl IntoIterator<Item = &'i T>,
        mut to_line: F,
    ) -> &mut Self
    where
        T: Documented + 'i,
        F: FnMut(&T) -> String,
    {
        for item in items {
            self.add_definition_line(to_line(item), item);
        }
        self
    }

    /// Returns true if nothing was added to the writer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Renders the tree into flat lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        if self.remove_empty && self.chunks.len() == 1 && self.first_line_index == Some(0) {
            return Vec::new();
        }

        let interior_prefix = if self.first_line.is_some() && self.last_line.is_some() {
            format!("{}{}", self.nested_indent, self.content_prefix)
        } else {
            self.content_prefix.clone()
        };

        let mut output = Vec::new();
        if self.wrap_with_new_lines {
            output.push(String::new());
        }

        for (index, chunk) in self.chunks.iter().enumerate() {
            let prefix = match self.first_line_index {
                Some(first) if index <= first => "",
                _ => interior_prefix.as_str(),
            };
            match chunk {
                Chunk::Line(text) => output.extend(
                    text.split('\n')
                        .map(|line| format!("{prefix}{}", trim_carriage_returns(line))),
                ),
                Chunk::Block(block) => output.extend(
                    block
                        .lines()
                        .into_iter()
                        .map(|line| format!("{prefix}{line}")),
                ),
            }
        }

        if let Some(last_line) = &self.last_line {
            output.push(last_line.clone());
        }
        if self.wrap_with_new_lines {
            output.push(String::new());
        }

        output
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

fn trim_carriage_returns(line: &str) -> &str {
    let line = line.strip_prefix('\r').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
