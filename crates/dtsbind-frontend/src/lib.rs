//! Front end for the declaration translator.
//!
//! Parsing is delegated wholesale to swc; this crate is the only place that
//! touches the parser. It hands the rest of the pipeline a [`ParsedFile`]:
//! the parsed module plus the two structural accessors the translation core
//! needs and nothing more — original source text for a span ([`snippet`],
//! used in error messages and verbatim copies) and the doc comment attached
//! to a position ([`leading_docs`]).
//!
//! The AST itself is read-only from the core's point of view: nothing
//! downstream mutates or rebuilds swc nodes.
//!
//! [`snippet`]: ParsedFile::snippet
//! [`leading_docs`]: ParsedFile::leading_docs

use dtsbind_common::{Error, Result};
use swc_common::comments::{Comment, CommentKind, Comments, SingleThreadedComments};
use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, SourceMap, SourceMapper, Span};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// One parsed declaration file, with its comment map and source map kept
/// alive for snippet and doc-comment lookups.
pub struct ParsedFile {
    file_name: String,
    source_map: Lrc<SourceMap>,
    comments: SingleThreadedComments,
    module: Module,
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

impl ParsedFile {
    /// Parse declaration-file source text held in memory.
    ///
    /// `name` is used for diagnostics only; no file is read.
    pub fn parse_source(name: &str, source: &str) -> Result<Self> {
        let source_map: Lrc<SourceMap> = Lrc::default();
        let file = source_map.new_source_file(
            Lrc::new(FileName::Custom(name.to_string())),
            source.to_string(),
        );
        let comments = SingleThreadedComments::default();

        let lexer = Lexer::new(
            Syntax::Typescript(TsSyntax {
                dts: true,
                ..Default::default()
            }),
            EsVersion::Es2022,
            StringInput::from(&*file),
            Some(&comments),
        );
        let mut parser = Parser::new_from(lexer);

        let module = parser.parse_typescript_module().map_err(|err| Error::Parse {
            file: name.to_string(),
            message: err.kind().msg().to_string(),
        })?;

        // The parser can recover and still report syntax errors; a
        // declaration file that needed recovery is not trustworthy input.
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(Error::Parse {
                file: name.to_string(),
                message: err.kind().msg().to_string(),
            });
        }

        tracing::debug!(file = %name, items = module.body.len(), "parsed declaration file");

        Ok(ParsedFile {
            file_name: name.to_string(),
            source_map,
            comments,
            module,
        })
    }

    /// The parsed top-level module.
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Original source text for a span.
    ///
    /// Used for error messages and for constructs that are copied verbatim
    /// (enum initializers, qualified type names).
    pub fn snippet(&self, span: Span) -> String {
        self.source_map
            .span_to_snippet(span)
            .unwrap_or_else(|_| String::from("<unknown>"))
    }

    /// Concatenated doc blocks attached before `pos`, in source order.
    ///
    /// Only JSDoc-style blocks (`/** ... */`) count as documentation; line
    /// comments and plain block comments are ignored. Returns the cleaned
    /// text (frame and `*` gutters stripped), newline-joined; empty when the
    /// node carries no documentation.
    pub fn leading_docs(&self, pos: BytePos) -> String {
        let Some(leading) = self.comments.get_leading(pos) else {
            return String::new();
        };
        leading
            .iter()
            .filter(|c| is_doc_block(c))
            .map(|c| clean_doc_block(&c.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn is_doc_block(comment: &Comment) -> bool {
    comment.kind == CommentKind::Block && comment.text.starts_with('*')
}

/// Strip the JSDoc frame from a block comment body.
///
/// swc hands us the text between `/*` and `*/`, so a doc block arrives as
/// `* one-liner ` or `*\n * line\n * line\n `. Leading `*` gutters and one
/// following space are removed per line; interior blank lines survive.
fn clean_doc_block(text: &str) -> String {
    let body = &text[1..];
    body.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => trimmed,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
