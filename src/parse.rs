use std::mem;

use crate::attrs::decode_attributes;
use crate::error::{IssueRange, ParseIssue};
use crate::node::{ContentPiece, Shortcode};
use crate::textrange::TextRange;
use crate::token::ShortcodeToken;
use crate::tokenize::ShortcodeTokenizer;

/// Bookkeeping for one still-open tag while parsing.
struct Frame<'a> {
    shortcode: Shortcode<'a>,
    /// Byte offset into the document for the start of the opening token
    token_start: usize,
    /// Byte length of the opening token
    token_length: usize,
    /// Byte offset where this frame's next literal flush starts
    prev_offset: usize,
    /// Byte offset where literal text preceding the opening token starts
    leading_text_start: Option<usize>,
}

impl<'a> Frame<'a> {
    /// Flush pending literal text into the frame and stamp its raw spans,
    /// ending the content at `content_end` and the full tag at `tag_end`.
    fn finalize(&mut self, document: &'a str, content_end: usize, tag_end: usize) {
        let text = &document[self.prev_offset..content_end];
        if !text.is_empty() {
            self.shortcode.inner_content.push(ContentPiece::Text(text));
        }
        self.shortcode.raw_tag = &document[self.token_start..tag_end];
        let content_start = self.token_start + self.token_length;
        self.shortcode.raw_content = &document[content_start..content_end];
        self.prev_offset = content_end;
    }

    /// Attach a finished child to this frame: flush literal text up to the
    /// child's opening token, add the child marker, and move the flush
    /// cursor to `resume_offset` so the child's source is never re-read.
    fn attach(&mut self, document: &'a str, child: Shortcode<'a>, child_start: usize, resume_offset: usize) {
        let text = &document[self.prev_offset..child_start];
        if !text.is_empty() {
            self.shortcode.inner_content.push(ContentPiece::Text(text));
        }
        self.shortcode.inner_content.push(ContentPiece::Child);
        self.shortcode.children.push(child);
        self.prev_offset = resume_offset;
    }
}

/// Stack-based shortcode parser.
///
/// Requests one token at a time from the tokenizer and folds it into a
/// forest of [Shortcode] nodes, tracking nesting with an explicit stack of
/// open-tag frames rather than recursion. Malformed input never aborts a
/// parse; the parser always produces a best-effort tree and records what it
/// recovered from (see [issues](ShortcodeParser::issues)).
pub struct ShortcodeParser<'a> {
    document: &'a str,
    tokenizer: ShortcodeTokenizer<'a>,
    /// Tracks scanning progress through the document
    offset: usize,
    output: Vec<Shortcode<'a>>,
    stack: Vec<Frame<'a>>,
    issues: Vec<ParseIssue>,
}

impl<'a> ShortcodeParser<'a> {
    /// Create a parser for `document` recognizing the given tag names,
    /// usually a registry's [tag_names](crate::registry::ShortcodeRegistry::tag_names).
    pub fn new<I, S>(document: &'a str, tags: I) -> ShortcodeParser<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ShortcodeParser {
            document,
            tokenizer: ShortcodeTokenizer::new(document, tags),
            offset: 0,
            output: vec![],
            stack: vec![],
            issues: vec![],
        }
    }

    /// Parse the document into an ordered list of top-level shortcodes.
    ///
    /// Total over any input: unmatched closers degrade to literal text,
    /// tags closed out of order are reflowed to self-closing, and tags
    /// still open at end of input are force-closed in place.
    pub fn parse(&mut self) -> Vec<Shortcode<'a>> {
        self.offset = 0;
        self.output = vec![];
        self.stack = vec![];
        self.issues = vec![];
        while self.proceed() {
            // each step consumes one token
        }
        mem::take(&mut self.output)
    }

    /// Issues recorded by the most recent [parse](ShortcodeParser::parse).
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Process the next token and decide whether to keep eating more.
    fn proceed(&mut self) -> bool {
        let token = match self.tokenizer.next_token(self.offset) {
            Some(token) => token,
            None => return self.finish(),
        };
        match token {
            ShortcodeToken::Escaped { span } => self.handle_escaped(span),
            ShortcodeToken::Void { name, attrs, span } => self.handle_void(name, attrs, span),
            ShortcodeToken::Opener { name, attrs, span } => self.handle_opener(name, attrs, span),
            ShortcodeToken::Closer { name, span } => self.handle_closer(name, span),
        }
        true
    }

    /// End of input: flush the document tail, force-close anything still
    /// open. Remaining frames are finalized innermost first and stay
    /// nested under their parents instead of spilling to the top level.
    fn finish(&mut self) -> bool {
        if self.stack.is_empty() {
            let tail = &self.document[self.offset..];
            if !tail.is_empty() {
                self.output.push(Shortcode::freeform(tail));
            }
            self.offset = self.document.len();
            return false;
        }
        let end = self.document.len();
        while let Some(mut top) = self.stack.pop() {
            self.note_unclosed(&top, end);
            top.finalize(self.document, end, end);
            match self.stack.last_mut() {
                Some(parent) => parent.attach(self.document, top.shortcode, top.token_start, end),
                None => {
                    if let Some(leading) = top.leading_text_start {
                        self.output.push(Shortcode::freeform(&self.document[leading..top.token_start]));
                    }
                    self.output.push(top.shortcode);
                }
            }
        }
        false
    }

    /// Escaped tags never touch the stack; one bracket layer is stripped
    /// and the rest is literal text, owned by whatever scope is open.
    fn handle_escaped(&mut self, span: TextRange<'a>) {
        let inner = &self.document[span.start + 1..span.end - 1];
        match self.stack.last_mut() {
            None => {
                self.flush_freeform(span.start);
                self.output.push(Shortcode::freeform(inner));
            }
            Some(frame) => {
                let text = &self.document[frame.prev_offset..span.start];
                if !text.is_empty() {
                    frame.shortcode.inner_content.push(ContentPiece::Text(text));
                }
                frame.shortcode.inner_content.push(ContentPiece::Text(inner));
                frame.prev_offset = span.end;
            }
        }
        self.offset = span.end;
    }

    /// Void tags are complete on arrival: a child of the innermost open
    /// frame, or a top-level node of their own.
    fn handle_void(&mut self, name: TextRange<'a>, attrs: TextRange<'a>, span: TextRange<'a>) {
        let shortcode = Shortcode::tag(name.as_str(), decode_attributes(attrs.as_str()), span.as_str());
        match self.stack.last_mut() {
            None => {
                self.flush_freeform(span.start);
                self.output.push(shortcode);
            }
            Some(parent) => parent.attach(self.document, shortcode, span.start, span.end),
        }
        self.offset = span.end;
    }

    /// Openers push a frame; any text seen since the last flush rides along
    /// as the frame's pending leading text.
    fn handle_opener(&mut self, name: TextRange<'a>, attrs: TextRange<'a>, span: TextRange<'a>) {
        let leading_text_start = if span.start > self.offset { Some(self.offset) } else { None };
        let shortcode = Shortcode::tag(name.as_str(), decode_attributes(attrs.as_str()), span.as_str());
        self.stack.push(Frame {
            shortcode,
            token_start: span.start,
            token_length: span.len(),
            prev_offset: span.end,
            leading_text_start,
        });
        self.offset = span.end;
    }

    /// Closers pop their matching frame; everything opened after the match
    /// is reflowed to self-closing first. A closer that matches nothing
    /// stays in the document as literal text.
    fn handle_closer(&mut self, name: TextRange<'a>, span: TextRange<'a>) {
        let position = match self.find_last_in_stack(name.as_str()) {
            Some(position) => position,
            None => {
                log::warn!("unmatched closing tag [/{}] at byte {}", name.as_str(), span.start);
                self.issues.push(ParseIssue::UnmatchedCloser {
                    name: name.as_str().to_string(),
                    range: IssueRange { start: span.start, end: span.end },
                });
                if self.stack.is_empty() {
                    // pending text plus the closer itself become one literal
                    self.flush_freeform(span.end);
                }
                // below the top level the enclosing frame's flush cursor is
                // left alone, so the closer's bytes surface as its content
                self.offset = span.end;
                return;
            }
        };
        self.reflow_to_self_closing(position, span.start);
        if let Some(mut top) = self.stack.pop() {
            top.finalize(self.document, span.start, span.end);
            match self.stack.last_mut() {
                Some(parent) => parent.attach(self.document, top.shortcode, top.token_start, span.end),
                None => {
                    if let Some(leading) = top.leading_text_start {
                        self.output.push(Shortcode::freeform(&self.document[leading..top.token_start]));
                    }
                    self.output.push(top.shortcode);
                }
            }
        }
        self.offset = span.end;
    }

    /// Force-close every frame above `position`, innermost first.
    ///
    /// Tags opened after the matched one never get their own closer; each
    /// keeps the literal text it accumulated up to the out-of-order closer
    /// and becomes a child of the frame directly below it.
    fn reflow_to_self_closing(&mut self, position: usize, closer_start: usize) {
        while self.stack.len() > position + 1 {
            if let Some(mut top) = self.stack.pop() {
                self.note_unclosed(&top, closer_start);
                top.finalize(self.document, closer_start, closer_start);
                if let Some(parent) = self.stack.last_mut() {
                    parent.attach(self.document, top.shortcode, top.token_start, closer_start);
                }
            }
        }
    }

    /// Find the innermost open frame with the given tag name.
    fn find_last_in_stack(&self, name: &str) -> Option<usize> {
        self.stack.iter().rposition(|frame| frame.shortcode.name == Some(name))
    }

    /// Emit document text between the scan cursor and `until` as a
    /// top-level freeform node.
    fn flush_freeform(&mut self, until: usize) {
        if until > self.offset {
            self.output.push(Shortcode::freeform(&self.document[self.offset..until]));
        }
    }

    fn note_unclosed(&mut self, frame: &Frame<'a>, end: usize) {
        let name = frame.shortcode.name.unwrap_or_default().to_string();
        log::warn!("unclosed tag [{}] at byte {}, force-closing", name, frame.token_start);
        self.issues.push(ParseIssue::UnclosedTag {
            name,
            range: IssueRange { start: frame.token_start, end },
        });
    }
}
