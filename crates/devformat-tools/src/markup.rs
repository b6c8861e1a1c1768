//! Minimal XML/HTML tokenizer, tree builder and pretty printer.
//!
//! XML is strict: any structural problem is a [`MarkupError`]. HTML is
//! lenient the way browsers are: void elements need no end tag, stray or
//! missing end tags are repaired and reported as [`Document::issues`].

use std::fmt;

/// Which rules the parser follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Xml,
    Html,
}

/// Fatal parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupError {
    pub message: String,
    pub line: usize,
}

impl MarkupError {
    fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.message, self.line)
    }
}

/// Elements that never have content in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is not markup in HTML.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

/// HTML elements whose end tag may be omitted.
const OPTIONAL_END_ELEMENTS: &[&str] = &[
    "p", "li", "dt", "dd", "option", "optgroup", "tr", "td", "th", "thead", "tbody", "tfoot",
    "colgroup", "caption", "html", "head", "body",
];

/// Phrasing elements rendered inline by the HTML printer.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em", "i", "kbd", "label",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Elements whose content must be printed verbatim.
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

const PRINT_WIDTH: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind<'a> {
    StartTag { name: &'a str, self_closing: bool },
    EndTag { name: &'a str },
    Text,
    RawText,
    Comment,
    Special,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token<'a> {
    kind: TokenKind<'a>,
    raw: &'a str,
    line: usize,
}

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    dialect: Dialect,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str, dialect: Dialect) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            dialect,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume `len` bytes and return them.
    fn take(&mut self, len: usize) -> &'a str {
        let raw = &self.src[self.pos..self.pos + len];
        self.pos += len;
        self.line += raw.matches('\n').count();
        raw
    }

    fn take_until(&mut self, terminator: &str, what: &str) -> Result<&'a str, MarkupError> {
        match self.rest().find(terminator) {
            Some(end) => Ok(self.take(end + terminator.len())),
            None => Err(MarkupError::new(format!("Unterminated {what}"), self.line)),
        }
    }

    /// Length of a tag starting at the current `<`, honoring quoted values.
    fn tag_len(&self) -> Option<usize> {
        let mut quote: Option<char> = None;
        for (i, c) in self.rest().char_indices().skip(1) {
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(c),
                (None, '>') => return Some(i + 1),
                (None, _) => {}
            }
        }
        None
    }

    fn tokenize(mut self) -> Result<Vec<Token<'a>>, MarkupError> {
        let mut tokens = Vec::new();
        while self.pos < self.src.len() {
            let line = self.line;
            let rest = self.rest();
            let token = if rest.starts_with("<!--") {
                Token {
                    kind: TokenKind::Comment,
                    raw: self.take_until("-->", "comment")?,
                    line,
                }
            } else if rest.starts_with("<![CDATA[") {
                Token {
                    kind: TokenKind::Special,
                    raw: self.take_until("]]>", "CDATA section")?,
                    line,
                }
            } else if rest.starts_with("<?") {
                Token {
                    kind: TokenKind::Special,
                    raw: self.take_until("?>", "processing instruction")?,
                    line,
                }
            } else if rest.starts_with("<!") {
                Token {
                    kind: TokenKind::Special,
                    raw: self.take_until(">", "declaration")?,
                    line,
                }
            } else if rest.starts_with("</") {
                let raw = self.take_until(">", "closing tag")?;
                let name = raw[2..raw.len() - 1].trim();
                if name.is_empty() || name.contains(char::is_whitespace) {
                    return Err(MarkupError::new(format!("Malformed closing tag {raw}"), line));
                }
                Token {
                    kind: TokenKind::EndTag { name },
                    raw,
                    line,
                }
            } else if rest.starts_with('<') && rest[1..].starts_with(is_name_start) {
                let len = self
                    .tag_len()
                    .ok_or_else(|| MarkupError::new("Unterminated tag", line))?;
                let raw = self.take(len);
                let inner = &raw[1..raw.len() - 1];
                let name_len = inner
                    .find(|c: char| c.is_whitespace() || c == '/')
                    .unwrap_or(inner.len());
                let name = &inner[..name_len];
                let self_closing = inner.trim_end().ends_with('/');
                if self.dialect == Dialect::Xml {
                    check_attributes(&inner[name_len..], line)?;
                }
                tokens.push(Token {
                    kind: TokenKind::StartTag { name, self_closing },
                    raw,
                    line,
                });
                if self.dialect == Dialect::Html
                    && !self_closing
                    && is_one_of(name, RAW_TEXT_ELEMENTS)
                {
                    let content_line = self.line;
                    let end = find_ci(self.rest(), &format!("</{name}")).unwrap_or(self.rest().len());
                    if end > 0 {
                        tokens.push(Token {
                            kind: TokenKind::RawText,
                            raw: self.take(end),
                            line: content_line,
                        });
                    }
                }
                continue;
            } else if rest.starts_with('<') {
                if self.dialect == Dialect::Xml {
                    return Err(MarkupError::new("Unescaped '<' in text", line));
                }
                let end = rest[1..].find('<').map_or(rest.len(), |i| i + 1);
                Token {
                    kind: TokenKind::Text,
                    raw: self.take(end),
                    line,
                }
            } else {
                let end = rest.find('<').unwrap_or(rest.len());
                Token {
                    kind: TokenKind::Text,
                    raw: self.take(end),
                    line,
                }
            };
            tokens.push(token);
        }
        Ok(tokens)
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_one_of(name: &str, set: &[&str]) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(name))
}

fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.to_ascii_lowercase();
    haystack.find(&needle.to_ascii_lowercase())
}

/// XML attributes must be `name="value"` or `name='value'`, each name once.
fn check_attributes(attrs: &str, line: usize) -> Result<(), MarkupError> {
    let mut seen: Vec<&str> = Vec::new();
    let mut rest = attrs.trim_start();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest == "/" {
            return Ok(());
        }
        let name_len = rest
            .find(|c: char| c == '=' || c.is_whitespace() || c == '/')
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        if name.is_empty() || !name.starts_with(is_name_start) {
            return Err(MarkupError::new(format!("Malformed attribute near '{rest}'"), line));
        }
        rest = rest[name_len..].trim_start();
        let Some(after_eq) = rest.strip_prefix('=') else {
            return Err(MarkupError::new(
                format!("Attribute '{name}' has no value"),
                line,
            ));
        };
        rest = after_eq.trim_start();
        let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            return Err(MarkupError::new(
                format!("Value of attribute '{name}' must be quoted"),
                line,
            ));
        };
        let Some(close) = rest[1..].find(quote) else {
            return Err(MarkupError::new(
                format!("Unterminated value for attribute '{name}'"),
                line,
            ));
        };
        if seen.contains(&name) {
            return Err(MarkupError::new(format!("Duplicate attribute '{name}'"), line));
        }
        seen.push(name);
        rest = &rest[close + 2..];
    }
}

/// Parsed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Verbatim content of script/style/textarea
    RawText(String),
    Comment(String),
    /// Doctype, processing instruction or CDATA
    Special(String),
}

/// Parsed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Name as written
    pub name: String,
    /// The full start tag as written
    pub open: String,
    pub children: Vec<Node>,
    /// Self-closing or void: no end tag is printed
    pub empty: bool,
    pub line: usize,
}

impl Element {
    fn close(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Value of attribute `name` (case-insensitive); empty for bare
    /// attributes. Unquoted values are accepted.
    pub fn attribute(&self, name: &str) -> Option<String> {
        let inner = self.open.trim_start_matches('<').trim_end_matches('>');
        let mut rest = inner.get(self.name.len()..).unwrap_or("");
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return None;
            }
            let key_len = rest
                .find(|c: char| c == '=' || c == '/' || c.is_whitespace())
                .unwrap_or(rest.len());
            if key_len == 0 {
                let skip = rest.chars().next().map_or(0, char::len_utf8);
                rest = &rest[skip..];
                continue;
            }
            let key = &rest[..key_len];
            rest = rest[key_len..].trim_start();
            let value = match rest.strip_prefix('=').map(str::trim_start) {
                Some(after) => match after.chars().next() {
                    Some(q @ ('"' | '\'')) => {
                        let end = after[1..].find(q).map_or(after.len(), |e| e + 1);
                        rest = after.get(end + 1..).unwrap_or("");
                        &after[1..end]
                    }
                    _ => {
                        let end = after.find(char::is_whitespace).unwrap_or(after.len());
                        rest = &after[end..];
                        &after[..end]
                    }
                },
                None => "",
            };
            if key.eq_ignore_ascii_case(name) {
                return Some(value.to_string());
            }
        }
    }
}

fn collect_elements<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            out.push(el);
            collect_elements(&el.children, out);
        }
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
    /// Repaired problems (HTML only)
    pub issues: Vec<String>,
}

impl Document {
    /// All elements, depth-first in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(&self.nodes, &mut out);
        out
    }

    pub fn find(&self, name: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|el| el.name.eq_ignore_ascii_case(name))
    }
}

fn names_match(dialect: Dialect, a: &str, b: &str) -> bool {
    match dialect {
        Dialect::Xml => a == b,
        Dialect::Html => a.eq_ignore_ascii_case(b),
    }
}

fn push_node(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Parse `src` into a tree.
pub fn parse(src: &str, dialect: Dialect) -> Result<Document, MarkupError> {
    let tokens = Tokenizer::new(src, dialect).tokenize()?;
    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut issues = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::StartTag { name, self_closing } => {
                let empty = self_closing
                    || (dialect == Dialect::Html && is_one_of(name, VOID_ELEMENTS));
                let element = Element {
                    name: name.to_string(),
                    open: token.raw.to_string(),
                    children: Vec::new(),
                    empty,
                    line: token.line,
                };
                if empty {
                    push_node(&mut stack, &mut roots, Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            TokenKind::EndTag { name } => {
                let position = stack
                    .iter()
                    .rposition(|open| names_match(dialect, &open.name, name));
                match (dialect, position) {
                    (Dialect::Xml, Some(pos)) if pos == stack.len() - 1 => {}
                    (Dialect::Xml, Some(_)) | (Dialect::Xml, None) => {
                        let message = match stack.last() {
                            Some(open) => format!(
                                "Mismatched closing tag </{name}>, expected </{}>",
                                open.name
                            ),
                            None => format!("Unexpected closing tag </{name}>"),
                        };
                        return Err(MarkupError::new(message, token.line));
                    }
                    (Dialect::Html, Some(_)) => {}
                    (Dialect::Html, None) => {
                        if !is_one_of(name, VOID_ELEMENTS) {
                            issues.push(format!(
                                "Unexpected closing tag </{name}> on line {}",
                                token.line
                            ));
                        }
                        continue;
                    }
                }
                let pos = position.unwrap_or_default();
                while stack.len() > pos + 1 {
                    if let Some(unclosed) = stack.pop() {
                        if !is_one_of(&unclosed.name, OPTIONAL_END_ELEMENTS) {
                            issues.push(format!(
                                "Unclosed <{}> opened on line {}",
                                unclosed.name, unclosed.line
                            ));
                        }
                        push_node(&mut stack, &mut roots, Node::Element(unclosed));
                    }
                }
                if let Some(closed) = stack.pop() {
                    push_node(&mut stack, &mut roots, Node::Element(closed));
                }
            }
            TokenKind::Text => {
                if dialect == Dialect::Xml && stack.is_empty() && !token.raw.trim().is_empty() {
                    return Err(MarkupError::new(
                        "Text outside the root element",
                        token.line,
                    ));
                }
                push_node(&mut stack, &mut roots, Node::Text(token.raw.to_string()));
            }
            TokenKind::RawText => {
                push_node(&mut stack, &mut roots, Node::RawText(token.raw.to_string()));
            }
            TokenKind::Comment => {
                push_node(&mut stack, &mut roots, Node::Comment(token.raw.to_string()));
            }
            TokenKind::Special => {
                push_node(&mut stack, &mut roots, Node::Special(token.raw.to_string()));
            }
        }
    }

    if dialect == Dialect::Xml {
        if let Some(open) = stack.first() {
            return Err(MarkupError::new(
                format!("Unclosed tag <{}>", open.name),
                open.line,
            ));
        }
        let root_count = roots
            .iter()
            .filter(|n| matches!(n, Node::Element(_)))
            .count();
        if root_count != 1 {
            let line = src.lines().count().max(1);
            let message = if root_count == 0 {
                "Document has no root element".to_string()
            } else {
                format!("Document has {root_count} root elements; expected exactly one")
            };
            return Err(MarkupError::new(message, line));
        }
    }

    while let Some(unclosed) = stack.pop() {
        if !is_one_of(&unclosed.name, OPTIONAL_END_ELEMENTS) {
            issues.push(format!(
                "Unclosed <{}> opened on line {}",
                unclosed.name, unclosed.line
            ));
        }
        push_node(&mut stack, &mut roots, Node::Element(unclosed));
    }

    Ok(Document {
        nodes: roots,
        issues,
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Printer state.
struct Printer {
    dialect: Dialect,
    indent: String,
    lines: Vec<String>,
}

impl Printer {
    fn push(&mut self, depth: usize, text: &str) {
        self.lines.push(format!("{}{}", self.indent.repeat(depth), text));
    }

    /// Inline rendering of an element, if its content allows it.
    fn inline(&self, el: &Element) -> Option<String> {
        if el.empty {
            return Some(el.open.clone());
        }
        let content = match self.dialect {
            Dialect::Xml => match el.children.as_slice() {
                [] => String::new(),
                [Node::Text(text)] => text.trim().to_string(),
                _ => return None,
            },
            Dialect::Html => {
                if is_one_of(&el.name, PREFORMATTED_ELEMENTS) {
                    return Some(self.verbatim(el));
                }
                self.inline_children(&el.children)?.trim().to_string()
            }
        };
        Some(format!("{}{}{}", el.open, content, el.close()))
    }

    /// Inline rendering of phrasing content, with boundary spaces kept.
    fn inline_children(&self, nodes: &[Node]) -> Option<String> {
        let mut out = String::new();
        for node in nodes {
            match node {
                Node::Text(text) => {
                    let collapsed = collapse_whitespace(text);
                    if text.starts_with(char::is_whitespace) && !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push_str(&collapsed);
                    if text.ends_with(char::is_whitespace) && !collapsed.is_empty() {
                        out.push(' ');
                    }
                }
                Node::Element(el) if is_one_of(&el.name, INLINE_ELEMENTS) => {
                    out.push_str(&self.inline(el)?);
                }
                _ => return None,
            }
        }
        Some(out)
    }

    fn verbatim(&self, el: &Element) -> String {
        let mut out = el.open.clone();
        for child in &el.children {
            match child {
                Node::Text(t) | Node::RawText(t) | Node::Comment(t) | Node::Special(t) => {
                    out.push_str(t)
                }
                Node::Element(inner) => out.push_str(&self.verbatim(inner)),
            }
        }
        if !el.empty {
            out.push_str(&el.close());
        }
        out
    }

    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Text(text) => {
                let collapsed = match self.dialect {
                    Dialect::Xml => text.trim().to_string(),
                    Dialect::Html => collapse_whitespace(text),
                };
                if !collapsed.is_empty() {
                    self.push(depth, &collapsed);
                }
            }
            Node::RawText(text) => {
                for line in dedent(text) {
                    if line.is_empty() {
                        self.lines.push(String::new());
                    } else {
                        self.push(depth, &line);
                    }
                }
            }
            Node::Comment(raw) | Node::Special(raw) => self.push(depth, raw.trim()),
            Node::Element(el) => self.element(el, depth),
        }
    }

    fn element(&mut self, el: &Element, depth: usize) {
        if let Some(line) = self.inline(el) {
            let width = self.indent.len() * depth + line.len();
            if width <= PRINT_WIDTH
                || self.dialect == Dialect::Xml
                || el.children.is_empty()
                || is_one_of(&el.name, PREFORMATTED_ELEMENTS)
            {
                self.push(depth, &line);
                return;
            }
        }
        self.push(depth, &el.open);
        for child in &el.children {
            self.node(child, depth + 1);
        }
        self.push(depth, &el.close());
    }
}

/// Strip blank leading/trailing lines and the common indentation.
fn dedent(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return Vec::new();
    };
    let body = &lines[first..=last];
    let common = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);
    body.iter()
        .map(|l| {
            if l.trim().is_empty() {
                String::new()
            } else {
                l[common..].trim_end().to_string()
            }
        })
        .collect()
}

/// Pretty-print a parsed document with `indent` per nesting level.
pub fn render(doc: &Document, dialect: Dialect, indent: &str) -> String {
    let mut printer = Printer {
        dialect,
        indent: indent.to_string(),
        lines: Vec::new(),
    };
    for node in &doc.nodes {
        printer.node(node, 0);
    }
    printer.lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_xml_round_trip_structure() {
        let doc = parse(r#"<a x="1"><b>text</b><c/></a>"#, Dialect::Xml).unwrap();
        assert_eq!(doc.elements().len(), 3);
        assert_eq!(
            render(&doc, Dialect::Xml, "  "),
            "<a x=\"1\">\n  <b>text</b>\n  <c/>\n</a>"
        );
    }

    #[test]
    fn test_xml_quoted_gt_in_attribute() {
        let doc = parse(r#"<a title="x > y"/>"#, Dialect::Xml).unwrap();
        assert_eq!(doc.elements()[0].open, r#"<a title="x > y"/>"#);
    }

    #[test]
    fn test_xml_mismatched_tag() {
        let err = parse("<a>\n<b></a>", Dialect::Xml).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("expected </b>"));
    }

    #[test]
    fn test_xml_unclosed_tag() {
        let err = parse("<a><b></b>", Dialect::Xml).unwrap_err();
        assert_eq!(err.message, "Unclosed tag <a>");
    }

    #[test]
    fn test_xml_two_roots() {
        let err = parse("<a/><b/>", Dialect::Xml).unwrap_err();
        assert!(err.message.contains("2 root elements"));
    }

    #[test]
    fn test_xml_unquoted_attribute() {
        let err = parse("<a x=1/>", Dialect::Xml).unwrap_err();
        assert!(err.message.contains("must be quoted"));
    }

    #[test]
    fn test_xml_duplicate_attribute() {
        let err = parse(r#"<a x="1" x="2"/>"#, Dialect::Xml).unwrap_err();
        assert!(err.message.contains("Duplicate attribute 'x'"));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = parse("<a><!-- oops</a>", Dialect::Xml).unwrap_err();
        assert_eq!(err.message, "Unterminated comment");
    }

    #[test]
    fn test_html_void_and_inline() {
        let doc = parse("<div><p>Hi <strong>there</strong> you</p><br><img src=x></div>", Dialect::Html)
            .unwrap();
        assert!(doc.issues.is_empty());
        assert_eq!(
            render(&doc, Dialect::Html, "  "),
            "<div>\n  <p>Hi <strong>there</strong> you</p>\n  <br>\n  <img src=x>\n</div>"
        );
    }

    #[test]
    fn test_html_script_kept_raw() {
        let doc = parse("<script>if (a < b) { go(); }</script>", Dialect::Html).unwrap();
        assert_eq!(
            render(&doc, Dialect::Html, "  "),
            "<script>\n  if (a < b) { go(); }\n</script>"
        );
    }

    #[test]
    fn test_html_repairs_unclosed() {
        let doc = parse("<div><span>text</div>", Dialect::Html).unwrap();
        assert_eq!(doc.issues, vec!["Unclosed <span> opened on line 1"]);
        assert!(doc.find("span").is_some());
    }

    #[test]
    fn test_html_stray_end_tag() {
        let doc = parse("<div></section></div>", Dialect::Html).unwrap();
        assert_eq!(doc.issues, vec!["Unexpected closing tag </section> on line 1"]);
    }

    #[test]
    fn test_html_optional_end_tags_not_reported() {
        let doc = parse("<ul><li>one<li>two</ul>", Dialect::Html).unwrap();
        assert!(doc.issues.is_empty());
    }

    #[test]
    fn test_attribute_lookup() {
        let doc = parse(r#"<img SRC=a.png alt="A cat" hidden data-x='1'>"#, Dialect::Html).unwrap();
        let img = doc.find("img").unwrap();
        assert_eq!(img.attribute("src").as_deref(), Some("a.png"));
        assert_eq!(img.attribute("alt").as_deref(), Some("A cat"));
        assert_eq!(img.attribute("hidden").as_deref(), Some(""));
        assert_eq!(img.attribute("data-x").as_deref(), Some("1"));
        assert_eq!(img.attribute("title"), None);
    }

    #[test]
    fn test_dedent() {
        assert_eq!(dedent("\n    a\n      b\n\n    c\n  "), vec!["a", "  b", "", "c"]);
    }
}
