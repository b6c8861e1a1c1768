//! SQL formatter
//!
//! Lexes with the `sqlparser` tokenizer, then lays the token stream out
//! clause by clause: clause keywords at the statement margin, their bodies
//! one indent in, one select item / condition per line. Anything inside
//! parentheses stays on one line.

use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use sqlparser::dialect::GenericDialect;
use sqlparser::tokenizer::{Token, Tokenizer, Whitespace};

pub fn sql_formatter() -> FnTool {
    FnTool::new(
        ToolDefinition::new("sql-formatter", "SQL Formatter", ToolCategory::Formatters, "sql")
            .with_description(
                "Format and beautify SQL queries with proper indentation and keyword casing.",
            )
            .with_language("sql")
            .with_keywords(["sql", "format", "beautify", "query", "database", "indent"])
            .with_sample(
                "SELECT u.id, u.name, u.email, o.order_id, o.total FROM users u INNER JOIN orders o ON u.id = o.user_id WHERE u.active = 1 AND o.total > 100 ORDER BY o.total DESC LIMIT 10;",
            ),
        run,
    )
}

/// Keywords printed upper-case.
const KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CREATE",
    "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXCEPT", "EXISTS",
    "FALSE", "FETCH", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IF", "IN", "INDEX", "INNER",
    "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "ILIKE", "LIMIT", "NATURAL",
    "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "OVER", "PARTITION", "PRIMARY",
    "REFERENCES", "RETURNING", "RIGHT", "SELECT", "SET", "TABLE", "THEN", "TRUE", "UNION",
    "UNIQUE", "UPDATE", "USING", "VALUES", "VIEW", "WHEN", "WHERE", "WITH",
];

/// Keywords that keep a space before a following `(`.
const SPACED_BEFORE_PAREN: &[&str] = &[
    "AND", "AS", "EXISTS", "FROM", "IN", "INTO", "JOIN", "NOT", "ON", "OR", "SELECT", "THEN",
    "USING", "VALUES", "WHERE", "ELSE", "WHEN", "OVER",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Break {
    /// Statement-margin keyword with an indented body
    Clause,
    /// Body-level line start
    Join,
    /// Body-level line start, unless it belongs to BETWEEN
    Logical,
    /// Margin keyword standing on its own line
    SetOperation,
}

/// Longest phrases first.
const PHRASES: &[(&str, Break)] = &[
    ("LEFT OUTER JOIN", Break::Join),
    ("RIGHT OUTER JOIN", Break::Join),
    ("FULL OUTER JOIN", Break::Join),
    ("SELECT DISTINCT", Break::Clause),
    ("INSERT INTO", Break::Clause),
    ("DELETE FROM", Break::Clause),
    ("GROUP BY", Break::Clause),
    ("ORDER BY", Break::Clause),
    ("INNER JOIN", Break::Join),
    ("LEFT JOIN", Break::Join),
    ("RIGHT JOIN", Break::Join),
    ("FULL JOIN", Break::Join),
    ("CROSS JOIN", Break::Join),
    ("NATURAL JOIN", Break::Join),
    ("UNION ALL", Break::SetOperation),
    ("SELECT", Break::Clause),
    ("FROM", Break::Clause),
    ("WHERE", Break::Clause),
    ("HAVING", Break::Clause),
    ("LIMIT", Break::Clause),
    ("OFFSET", Break::Clause),
    ("VALUES", Break::Clause),
    ("SET", Break::Clause),
    ("UPDATE", Break::Clause),
    ("RETURNING", Break::Clause),
    ("JOIN", Break::Join),
    ("AND", Break::Logical),
    ("OR", Break::Logical),
    ("UNION", Break::SetOperation),
    ("INTERSECT", Break::SetOperation),
    ("EXCEPT", Break::SetOperation),
];

/// Line-oriented output buffer.
struct Layout {
    indent: String,
    lines: Vec<String>,
    line: String,
    /// Nothing but indentation on the current line
    fresh: bool,
    /// Next token attaches without a space
    glue: bool,
}

impl Layout {
    fn new(indent: String) -> Self {
        Self {
            indent,
            lines: Vec::new(),
            line: String::new(),
            fresh: true,
            glue: false,
        }
    }

    fn newline(&mut self, level: usize) {
        if !self.fresh {
            self.lines.push(std::mem::take(&mut self.line));
        }
        self.line = self.indent.repeat(level);
        self.fresh = true;
        self.glue = false;
    }

    fn word(&mut self, text: &str) {
        if !self.fresh && !self.glue {
            self.line.push(' ');
        }
        self.line.push_str(text);
        self.fresh = false;
        self.glue = false;
    }

    fn attach(&mut self, text: &str) {
        self.line.push_str(text);
        self.fresh = false;
        self.glue = false;
    }

    fn blank_line(&mut self) {
        if !self.fresh {
            self.lines.push(std::mem::take(&mut self.line));
        }
        self.lines.push(String::new());
        self.line.clear();
        self.fresh = true;
        self.glue = false;
    }

    fn finish(mut self) -> String {
        if !self.fresh {
            self.lines.push(self.line);
        }
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }
        self.lines.join("\n")
    }
}

/// Upper-case text of an unquoted word token.
fn bare_word(token: &Token) -> Option<String> {
    match token {
        Token::Word(w) if w.quote_style.is_none() => Some(w.value.to_uppercase()),
        _ => None,
    }
}

/// Match a multi-word phrase at the start of `tokens`.
fn match_phrase(tokens: &[Token]) -> Option<(&'static str, Break, usize)> {
    PHRASES.iter().find_map(|&(phrase, kind)| {
        let words: Vec<&str> = phrase.split(' ').collect();
        let matched = words.len() <= tokens.len()
            && words
                .iter()
                .zip(tokens)
                .all(|(w, t)| bare_word(t).as_deref() == Some(*w));
        matched.then_some((phrase, kind, words.len()))
    })
}

/// Format `sql` with `indent` per level.
pub(crate) fn format_sql(sql: &str, indent: &str) -> Result<String, String> {
    let dialect = GenericDialect {};
    let tokens: Vec<Token> = Tokenizer::new(&dialect, sql)
        .tokenize()
        .map_err(|e| e.to_string())?
        .into_iter()
        .filter(|t| {
            !matches!(
                t,
                Token::Whitespace(Whitespace::Space | Whitespace::Newline | Whitespace::Tab)
            )
        })
        .collect();

    let mut out = Layout::new(indent.to_string());
    let mut depth = 0usize;
    let mut in_between = false;
    let mut previous: Option<&Token> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let after_period = matches!(previous, Some(Token::Period));

        if !after_period && let Some((phrase, kind, len)) = match_phrase(&tokens[i..]) {
            let is_between_and = kind == Break::Logical && phrase == "AND" && in_between;
            if phrase == "AND" {
                in_between = false;
            }
            if depth == 0 && !is_between_and {
                match kind {
                    Break::Clause => {
                        out.newline(0);
                        out.word(phrase);
                        out.newline(1);
                    }
                    Break::Join | Break::Logical => {
                        out.newline(1);
                        out.word(phrase);
                    }
                    Break::SetOperation => {
                        out.newline(0);
                        out.word(phrase);
                        out.newline(0);
                    }
                }
            } else {
                out.word(phrase);
            }
            previous = tokens.get(i + len - 1);
            i += len;
            continue;
        }

        match token {
            Token::Word(w) => {
                let upper = w.value.to_uppercase();
                if upper == "BETWEEN" {
                    in_between = true;
                }
                let next_is_period = matches!(tokens.get(i + 1), Some(Token::Period));
                if w.quote_style.is_none()
                    && !after_period
                    && !next_is_period
                    && KEYWORDS.contains(&upper.as_str())
                {
                    out.word(&upper);
                } else {
                    out.word(&token.to_string());
                }
            }
            Token::Comma => {
                out.attach(",");
                if depth == 0 {
                    out.newline(1);
                }
            }
            Token::Period => {
                out.attach(".");
                out.glue = true;
            }
            Token::LParen => {
                let spaced = match previous {
                    Some(prev @ Token::Word(_)) => bare_word(prev)
                        .is_some_and(|w| SPACED_BEFORE_PAREN.contains(&w.as_str())),
                    Some(Token::LParen) | None => false,
                    Some(_) => true,
                };
                if spaced {
                    out.word("(");
                } else {
                    out.attach("(");
                }
                out.glue = true;
                depth += 1;
            }
            Token::RParen => {
                depth = depth.saturating_sub(1);
                out.attach(")");
            }
            Token::SemiColon => {
                out.attach(";");
                depth = 0;
                in_between = false;
                if i + 1 < tokens.len() {
                    out.blank_line();
                }
            }
            Token::Whitespace(Whitespace::SingleLineComment { comment, prefix }) => {
                out.word(&format!("{prefix}{}", comment.trim_end()));
                out.newline(if depth == 0 { 1 } else { 0 });
            }
            other => out.word(&other.to_string()),
        }
        previous = Some(token);
        i += 1;
    }

    Ok(out.finish())
}

fn run(input: &str, options: &ToolOptions) -> ToolResult {
    match format_sql(input, &options.indent()) {
        Ok(output) => ToolResult::success(output),
        Err(e) => ToolResult::failure(e),
    }
}
