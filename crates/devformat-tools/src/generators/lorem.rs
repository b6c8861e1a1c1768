//! Lorem ipsum generator

use crate::util::parse_count;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolMode, ToolOptions, ToolResult};
use rand::Rng;

const OPENING: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "cras", "justo",
    "pellentesque", "facilisis", "volutpat", "blandit", "cursus", "risus", "ultrices", "posuere",
    "cubilia", "curae", "donec", "neque", "auctor", "tempus", "quam", "felis", "leo", "porta",
    "diam", "sapien",
];

pub fn lorem_ipsum_generator() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "lorem-ipsum-generator",
            "Lorem Ipsum Generator",
            ToolCategory::Generators,
            "lorem-ipsum",
        )
        .with_description(
            "Generate placeholder Lorem Ipsum text. Enter a number for paragraph count (default: 3).",
        )
        .with_keywords([
            "lorem",
            "ipsum",
            "placeholder",
            "dummy text",
            "filler",
            "paragraph",
            "generate",
        ])
        .with_sample("3")
        .with_mode(ToolMode::Generate),
        run,
    )
}

/// 8 to 19 random words, capitalized, ending with a period.
fn sentence(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(8..20);
    let words: Vec<&str> = (0..len)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get(..1) {
        let upper = first.to_uppercase();
        text.replace_range(..1, &upper);
    }
    text.push('.');
    text
}

/// 4 to 7 sentences.
fn sentences(rng: &mut impl Rng) -> Vec<String> {
    let count = rng.gen_range(4..8);
    (0..count).map(|_| sentence(rng)).collect()
}

pub(crate) fn paragraphs(count: usize, rng: &mut impl Rng) -> Vec<String> {
    let mut out = Vec::with_capacity(count);
    let first = sentences(rng);
    let mut opening = vec![OPENING.to_string()];
    opening.extend(first.into_iter().skip(1));
    out.push(opening.join(" "));
    for _ in 1..count {
        out.push(sentences(rng).join(" "));
    }
    out
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let count = parse_count(input, 3, 1, 20) as usize;
    ToolResult::success(paragraphs(count, &mut rand::thread_rng()).join("\n\n"))
}
