//! Text extraction from supported file formats

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten markdown to plain text: keep text and code content, turn breaks
/// and block ends into whitespace, drop everything else.
fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            // only block-level ends break the line; inline markup like
            // emphasis must not split a phrase in half
            Event::End(
                Tag::Paragraph
                | Tag::Heading(..)
                | Tag::Item
                | Tag::BlockQuote
                | Tag::CodeBlock(_)
                | Tag::List(_)
                | Tag::TableRow,
            ) => text.push('\n'),
            _ => {}
        }
    }

    normalize_whitespace(&text)
}

fn normalize_whitespace(text: &str) -> String {
    let horizontal = Regex::new(r"[ \t]+").unwrap();
    let lines: Vec<String> = text
        .lines()
        .map(|line| horizontal.replace_all(line.trim(), " ").to_string())
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}
