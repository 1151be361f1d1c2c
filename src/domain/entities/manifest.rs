//! Manifest document - the zone source consumed by ZoneBuilder
//!
//! One directive per line, `name,value`, no quoting or escaping. Lines
//! starting with `#` are comments and blank lines are allowed anywhere.

use std::fmt;

/// A single `name,value` build directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    name: String,
    value: String,
}

impl Directive {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.value)
    }
}

/// One line of a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLine {
    Directive(Directive),
    Comment(String),
    /// Banner line of `#` characters
    Rule,
    Blank,
}

/// Banner rendered for [`ManifestLine::Rule`]
pub const RULE: &str = "########################";

/// Ordered manifest lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDocument {
    lines: Vec<ManifestLine>,
}

impl ManifestDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directive(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.lines
            .push(ManifestLine::Directive(Directive::new(name, value)));
        self
    }

    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(ManifestLine::Comment(text.into()));
        self
    }

    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(ManifestLine::Rule);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(ManifestLine::Blank);
        self
    }

    /// Append a titled block; nothing at all is emitted when `directives` is empty
    pub fn section(&mut self, title: &str, directives: Vec<Directive>) -> &mut Self {
        if directives.is_empty() {
            return self;
        }
        self.blank().comment(title);
        self.lines
            .extend(directives.into_iter().map(ManifestLine::Directive));
        self
    }

    pub fn lines(&self) -> &[ManifestLine] {
        &self.lines
    }

    /// Directives only, in document order
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.lines.iter().filter_map(|line| match line {
            ManifestLine::Directive(d) => Some(d),
            _ => None,
        })
    }

    /// Render to text, every line newline-terminated
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                ManifestLine::Directive(d) => {
                    out.push_str(d.name());
                    out.push(',');
                    out.push_str(d.value());
                }
                ManifestLine::Comment(text) => {
                    out.push('#');
                    if !text.is_empty() {
                        out.push(' ');
                        out.push_str(text);
                    }
                }
                ManifestLine::Rule => out.push_str(RULE),
                ManifestLine::Blank => {}
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_display() {
        insta::assert_snapshot!(Directive::new("sound", "explosion").to_string(), @"sound,explosion");
    }

    #[test]
    fn render_terminates_every_line() {
        let mut doc = ManifestDocument::new();
        doc.directive("require", "minigun").blank().comment("GSC");

        assert_eq!(doc.render(), "require,minigun\n\n# GSC\n");
    }

    #[test]
    fn rule_renders_banner() {
        let mut doc = ManifestDocument::new();
        doc.rule().comment("header").rule();

        assert_eq!(doc.render(), format!("{RULE}\n# header\n{RULE}\n"));
    }

    #[test]
    fn empty_section_emits_nothing() {
        let mut doc = ManifestDocument::new();
        doc.section("FX", Vec::new());

        assert!(doc.lines().is_empty());
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn section_has_blank_and_title() {
        let mut doc = ManifestDocument::new();
        doc.section("Sounds", vec![Directive::new("sound", "wind")]);

        assert_eq!(doc.render(), "\n# Sounds\nsound,wind\n");
    }

    #[test]
    fn directives_skips_comments() {
        let mut doc = ManifestDocument::new();
        doc.comment("header").directive("fx", "a").blank().directive("fx", "b");

        let values: Vec<&str> = doc.directives().map(|d| d.value()).collect();
        assert_eq!(values, vec!["a", "b"]);
    }
}
