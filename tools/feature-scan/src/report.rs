use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::fmt;

pub const OK: &str = "OK";

/// Structured log the engine writes to. Implementations never hand data back
/// to the checks.
pub trait RuleReport {
    fn section(&mut self, title: &str);
    fn check(&mut self, title: &str);
    fn message(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Section(String),
    Check(String),
    Message(String),
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Section(title) => write!(f, "{} [SECTION]", title),
            ReportLine::Check(title) => write!(f, "{} [CHECK]", title),
            ReportLine::Message(text) => f.write_str(text),
        }
    }
}

/// A `[CHECK]` header together with the messages written under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckBlock<'a> {
    pub section: &'a str,
    pub title: &'a str,
    pub messages: Vec<&'a str>,
}

impl CheckBlock<'_> {
    pub fn is_ok(&self) -> bool {
        self.messages.iter().all(|m| *m == OK)
    }
}

/// In-memory [`RuleReport`] that keeps every line in order.
#[derive(Debug, Default, Clone)]
pub struct TextReport {
    lines: Vec<ReportLine>,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }

    pub fn check_blocks(&self) -> Vec<CheckBlock<'_>> {
        let mut blocks: Vec<CheckBlock<'_>> = Vec::new();
        let mut section: &str = "";
        let mut open: Option<usize> = None;
        for line in &self.lines {
            match line {
                ReportLine::Section(title) => {
                    section = title.as_str();
                    open = None;
                }
                ReportLine::Check(title) => {
                    blocks.push(CheckBlock {
                        section,
                        title,
                        messages: Vec::new(),
                    });
                    open = Some(blocks.len() - 1);
                }
                ReportLine::Message(text) => {
                    if let Some(i) = open {
                        blocks[i].messages.push(text);
                    }
                }
            }
        }
        blocks
    }

    pub fn failed_checks_in(&self, section: &str) -> Vec<CheckBlock<'_>> {
        self.check_blocks()
            .into_iter()
            .filter(|b| b.section == section && !b.is_ok())
            .collect()
    }

    /// Messages written directly under `section` (no check header), e.g. the summary.
    pub fn section_messages(&self, section: &str) -> Vec<&str> {
        let mut current: &str = "";
        let mut in_check = false;
        let mut out = Vec::new();
        for line in &self.lines {
            match line {
                ReportLine::Section(title) => {
                    current = title.as_str();
                    in_check = false;
                }
                ReportLine::Check(_) => in_check = true,
                ReportLine::Message(text) => {
                    if current == section && !in_check {
                        out.push(text.as_str());
                    }
                }
            }
        }
        out
    }

    /// Terminal view: bold section headers, marks in front of check results.
    pub fn render_colored(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let rendered = match line {
                ReportLine::Section(title) => format!(
                    "\n{}",
                    format!("=== {} ===", title).if_supports_color(Stdout, |s| s.bold())
                ),
                ReportLine::Check(title) => format!("  {}", title),
                ReportLine::Message(text) if text == OK => format!(
                    "    {} {}",
                    "\u{2713}".if_supports_color(Stdout, |s| s.green()),
                    OK.if_supports_color(Stdout, |s| s.green()),
                ),
                ReportLine::Message(text) if text.starts_with("Warning") => format!(
                    "    {} {}",
                    "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
                    text.if_supports_color(Stdout, |s| s.yellow()),
                ),
                ReportLine::Message(text) if text.starts_with("Found") => format!(
                    "    {} {}",
                    "\u{2717}".if_supports_color(Stdout, |s| s.red()),
                    text.if_supports_color(Stdout, |s| s.dimmed()),
                ),
                ReportLine::Message(text) => format!("  {}", text),
            };
            out.push_str(&rendered);
            out.push('\n');
        }
        out
    }

    pub fn print(&self) {
        println!("{}", self.render_colored());
    }
}

impl RuleReport for TextReport {
    fn section(&mut self, title: &str) {
        self.lines.push(ReportLine::Section(title.to_string()));
    }

    fn check(&mut self, title: &str) {
        self.lines.push(ReportLine::Check(title.to_string()));
    }

    fn message(&mut self, text: &str) {
        self.lines.push(ReportLine::Message(text.to_string()));
    }
}
