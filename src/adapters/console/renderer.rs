//! Plain-text rendering of panel descriptors.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::session::{ActionKind, PanelDescriptor, SessionState};
use crate::ports::PresentationAdapter;

const WIDTH: usize = 80;

/// Writes panels to any [`Write`] sink, stdout by default.
pub struct ConsoleRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consume the renderer and return its sink.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::error!(error = %e, "failed to write to console");
        }
    }
}

impl<W: Write + Send> PresentationAdapter for ConsoleRenderer<W> {
    fn render(&self, panel: &PanelDescriptor) {
        self.write(&format_panel(panel));
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(message, "action rejected");
        self.write(&format!("! {}\n", message));
    }
}

/// Format a descriptor as the text block shown for it.
pub fn format_panel(panel: &PanelDescriptor) -> String {
    let mut text = String::new();

    if panel.state == SessionState::Ended {
        text.push_str(&rule());
        text.push_str("Session ended.\n");
        if let Some(stats) = panel.stats {
            text.push_str(&format!(
                "Prayed for {} request(s), {} added, {} answered.\n",
                stats.entries_presented, stats.entries_added, stats.entries_answered
            ));
        }
        if let Some(days) = panel.streak {
            text.push_str(&format!("Streak: {} day(s)\n", days));
        }
        return text;
    }

    text.push_str(&rule());
    if let Some(p) = &panel.panel {
        text.push_str(&p.header);
        text.push('\n');
        text.push('\n');
        for paragraph in &p.paragraphs {
            text.push_str(&wrap(&paragraph.text, WIDTH));
            if let Some(verse) = &paragraph.verse {
                text.push_str(&format!("    ({})\n", verse));
            }
            text.push('\n');
        }
    }

    if panel.state == SessionState::PresentLoop {
        if panel.entries.is_empty() {
            text.push_str("No more requests to show.\n\n");
        }
        for (i, entry) in panel.entries.iter().enumerate() {
            let mut label = match &entry.category {
                Some(category) => format!("{}. [{}] {}", i + 1, category, entry.content),
                None => format!("{}. {}", i + 1, entry.content),
            };
            if entry.display_count > 1 {
                label.push_str(&format!(" (prayed {} times)", entry.display_count));
            }
            text.push_str(&wrap(&label, WIDTH));
        }
        if !panel.entries.is_empty() {
            text.push('\n');
        }
    }

    text.push_str(&prompt_line(&panel.legal_actions));
    text
}

fn rule() -> String {
    format!("{}\n", "-".repeat(WIDTH))
}

fn prompt_line(actions: &[ActionKind]) -> String {
    let hints: Vec<&str> = actions
        .iter()
        .map(|a| match a {
            ActionKind::Advance => "[enter] next",
            ActionKind::AddEntry => "add <text> [#category]",
            ActionKind::MarkAnswered => "a <n> [note]",
            ActionKind::EndLoop => "d done",
        })
        .collect();
    format!("{}  |  q quit\n> ", hints.join("  |  "))
}

/// Greedy word wrap. Words longer than `width` sit on their own line.
fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }
    out.push('\n');
    out
}
