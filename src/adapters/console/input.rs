//! Parsing of console input lines into session actions.
//!
//! | input                 | action                                  |
//! |-----------------------|-----------------------------------------|
//! | empty, `n`, `next`    | advance                                 |
//! | `add <text> [#cat]`   | add entry, optionally in a category     |
//! | `a <n> [note]`        | mark the n-th displayed entry answered  |
//! | `answered <n> [note]` | same as `a`                             |
//! | `d`, `done`           | end the loop                            |
//! | `q`, `quit`           | leave without finishing                 |
//! | `h`, `help`, `?`      | list commands                           |

use thiserror::Error;

use crate::domain::journal::Category;
use crate::domain::session::{PanelDescriptor, SessionAction};

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Action(SessionAction),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("'add' needs some text")]
    MissingText,

    #[error("'{0}' is not an entry number")]
    NotANumber(String),

    #[error("entry {index} is not shown (showing {shown})")]
    IndexOutOfRange { index: usize, shown: usize },

    #[error("no category named '{0}'")]
    UnknownCategory(String),
}

pub const HELP: &str = "\
  [enter] / next        go to the next panel or batch
  add <text> [#cat]     add a prayer request
  a <n> [note]          mark request n as answered
  d / done              finish praying through requests
  q / quit              leave the session
";

/// Parse one line against the panel currently on screen.
///
/// Entry numbers are 1-based positions in `panel.entries`. Category names
/// match case-insensitively.
pub fn parse_line(
    line: &str,
    panel: &PanelDescriptor,
    categories: &[Category],
) -> Result<ConsoleCommand, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb.to_lowercase().as_str() {
        "" | "n" | "next" => SessionAction::Advance,
        "d" | "done" => SessionAction::EndLoop,
        "q" | "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        "h" | "help" | "?" => return Ok(ConsoleCommand::Help),
        "add" => parse_add(rest, categories)?,
        "a" | "answered" => parse_answered(rest, panel)?,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(ConsoleCommand::Action(action))
}

fn parse_add(rest: &str, categories: &[Category]) -> Result<SessionAction, InputError> {
    let (content, tag) = match rest.rsplit_once('#') {
        Some((content, tag)) if !tag.trim().is_empty() => (content.trim(), Some(tag.trim())),
        _ => (rest, None),
    };
    if content.is_empty() {
        return Err(InputError::MissingText);
    }

    let category_id = match tag {
        Some(name) => Some(
            *categories
                .iter()
                .find(|c| c.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| InputError::UnknownCategory(name.to_string()))?
                .id(),
        ),
        None => None,
    };

    Ok(SessionAction::AddEntry {
        content: content.to_string(),
        category_id,
    })
}

fn parse_answered(rest: &str, panel: &PanelDescriptor) -> Result<SessionAction, InputError> {
    let (number, note) = match rest.split_once(char::is_whitespace) {
        Some((number, note)) => (number, Some(note.trim().to_string())),
        None => (rest, None),
    };
    let index: usize = number
        .parse()
        .map_err(|_| InputError::NotANumber(number.to_string()))?;

    let shown = panel.entries.len();
    let entry = index
        .checked_sub(1)
        .and_then(|i| panel.entries.get(i))
        .ok_or(InputError::IndexOutOfRange { index, shown })?;

    Ok(SessionAction::MarkAnswered {
        entry_id: entry.id,
        note: note.filter(|n| !n.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PanelSetId, SessionId};
    use crate::domain::journal::Entry;
    use crate::domain::session::{PresentedEntry, SessionState};

    fn panel_with(entries: &[Entry]) -> PanelDescriptor {
        PanelDescriptor {
            session_id: SessionId::new(),
            panel_set_id: PanelSetId::new("classic").unwrap(),
            state: SessionState::PresentLoop,
            panel: None,
            entries: entries
                .iter()
                .map(|e| PresentedEntry::from_entry(e, None))
                .collect(),
            legal_actions: vec![],
            stats: None,
            streak: None,
        }
    }

    fn action(line: &str, panel: &PanelDescriptor, cats: &[Category]) -> SessionAction {
        match parse_line(line, panel, cats).unwrap() {
            ConsoleCommand::Action(a) => a,
            other => panic!("expected action, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_advances() {
        let panel = panel_with(&[]);
        assert_eq!(action("", &panel, &[]), SessionAction::Advance);
        assert_eq!(action("  next ", &panel, &[]), SessionAction::Advance);
    }

    #[test]
    fn done_ends_loop_and_quit_quits() {
        let panel = panel_with(&[]);
        assert_eq!(action("done", &panel, &[]), SessionAction::EndLoop);
        assert_eq!(parse_line("q", &panel, &[]).unwrap(), ConsoleCommand::Quit);
        assert_eq!(parse_line("?", &panel, &[]).unwrap(), ConsoleCommand::Help);
    }

    #[test]
    fn add_with_category_tag() {
        let cats = vec![Category::new("Family").unwrap()];
        let panel = panel_with(&[]);
        assert_eq!(
            action("add Grandma's hip #family", &panel, &cats),
            SessionAction::AddEntry {
                content: "Grandma's hip".into(),
                category_id: Some(*cats[0].id()),
            }
        );
    }

    #[test]
    fn add_without_text_is_rejected() {
        let panel = panel_with(&[]);
        assert_eq!(
            parse_line("add", &panel, &[]),
            Err(InputError::MissingText)
        );
    }

    #[test]
    fn add_with_unknown_category_is_rejected() {
        let panel = panel_with(&[]);
        assert_eq!(
            parse_line("add Exams #school", &panel, &[]),
            Err(InputError::UnknownCategory("school".into()))
        );
    }

    #[test]
    fn answered_refers_to_displayed_position() {
        let entries = vec![
            Entry::new("first", None).unwrap(),
            Entry::new("second", None).unwrap(),
        ];
        let panel = panel_with(&entries);
        assert_eq!(
            action("a 2 got the job", &panel, &[]),
            SessionAction::MarkAnswered {
                entry_id: *entries[1].id(),
                note: Some("got the job".into()),
            }
        );
    }

    #[test]
    fn answered_index_out_of_range() {
        let entries = vec![Entry::new("only", None).unwrap()];
        let panel = panel_with(&entries);
        assert_eq!(
            parse_line("a 0", &panel, &[]),
            Err(InputError::IndexOutOfRange { index: 0, shown: 1 })
        );
        assert_eq!(
            parse_line("answered 3", &panel, &[]),
            Err(InputError::IndexOutOfRange { index: 3, shown: 1 })
        );
        assert!(matches!(
            parse_line("a x", &panel, &[]),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn unknown_verb_is_reported() {
        let panel = panel_with(&[]);
        assert_eq!(
            parse_line("dance", &panel, &[]),
            Err(InputError::UnknownCommand("dance".into()))
        );
    }
}
