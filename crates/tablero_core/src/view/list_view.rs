//! View model for list panels and its HTML form.

use super::date::DateDisplay;
use crate::model::entry::Entry;
use crate::model::message::Message;

/// Placeholder shown when a panel has nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: &'static str,
}

pub const EMPTY_REPERTOIRE: EmptyState = EmptyState {
    icon: "fas fa-pencil-alt",
    message: "No hay mensajes en tu repertorio",
};

pub const EMPTY_MESSAGES: EmptyState = EmptyState {
    icon: "fas fa-comments",
    message: "No hay mensajes aún",
};

/// One rendered row, with dates already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemCard {
    Repertoire {
        title: String,
        description: String,
        date: String,
    },
    Message {
        sender: String,
        recipient: String,
        text: String,
        sent_at: String,
    },
}

/// Rendered state of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty(EmptyState),
    Items(Vec<ItemCard>),
}

impl ListView {
    pub fn of_entries(entries: &[Entry], dates: &DateDisplay) -> Self {
        if entries.is_empty() {
            return Self::Empty(EMPTY_REPERTOIRE);
        }
        Self::Items(
            entries
                .iter()
                .map(|entry| ItemCard::Repertoire {
                    title: entry.title.clone(),
                    description: entry.description.clone(),
                    date: dates.date(&entry.created_at),
                })
                .collect(),
        )
    }

    pub fn of_messages(messages: &[Message], dates: &DateDisplay) -> Self {
        if messages.is_empty() {
            return Self::Empty(EMPTY_MESSAGES);
        }
        Self::Items(
            messages
                .iter()
                .map(|message| ItemCard::Message {
                    sender: message.sender.clone(),
                    recipient: message.recipient.clone(),
                    text: message.text.clone(),
                    sent_at: dates.date_time(&message.created_at),
                })
                .collect(),
        )
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Number of item cards; zero for the empty state.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty(_) => 0,
            Self::Items(cards) => cards.len(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Empty(state) => format!(
                "<div class=\"empty-state\">\n    <i class=\"{} empty-icon\"></i>\n    <p class=\"empty-message\">{}</p>\n</div>\n",
                state.icon,
                html_escape(state.message)
            ),
            Self::Items(cards) => cards.iter().map(card_html).collect(),
        }
    }
}

fn card_html(card: &ItemCard) -> String {
    match card {
        ItemCard::Repertoire {
            title,
            description,
            date,
        } => format!(
            "<div class=\"content-item\">\n    <h4>{}</h4>\n    <p>{}</p>\n    <small>{}</small>\n</div>\n",
            html_escape(title),
            html_escape(description),
            html_escape(date)
        ),
        ItemCard::Message {
            sender,
            recipient,
            text,
            sent_at,
        } => format!(
            "<div class=\"content-item\">\n    <strong>De:</strong> {} <strong>Para:</strong> {}<br>\n    <p>{}</p>\n    <small>{}</small>\n</div>\n",
            html_escape(sender),
            html_escape(recipient),
            html_escape(text),
            html_escape(sent_at)
        ),
    }
}

/// Escapes user-generated text for element content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::{html_escape, ItemCard, ListView, EMPTY_MESSAGES, EMPTY_REPERTOIRE};
    use crate::model::entry::{Entry, NewEntry};
    use crate::view::date::DateDisplay;

    #[test]
    fn empty_sequences_render_their_placeholders() {
        let dates = DateDisplay::default();

        assert_eq!(
            ListView::of_entries(&[], &dates),
            ListView::Empty(EMPTY_REPERTOIRE)
        );
        let html = ListView::of_messages(&[], &dates).to_html();
        assert!(html.contains("empty-state"));
        assert!(html.contains(EMPTY_MESSAGES.message));
    }

    #[test]
    fn entry_cards_escape_markup() {
        let entry = Entry::repertoire(
            NewEntry::new("<b>Saludo</b>", "Tom & Jerry"),
            "2024-05-01T09:30:00Z".parse().unwrap(),
        );
        let view = ListView::of_entries(&[entry], &DateDisplay::default());

        assert_eq!(
            view,
            ListView::Items(vec![ItemCard::Repertoire {
                title: "<b>Saludo</b>".to_string(),
                description: "Tom & Jerry".to_string(),
                date: "01/05/2024".to_string(),
            }])
        );
        let html = view.to_html();
        assert!(html.contains("<h4>&lt;b&gt;Saludo&lt;/b&gt;</h4>"));
        assert!(html.contains("<p>Tom &amp; Jerry</p>"));
    }

    #[test]
    fn html_escape_covers_quotes() {
        assert_eq!(html_escape("\"a\" 'b'"), "&quot;a&quot; &#39;b&#39;");
    }
}
