use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::view::MintView;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const APP_TITLE: &str = "⛩ Japanese Art NFT Minter ⛩";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &MintView) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_color, wallet) = match &view.wallet_address {
            Some(address) => ("🟢", STATUS_OK, address.clone()),
            None => ("🔴", STATUS_ERROR, "Wallet not connected".to_string()),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                APP_TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled("  ", text_style),
            Span::styled(wallet, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
