use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACCENT_PINK, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT, STATUS_ERROR,
};
use crate::ui::view::MintView;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(&view), header);
    frame.render_widget(Clear, body);

    let info = info_lines(&view, app.last_command_error());
    let info_height = (info.len() as u16).saturating_add(2);
    if view.connected {
        let (list_area, card_area, info_area) = body_regions(body, info_height);
        draw_gallery(frame, app, &view, list_area, card_area);
        draw_info(frame, info, info_area);
    } else {
        let (prompt_area, _, info_area) = body_regions(body, info_height);
        let prompt_area = Rect {
            width: body.width,
            ..prompt_area
        };
        draw_connect_prompt(frame, prompt_area);
        draw_info(frame, info, info_area);
    }

    frame.render_widget(Footer::new().widget(footer, view.connected), footer);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_connect_prompt(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Connect Your Wallet to Start Minting",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press c to connect 🔑",
            Style::default().fg(ACCENT_PINK),
        )),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 6;
    let prompt = centered_rect_by_size(area, width, lines.len() as u16 + 2);
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(" Wallet "));
    frame.render_widget(widget, prompt);
}

fn draw_gallery(frame: &mut Frame<'_>, app: &App, view: &MintView, list_area: Rect, card_area: Rect) {
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| ListItem::new(format!("#{}  {}", card.edition, card.name)))
        .collect();
    let list = List::new(items)
        .block(bordered(" Gallery "))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, list_area, &mut state);

    let Some(card) = view.cards.get(app.selection()) else {
        return;
    };
    let label = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::from(Span::styled(card.name.clone(), label)),
        Line::from(""),
        Line::from(Span::styled(card.description.clone(), text)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(card.image.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Mint Price: ", label),
            Span::styled(view.price_label(), Style::default().fg(PRICE_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[ Enter: PURCHASE ]",
            Style::default().fg(ACCENT_PINK).add_modifier(Modifier::BOLD),
        )),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(bordered(" Edition "));
    frame.render_widget(widget, card_area);
}

fn info_lines(view: &MintView, command_error: Option<&str>) -> Vec<Line<'static>> {
    let label = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);
    let error_style = Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD);
    let field = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(name, label), Span::styled(value, text)])
    };

    let mut lines = Vec::new();
    if !view.status_line.is_empty() {
        lines.push(Line::from(Span::styled(view.status_line.clone(), label)));
    }
    if let Some(address) = &view.wallet_address {
        lines.push(field("Your Wallet Address: ", address.clone()));
    }
    if let Some(link) = &view.marketplace_link {
        lines.push(field("Your NFT will be available at: ", link.clone()));
    }
    if let Some(error) = &view.error {
        lines.push(Line::from(Span::styled(error.clone(), error_style)));
    }
    if let Some(error) = command_error {
        lines.push(Line::from(Span::styled(error.to_string(), error_style)));
    }
    lines.push(field("Contract Address: ", view.contract_address.clone()));
    lines.push(field("Owner Address: ", view.owner.clone()));
    lines.push(field("Remaining NFTs: ", view.remaining_label()));
    lines
}

fn draw_info(frame: &mut Frame<'_>, lines: Vec<Line<'static>>, area: Rect) {
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(bordered(" Collection "));
    frame.render_widget(widget, area);
}
