use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into header, body and footer strips.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the gallery (list + selected card) and the
/// collection/status panel below it.
pub fn body_regions(body: Rect, info_height: u16) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(info_height)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);
    (columns[0], columns[1], rows[1])
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_screen_without_overlap() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, header.bottom());
        assert_eq!(footer.y, body.bottom());
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(area, 40, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 3);
    }
}
