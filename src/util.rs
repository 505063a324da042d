use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of [`consts::DISPLAY_SIZE`] centered in `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered in `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}
