//! Status bar widget
//!
//! Format: `[timestamp] icon message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 || area.width < 4 {
            return;
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            let max_width = right.saturating_sub(x) as usize;
            let (next, _) = buf.set_stringn(x, area.y, &ts, max_width, vm.metadata_style);
            x = next;
        }

        let icon = format!("{} ", vm.icon);
        let max_width = right.saturating_sub(x) as usize;
        let (next, _) = buf.set_stringn(x, area.y, &icon, max_width, vm.message_style);
        x = next;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;
        let message_end = right.saturating_sub(source_width + 2);

        if message_end > x {
            let max_width = (message_end - x) as usize;
            buf.set_stringn(x, area.y, &vm.message, max_width, vm.message_style);
        }
        if !source.is_empty() && right > source_width + 1 {
            buf.set_string(right - source_width - 1, area.y, &source, vm.metadata_style);
        }
    }
}
