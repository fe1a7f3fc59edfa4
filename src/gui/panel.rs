use iced::Element;
use iced::widget::image::Handle;
use iced::widget::{column, image as picture, text};

use crate::display::Panel;
use super::Message;

/// A named window rendered inside the viewer
#[derive(Debug, Clone)]
pub struct PanelView {
    title: String,
    handle: Handle,
}

impl PanelView {
    pub fn from_panel(panel: &Panel) -> Self {
        let rgba = panel.frame.image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let title = match panel.frame.kind.angle() {
            Some(angle) => format!("{} ({}°)", panel.window, angle),
            None => panel.window.to_string(),
        };

        Self {
            title,
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            text(self.title.as_str()).size(14),
            picture(self.handle.clone()),
        ]
        .spacing(6)
        .into()
    }
}
