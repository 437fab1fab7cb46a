// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::widget::Container;
use iced::{Element, Length};

/// Renders the viewer filling the whole window.
pub fn view(viewer: &component::State) -> Element<'_, Message> {
    Container::new(viewer.view().map(Message::Viewer))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
