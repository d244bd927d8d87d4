// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! A horizontal bar of screen links across the top of the window. The
//! Admin link only appears for signed-in administrators.

use crate::app::Screen;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub current: Screen,
    /// Whether the Admin link is shown.
    pub show_admin: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new("Emerald Studio")
                .size(typography::TITLE_MD),
        );

    for screen in Screen::PUBLIC {
        row = row.push(nav_link(screen, ctx.current));
    }
    if ctx.show_admin {
        row = row.push(nav_link(Screen::Admin, ctx.current));
    }

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn nav_link(screen: Screen, current: Screen) -> Element<'static, Message> {
    let label = Text::new(screen.label()).size(typography::BODY);
    let link = button(label).padding([spacing::XXS, spacing::SM]);

    let link = if screen == current {
        link.style(selected_link_style)
    } else {
        link.on_press(Message::Navigate(screen))
            .style(link_style)
    };
    link.into()
}

fn link_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

fn selected_link_style(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let ctx = ViewContext {
            current: Screen::Home,
            show_admin: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_admin_link() {
        let ctx = ViewContext {
            current: Screen::Admin,
            show_admin: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navigate_message_emits_navigate_event() {
        let event = update(Message::Navigate(Screen::Gallery));
        assert!(matches!(event, Event::Navigate(Screen::Gallery)));
    }
}
