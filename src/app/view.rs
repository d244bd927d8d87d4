// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the current screen, and the toast overlay. The
//! admin screen is gated here: signed-out users are asked to sign in,
//! signed-in non-admins get an access-denied view.

use super::{App, Message, Screen};
use crate::content::SectionKey;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::{gallery_view, pages};
use iced::widget::{Column, Container, Scrollable, Stack, Text};
use iced::{alignment, Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(NavbarViewContext {
            current: self.screen,
            show_admin: self.session.is_admin(),
        })
        .map(Message::Navbar);

        let body: Element<'_, Message> = match self.screen {
            Screen::Home => pages::hero_view(
                self.sync
                    .content(SectionKey::Hero)
                    .and_then(|c| c.as_hero()),
                self.sync.is_loading(SectionKey::Hero),
                self.sync.error(SectionKey::Hero),
            ),
            Screen::Gallery => gallery_view::view(&self.gallery).map(Message::Gallery),
            Screen::About => pages::about_view(
                self.sync
                    .content(SectionKey::About)
                    .and_then(|c| c.as_about()),
                self.sync.is_loading(SectionKey::About),
                self.sync.error(SectionKey::About),
            ),
            Screen::Services => pages::services_view(
                self.sync
                    .content(SectionKey::Services)
                    .and_then(|c| c.as_services()),
                self.sync.is_loading(SectionKey::Services),
                self.sync.error(SectionKey::Services),
            ),
            Screen::Contact => pages::contact_view(
                self.sync
                    .content(SectionKey::Contact)
                    .and_then(|c| c.as_contact()),
                self.sync.is_loading(SectionKey::Contact),
                self.sync.error(SectionKey::Contact),
                &self.contact_form,
            )
            .map(Message::ContactForm),
            Screen::Admin => self.admin_body(),
        };

        let base = Column::new()
            .push(navbar)
            .push(Scrollable::new(body).width(Length::Fill).height(Length::Fill));

        let overlay = Toast::view_overlay(&self.notifications).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(overlay)
            .into()
    }

    fn admin_body(&self) -> Element<'_, Message> {
        if !self.session.is_signed_in() {
            return centered_notice(
                "Sign in required",
                "Launch with --token to sign in before editing content.",
            );
        }
        if !self.session.is_admin() {
            return centered_notice(
                "Access denied",
                "Your account does not have admin permissions.",
            );
        }

        let saving = self
            .sync
            .is_saving(self.admin.tab().section_key());
        self.admin.view(saving).map(Message::Admin)
    }
}

fn centered_notice(title: &'static str, detail: &'static str) -> Element<'static, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(title).size(typography::TITLE_MD))
            .push(Text::new(detail).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
