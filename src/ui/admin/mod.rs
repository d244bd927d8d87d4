// SPDX-License-Identifier: MPL-2.0
//! Admin screen: tabbed editors for every site section.
//!
//! Each tab carries an independent draft form seeded from the cached
//! section record. Submitting a form emits a save event to the parent;
//! the parent decides what to do with the outcome (toast, re-fetch,
//! re-seed).

pub mod about;
pub mod contact;
pub mod hero;
pub mod services;

use crate::content::{SectionContent, SectionKey};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{Element, Length};

/// Which editor tab is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Hero,
    About,
    Services,
    Contact,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Hero,
        AdminTab::About,
        AdminTab::Services,
        AdminTab::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Hero => "Hero",
            AdminTab::About => "About",
            AdminTab::Services => "Services",
            AdminTab::Contact => "Contact",
        }
    }

    pub fn section_key(self) -> SectionKey {
        match self {
            AdminTab::Hero => SectionKey::Hero,
            AdminTab::About => SectionKey::About,
            AdminTab::Services => SectionKey::Services,
            AdminTab::Contact => SectionKey::Contact,
        }
    }
}

/// State of the admin screen: active tab plus one draft per section.
#[derive(Debug, Default)]
pub struct State {
    tab: AdminTab,
    hero: hero::Form,
    about: about::Form,
    services: services::Form,
    contact: contact::Form,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(AdminTab),
    Hero(hero::Message),
    About(about::Message),
    Services(services::Message),
    Contact(contact::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The active tab changed; the parent should ensure the section is
    /// loaded.
    TabChanged(SectionKey),
    /// A form was submitted with this record.
    Save(SectionKey, SectionContent),
}

impl State {
    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    /// Re-seeds the draft for `content`'s section from a fresh record.
    pub fn seed(&mut self, content: &SectionContent) {
        match content {
            SectionContent::Hero(c) => self.hero.seed(c),
            SectionContent::About(c) => self.about.seed(c),
            SectionContent::Services(c) => self.services.seed(c),
            SectionContent::Contact(c) => self.contact.seed(c),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Event::TabChanged(tab.section_key())
            }
            Message::Hero(message) => match self.hero.update(message) {
                Some(record) => Event::Save(SectionKey::Hero, SectionContent::Hero(record)),
                None => Event::None,
            },
            Message::About(message) => match self.about.update(message) {
                Some(record) => Event::Save(SectionKey::About, SectionContent::About(record)),
                None => Event::None,
            },
            Message::Services(message) => match self.services.update(message) {
                Some(record) => {
                    Event::Save(SectionKey::Services, SectionContent::Services(record))
                }
                None => Event::None,
            },
            Message::Contact(message) => match self.contact.update(message) {
                Some(record) => Event::Save(SectionKey::Contact, SectionContent::Contact(record)),
                None => Event::None,
            },
        }
    }

    /// Render the admin screen. `saving` disables the active form's
    /// submit button while its save is in flight.
    pub fn view(&self, saving: bool) -> Element<'_, Message> {
        let mut tabs = Row::new().spacing(spacing::XS);
        for tab in AdminTab::ALL {
            let label = Text::new(tab.label()).size(typography::BODY);
            let tab_button = if tab == self.tab {
                button(label).padding([spacing::XXS, spacing::SM])
            } else {
                button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([spacing::XXS, spacing::SM])
            };
            tabs = tabs.push(tab_button);
        }

        let form: Element<'_, Message> = match self.tab {
            AdminTab::Hero => self.hero.view(saving).map(Message::Hero),
            AdminTab::About => self.about.view(saving).map(Message::About),
            AdminTab::Services => self.services.view(saving).map(Message::Services),
            AdminTab::Contact => self.contact.view(saving).map(Message::Contact),
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(Text::new("Content Editor").size(typography::TITLE_LG))
            .push(tabs)
            .push(form)
            .into()
    }
}

/// Single-line labeled text input, shared by the editor forms.
pub(crate) fn labeled_input<'a, M: Clone + 'a>(
    label: &'static str,
    value: &str,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(text_input(label, value).on_input(on_input).padding(spacing::XS))
        .into()
}

/// Section list header with an Add button.
pub(crate) fn list_header<'a, M: Clone + 'a>(label: &'static str, on_add: M) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(label).size(typography::TITLE_SM))
        .push(
            button(Text::new("Add").size(typography::CAPTION))
                .on_press(on_add)
                .padding(spacing::XXS),
        )
        .into()
}

/// Row-level remove button for list editors.
pub(crate) fn remove_button<'a, M: Clone + 'a>(on_remove: M) -> Element<'a, M> {
    button(Text::new("Remove").size(typography::CAPTION))
        .on_press(on_remove)
        .padding(spacing::XXS)
        .into()
}

/// Submit button, disabled while a save is in flight.
pub(crate) fn submit_button<'a, M: Clone + 'a>(saving: bool, on_submit: M) -> Element<'a, M> {
    let label = if saving { "Saving..." } else { "Save Changes" };
    button(Text::new(label))
        .on_press_maybe((!saving).then_some(on_submit))
        .padding([spacing::XS, spacing::MD])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HeroContent;

    #[test]
    fn tab_selection_emits_section_to_load() {
        let mut state = State::default();
        let event = state.update(Message::TabSelected(AdminTab::Services));

        assert_eq!(state.tab(), AdminTab::Services);
        assert!(matches!(event, Event::TabChanged(SectionKey::Services)));
    }

    #[test]
    fn form_submit_bubbles_up_as_save_event() {
        let mut state = State::default();
        state.seed(&SectionContent::Hero(HeroContent {
            tagline: "t".to_string(),
            title: "Emerald".to_string(),
            subtitle: "s".to_string(),
            description: "d".to_string(),
        }));

        let event = state.update(Message::Hero(hero::Message::Submit));
        match event {
            Event::Save(SectionKey::Hero, SectionContent::Hero(record)) => {
                assert_eq!(record.title, "Emerald");
            }
            other => panic!("expected hero save event, got {other:?}"),
        }
    }

    #[test]
    fn field_edits_do_not_emit_save() {
        let mut state = State::default();
        let event = state.update(Message::Hero(hero::Message::TitleChanged(
            "draft".to_string(),
        )));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn every_tab_maps_to_its_section_key() {
        for tab in AdminTab::ALL {
            let key = tab.section_key();
            assert_eq!(key.as_str(), tab.label().to_ascii_lowercase());
        }
    }
}
