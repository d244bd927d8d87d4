// SPDX-License-Identifier: MPL-2.0
//! Public section pages.
//!
//! Each page renders its section record from the sync cache, with
//! loading and error placeholders while the record is not available.
//! The contact page also carries a visitor message form.

use crate::content::{
    AboutContent, ContactContent, ContentError, HeroContent, ServicesContent,
};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, container, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Placeholder shown while a section record is loading or failed.
fn placeholder<M: 'static>(loading: bool, error: Option<&ContentError>) -> Element<'static, M> {
    let message = if loading {
        "Loading...".to_string()
    } else {
        match error {
            Some(error) => format!("Content unavailable: {error}"),
            None => "Content unavailable".to_string(),
        }
    };

    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn page_title<M: 'static>(title: &str) -> Element<'static, M> {
    Text::new(title.to_string()).size(typography::TITLE_LG).into()
}

/// The landing page hero section.
pub fn hero_view<M: 'static>(
    content: Option<&HeroContent>,
    loading: bool,
    error: Option<&ContentError>,
) -> Element<'static, M> {
    let Some(hero) = content else {
        return placeholder(loading, error);
    };

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(hero.tagline.clone())
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_500),
                }),
        )
        .push(Text::new(hero.title.clone()).size(typography::TITLE_LG))
        .push(Text::new(hero.subtitle.clone()).size(typography::TITLE_SM))
        .push(Text::new(hero.description.clone()).size(typography::BODY));

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// The about page.
pub fn about_view<M: 'static>(
    content: Option<&AboutContent>,
    loading: bool,
    error: Option<&ContentError>,
) -> Element<'static, M> {
    let Some(about) = content else {
        return placeholder(loading, error);
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(page_title(&about.title))
        .push(
            Text::new(format!("{} — {}", about.location, about.location_tagline))
                .size(typography::BODY_LG),
        )
        .push(Text::new(about.paragraph1.clone()).size(typography::BODY))
        .push(Text::new(about.paragraph2.clone()).size(typography::BODY))
        .push(Text::new(about.paragraph3.clone()).size(typography::BODY));

    if !about.notable_events.is_empty() {
        column = column.push(Text::new("Notable events").size(typography::TITLE_SM));
        for event in &about.notable_events {
            column = column.push(Text::new(format!("• {event}")).size(typography::BODY));
        }
    }

    if !about.stats.is_empty() {
        let mut stats_row = Row::new().spacing(spacing::LG);
        for stat in &about.stats {
            stats_row = stats_row.push(
                Column::new()
                    .align_x(alignment::Horizontal::Center)
                    .push(Text::new(stat.value.clone()).size(typography::TITLE_MD))
                    .push(Text::new(stat.label.clone()).size(typography::CAPTION)),
            );
        }
        column = column.push(stats_row);
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .into()
}

/// The services page.
pub fn services_view<M: 'static>(
    content: Option<&ServicesContent>,
    loading: bool,
    error: Option<&ContentError>,
) -> Element<'static, M> {
    let Some(services) = content else {
        return placeholder(loading, error);
    };

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(page_title(&services.title))
        .push(Text::new(services.description.clone()).size(typography::BODY));

    for item in &services.items {
        let mut card = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(item.title.clone()).size(typography::TITLE_SM))
            .push(Text::new(item.description.clone()).size(typography::BODY));
        for feature in &item.features {
            card = card.push(Text::new(format!("• {feature}")).size(typography::BODY));
        }

        column = column.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(card_style),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Contact page and visitor form
// ============================================================================

/// State of the visitor message form on the contact page.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum ContactFormMessage {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum ContactFormEvent {
    None,
    /// The form passed validation and was submitted; fields are cleared.
    Submitted,
    /// Validation failed with a user-facing reason.
    Invalid(String),
}

impl ContactForm {
    pub fn update(&mut self, message: ContactFormMessage) -> ContactFormEvent {
        match message {
            ContactFormMessage::NameChanged(value) => {
                self.name = value;
                ContactFormEvent::None
            }
            ContactFormMessage::EmailChanged(value) => {
                self.email = value;
                ContactFormEvent::None
            }
            ContactFormMessage::PhoneChanged(value) => {
                self.phone = value;
                ContactFormEvent::None
            }
            ContactFormMessage::MessageChanged(value) => {
                self.message = value;
                ContactFormEvent::None
            }
            ContactFormMessage::Submit => {
                if self.name.trim().is_empty()
                    || self.email.trim().is_empty()
                    || self.message.trim().is_empty()
                {
                    return ContactFormEvent::Invalid(
                        "Please fill in your name, email and message.".to_string(),
                    );
                }
                if !is_plausible_email(&self.email) {
                    return ContactFormEvent::Invalid(
                        "Please enter a valid email address.".to_string(),
                    );
                }
                *self = ContactForm::default();
                ContactFormEvent::Submitted
            }
        }
    }

    pub fn view(&self) -> Element<'_, ContactFormMessage> {
        let column = Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::FORM_WIDTH)
            .push(Text::new("Send us a message").size(typography::TITLE_SM))
            .push(
                text_input("Your name", &self.name)
                    .on_input(ContactFormMessage::NameChanged)
                    .padding(spacing::XS),
            )
            .push(
                text_input("Your email", &self.email)
                    .on_input(ContactFormMessage::EmailChanged)
                    .padding(spacing::XS),
            )
            .push(
                text_input("Phone (optional)", &self.phone)
                    .on_input(ContactFormMessage::PhoneChanged)
                    .padding(spacing::XS),
            )
            .push(
                text_input("Your message", &self.message)
                    .on_input(ContactFormMessage::MessageChanged)
                    .padding(spacing::XS),
            )
            .push(
                button(Text::new("Send Message"))
                    .on_press(ContactFormMessage::Submit)
                    .padding([spacing::XS, spacing::MD]),
            );

        column.into()
    }
}

/// Minimal shape check, not RFC validation.
fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// The contact page: business details plus the visitor form.
pub fn contact_view<'a>(
    content: Option<&ContactContent>,
    loading: bool,
    error: Option<&ContentError>,
    form: &'a ContactForm,
) -> Element<'a, ContactFormMessage> {
    let details: Element<'_, ContactFormMessage> = match content {
        None => placeholder(loading, error),
        Some(contact) => Column::new()
            .spacing(spacing::XS)
            .push(page_title("Contact"))
            .push(Text::new(format!("Phone: {}", contact.phone)).size(typography::BODY))
            .push(Text::new(format!("Email: {}", contact.email)).size(typography::BODY))
            .push(Text::new(format!("Location: {}", contact.location)).size(typography::BODY))
            .push(Text::new("Business hours").size(typography::TITLE_SM))
            .push(
                Text::new(format!("Mon - Fri: {}", contact.business_hours.weekday))
                    .size(typography::BODY),
            )
            .push(
                Text::new(format!("Saturday: {}", contact.business_hours.saturday))
                    .size(typography::BODY),
            )
            .push(
                Text::new(format!("Sunday: {}", contact.business_hours.sunday))
                    .size(typography::BODY),
            )
            .into(),
    };

    let column = Column::new()
        .spacing(spacing::LG)
        .push(details)
        .push(form.view());

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .into()
}
