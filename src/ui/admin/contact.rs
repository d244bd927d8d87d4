// SPDX-License-Identifier: MPL-2.0
//! Contact section editor.

use crate::content::{BusinessHours, ContactContent};
use crate::ui::admin::{labeled_input, submit_button};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct Form {
    phone: String,
    email: String,
    location: String,
    weekday: String,
    saturday: String,
    sunday: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    PhoneChanged(String),
    EmailChanged(String),
    LocationChanged(String),
    WeekdayChanged(String),
    SaturdayChanged(String),
    SundayChanged(String),
    Submit,
}

impl Form {
    pub fn seed(&mut self, content: &ContactContent) {
        self.phone = content.phone.clone();
        self.email = content.email.clone();
        self.location = content.location.clone();
        self.weekday = content.business_hours.weekday.clone();
        self.saturday = content.business_hours.saturday.clone();
        self.sunday = content.business_hours.sunday.clone();
    }

    pub fn update(&mut self, message: Message) -> Option<ContactContent> {
        match message {
            Message::PhoneChanged(value) => self.phone = value,
            Message::EmailChanged(value) => self.email = value,
            Message::LocationChanged(value) => self.location = value,
            Message::WeekdayChanged(value) => self.weekday = value,
            Message::SaturdayChanged(value) => self.saturday = value,
            Message::SundayChanged(value) => self.sunday = value,
            Message::Submit => {
                return Some(ContactContent {
                    phone: self.phone.clone(),
                    email: self.email.clone(),
                    location: self.location.clone(),
                    business_hours: BusinessHours {
                        weekday: self.weekday.clone(),
                        saturday: self.saturday.clone(),
                        sunday: self.sunday.clone(),
                    },
                });
            }
        }
        None
    }

    pub fn view(&self, saving: bool) -> Element<'_, Message> {
        Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::FORM_WIDTH)
            .push(labeled_input("Phone", &self.phone, Message::PhoneChanged))
            .push(labeled_input("Email", &self.email, Message::EmailChanged))
            .push(labeled_input(
                "Location",
                &self.location,
                Message::LocationChanged,
            ))
            .push(Text::new("Business hours").size(typography::TITLE_SM))
            .push(labeled_input(
                "Monday - Friday",
                &self.weekday,
                Message::WeekdayChanged,
            ))
            .push(labeled_input(
                "Saturday",
                &self.saturday,
                Message::SaturdayChanged,
            ))
            .push(labeled_input("Sunday", &self.sunday, Message::SundayChanged))
            .push(submit_button(saving, Message::Submit))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_then_submit_round_trips_the_record() {
        let record = ContactContent {
            phone: "767 555 0100".to_string(),
            email: "studio@example.com".to_string(),
            location: "Fortune, Dominica".to_string(),
            business_hours: BusinessHours {
                weekday: "9am - 5pm".to_string(),
                saturday: "10am - 2pm".to_string(),
                sunday: "Closed".to_string(),
            },
        };

        let mut form = Form::default();
        form.seed(&record);
        let submitted = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(submitted, record);
    }

    #[test]
    fn hours_edits_land_in_the_nested_record() {
        let mut form = Form::default();
        form.update(Message::SundayChanged("Closed".to_string()));

        let submitted = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(submitted.business_hours.sunday, "Closed");
    }
}
