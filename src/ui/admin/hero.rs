// SPDX-License-Identifier: MPL-2.0
//! Hero section editor.

use crate::content::HeroContent;
use crate::ui::admin::{labeled_input, submit_button};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::Column;
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct Form {
    tagline: String,
    title: String,
    subtitle: String,
    description: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    TaglineChanged(String),
    TitleChanged(String),
    SubtitleChanged(String),
    DescriptionChanged(String),
    Submit,
}

impl Form {
    /// Replaces the draft with the given record.
    pub fn seed(&mut self, content: &HeroContent) {
        self.tagline = content.tagline.clone();
        self.title = content.title.clone();
        self.subtitle = content.subtitle.clone();
        self.description = content.description.clone();
    }

    /// Applies an edit; returns the record to save on submit.
    pub fn update(&mut self, message: Message) -> Option<HeroContent> {
        match message {
            Message::TaglineChanged(value) => {
                self.tagline = value;
                None
            }
            Message::TitleChanged(value) => {
                self.title = value;
                None
            }
            Message::SubtitleChanged(value) => {
                self.subtitle = value;
                None
            }
            Message::DescriptionChanged(value) => {
                self.description = value;
                None
            }
            Message::Submit => Some(HeroContent {
                tagline: self.tagline.clone(),
                title: self.title.clone(),
                subtitle: self.subtitle.clone(),
                description: self.description.clone(),
            }),
        }
    }

    pub fn view(&self, saving: bool) -> Element<'_, Message> {
        Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::FORM_WIDTH)
            .push(labeled_input(
                "Tagline",
                &self.tagline,
                Message::TaglineChanged,
            ))
            .push(labeled_input("Title", &self.title, Message::TitleChanged))
            .push(labeled_input(
                "Subtitle",
                &self.subtitle,
                Message::SubtitleChanged,
            ))
            .push(labeled_input(
                "Description",
                &self.description,
                Message::DescriptionChanged,
            ))
            .push(submit_button(saving, Message::Submit))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_then_submit_round_trips_the_record() {
        let record = HeroContent {
            tagline: "tagline".to_string(),
            title: "title".to_string(),
            subtitle: "subtitle".to_string(),
            description: "description".to_string(),
        };

        let mut form = Form::default();
        form.seed(&record);
        let submitted = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(submitted, record);
    }

    #[test]
    fn edits_are_reflected_in_the_submitted_record() {
        let mut form = Form::default();
        assert!(form
            .update(Message::TitleChanged("New Title".to_string()))
            .is_none());

        let submitted = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(submitted.title, "New Title");
    }
}
