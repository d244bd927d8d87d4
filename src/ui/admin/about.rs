// SPDX-License-Identifier: MPL-2.0
//! About section editor, including the notable-events and stats lists.

use crate::content::{AboutContent, Stat};
use crate::ui::admin::{labeled_input, list_header, remove_button, submit_button};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{text_input, Column, Row};
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct Form {
    title: String,
    location: String,
    location_tagline: String,
    paragraph1: String,
    paragraph2: String,
    paragraph3: String,
    notable_events: Vec<String>,
    stats: Vec<Stat>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    LocationChanged(String),
    LocationTaglineChanged(String),
    Paragraph1Changed(String),
    Paragraph2Changed(String),
    Paragraph3Changed(String),
    EventChanged(usize, String),
    EventAdded,
    EventRemoved(usize),
    StatLabelChanged(usize, String),
    StatValueChanged(usize, String),
    StatAdded,
    StatRemoved(usize),
    Submit,
}

impl Form {
    pub fn seed(&mut self, content: &AboutContent) {
        self.title = content.title.clone();
        self.location = content.location.clone();
        self.location_tagline = content.location_tagline.clone();
        self.paragraph1 = content.paragraph1.clone();
        self.paragraph2 = content.paragraph2.clone();
        self.paragraph3 = content.paragraph3.clone();
        self.notable_events = content.notable_events.clone();
        self.stats = content.stats.clone();
    }

    pub fn update(&mut self, message: Message) -> Option<AboutContent> {
        match message {
            Message::TitleChanged(value) => self.title = value,
            Message::LocationChanged(value) => self.location = value,
            Message::LocationTaglineChanged(value) => self.location_tagline = value,
            Message::Paragraph1Changed(value) => self.paragraph1 = value,
            Message::Paragraph2Changed(value) => self.paragraph2 = value,
            Message::Paragraph3Changed(value) => self.paragraph3 = value,
            Message::EventChanged(index, value) => {
                if let Some(event) = self.notable_events.get_mut(index) {
                    *event = value;
                }
            }
            Message::EventAdded => self.notable_events.push(String::new()),
            Message::EventRemoved(index) => {
                if index < self.notable_events.len() {
                    self.notable_events.remove(index);
                }
            }
            Message::StatLabelChanged(index, value) => {
                if let Some(stat) = self.stats.get_mut(index) {
                    stat.label = value;
                }
            }
            Message::StatValueChanged(index, value) => {
                if let Some(stat) = self.stats.get_mut(index) {
                    stat.value = value;
                }
            }
            Message::StatAdded => self.stats.push(Stat::default()),
            Message::StatRemoved(index) => {
                if index < self.stats.len() {
                    self.stats.remove(index);
                }
            }
            Message::Submit => {
                return Some(AboutContent {
                    title: self.title.clone(),
                    location: self.location.clone(),
                    location_tagline: self.location_tagline.clone(),
                    paragraph1: self.paragraph1.clone(),
                    paragraph2: self.paragraph2.clone(),
                    paragraph3: self.paragraph3.clone(),
                    notable_events: self.notable_events.clone(),
                    stats: self.stats.clone(),
                });
            }
        }
        None
    }

    pub fn view(&self, saving: bool) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::FORM_WIDTH)
            .push(labeled_input("Title", &self.title, Message::TitleChanged))
            .push(labeled_input(
                "Location",
                &self.location,
                Message::LocationChanged,
            ))
            .push(labeled_input(
                "Location tagline",
                &self.location_tagline,
                Message::LocationTaglineChanged,
            ))
            .push(labeled_input(
                "Paragraph 1",
                &self.paragraph1,
                Message::Paragraph1Changed,
            ))
            .push(labeled_input(
                "Paragraph 2",
                &self.paragraph2,
                Message::Paragraph2Changed,
            ))
            .push(labeled_input(
                "Paragraph 3",
                &self.paragraph3,
                Message::Paragraph3Changed,
            ));

        column = column.push(list_header("Notable events", Message::EventAdded));
        for (index, event) in self.notable_events.iter().enumerate() {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(
                        text_input("Event", event)
                            .on_input(move |value| Message::EventChanged(index, value))
                            .padding(spacing::XS),
                    )
                    .push(remove_button(Message::EventRemoved(index))),
            );
        }

        column = column.push(list_header("Stats", Message::StatAdded));
        for (index, stat) in self.stats.iter().enumerate() {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(
                        text_input("Label", &stat.label)
                            .on_input(move |value| Message::StatLabelChanged(index, value))
                            .padding(spacing::XS),
                    )
                    .push(
                        text_input("Value", &stat.value)
                            .on_input(move |value| Message::StatValueChanged(index, value))
                            .padding(spacing::XS),
                    )
                    .push(remove_button(Message::StatRemoved(index))),
            );
        }

        column.push(submit_button(saving, Message::Submit)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entries_can_be_added_edited_and_removed() {
        let mut form = Form::default();

        form.update(Message::EventAdded);
        form.update(Message::EventChanged(0, "Carnival 2024".to_string()));
        form.update(Message::EventAdded);
        form.update(Message::EventRemoved(1));

        let record = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(record.notable_events, vec!["Carnival 2024".to_string()]);
    }

    #[test]
    fn stat_edits_target_the_right_row() {
        let mut form = Form::default();
        form.update(Message::StatAdded);
        form.update(Message::StatAdded);
        form.update(Message::StatLabelChanged(1, "Years".to_string()));
        form.update(Message::StatValueChanged(1, "10+".to_string()));

        let record = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(record.stats[0], Stat::default());
        assert_eq!(record.stats[1].label, "Years");
        assert_eq!(record.stats[1].value, "10+");
    }

    #[test]
    fn out_of_range_list_edits_are_ignored() {
        let mut form = Form::default();
        form.update(Message::EventChanged(3, "ghost".to_string()));
        form.update(Message::EventRemoved(3));
        form.update(Message::StatRemoved(0));

        let record = form.update(Message::Submit).expect("submit returns record");
        assert!(record.notable_events.is_empty());
        assert!(record.stats.is_empty());
    }
}
