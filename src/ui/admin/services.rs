// SPDX-License-Identifier: MPL-2.0
//! Services section editor with a nested list of service items.

use crate::content::{ServiceItem, ServicesContent};
use crate::ui::admin::{labeled_input, list_header, remove_button, submit_button};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{text_input, Column, Row, Text};
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct Form {
    title: String,
    description: String,
    items: Vec<ServiceItem>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    ItemTitleChanged(usize, String),
    ItemDescriptionChanged(usize, String),
    ItemAdded,
    ItemRemoved(usize),
    FeatureChanged(usize, usize, String),
    FeatureAdded(usize),
    FeatureRemoved(usize, usize),
    Submit,
}

impl Form {
    pub fn seed(&mut self, content: &ServicesContent) {
        self.title = content.title.clone();
        self.description = content.description.clone();
        self.items = content.items.clone();
    }

    pub fn update(&mut self, message: Message) -> Option<ServicesContent> {
        match message {
            Message::TitleChanged(value) => self.title = value,
            Message::DescriptionChanged(value) => self.description = value,
            Message::ItemTitleChanged(index, value) => {
                if let Some(item) = self.items.get_mut(index) {
                    item.title = value;
                }
            }
            Message::ItemDescriptionChanged(index, value) => {
                if let Some(item) = self.items.get_mut(index) {
                    item.description = value;
                }
            }
            Message::ItemAdded => self.items.push(ServiceItem::default()),
            Message::ItemRemoved(index) => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
            Message::FeatureChanged(item_index, feature_index, value) => {
                if let Some(feature) = self
                    .items
                    .get_mut(item_index)
                    .and_then(|item| item.features.get_mut(feature_index))
                {
                    *feature = value;
                }
            }
            Message::FeatureAdded(item_index) => {
                if let Some(item) = self.items.get_mut(item_index) {
                    item.features.push(String::new());
                }
            }
            Message::FeatureRemoved(item_index, feature_index) => {
                if let Some(item) = self.items.get_mut(item_index) {
                    if feature_index < item.features.len() {
                        item.features.remove(feature_index);
                    }
                }
            }
            Message::Submit => {
                return Some(ServicesContent {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    items: self.items.clone(),
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
                "Description",
                &self.description,
                Message::DescriptionChanged,
            ))
            .push(list_header("Services", Message::ItemAdded));

        for (item_index, item) in self.items.iter().enumerate() {
            let mut item_column = Column::new()
                .spacing(spacing::XS)
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(
                            text_input("Service title", &item.title)
                                .on_input(move |value| {
                                    Message::ItemTitleChanged(item_index, value)
                                })
                                .padding(spacing::XS),
                        )
                        .push(remove_button(Message::ItemRemoved(item_index))),
                )
                .push(
                    text_input("Service description", &item.description)
                        .on_input(move |value| {
                            Message::ItemDescriptionChanged(item_index, value)
                        })
                        .padding(spacing::XS),
                )
                .push(list_header("Features", Message::FeatureAdded(item_index)));

            for (feature_index, feature) in item.features.iter().enumerate() {
                item_column = item_column.push(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(
                            text_input("Feature", feature)
                                .on_input(move |value| {
                                    Message::FeatureChanged(item_index, feature_index, value)
                                })
                                .padding(spacing::XS),
                        )
                        .push(remove_button(Message::FeatureRemoved(
                            item_index,
                            feature_index,
                        ))),
                );
            }

            column = column
                .push(Text::new(format!("Service {}", item_index + 1)).size(typography::CAPTION))
                .push(item_column);
        }

        column.push(submit_button(saving, Message::Submit)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_feature_edits_target_the_right_item() {
        let mut form = Form::default();
        form.update(Message::ItemAdded);
        form.update(Message::ItemAdded);
        form.update(Message::FeatureAdded(1));
        form.update(Message::FeatureChanged(1, 0, "Drone shots".to_string()));

        let record = form.update(Message::Submit).expect("submit returns record");
        assert!(record.items[0].features.is_empty());
        assert_eq!(record.items[1].features, vec!["Drone shots".to_string()]);
    }

    #[test]
    fn removing_an_item_drops_its_features() {
        let mut form = Form::default();
        form.update(Message::ItemAdded);
        form.update(Message::FeatureAdded(0));
        form.update(Message::ItemRemoved(0));

        let record = form.update(Message::Submit).expect("submit returns record");
        assert!(record.items.is_empty());
    }

    #[test]
    fn seed_then_submit_round_trips_the_record() {
        let record = ServicesContent {
            title: "Services".to_string(),
            description: "What we offer".to_string(),
            items: vec![ServiceItem {
                title: "Weddings".to_string(),
                description: "Full-day coverage".to_string(),
                features: vec!["Two photographers".to_string()],
            }],
        };

        let mut form = Form::default();
        form.seed(&record);
        let submitted = form.update(Message::Submit).expect("submit returns record");
        assert_eq!(submitted, record);
    }
}
