// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: upload controls, thumbnail grid with selection, and
//! the slideshow view.

use crate::gallery::{GalleryState, Photo};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

use crate::gallery::PhotoId;

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file picker for uploads.
    OpenFileDialog,
    ToggleSelect(PhotoId),
    Remove(PhotoId),
    StartSlideshow,
    AdvanceSlide,
    StopSlideshow,
}

const GRID_COLUMNS: usize = 4;

/// Render the gallery screen.
pub fn view(gallery: &GalleryState) -> Element<'_, Message> {
    if gallery.slideshow().is_active() {
        slideshow_view(gallery)
    } else {
        grid_view(gallery)
    }
}

fn grid_view(gallery: &GalleryState) -> Element<'_, Message> {
    let upload_button = button(Text::new("Upload Photos"))
        .on_press(Message::OpenFileDialog)
        .padding([spacing::XS, spacing::MD]);

    let slideshow_button = button(Text::new("Start Slideshow"))
        .on_press_maybe((gallery.selected_count() > 0).then_some(Message::StartSlideshow))
        .padding([spacing::XS, spacing::MD]);

    let toolbar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(upload_button)
        .push(slideshow_button)
        .push(
            Text::new(format!("{} selected", gallery.selected_count()))
                .size(typography::CAPTION),
        );

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new("Gallery").size(typography::TITLE_LG))
        .push(toolbar);

    if gallery.photos().is_empty() {
        column = column.push(
            Container::new(
                Text::new("No photos yet. Drop image files here or use Upload Photos.")
                    .size(typography::BODY),
            )
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center),
        );
    } else {
        for chunk in gallery.photos().chunks(GRID_COLUMNS) {
            let mut row = Row::new().spacing(spacing::SM);
            for photo in chunk {
                row = row.push(thumbnail(photo, gallery.is_selected(photo.id())));
            }
            column = column.push(row);
        }
    }

    column.into()
}

fn thumbnail(photo: &Photo, selected: bool) -> Element<'_, Message> {
    let image: Element<'_, Message> = match photo.handle() {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        // Released handles render an empty slot; the photo is about to
        // leave the collection anyway.
        None => Container::new(Text::new(""))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
    };

    let select_label = if selected { "Selected ✓" } else { "Select" };
    let controls = Row::new()
        .spacing(spacing::XXS)
        .push(
            button(Text::new(select_label).size(typography::CAPTION))
                .on_press(Message::ToggleSelect(photo.id()))
                .padding(spacing::XXS),
        )
        .push(
            button(Text::new("Remove").size(typography::CAPTION))
                .on_press(Message::Remove(photo.id()))
                .padding(spacing::XXS),
        );

    let card = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(Text::new(photo.name().to_string()).size(typography::CAPTION))
        .push(controls);

    Container::new(card)
        .padding(spacing::XS)
        .style(move |theme: &Theme| thumbnail_style(theme, selected))
        .into()
}

fn thumbnail_style(theme: &Theme, selected: bool) -> container::Style {
    let border_color = if selected {
        palette::PRIMARY_500
    } else {
        theme.extended_palette().background.strong.color
    };

    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: iced::Border {
            color: border_color,
            width: if selected {
                border::WIDTH_MD
            } else {
                border::WIDTH_SM
            },
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn slideshow_view(gallery: &GalleryState) -> Element<'_, Message> {
    let sequence = gallery.slideshow_sequence();
    let position = gallery.slideshow().index();

    let image: Element<'_, Message> = match gallery.current_slide().and_then(Photo::handle) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Text::new("Slide unavailable").size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    let counter = Text::new(format!("{} / {}", position + 1, sequence.len()))
        .size(typography::BODY);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(counter)
        .push(
            button(Text::new("Next"))
                .on_press(Message::AdvanceSlide)
                .padding([spacing::XS, spacing::MD]),
        )
        .push(
            button(Text::new("Close"))
                .on_press(Message::StopSlideshow)
                .padding([spacing::XS, spacing::MD]),
        );

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(controls)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::UploadedPhoto;

    fn upload(name: &str) -> UploadedPhoto {
        UploadedPhoto {
            name: name.to_string(),
            bytes: vec![0_u8; 4],
        }
    }

    #[test]
    fn empty_gallery_renders() {
        let gallery = GalleryState::new();
        let _element = view(&gallery);
    }

    #[test]
    fn populated_gallery_renders_grid() {
        let mut gallery = GalleryState::new();
        gallery.ingest(vec![upload("a.jpg"), upload("b.png")]);
        let _element = view(&gallery);
    }

    #[test]
    fn active_slideshow_renders_slide_view() {
        let mut gallery = GalleryState::new();
        gallery.ingest(vec![upload("a.jpg")]);
        let id = gallery.photos()[0].id();
        gallery.toggle_select(id);
        gallery.start_slideshow().expect("selection is non-empty");

        let _element = view(&gallery);
    }
}
