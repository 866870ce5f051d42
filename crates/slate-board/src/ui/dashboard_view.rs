//! Dashboard panel: title bar and the charts currently in the layout

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Background, Border, Element, Length, Theme};

use slate_core::SliceId;
use slate_widgets::theme::{BG_DARK, BORDER_COLOR, TEXT_PRIMARY, TEXT_SECONDARY};

use super::app::BoardApp;
use super::message::Message;

/// Render the dashboard panel
pub fn dashboard_view(app: &BoardApp) -> Element<'_, Message> {
    let edit_label = if app.edit_mode { "Done" } else { "Edit dashboard" };

    let header = row![
        text(&app.config.dashboard.title).size(22),
        Space::new().width(Length::Fill),
        button(text(edit_label).size(13))
            .on_press(Message::ToggleEditMode)
            .padding([4, 10]),
    ]
    .align_y(Alignment::Center)
    .padding(10);

    let charts = &app.config.dashboard.charts;
    let body: Element<'_, Message> = if charts.is_empty() {
        let hint = if app.edit_mode {
            "This dashboard is empty. Add charts from the panel on the right."
        } else {
            "This dashboard is empty. Click \"Edit dashboard\" to add charts."
        };
        container(text(hint).size(13).color(TEXT_SECONDARY))
            .padding(20)
            .center_x(Length::Fill)
            .into()
    } else {
        let cards: Vec<Element<'_, Message>> =
            charts.iter().map(|&id| chart_card(app, id)).collect();
        scrollable(column(cards).spacing(8).padding(10))
            .height(Length::Fill)
            .into()
    };

    column![header, body].spacing(4).into()
}

/// Placeholder card for a chart in the layout
fn chart_card(app: &BoardApp, id: SliceId) -> Element<'_, Message> {
    let (title, subtitle) = match app.entities.slices.get(id) {
        Some(slice) => (slice.slice_name.clone(), slice.viz_type.clone()),
        None => (format!("Chart #{}", id), "not loaded".to_string()),
    };

    container(
        column![
            text(title).size(15).color(TEXT_PRIMARY),
            text(subtitle).size(11).color(TEXT_SECONDARY),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .height(Length::Fixed(90.0))
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(BG_DARK)),
        border: Border {
            color: BORDER_COLOR,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}
