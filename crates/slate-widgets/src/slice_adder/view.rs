//! View function for the slice adder widget

use std::fmt;

use iced::widget::{button, checkbox, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Theme};

use slate_core::{Slice, SortKey};

use super::message::SliceAdderMessage;
use super::state::{SliceAdderBody, SliceAdderState};
use crate::theme::{
    ACCENT_COLOR, BG_DARK, BG_MEDIUM, BORDER_COLOR, CHART_ROW_HEIGHT, CHART_ROW_SUMMARY_HEIGHT,
    ERROR_COLOR, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Sort menu entry (displays the menu label instead of the attribute name)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SortOption(SortKey);

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

static SORT_OPTIONS: [SortOption; 4] = [
    SortOption(SortKey::SliceName),
    SortOption(SortKey::VizType),
    SortOption(SortKey::DatasourceName),
    SortOption(SortKey::ChangedOn),
];

// ─────────────────────────────────────────────────────────────────────────────
// Main view function
// ─────────────────────────────────────────────────────────────────────────────

/// Render the slice adder panel
pub fn slice_adder_view(state: &SliceAdderState) -> Element<'_, SliceAdderMessage> {
    let create_chart = button(text("+ Create new chart").size(12))
        .on_press(SliceAdderMessage::CreateChart)
        .padding([4, 8])
        .style(action_button_style);

    let search = text_input("Filter your charts", &state.search_input)
        .on_input(SliceAdderMessage::SearchInput)
        .padding(8)
        .size(13)
        .width(Length::Fill);

    let sort = pick_list(&SORT_OPTIONS[..], Some(SortOption(state.sort_by)), |option| {
        SliceAdderMessage::SortSelected(option.0)
    })
    .text_size(12)
    .width(Length::Fixed(150.0));

    let only_mine = checkbox(state.show_only_my_charts)
        .label("Show only my charts")
        .on_toggle(SliceAdderMessage::ShowOnlyMyCharts)
        .size(14)
        .text_size(12);

    let controls = column![
        create_chart,
        row![search, sort].spacing(6).align_y(Alignment::Center),
        only_mine,
    ]
    .spacing(8)
    .padding(8);

    column![
        container(controls).style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(BG_MEDIUM)),
            ..Default::default()
        }),
        body_view(state),
    ]
    .spacing(2)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Chart list or placeholder
fn body_view(state: &SliceAdderState) -> Element<'_, SliceAdderMessage> {
    let body = state.body();

    if let SliceAdderBody::ChartList(slices) = body {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let rows: Vec<Element<'_, SliceAdderMessage>> = slices
            .iter()
            .map(|slice| chart_row(slice, state, now_ms))
            .collect();

        return scrollable(column(rows).spacing(1))
            .height(Length::Fill)
            .into();
    }

    let color = match body {
        SliceAdderBody::Error(_) => ERROR_COLOR,
        _ => TEXT_SECONDARY,
    };
    let message = body.placeholder_text().unwrap_or_default();

    container(text(message).size(12).color(color))
        .padding(20)
        .center_x(Length::Fill)
        .into()
}

/// One chart: name + badge/button on the first line, metadata below
fn chart_row<'a>(
    slice: &'a Slice,
    state: &'a SliceAdderState,
    now_ms: i64,
) -> Element<'a, SliceAdderMessage> {
    let is_added = state.is_selected(slice.id);
    let can_edit = state.props().edit_mode;

    let trailing: Element<'a, SliceAdderMessage> = match (is_added, can_edit) {
        (true, true) => button(text("Remove").size(11))
            .on_press(SliceAdderMessage::ToggleSlice(slice.id))
            .padding([2, 6])
            .style(action_button_style)
            .into(),
        (false, true) => button(text("Add").size(11))
            .on_press(SliceAdderMessage::ToggleSlice(slice.id))
            .padding([2, 6])
            .style(action_button_style)
            .into(),
        (true, false) => text("Added").size(11).color(ACCENT_COLOR).into(),
        (false, false) => Space::new().width(Length::Shrink).into(),
    };

    let title = row![
        text(&slice.slice_name).size(13).color(TEXT_PRIMARY),
        Space::new().width(Length::Fill),
        trailing,
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let meta = text(format!(
        "{} · {} · {}",
        slice.viz_type,
        slice.datasource_label(),
        slice.modified_label(now_ms)
    ))
    .size(11)
    .color(TEXT_SECONDARY);

    let mut lines = column![title, meta].spacing(2);
    let mut height = CHART_ROW_HEIGHT;
    if let Some(summary) = slice.summary() {
        lines = lines.push(text(summary).size(11).color(TEXT_SECONDARY));
        height += CHART_ROW_SUMMARY_HEIGHT;
    }

    container(lines)
        .padding(Padding::from([6, 8]))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(if is_added { BG_MEDIUM } else { BG_DARK })),
            border: Border {
                color: BORDER_COLOR,
                width: 0.0,
                radius: 2.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn action_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => BG_MEDIUM,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: ACCENT_COLOR,
        border: Border {
            color: ACCENT_COLOR,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}
