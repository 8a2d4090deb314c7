// SPDX-License-Identifier: MPL-2.0
//! Equal-width card grid.

use crate::ui::design_tokens::spacing;
use iced::widget::{container, Column, Row};
use iced::{Element, Length};

/// Lays `items` out in rows of `columns` equally wide cells.
///
/// The last row is padded with empty cells so every card keeps the same
/// width. `columns` of zero is treated as one.
pub fn grid<'a, Message: 'a>(items: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
        for _ in 0..columns {
            let cell: Element<'a, Message> = match items.next() {
                Some(item) => item,
                None => Row::new().into(),
            };
            row = row.push(container(cell).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}
