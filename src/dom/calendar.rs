use super::query_all;
use crate::model::calendar::{today_cell, TODAY_CLASS};
use chrono::NaiveDate;
use web_sys::{Document, Element};

/// Marks the calendar cell for `today` and clears the mark everywhere else.
pub fn highlight_today(document: &Document, today: NaiveDate) -> Option<Element> {
    let cells = query_all(document, ".calendar-day[data-date]");
    let dates: Vec<String> = cells
        .iter()
        .map(|cell| cell.get_attribute("data-date").unwrap_or_default())
        .collect();
    let index = today_cell(dates.iter().map(String::as_str), today);

    for (position, cell) in cells.iter().enumerate() {
        let _ = cell
            .class_list()
            .toggle_with_force(TODAY_CLASS, Some(position) == index);
    }

    index.map(|index| cells[index].clone())
}
