use chrono::NaiveDate;

pub const TODAY_CLASS: &str = "today";

/// ISO `YYYY-MM-DD` key used in `data-date` attributes.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Index of the first cell whose `data-date` matches `today`.
pub fn today_cell<'a, I>(cells: I, today: NaiveDate) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let key = date_key(today);
    cells.into_iter().position(|date| date == key)
}
