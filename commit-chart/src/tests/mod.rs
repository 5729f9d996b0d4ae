#[cfg(feature = "fuzzing")]
mod fuzzing;
mod selection;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// Build a chart from a year and a list of day indices.
#[macro_export]
macro_rules! chart {
    ( $year: expr $( ; $( $index: expr ),* $( , )? )? ) => {{
        #[allow(unused_mut)]
        let mut chart = $crate::ChartSelection::new($year);
        $( $( chart.insert($index).expect("invalid day index"); )* )?
        chart
    }};
}

/// Years with unusual calendars or at the edges of the supported range.
const NOTABLE_YEARS: [u16; 8] = [1000, 1582, 1900, 2000, 2023, 2024, 9999, 65535];
