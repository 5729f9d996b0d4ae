use crate::error::{Error, Result};
use crate::{chart, date, decode, ChartSelection};

#[test]
fn insert_and_remove() -> Result<()> {
    let mut chart = ChartSelection::new(2024);
    assert!(chart.is_empty());

    assert!(chart.insert(10)?);
    assert!(chart.insert(3)?);
    assert!(!chart.insert(10)?);
    assert_eq!(chart.len(), 2);
    assert!(chart.contains(3));
    assert!(chart.contains(10));
    assert!(!chart.contains(4));

    assert!(chart.remove(10));
    assert!(!chart.remove(10));
    assert!(!chart.remove(u16::MAX));
    assert_eq!(chart.indices().collect::<Vec<_>>(), [3]);
    Ok(())
}

#[test]
fn insert_out_of_year() {
    let mut chart = ChartSelection::new(2023);
    assert_eq!(chart.insert(365), Err(Error::DateOutOfRange { year: 2023, index: 365 }));
    assert_eq!(chart.insert(u16::MAX), Err(Error::DateOutOfRange { year: 2023, index: 65535 }));
    assert!(chart.is_empty());

    let mut chart = ChartSelection::new(2024);
    assert_eq!(chart.insert(365), Ok(true));
}

#[test]
fn dates() -> Result<()> {
    let mut chart = ChartSelection::new(2024);
    assert!(chart.insert_date(date!("2024-12-31"))?);
    assert!(chart.insert_date(date!("2024-02-29"))?);
    assert!(!chart.insert_date(date!("2024-02-29"))?);

    assert_eq!(
        chart.insert_date(date!("2023-06-01")),
        Err(Error::DateNotInYear { year: 2024, date: date!("2023-06-01") }),
    );

    assert!(chart.contains_date(date!("2024-02-29")));
    assert!(!chart.contains_date(date!("2024-03-01")));
    assert!(!chart.contains_date(date!("2025-02-28")));
    assert_eq!(chart.indices().collect::<Vec<_>>(), [59, 365]);

    assert_eq!(
        chart.dates().collect::<Vec<_>>(),
        [date!("2024-02-29"), date!("2024-12-31")],
    );

    Ok(())
}

#[test]
fn from_dates() -> Result<()> {
    let chart = ChartSelection::from_dates(
        2023,
        [date!("2023-01-02"), date!("2023-01-01"), date!("2023-01-02")],
    )?;

    assert_eq!(chart, chart!(2023; 0, 1));

    assert_eq!(
        ChartSelection::from_dates(2023, [date!("2024-01-01")]),
        Err(Error::DateNotInYear { year: 2023, date: date!("2024-01-01") }),
    );

    Ok(())
}

#[test]
fn flags() -> Result<()> {
    let chart = chart!(2023; 0, 2, 364);
    let flags = chart.to_flags();
    assert_eq!(flags.len(), 365);
    assert_eq!(flags.iter().filter(|&&flag| flag).count(), 3);
    assert!(flags[0] && !flags[1] && flags[2] && flags[364]);
    assert_eq!(ChartSelection::from_flags(2023, flags)?, chart);

    // Trailing unselected days are ignored
    let flags = [true].into_iter().chain(std::iter::repeat(false).take(1000));
    assert_eq!(ChartSelection::from_flags(2023, flags)?, chart!(2023; 0));

    let flags = std::iter::repeat(false).take(366).chain([true]);
    assert_eq!(
        ChartSelection::from_flags(2024, flags),
        Err(Error::DateOutOfRange { year: 2024, index: 366 }),
    );

    let flags = std::iter::repeat(false).take(70_000).chain([true]);
    assert_eq!(
        ChartSelection::from_flags(2024, flags),
        Err(Error::DateOutOfRange { year: 2024, index: 70_000 }),
    );

    Ok(())
}

#[test]
fn toggle() -> Result<()> {
    let mut chart = chart!(2023; 5);
    assert!(!chart.toggle(5)?);
    assert!(chart.toggle(6)?);
    assert_eq!(chart, chart!(2023; 6));
    assert!(chart.toggle(365).is_err());
    Ok(())
}

#[test]
fn parse() -> Result<()> {
    let chart: ChartSelection = "0B-iB".parse()?;
    assert_eq!(chart, chart!(2024; 0, 7));
    assert_eq!(chart.encode()?, "0B-iB");
    assert_eq!(ChartSelection::decode("0B-iB")?, chart);
    assert!("1B-iB".parse::<ChartSelection>().is_err());
    Ok(())
}

#[test]
fn leap_year_boundary() -> Result<()> {
    let text = chart!(2024; 365).encode()?;
    assert_eq!(decode(&text)?.dates().collect::<Vec<_>>(), [date!("2024-12-31")]);
    assert!(ChartSelection::new(2023).insert(365).is_err());
    Ok(())
}

#[test]
fn debug() {
    assert_eq!(
        format!("{:?}", chart!(2024; 59, 0)),
        "ChartSelection { year: 2024, days: {2024-01-01, 2024-02-29} }",
    );

    assert_eq!(
        format!("{:?}", chart!(2024)),
        "ChartSelection { year: 2024, days: {} }",
    );
}
