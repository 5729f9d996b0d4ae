use std::env;
use std::process::ExitCode;

use chrono::NaiveDate;

use commit_chart::ChartSelection;

const USAGE: &str = "Usage:
    ./chart encode <YEAR> [YYYY-MM-DD ...]
    ./chart decode <CHART>";

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    match args {
        [cmd, year, dates @ ..] if cmd == "encode" => {
            let dates = dates
                .iter()
                .map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
                .collect::<Result<Vec<_>, _>>()?;

            let chart = ChartSelection::from_dates(year.parse()?, dates)?;
            println!("{}", chart.encode()?);
        }
        [cmd, text] if cmd == "decode" => {
            let chart: ChartSelection = text.parse()?;
            println!(" - year: {}", chart.year());
            println!(" - selected days: {}/{}", chart.len(), chart.day_count());

            for date in chart.dates() {
                println!("{}", date.format("%A, %-d %B %Y"));
            }
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<_> = env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
