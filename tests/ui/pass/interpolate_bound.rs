use interlog::{interpolate, Level};

fn main() -> Result<(), interlog::Error> {
    let logger = interlog::from_fn(|record| {
        assert_eq!(Level::Error, record.level());
        assert_eq!(2, record.state().args().len());
    });

    let user = String::from("Ferris");
    let attempts = 3u8;

    let message = interpolate!("{user} failed after {attempts} attempts");

    interlog::log_error(Some(&logger), message)?;
    interlog::log_error_id(Some(&logger), 10, message)?;

    Ok(())
}
