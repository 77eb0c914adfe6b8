use interlog::{interpolate, LoggerExt};

fn main() -> Result<(), interlog::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let logger = interlog_log::global_logger();

    let a = "text";
    let b = 42;

    log::info!("Using a pre-rendered message: a = {a}, b = {b}");
    logger.log_info(interpolate!("Using an interpolated message: a = {a}, b = {b}"));

    interlog::log_warn_id(
        Some(&logger),
        interlog::EventId::new(1).with_name("Demo"),
        interpolate!("Using a free function with an event id: a = {a}"),
    )?;

    Ok(())
}
