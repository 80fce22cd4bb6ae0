use std::path::PathBuf;

use clap::{builder::ValueParser, value_parser, Arg, ArgAction, Command};
use wavsnip_core::Segment;

/// Parse a `START..END` sample range into a [`Segment`].
///
/// Both bounds are unsigned sample indices and `start` must not exceed
/// `end`. The half-open form matches how the extraction pipeline slices
/// buffers: `0..3` keeps samples 0, 1, and 2. Whether the range fits the
/// recording is only known once the file is decoded, so that check stays in
/// the pipeline.
pub fn parse_segment(value: &str) -> Result<Segment, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("invalid segment '{value}': expected START..END"))?;

    let parse_bound = |bound: &str, name: &str| {
        bound
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid segment '{value}': {name} is not an unsigned integer"))
    };

    let start = parse_bound(start, "start")?;
    let end = parse_bound(end, "end")?;

    if end < start {
        return Err(format!("invalid segment '{value}': start exceeds end"));
    }

    Ok(Segment::new(start, end))
}

pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Normalize and rescale wave recordings in bulk")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Recording file or directory tree to process")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT_DIR")
                .help("Directory where processed recordings are written")
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("gain-db")
                .short('g')
                .long("gain-db")
                .value_name("DECIBELS")
                .help("Decibel target for the output peak")
                .default_value("30")
                .value_parser(value_parser!(f32)),
        )
        .arg(
            Arg::new("segment")
                .short('s')
                .long("segment")
                .value_name("START..END")
                .help("Keep only this sample range; repeat to concatenate several")
                .action(ArgAction::Append)
                .value_parser(ValueParser::new(parse_segment)),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List discovered recordings without processing them")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segment_accepts_basic_ranges() {
        assert_eq!(parse_segment("0..3").unwrap(), Segment::new(0, 3));
        assert_eq!(parse_segment("5..5").unwrap(), Segment::new(5, 5));
        assert_eq!(
            parse_segment("44100..88200").unwrap(),
            Segment::new(44_100, 88_200)
        );
    }

    #[test]
    fn parse_segment_tolerates_whitespace_around_bounds() {
        assert_eq!(parse_segment("3 .. 9").unwrap(), Segment::new(3, 9));
    }

    #[test]
    fn parse_segment_rejects_reversed_range() {
        assert!(parse_segment("5..3").is_err());
    }

    #[test]
    fn parse_segment_rejects_signed_bounds() {
        assert!(parse_segment("-1..2").is_err());
    }

    #[test]
    fn parse_segment_rejects_missing_separator() {
        assert!(parse_segment("3").is_err());
    }

    #[test]
    fn parse_segment_rejects_empty_bounds() {
        assert!(parse_segment("..").is_err());
        assert!(parse_segment("3..").is_err());
        assert!(parse_segment("..3").is_err());
    }

    #[test]
    fn parse_segment_rejects_non_numeric_bounds() {
        assert!(parse_segment("a..b").is_err());
    }
}
