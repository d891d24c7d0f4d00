use chrono::NaiveDate;
use rgb::RGB8;

pub fn parse_time_impl(h: &str, m: &str, s: &str) -> Result<u32, std::num::ParseIntError> {
    let hours: u32 = h.parse()?;
    let minutes: u32 = m.parse()?;
    let seconds: u32 = s.parse()?;
    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Number of seconds of a `HH:MM:SS` time since the start of the service day. Hours can go past 23
pub fn parse_time(s: &str) -> Result<u32, crate::Error> {
    let mk_err = || crate::Error::InvalidTime(s.to_owned());

    let s = s.trim();
    if s.len() < 7 {
        Err(mk_err())
    } else {
        let mut parts = s.split(':');

        let hour = parts.next().ok_or_else(mk_err)?;
        let min = parts.next().ok_or_else(mk_err)?;
        let sec = parts.next().ok_or_else(mk_err)?;
        if parts.next().is_some() {
            return Err(mk_err());
        }

        if min.len() != 2 || sec.len() != 2 {
            return Err(mk_err());
        }

        let seconds = parse_time_impl(hour, min, sec).map_err(|_| mk_err())?;
        // the parse above succeeded, so both are two digits numbers
        if min > "59" || sec > "59" {
            return Err(mk_err());
        }
        Ok(seconds)
    }
}

/// Parses a `YYYYMMDD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, crate::Error> {
    let s = s.trim();
    if s.len() != 8 {
        return Err(crate::Error::InvalidDate(s.to_owned()));
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| crate::Error::InvalidDate(s.to_owned()))
}

/// Parses a six characters hexadecimal color. An empty string gives the default color
pub fn parse_color(
    s: &str,
    default: impl std::ops::FnOnce() -> RGB8,
) -> Result<RGB8, crate::Error> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(default());
    }
    if s.len() != 6 || !s.is_ascii() {
        return Err(crate::Error::InvalidColor(s.to_owned()));
    }
    let r =
        u8::from_str_radix(&s[0..2], 16).map_err(|_| crate::Error::InvalidColor(s.to_owned()))?;
    let g =
        u8::from_str_radix(&s[2..4], 16).map_err(|_| crate::Error::InvalidColor(s.to_owned()))?;
    let b =
        u8::from_str_radix(&s[4..6], 16).map_err(|_| crate::Error::InvalidColor(s.to_owned()))?;
    Ok(RGB8::new(r, g, b))
}

pub fn default_route_color() -> RGB8 {
    RGB8::new(255, 255, 255)
}

#[test]
fn test_parse_time() {
    assert_eq!(Some(3600 + 60 + 1), parse_time("01:01:01").ok());
    assert_eq!(Some((172 * 3600) + (35 * 60) + 42), parse_time("172:35:42").ok());
    assert_eq!(Some(8 * 3600), parse_time("8:00:00").ok());
    assert!(parse_time("08:00").is_err());
    assert!(parse_time("08:0:00").is_err());
    assert!(parse_time("08:61:00").is_err());
    assert!(parse_time("08:00:60").is_err());
    assert!(parse_time("08:00:00:00").is_err());
    assert!(parse_time("ab:cd:ef").is_err());
}

#[test]
fn test_parse_color() {
    assert_eq!(
        RGB8::new(0, 0xFF, 0xFF),
        parse_color("00FFFF", default_route_color).unwrap()
    );
    assert_eq!(
        default_route_color(),
        parse_color("", default_route_color).unwrap()
    );
    assert!(parse_color("FFF", default_route_color).is_err());
    assert!(parse_color("GGGGGG", default_route_color).is_err());
}

#[test]
fn test_parse_date() {
    assert_eq!(
        NaiveDate::from_ymd_opt(2018, 7, 9),
        parse_date("20180709").ok()
    );
    assert!(parse_date("2018-07-09").is_err());
    assert!(parse_date("20181309").is_err());
}
