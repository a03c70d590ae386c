//! Search-box input parsing.
//!
//! Input of the form `"<number>, <number>"` is a literal coordinate pair and
//! recentres the map; anything else is a free-text filter.

use super::geo::Coordinates;

/// Typed interpretation of search-box input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuery {
    /// A literal `lat, lng` pair.
    Coordinates(Coordinates),
    /// Free text, trimmed.
    Text(String),
}

impl ParsedQuery {
    /// Interpret raw search-box input.
    ///
    /// # Examples
    ///
    /// ```
    /// use explorer::domain::ParsedQuery;
    ///
    /// match ParsedQuery::parse("22.7, 75.8") {
    ///     ParsedQuery::Coordinates(point) => assert_eq!(point.lat(), 22.7),
    ///     ParsedQuery::Text(_) => unreachable!(),
    /// }
    /// assert_eq!(ParsedQuery::parse(" library "), ParsedQuery::Text("library".into()));
    /// ```
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        parse_coordinate_pair(trimmed)
            .map(Self::Coordinates)
            .unwrap_or_else(|| Self::Text(trimmed.to_owned()))
    }
}

fn parse_coordinate_pair(input: &str) -> Option<Coordinates> {
    let (lat, lng) = input.split_once(',')?;
    let lat = parse_decimal(lat.trim())?;
    let lng = parse_decimal(lng.trim())?;
    Coordinates::new(lat, lng).ok()
}

/// Accepts `[+-]? digits ("." digits*)?` and nothing else, so inputs such as
/// `1e5` or `.5` stay free text.
fn parse_decimal(raw: &str) -> Option<f64> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for search-box parsing.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("22.7, 75.8", 22.7, 75.8)]
    #[case("22.7,75.8", 22.7, 75.8)]
    #[case("  -33.86 ,  151.2  ", -33.86, 151.2)]
    #[case("+10, -20", 10.0, -20.0)]
    #[case("10., 20", 10.0, 20.0)]
    #[case("95, 200", 95.0, 200.0)]
    fn recognises_coordinate_pairs(#[case] input: &str, #[case] lat: f64, #[case] lng: f64) {
        match ParsedQuery::parse(input) {
            ParsedQuery::Coordinates(point) => {
                assert_eq!(point.lat(), lat);
                assert_eq!(point.lng(), lng);
            }
            ParsedQuery::Text(text) => panic!("expected coordinates, got text {text:?}"),
        }
    }

    #[rstest]
    #[case("library")]
    #[case("22.7")]
    #[case("22.7, 75.8, 1")]
    #[case("lat 22.7, 75.8")]
    #[case("1e3, 5")]
    #[case(".5, 5")]
    #[case("-, 5")]
    #[case("")]
    fn other_input_is_text(#[case] input: &str) {
        assert_eq!(
            ParsedQuery::parse(input),
            ParsedQuery::Text(input.trim().to_owned())
        );
    }
}
