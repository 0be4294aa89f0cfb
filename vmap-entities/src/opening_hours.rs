use std::str::FromStr;

/// An opening-hours specification in the structured OSM syntax.
///
/// The string is not interpreted here; evaluation is delegated to an
/// external library behind a gateway. Only a minimal length sanity check
/// is applied on construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHours(String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHoursParseError;

impl OpeningHours {
    pub const fn min_len() -> usize {
        4
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OpeningHours {
    type Err = OpeningHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() < Self::min_len() {
            return Err(OpeningHoursParseError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<String> for OpeningHours {
    fn from(from: String) -> Self {
        let res = Self(from);
        debug_assert_eq!(Ok(&res), res.0.as_str().parse().as_ref());
        res
    }
}

impl From<OpeningHours> for String {
    fn from(from: OpeningHours) -> Self {
        from.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_too_short_specifications() {
        assert!("".parse::<OpeningHours>().is_err());
        assert!(" 24 ".parse::<OpeningHours>().is_err());
        assert!("24/7".parse::<OpeningHours>().is_ok());
    }

    #[test]
    fn trim_specification() {
        let hours: OpeningHours = " Mo-Fr 08:00-19:00 ".parse().unwrap();
        assert_eq!(hours.as_str(), "Mo-Fr 08:00-19:00");
    }
}
