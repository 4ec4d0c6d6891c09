use crate::errors::OrbitVizError;
use crate::models::OrbitalElements;
use std::fmt;

/// The six entries of the element form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SemiMajorAxis,
    Eccentricity,
    Inclination,
    Raan,
    ArgumentOfPerigee,
    TrueAnomaly,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::SemiMajorAxis,
        Field::Eccentricity,
        Field::Inclination,
        Field::Raan,
        Field::ArgumentOfPerigee,
        Field::TrueAnomaly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::SemiMajorAxis => "Semi-major axis (a)",
            Field::Eccentricity => "Eccentricity (e)",
            Field::Inclination => "Inclination (i)",
            Field::Raan => "RAAN",
            Field::ArgumentOfPerigee => "Argument of perigee (ω)",
            Field::TrueAnomaly => "True anomaly (ν)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::SemiMajorAxis => "km",
            Field::Eccentricity => "",
            _ => "°",
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::SemiMajorAxis => 0,
            Field::Eccentricity => 1,
            Field::Inclination => 2,
            Field::Raan => 3,
            Field::ArgumentOfPerigee => 4,
            Field::TrueAnomaly => 5,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keystroke check for a numeric entry. An empty entry and a lone minus sign
/// are accepted as input in progress; surrounding whitespace is ignored.
pub fn is_acceptable_entry(text: &str) -> bool {
    text.is_empty() || text == "-" || text.trim().parse::<f64>().is_ok()
}

/// Raw text of the six element entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementForm {
    entries: [String; 6],
}

impl ElementForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every entry, skipping the keystroke check. Parsing still rejects bad text.
    pub fn from_entries(entries: [&str; 6]) -> Self {
        ElementForm {
            entries: entries.map(str::to_owned),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.entries[field.index()]
    }

    /// Replaces an entry. Returns `false` and leaves the entry untouched when
    /// `text` is not an acceptable numeric entry.
    pub fn set(&mut self, field: Field, text: &str) -> bool {
        if !is_acceptable_entry(text) {
            tracing::debug!(%field, text, "rejected entry");
            return false;
        }
        self.entries[field.index()] = text.to_owned();
        true
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(String::clear);
    }

    /// Parses all six entries, failing on the first one in form order that is
    /// not a number. Entries still in progress ("" or "-") fail too.
    pub fn parse(&self) -> Result<OrbitalElements, OrbitVizError> {
        let mut values = [0.0_f64; 6];
        for field in Field::ALL {
            let text = self.get(field);
            values[field.index()] = text.trim().parse().map_err(|_| OrbitVizError::InvalidField {
                field,
                value: text.to_owned(),
            })?;
        }
        let [a, e, i, raan, argp, nu] = values;
        Ok(OrbitalElements::new(a, e, i, raan, argp, nu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("" => true; "empty")]
    #[test_case("-" => true; "lone minus")]
    #[test_case("7000" => true; "integer")]
    #[test_case("-12.5" => true; "negative decimal")]
    #[test_case("1e-3" => true; "exponent")]
    #[test_case("inf" => true; "infinity parses")]
    #[test_case("1e" => false; "incomplete exponent")]
    #[test_case("12a" => false; "trailing letter")]
    #[test_case(" 1" => true; "leading space")]
    #[test_case("7000 " => true; "trailing space")]
    #[test_case("   " => false; "only whitespace")]
    #[test_case(" - " => false; "padded lone minus")]
    #[test_case("--" => false; "double minus")]
    fn entry_check(text: &str) -> bool {
        is_acceptable_entry(text)
    }

    #[test]
    fn set_rejects_bad_text_and_keeps_previous_value() {
        let mut form = ElementForm::new();
        assert!(form.set(Field::Eccentricity, "0.1"));
        assert!(!form.set(Field::Eccentricity, "0.1x"));
        assert_eq!(form.get(Field::Eccentricity), "0.1");
    }

    #[test]
    fn parse_full_form() {
        let form = ElementForm::from_entries(["7000", "0.1", "28.5", "40", "90", "0"]);
        let elements = form.parse().unwrap();
        assert_eq!(
            elements,
            OrbitalElements::new(7000.0, 0.1, 28.5, 40.0, 90.0, 0.0)
        );
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        let form = ElementForm::from_entries([" 7000", "0.1 ", "\t28.5\n", "40", "90", "0"]);
        assert_eq!(
            form.parse().unwrap(),
            OrbitalElements::new(7000.0, 0.1, 28.5, 40.0, 90.0, 0.0)
        );
    }

    #[test]
    fn parse_error_keeps_raw_text() {
        let form = ElementForm::from_entries(["7000", " 0.1x ", "0", "0", "0", "0"]);
        assert_eq!(
            form.parse().unwrap_err(),
            OrbitVizError::InvalidField {
                field: Field::Eccentricity,
                value: " 0.1x ".to_owned(),
            }
        );
    }

    #[test]
    fn parse_reports_first_bad_field() {
        let form = ElementForm::from_entries(["7000", "0.1", "-", "abc", "", "0"]);
        assert_eq!(
            form.parse().unwrap_err(),
            OrbitVizError::InvalidField {
                field: Field::Inclination,
                value: "-".to_owned(),
            }
        );
    }

    #[test]
    fn empty_form_fails_on_semi_major_axis() {
        let err = ElementForm::new().parse().unwrap_err();
        assert_eq!(
            err,
            OrbitVizError::InvalidField {
                field: Field::SemiMajorAxis,
                value: String::new(),
            }
        );
    }

    #[test]
    fn clear_empties_every_entry() {
        let mut form = ElementForm::from_entries(["1", "2", "3", "4", "5", "6"]);
        form.clear();
        assert!(Field::ALL.iter().all(|f| form.get(*f).is_empty()));
    }
}
