use std::fmt;

use serde::{Deserialize, Serialize};

// a whole-number percentage in 0..=100
//
// the catalog files historically stored progress either as a bare number or as
// a "54%" string, so both are accepted on the way in.  anything outside the
// range is clamped rather than rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PercentRepr", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    pub fn new(value: u8) -> Self {
        Percent(value.min(100))
    }

    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Percent::ZERO;
        }

        Percent(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> u8 {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PercentRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<PercentRepr> for Percent {
    type Error = String;

    fn try_from(repr: PercentRepr) -> Result<Self, Self::Error> {
        match repr {
            PercentRepr::Int(v) => Ok(Percent(v.clamp(0, 100) as u8)),
            PercentRepr::Float(v) => Ok(Percent::from_f64(v)),
            PercentRepr::Text(s) => {
                let trimmed = s.trim();
                let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

                digits
                    .parse::<f64>()
                    .map(Percent::from_f64)
                    .map_err(|_| format!("invalid percentage: {s:?}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_strings() {
        let values: Vec<Percent> = serde_json::from_str(r#"[42, 54.6, "70%", " 12 % ", "3"]"#).unwrap();

        assert_eq!(
            values,
            vec![
                Percent::new(42),
                Percent::new(55),
                Percent::new(70),
                Percent::new(12),
                Percent::new(3)
            ]
        );
    }

    #[test]
    fn clamps_out_of_range() {
        let values: Vec<Percent> = serde_json::from_str(r#"[-5, 250, "140%"]"#).unwrap();

        assert_eq!(values, vec![Percent::ZERO, Percent::FULL, Percent::FULL]);
        assert_eq!(Percent::new(101), Percent::FULL);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Percent>(r#""most of it""#).is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Percent::new(42)).unwrap(), "42");
        assert_eq!(Percent::new(42).to_string(), "42");
    }
}
