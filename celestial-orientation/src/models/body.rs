use crate::models::{IauMoon, UniformRotation};
use crate::parameters::OrientationModel;
use celestial_core::{CelestialError, CelestialResult};
use std::fmt;
use std::str::FromStr;

/// Bodies with a built-in orientation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Body {
    #[default]
    Moon,
    Sun,
    Earth,
    Mars,
}

impl Body {
    pub const ALL: [Body; 4] = [Body::Moon, Body::Sun, Body::Earth, Body::Mars];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Moon => "moon",
            Body::Sun => "sun",
            Body::Earth => "earth",
            Body::Mars => "mars",
        }
    }

    pub fn model(&self) -> Box<dyn OrientationModel + Send + Sync> {
        match self {
            Body::Moon => Box::new(IauMoon),
            Body::Sun => Box::new(UniformRotation::sun()),
            Body::Earth => Box::new(UniformRotation::earth()),
            Body::Mars => Box::new(UniformRotation::mars()),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = CelestialError;

    fn from_str(s: &str) -> CelestialResult<Self> {
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CelestialError::invalid_argument(
                    "Body::from_str",
                    "body",
                    &format!("unknown body '{}', expected one of moon, sun, earth, mars", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::TT;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("moon".parse::<Body>().unwrap(), Body::Moon);
        assert_eq!("MARS".parse::<Body>().unwrap(), Body::Mars);
        assert_eq!(" Earth ".parse::<Body>().unwrap(), Body::Earth);
    }

    #[test]
    fn test_parse_unknown_names_argument() {
        let err = "pluto".parse::<Body>().unwrap_err();
        assert_eq!(err.argument(), Some("body"));
        assert!(err.to_string().contains("pluto"));
    }

    #[test]
    fn test_display_round_trips() {
        for body in Body::ALL {
            assert_eq!(body.to_string().parse::<Body>().unwrap(), body);
        }
    }

    #[test]
    fn test_model_names_match() {
        for body in Body::ALL {
            assert_eq!(body.model().name(), body.name());
        }
    }

    #[test]
    fn test_default_is_moon() {
        assert_eq!(Body::default(), Body::Moon);
        let epoch = TT::j2000();
        assert_eq!(Body::default().model().evaluate(&epoch), IauMoon.evaluate(&epoch));
    }
}
