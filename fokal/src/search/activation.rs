//! Signal activation: which signals a request turns on, and with what inputs.

use crate::config::SearchConfig;
use crate::models::{GeoPoint, Rgb};
use crate::{FokalError, Result};

use super::params::QueryParams;
use super::signals::{ColorQuery, GeoQuery, SignalKind, TextQuery};

/// The signals a request activated. `None` means the signal does not run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivatedSignals {
    pub text: Option<TextQuery>,
    pub color: Option<ColorQuery>,
    pub geo: Option<GeoQuery>,
}

impl ActivatedSignals {
    /// Inspect `params` and decide, per signal, whether it is eligible.
    ///
    /// Soft problems fall back silently (a bad `pixel_fraction` uses the
    /// configured default). Hard problems on an eligible signal, such as an
    /// unparsable coordinate, fail the whole request with
    /// [`FokalError::InvalidParameter`].
    pub fn detect(params: &QueryParams, config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            text: detect_text(params),
            color: detect_color(params, config)?,
            geo: detect_geo(params)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of activated signals.
    pub fn count(&self) -> usize {
        self.kinds().len()
    }

    pub fn kinds(&self) -> Vec<SignalKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.text.is_some() {
            kinds.push(SignalKind::Text);
        }
        if self.color.is_some() {
            kinds.push(SignalKind::Color);
        }
        if self.geo.is_some() {
            kinds.push(SignalKind::Geo);
        }
        kinds
    }
}

fn detect_text(params: &QueryParams) -> Option<TextQuery> {
    params.get("q").and_then(TextQuery::parse)
}

fn detect_color(params: &QueryParams, config: &SearchConfig) -> Result<Option<ColorQuery>> {
    let Some(hex) = params.get("hex") else {
        return Ok(None);
    };

    // Byte length, not char count: "ééé" is not a colour either way.
    if hex.len() != 6 {
        return Ok(None);
    }

    if Rgb::from_hex(hex).is_none() {
        return Err(FokalError::InvalidParameter(format!(
            "hex parameter must be six hexadecimal digits, got '{}'",
            hex
        )));
    }

    let pixel_fraction = params
        .get("pixel_fraction")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|fraction| (0.0..=1.0).contains(fraction))
        .unwrap_or(config.default_pixel_fraction);

    Ok(Some(ColorQuery {
        hex: hex.to_ascii_lowercase(),
        pixel_fraction,
    }))
}

fn detect_geo(params: &QueryParams) -> Result<Option<GeoQuery>> {
    let (Some(lat), Some(lng), Some(radius)) =
        (params.get("lat"), params.get("lng"), params.get("radius"))
    else {
        return Ok(None);
    };

    let lat = parse_coordinate("lat", lat)?;
    let lng = parse_coordinate("lng", lng)?;
    let radius = parse_coordinate("radius", radius)?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(FokalError::InvalidParameter(format!(
            "lat must be within [-90, 90], got {}",
            lat
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(FokalError::InvalidParameter(format!(
            "lng must be within [-180, 180], got {}",
            lng
        )));
    }
    if radius < 0.0 {
        return Err(FokalError::InvalidParameter(format!(
            "radius cannot be negative, got {}",
            radius
        )));
    }

    Ok(Some(GeoQuery {
        point: GeoPoint::wgs84(lat, lng),
        radius,
    }))
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            FokalError::InvalidParameter(format!("{} must be a number, got '{}'", name, raw))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geo::SRID_WGS84;

    fn detect(pairs: &[(&str, &str)]) -> Result<ActivatedSignals> {
        ActivatedSignals::detect(
            &QueryParams::from_pairs(pairs.iter().copied()),
            &SearchConfig::default(),
        )
    }

    #[test]
    fn test_nothing_activated() {
        let signals = detect(&[("limit", "10")]).unwrap();
        assert!(signals.is_empty());
        assert_eq!(signals.count(), 0);
    }

    #[test]
    fn test_text_requires_non_empty_q() {
        assert!(detect(&[("q", "")]).unwrap().text.is_none());
        assert!(detect(&[("q", "   ")]).unwrap().text.is_none());

        let signals = detect(&[("q", "red barn")]).unwrap();
        assert_eq!(signals.kinds(), vec![SignalKind::Text]);
        assert_eq!(signals.text.unwrap().terms, vec!["red", "barn"]);
    }

    #[test]
    fn test_color_requires_six_characters() {
        assert!(detect(&[("hex", "ff00")]).unwrap().color.is_none());
        assert!(detect(&[("hex", "#ff0000")]).unwrap().color.is_none());
        assert!(detect(&[("hex", "")]).unwrap().color.is_none());
    }

    #[test]
    fn test_color_rejects_non_hex_digits() {
        let err = detect(&[("hex", "zz00zz")]).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_color_pixel_fraction_fallback() {
        let default = SearchConfig::default().default_pixel_fraction;

        let color = detect(&[("hex", "FF0000")]).unwrap().color.unwrap();
        assert_eq!(color.hex, "ff0000");
        assert_eq!(color.pixel_fraction, default);

        for bad in ["abc", "", "-0.2", "3", "NaN"] {
            let color = detect(&[("hex", "ff0000"), ("pixel_fraction", bad)])
                .unwrap()
                .color
                .unwrap();
            assert_eq!(color.pixel_fraction, default, "pixel_fraction={bad}");
        }

        let color = detect(&[("hex", "ff0000"), ("pixel_fraction", "0.25")])
            .unwrap()
            .color
            .unwrap();
        assert_eq!(color.pixel_fraction, 0.25);
    }

    #[test]
    fn test_geo_requires_all_three() {
        assert!(detect(&[("lat", "1"), ("lng", "2")]).unwrap().geo.is_none());
        assert!(detect(&[("lat", "1"), ("radius", "2")]).unwrap().geo.is_none());

        let geo = detect(&[("lat", "40.7"), ("lng", "-74.0"), ("radius", "1500")])
            .unwrap()
            .geo
            .unwrap();
        assert_eq!(geo.point.lat, 40.7);
        assert_eq!(geo.point.lng, -74.0);
        assert_eq!(geo.point.srid, SRID_WGS84);
        assert_eq!(geo.radius, 1500.0);
    }

    #[test]
    fn test_geo_parse_failure_is_hard_error() {
        for pairs in [
            [("lat", "north"), ("lng", "2"), ("radius", "3")],
            [("lat", "1"), ("lng", ""), ("radius", "3")],
            [("lat", "1"), ("lng", "2"), ("radius", "inf")],
            [("lat", "91"), ("lng", "2"), ("radius", "3")],
            [("lat", "1"), ("lng", "-181"), ("radius", "3")],
            [("lat", "1"), ("lng", "2"), ("radius", "-3")],
        ] {
            let err = detect(&pairs).unwrap_err();
            assert!(err.is_invalid_parameter(), "{pairs:?} gave {err}");
        }
    }

    #[test]
    fn test_all_signals() {
        let signals = detect(&[
            ("q", "bridge"),
            ("hex", "00ff00"),
            ("lat", "0"),
            ("lng", "0"),
            ("radius", "10"),
        ])
        .unwrap();
        assert_eq!(
            signals.kinds(),
            vec![SignalKind::Text, SignalKind::Color, SignalKind::Geo]
        );
    }
}
