use crate::filter::FilterError;

/// A price is usable when it is a finite, non-negative number.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// The offer price when one applies, otherwise the base price.
pub fn effective_price(base_price: Option<f64>, offer_price: Option<f64>) -> Option<f64> {
    offer_price.or(base_price)
}

/// Whole-percent saving of `offer_price` against `base_price`.
///
/// `None` when there is no base price to compare with or the offer is not cheaper.
pub fn discount_percent(base_price: Option<f64>, offer_price: f64) -> Option<u32> {
    let base = base_price.filter(|b| is_valid_price(*b) && *b > 0.0)?;
    if !is_valid_price(offer_price) || offer_price >= base {
        return None;
    }

    let percent = ((base - offer_price) / base * 100.0).round();
    if percent <= 0.0 {
        None
    } else {
        Some(percent as u32)
    }
}

/// Parse one raw price bound from the query string.
///
/// Blank means "no bound" and yields `Ok(None)`. Anything else must parse to a finite number.
pub fn parse_price_bound(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, FilterError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FilterError::InvalidPriceBound {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(Some(100.0), 40.0), Some(60));
        assert_eq!(discount_percent(Some(30.0), 20.0), Some(33));
        assert_eq!(discount_percent(Some(100.0), 120.0), None);
        assert_eq!(discount_percent(None, 10.0), None);
        assert_eq!(discount_percent(Some(0.0), 0.0), None);
    }

    #[test]
    fn test_parse_price_bound_blank_is_unset() {
        assert_eq!(parse_price_bound("min", None).unwrap(), None);
        assert_eq!(parse_price_bound("min", Some("")).unwrap(), None);
        assert_eq!(parse_price_bound("min", Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_parse_price_bound_accepts_numbers() {
        assert_eq!(parse_price_bound("max", Some("50")).unwrap(), Some(50.0));
        assert_eq!(parse_price_bound("max", Some(" 12.5 ")).unwrap(), Some(12.5));
    }

    #[test]
    fn test_parse_price_bound_rejects_garbage() {
        let err = parse_price_bound("max", Some("cincuenta")).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidPriceBound { field: "max", value: "cincuenta".to_string() }
        );
        assert!(parse_price_bound("min", Some("NaN")).is_err());
        assert!(parse_price_bound("min", Some("inf")).is_err());
    }

    #[test]
    fn test_effective_price_prefers_offer() {
        assert_eq!(effective_price(Some(100.0), Some(40.0)), Some(40.0));
        assert_eq!(effective_price(Some(100.0), None), Some(100.0));
        assert_eq!(effective_price(None, None), None);
    }
}
