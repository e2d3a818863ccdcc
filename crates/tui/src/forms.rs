//! Form input validation. Malformed input is rejected here, before anything
//! is sent to the service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Parses a required amount. Negative amounts are rejected at entry.
pub fn parse_monto(input: &str) -> Result<Decimal, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Ingresa un monto.".to_string());
    }
    let monto: Decimal = trimmed
        .parse()
        .map_err(|_| "Monto no válido.".to_string())?;
    if monto.is_sign_negative() {
        return Err("El monto no puede ser negativo.".to_string());
    }
    Ok(monto)
}

/// Parses an optional amount: empty input means no amount.
pub fn parse_monto_opcional(input: &str) -> Result<Option<Decimal>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_monto(input).map(Some)
}

/// Parses a calendar date in `AAAA-MM-DD` form.
pub fn parse_fecha(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| "Fecha no válida (AAAA-MM-DD).".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_monto_accepts_decimals() {
        assert_eq!(parse_monto("100").unwrap(), Decimal::new(100, 0));
        assert_eq!(parse_monto(" 12.50 ").unwrap(), Decimal::new(1250, 2));
    }

    #[test]
    fn parse_monto_rejects_garbage_and_negatives() {
        assert!(parse_monto("").is_err());
        assert!(parse_monto("abc").is_err());
        assert!(parse_monto("12.5.3").is_err());
        assert!(parse_monto("-5").is_err());
    }

    #[test]
    fn parse_monto_opcional_treats_empty_as_none() {
        assert_eq!(parse_monto_opcional("  ").unwrap(), None);
        assert_eq!(
            parse_monto_opcional("8.25").unwrap(),
            Some(Decimal::new(825, 2))
        );
        assert!(parse_monto_opcional("x").is_err());
    }

    #[test]
    fn parse_fecha_wants_iso_dates() {
        assert_eq!(
            parse_fecha("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_fecha("01/03/2024").is_err());
        assert!(parse_fecha("").is_err());
    }
}
