//! Cálculo de precios y duración de alquiler
//!
//! Funciones puras: el mismo input produce siempre el mismo desglose, tanto
//! en el submit del booking como al re-renderizar un recibo.
//!
//! Política de negocio: el mes comercial es fijo de 30 días (nunca aritmética
//! de calendario), así que 12 meses son 360 días. El depósito de garantía es
//! siempre exactamente una mensualidad, sin importar la duración.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_positive, validate_range};

/// Días por mes comercial
pub const DAYS_PER_MONTH: i64 = 30;

/// Duración mínima y máxima del alquiler, en meses
pub const MIN_MONTHS: i32 = 1;
pub const MAX_MONTHS: i32 = 12;

/// Desglose de precio de un alquiler
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub months: i32,
    pub monthly_rate: Decimal,
    pub pickup_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub rental_amount: Decimal,
    pub security_deposit: Decimal,
    pub total_due_now: Decimal,
}

/// Calcular el desglose de precio para un alquiler
///
/// Rechaza la cotización cuando `months` está fuera de [1,12] o la tarifa
/// mensual no es positiva; el caller debe tratar esto como "input no listo"
/// y nunca persistir.
pub fn quote(monthly_rate: Decimal, pickup_date: DateTime<Utc>, months: i32) -> AppResult<Quote> {
    validate_range(months, MIN_MONTHS, MAX_MONTHS).map_err(|_| {
        AppError::ValidationError(format!(
            "La duración debe estar entre {} y {} meses",
            MIN_MONTHS, MAX_MONTHS
        ))
    })?;

    validate_positive(monthly_rate).map_err(|_| {
        AppError::ValidationError("La tarifa mensual debe ser positiva".to_string())
    })?;

    let return_date = pickup_date + Duration::days(months as i64 * DAYS_PER_MONTH);
    let rental_amount = Decimal::from(months) * monthly_rate;
    let security_deposit = monthly_rate;

    Ok(Quote {
        months,
        monthly_rate,
        pickup_date,
        return_date,
        rental_amount,
        security_deposit,
        total_due_now: rental_amount + security_deposit,
    })
}

/// Días de alquiler entre pickup y return
pub fn rental_days(pickup_date: DateTime<Utc>, return_date: DateTime<Utc>) -> i64 {
    (return_date - pickup_date).num_days()
}

/// Re-derivar los meses a mostrar a partir de los días: ceil(days / 30)
///
/// Debe coincidir con el `rental_months` almacenado; una divergencia indica
/// un bug de integridad de datos.
pub fn display_months(days: i64) -> i32 {
    if days <= 0 {
        return 0;
    }
    ((days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rate(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_quote_arithmetic_for_all_valid_months() {
        let pickup = Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap();
        for months in 1..=12 {
            let q = quote(rate(750), pickup, months).unwrap();
            assert_eq!(q.rental_amount, Decimal::from(months) * rate(750));
            assert_eq!(q.security_deposit, rate(750));
            assert_eq!(q.total_due_now, q.rental_amount + q.security_deposit);
        }
    }

    #[test]
    fn test_return_date_uses_fixed_30_day_months() {
        let pickup = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        for months in 1..=12 {
            let q = quote(rate(500), pickup, months).unwrap();
            // Exactamente months * 30 * 24h, nunca meses de calendario
            assert_eq!(q.return_date - q.pickup_date, Duration::days(months as i64 * 30));
        }
        // 12 meses son 360 días, no 365
        let q = quote(rate(500), pickup, 12).unwrap();
        assert_eq!(rental_days(q.pickup_date, q.return_date), 360);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let pickup = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        let a = quote(rate(625), pickup, 4).unwrap();
        let b = quote(rate(625), pickup, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_scenario_500_monthly_3_months() {
        // Vehículo a $500/mes, pickup 2025-01-01T10:00, 3 meses
        let pickup = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let q = quote(rate(500), pickup, 3).unwrap();

        assert_eq!(q.rental_amount, rate(1500));
        assert_eq!(q.security_deposit, rate(500));
        assert_eq!(q.total_due_now, rate(2000));
        assert_eq!(q.return_date, pickup + Duration::days(90));
        assert_eq!(
            q.return_date,
            Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_months_out_of_range() {
        let pickup = Utc::now();
        assert!(quote(rate(500), pickup, 0).is_err());
        assert!(quote(rate(500), pickup, -1).is_err());
        assert!(quote(rate(500), pickup, 13).is_err());
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let pickup = Utc::now();
        assert!(quote(Decimal::ZERO, pickup, 3).is_err());
        assert!(quote(rate(-100), pickup, 3).is_err());
    }

    #[test]
    fn test_display_months_agrees_with_stored_months() {
        let pickup = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        for months in 1..=12 {
            let q = quote(rate(500), pickup, months).unwrap();
            let days = rental_days(q.pickup_date, q.return_date);
            assert_eq!(display_months(days), months);
        }
    }

    #[test]
    fn test_display_months_rounds_up() {
        assert_eq!(display_months(60), 2);
        assert_eq!(display_months(61), 3);
        assert_eq!(display_months(1), 1);
        assert_eq!(display_months(0), 0);
    }
}
