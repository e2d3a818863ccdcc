use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque record identifier assigned by the remote service on create.
///
/// The service may encode ids as JSON numbers or strings; both forms are
/// accepted and round-trip unchanged. Ids are unique within a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

pub mod income {
    use chrono::{DateTime, FixedOffset};
    use rust_decimal::Decimal;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Income {
        pub id: RecordId,
        pub monto: Decimal,
        #[serde(default)]
        pub description: String,
        /// RFC3339 timestamp assigned by the service at creation.
        pub fecha: DateTime<FixedOffset>,
    }

    /// Request body for `POST /ingresos`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct IncomeNew {
        pub monto: Decimal,
        pub description: String,
    }
}

pub mod expense {
    use chrono::{DateTime, FixedOffset};
    use rust_decimal::Decimal;

    use super::*;

    /// Fixed expense category set.
    ///
    /// The wire strings are the Spanish labels the service stores verbatim.
    /// Values outside the set deserialize as [`Otros`].
    ///
    /// [`Otros`]: ExpenseCategory::Otros
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(from = "String")]
    pub enum ExpenseCategory {
        Comida,
        Transporte,
        Entretenimiento,
        Salud,
        #[serde(rename = "Educación")]
        Educacion,
        Vivienda,
        Servicios,
        Otros,
    }

    impl From<String> for ExpenseCategory {
        fn from(raw: String) -> Self {
            match raw.as_str() {
                "Comida" => Self::Comida,
                "Transporte" => Self::Transporte,
                "Entretenimiento" => Self::Entretenimiento,
                "Salud" => Self::Salud,
                "Educación" => Self::Educacion,
                "Vivienda" => Self::Vivienda,
                "Servicios" => Self::Servicios,
                _ => Self::Otros,
            }
        }
    }

    impl ExpenseCategory {
        pub const ALL: [ExpenseCategory; 8] = [
            Self::Comida,
            Self::Transporte,
            Self::Entretenimiento,
            Self::Salud,
            Self::Educacion,
            Self::Vivienda,
            Self::Servicios,
            Self::Otros,
        ];

        pub fn as_str(self) -> &'static str {
            match self {
                Self::Comida => "Comida",
                Self::Transporte => "Transporte",
                Self::Entretenimiento => "Entretenimiento",
                Self::Salud => "Salud",
                Self::Educacion => "Educación",
                Self::Vivienda => "Vivienda",
                Self::Servicios => "Servicios",
                Self::Otros => "Otros",
            }
        }
    }

    impl fmt::Display for ExpenseCategory {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        pub id: RecordId,
        pub monto: Decimal,
        pub categoria: ExpenseCategory,
        #[serde(default)]
        pub description: String,
        /// RFC3339 timestamp assigned by the service at creation.
        pub fecha: DateTime<FixedOffset>,
    }

    /// Request body for `POST /gastos`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub monto: Decimal,
        pub categoria: ExpenseCategory,
        pub description: String,
    }
}

pub mod reminder {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Reminder {
        pub id: RecordId,
        pub titulo: String,
        /// Calendar date the reminder falls due (`YYYY-MM-DD`).
        pub fecha: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub monto: Option<Decimal>,
        #[serde(default)]
        pub completado: bool,
    }

    /// Request body for `POST /recordatorios`.
    ///
    /// `completado` is sent explicitly as `false`; the service does not
    /// accept pre-completed reminders.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ReminderNew {
        pub titulo: String,
        pub fecha: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub monto: Option<Decimal>,
        pub completado: bool,
    }

    impl ReminderNew {
        pub fn new(titulo: String, fecha: NaiveDate, monto: Option<Decimal>) -> Self {
            Self {
                titulo,
                fecha,
                monto,
                completado: false,
            }
        }
    }

    /// Request body for `PATCH /recordatorios/{id}`.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct ReminderPatch {
        pub completado: bool,
    }
}

pub mod balance {
    use rust_decimal::Decimal;

    use super::*;

    /// Totals as computed by the service: `balance = ingresos - gastos`.
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct BalanceSummary {
        pub ingresos: Decimal,
        pub gastos: Decimal,
        pub balance: Decimal,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::expense::ExpenseCategory;
    use super::reminder::Reminder;
    use super::*;

    #[test]
    fn record_id_accepts_numbers_and_strings() {
        let numeric: RecordId = serde_json::from_str("5").unwrap();
        assert_eq!(numeric, RecordId::Int(5));
        assert_eq!(numeric.to_string(), "5");

        let text: RecordId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(text, RecordId::Text("a1b2".to_string()));
        assert_eq!(text.to_string(), "a1b2");
    }

    #[test]
    fn categoria_wire_strings() {
        let json = serde_json::to_string(&ExpenseCategory::Educacion).unwrap();
        assert_eq!(json, "\"Educación\"");

        let parsed: ExpenseCategory = serde_json::from_str("\"Vivienda\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Vivienda);
    }

    #[test]
    fn unknown_categoria_falls_back_to_otros() {
        let parsed: ExpenseCategory = serde_json::from_str("\"Mascotas\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Otros);
    }

    #[test]
    fn reminder_defaults() {
        let reminder: Reminder = serde_json::from_str(
            r#"{"id": 1, "titulo": "Pagar arriendo", "fecha": "2024-03-01"}"#,
        )
        .unwrap();
        assert!(!reminder.completado);
        assert_eq!(reminder.monto, None);
    }

    #[test]
    fn monto_keeps_decimal_precision() {
        let reminder: Reminder = serde_json::from_str(
            r#"{"id": 1, "titulo": "Luz", "fecha": "2024-03-01", "monto": 1250.75}"#,
        )
        .unwrap();
        assert_eq!(reminder.monto, Some(Decimal::new(125_075, 2)));
    }
}
