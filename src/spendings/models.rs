use std::fmt;

use serde::{de, Deserialize, Deserializer};

///
/// Model representing a single spending row fetched for a vehicle.
/// Records are created server-side; the client only renders them and
/// requests partial mutations (mark toggle, paid conversion).
///
#[derive(Debug, Clone, Deserialize)]
pub struct SpendingRecord {
    pub id: i64,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(deserialize_with = "f64_or_string")]
    pub amount: f64,
    #[serde(default)]
    pub spended_by: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub marked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}

impl SpendingRecord {
    // Paid only when both values are present AND non-empty: the server
    // stores absent payer/mode as NULL, but older rows carry empty strings
    pub fn status(&self) -> PaymentStatus {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if filled(&self.spended_by) && filled(&self.mode) {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }

    pub fn amount_display(&self) -> String {
        format!("₹{:.2}", self.amount)
    }
}

// The backend serializes the `marked` tinyint column as a bare 0/1
fn bool_or_int<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    struct BoolOrInt;

    impl de::Visitor<'_> for BoolOrInt {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or a 0/1 integer")
        }
        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }
    }

    de.deserialize_any(BoolOrInt)
}

// Decimal amounts arrive as JSON numbers or as quoted strings
fn f64_or_string<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    struct F64OrString;

    impl de::Visitor<'_> for F64OrString {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }
        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.parse().map_err(E::custom)
        }
    }

    de.deserialize_any(F64OrString)
}
