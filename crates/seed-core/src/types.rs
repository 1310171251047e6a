//! Enumerated value sets shared by every store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 28 specialties a doctor can be assigned.
pub const SPECIALTIES: [&str; 28] = [
    "Cardiología",
    "Pediatría",
    "Oftalmología",
    "Neurología",
    "Dermatología",
    "Ginecología/Obstetricia",
    "Traumatología",
    "Oncología",
    "Urología",
    "Psiquiatría",
    "Endocrinología",
    "Reumatología",
    "Hematología",
    "Nefrología",
    "Neumonología",
    "Nutriología",
    "Odontología",
    "Otorrinolaringología",
    "Proctología",
    "Radiología",
    "Toxicología",
    "Anestesiología",
    "Epidemiología",
    "Geriatría",
    "Medicina general",
    "Medicina interna",
    "Psicología",
    "Terapia física",
];

/// Check whether a specialty belongs to [`SPECIALTIES`].
pub fn is_known_specialty(name: &str) -> bool {
    SPECIALTIES.contains(&name)
}

/// Working day of the week, Monday through Saturday.
///
/// Stored with its Spanish label (`Lunes`..`Sábado`) in both relational
/// stores, so PostgreSQL availability rows and MySQL appointments agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All working days in calendar order.
    pub const ALL: [DayOfWeek; 6] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Persisted label.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Lunes",
            DayOfWeek::Tuesday => "Martes",
            DayOfWeek::Wednesday => "Miércoles",
            DayOfWeek::Thursday => "Jueves",
            DayOfWeek::Friday => "Viernes",
            DayOfWeek::Saturday => "Sábado",
        }
    }

    /// Comma-separated quoted labels, for `CHECK`/`ENUM` column definitions.
    pub fn sql_value_list() -> String {
        Self::ALL
            .iter()
            .map(|d| format!("'{}'", d.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("Unknown day of week: {s}"))
    }
}

impl TryFrom<String> for DayOfWeek {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayOfWeek> for String {
    fn from(day: DayOfWeek) -> Self {
        day.as_str().to_string()
    }
}

/// Kind of insurance a patient may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceType {
    Salud,
    Vida,
    Dental,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 3] = [
        InsuranceType::Salud,
        InsuranceType::Vida,
        InsuranceType::Dental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Salud => "Salud",
            InsuranceType::Vida => "Vida",
            InsuranceType::Dental => "Dental",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
