use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::loans::{LoanApplicationInput, LoanPurpose};

pub(crate) fn parse_applications<R: Read>(
    reader: R,
) -> Result<Vec<LoanApplicationInput>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        let row = record?;
        applications.push(row.into_input());
    }

    Ok(applications)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(default, deserialize_with = "empty_as_zero")]
    credit_score: u16,
    #[serde(default, deserialize_with = "empty_as_zero")]
    income: f64,
    #[serde(default, deserialize_with = "empty_as_zero")]
    employment_years: f64,
    #[serde(default, deserialize_with = "empty_as_zero")]
    amount: f64,
    #[serde(default)]
    purpose: Option<String>,
}

impl ApplicationRow {
    fn into_input(self) -> LoanApplicationInput {
        LoanApplicationInput {
            credit_score: self.credit_score,
            income: self.income,
            employment_years: self.employment_years,
            amount: self.amount,
            purpose: self
                .purpose
                .map(LoanPurpose::from)
                .unwrap_or(LoanPurpose::Unspecified),
        }
    }
}

fn empty_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(raw) => raw.parse::<T>().map_err(serde::de::Error::custom),
    }
}
