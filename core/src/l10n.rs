// Retaguarda
// Copyright 2025 The Retaguarda Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Brazilian-locale display formatting.
//!
//! These are pure functions that turn raw stored values into the strings the
//! management UI shows.  The document masks (CNPJ, CEP, inscrição estadual)
//! return their input unchanged when it does not have the expected digit
//! count: masking is a display concern and must never fail.

use rust_decimal::{Decimal, RoundingStrategy};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Time};

/// Wire format for dates as they come out of the store.
const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Wire format for times as they come out of the store.
const ISO_TIME: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Formats `valor` as Brazilian-real currency text, e.g. `R$ 1.234,50`.
pub fn format_moeda(valor: Decimal) -> String {
    format!("R$ {}", format_numero(valor))
}

/// Formats `valor` with exactly two decimal places, a comma as the decimal
/// separator and dots grouping the thousands, e.g. `1.234,50`.
pub fn format_numero(valor: Decimal) -> String {
    let raw =
        format!("{:.2}", valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero));
    let (digits, negative) = match raw.strip_prefix('-') {
        Some(digits) => (digits, true),
        None => (raw.as_str(), false),
    };
    let (inteiro, centavos) = digits.split_once('.').expect("two decimals forced above");

    let mut grouped = String::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, ch) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}{},{}", if negative { "-" } else { "" }, grouped, centavos)
}

/// Renders an ISO `YYYY-MM-DD` date string as `DD/MM/YYYY`.
///
/// Malformed input propagates the parse failure; this layer does not
/// pre-validate what the store hands it.
pub fn format_data(iso: &str) -> Result<String, time::error::Parse> {
    let data = Date::parse(iso, ISO_DATE)?;
    Ok(format!("{:02}/{:02}/{:04}", data.day(), u8::from(data.month()), data.year()))
}

/// Combines an ISO `YYYY-MM-DD` date string and an `HH:MM:SS` time string
/// into a single `DD/MM/YYYY HH:MM` stamp.
pub fn format_data_hora(iso_data: &str, hora: &str) -> Result<String, time::error::Parse> {
    let data = Date::parse(iso_data, ISO_DATE)?;
    let hora = Time::parse(hora, ISO_TIME)?;
    Ok(format!(
        "{:02}/{:02}/{:04} {:02}:{:02}",
        data.day(),
        u8::from(data.month()),
        data.year(),
        hora.hour(),
        hora.minute()
    ))
}

/// Rewrites a 14-digit CNPJ into its canonical `NN.NNN.NNN/NNNN-NN` form.
pub fn format_cnpj(raw: &str) -> String {
    match digits(raw, 14) {
        Some(d) => format!("{}.{}.{}/{}-{}", &d[0..2], &d[2..5], &d[5..8], &d[8..12], &d[12..14]),
        None => raw.to_owned(),
    }
}

/// Rewrites an 8-digit CEP into its canonical `NNNNN-NNN` form.
pub fn format_cep(raw: &str) -> String {
    match digits(raw, 8) {
        Some(d) => format!("{}-{}", &d[0..5], &d[5..8]),
        None => raw.to_owned(),
    }
}

/// Rewrites a 12-digit state tax registration into its canonical
/// `NNN.NNN.NNN.NNN` form.
pub fn format_inscricao_estadual(raw: &str) -> String {
    match digits(raw, 12) {
        Some(d) => format!("{}.{}.{}.{}", &d[0..3], &d[3..6], &d[6..9], &d[9..12]),
        None => raw.to_owned(),
    }
}

/// Returns `raw` back if it is composed of exactly `count` ASCII digits.
fn digits(raw: &str, count: usize) -> Option<&str> {
    if raw.len() == count && raw.bytes().all(|b| b.is_ascii_digit()) { Some(raw) } else { None }
}
