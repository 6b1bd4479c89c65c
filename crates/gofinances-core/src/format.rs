use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    /// Day and full month name, e.g. `13 de abril`.
    fn format_date(&self, date: NaiveDate) -> String;

    /// Compact numeric date used in listings, e.g. `09/06/21`.
    fn format_short_date(&self, date: NaiveDate) -> String;

    /// Month and year heading, e.g. `junho, 2021`.
    fn format_period(&self, year: i32, month: u32) -> String;
}

/// Locales the formatter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl Locale {
    /// Resolves a BCP 47-ish tag (`pt-BR`, `pt_br`, `en`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "pt" | "pt-br" => Some(Locale::PtBr),
            "en" | "en-us" => Some(Locale::EnUs),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }

    fn grouping_separator(self) -> char {
        match self {
            Locale::PtBr => '.',
            Locale::EnUs => ',',
        }
    }

    fn month_name(self, month: u32) -> &'static str {
        const PT: [&str; 12] = [
            "janeiro",
            "fevereiro",
            "março",
            "abril",
            "maio",
            "junho",
            "julho",
            "agosto",
            "setembro",
            "outubro",
            "novembro",
            "dezembro",
        ];
        const EN: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let names = match self {
            Locale::PtBr => &PT,
            Locale::EnUs => &EN,
        };
        month
            .checked_sub(1)
            .and_then(|index| names.get(index as usize))
            .copied()
            .unwrap_or("")
    }
}

/// Locale-aware implementation of both formatter traits, plus the dashboard captions.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    locale: Locale,
    currency: String,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new(Locale::PtBr, "BRL")
    }
}

impl LocaleFormatter {
    pub fn new(locale: Locale, currency: impl Into<String>) -> Self {
        Self {
            locale,
            currency: currency.into().to_uppercase(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn last_inflow_caption(&self, date: NaiveDate) -> String {
        let day = self.format_date(date);
        match self.locale {
            Locale::PtBr => format!("Última entrada dia {day}"),
            Locale::EnUs => format!("Last inflow on {day}"),
        }
    }

    pub fn last_outflow_caption(&self, date: NaiveDate) -> String {
        let day = self.format_date(date);
        match self.locale {
            Locale::PtBr => format!("Última saída dia {day}"),
            Locale::EnUs => format!("Last outflow on {day}"),
        }
    }

    /// Caption for the net total card: the month's start through `date`.
    pub fn interval_caption(&self, date: NaiveDate) -> String {
        let day = self.format_date(date);
        match self.locale {
            Locale::PtBr => format!("01 a {day}"),
            Locale::EnUs => format!("Through {day}"),
        }
    }

    pub fn no_movement_caption(&self) -> String {
        match self.locale {
            Locale::PtBr => "Não há transações".into(),
            Locale::EnUs => "No transactions".into(),
        }
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64) -> String {
        let precision = minor_units_for(&self.currency);
        let body = format_number(
            amount.abs(),
            precision,
            self.locale.decimal_separator(),
            self.locale.grouping_separator(),
        );
        let symbol = symbol_for(&self.currency);
        let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        match self.locale {
            Locale::PtBr => format!("{sign}{symbol} {body}"),
            Locale::EnUs => format!("{sign}{symbol}{body}"),
        }
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        let month = self.locale.month_name(date.month());
        match self.locale {
            Locale::PtBr => format!("{:02} de {}", date.day(), month),
            Locale::EnUs => format!("{} {:02}", month, date.day()),
        }
    }

    fn format_short_date(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::PtBr => date.format("%d/%m/%y").to_string(),
            Locale::EnUs => date.format("%m/%d/%y").to_string(),
        }
    }

    fn format_period(&self, year: i32, month: u32) -> String {
        format!("{}, {}", self.locale.month_name(month), year)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> usize {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders a non-negative number with fixed precision and digit grouping.
pub fn format_number(value: f64, precision: usize, decimal: char, grouping: char) -> String {
    let body = fixed_decimal(value, precision);
    match body.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{}{}", group_digits(int_part, grouping), decimal, frac_part)
        }
        None => group_digits(&body, grouping),
    }
}

/// `value` with exactly `precision` decimals, rounding ties away from zero
/// (`0.125` becomes `0.13`, `12.125` becomes `12.13`).
///
/// The float is first read as its shortest round-trip text, so `1.005` rounds up
/// even though its binary value sits just below the tie.
pub fn fixed_decimal(value: f64, precision: usize) -> String {
    let scale = u32::try_from(precision).unwrap_or(u32::MAX);
    match value.to_string().parse::<Decimal>() {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(scale);
            rounded.to_string()
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        Err(_) => format!("{:.*}", precision, value),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
