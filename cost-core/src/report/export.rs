/// Plain-text job summary for clipboard export

use super::table::format_currency;
use crate::cost::{CostBreakdown, JobInput};
use chrono::{Local, NaiveDate};
use std::fmt;

pub struct ExportSummary<'a> {
    pub title: &'a str,
    pub input: &'a JobInput,
    pub breakdown: &'a CostBreakdown,
    pub currency_symbol: &'a str,
    pub generated_on: NaiveDate,
}

impl<'a> ExportSummary<'a> {
    pub const DEFAULT_TITLE: &'static str = "Bambu Lab Print Cost Summary";

    pub fn new(
        input: &'a JobInput,
        breakdown: &'a CostBreakdown,
        currency_symbol: &'a str,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            title: Self::DEFAULT_TITLE,
            input,
            breakdown,
            currency_symbol,
            generated_on,
        }
    }

    pub fn generated_today(
        input: &'a JobInput,
        breakdown: &'a CostBreakdown,
        currency_symbol: &'a str,
    ) -> Self {
        Self::new(input, breakdown, currency_symbol, Local::now().date_naive())
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl fmt::Display for ExportSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printer = self.input.printer.as_deref().unwrap_or("Not selected");
        let accessories = if self.input.accessories.is_empty() {
            "None".to_string()
        } else {
            self.input
                .accessories
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(30))?;
        writeln!(f, "Printer: {}", printer)?;
        writeln!(f, "Accessories: {}", accessories)?;
        writeln!(f, "Filament: {}", self.input.filament)?;
        writeln!(
            f,
            "Print Time: {}h {}m",
            self.input.duration.hours, self.input.duration.minutes
        )?;
        writeln!(f, "Material Used: {}g", self.input.weight_grams)?;
        writeln!(
            f,
            "Total Cost: {}",
            format_currency(self.currency_symbol, self.breakdown.total)
        )?;
        writeln!(f)?;
        write!(f, "Generated on {}", self.generated_on.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::FilamentType;

    #[test]
    fn test_summary_layout() {
        let input = JobInput {
            weight_grams: 100.0,
            ..JobInput::default()
        }
        .with_printer("X1C")
        .with_accessory("AMS_HT")
        .with_accessory("AMS")
        .with_filament(FilamentType::Petg)
        .with_duration(2.0, 15.0);
        let breakdown = CostBreakdown::from_components(34.545, 0.735, 0.0, 0.0, 0.0);
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let text = ExportSummary::new(&input, &breakdown, "R", date).to_string();
        let expected = "\
Bambu Lab Print Cost Summary
==============================
Printer: X1C
Accessories: AMS, AMS_HT
Filament: PETG
Print Time: 2h 15m
Material Used: 100g
Total Cost: R35.28

Generated on 2024-03-09";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_without_selections() {
        let input = JobInput::default();
        let breakdown = CostBreakdown::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let text = ExportSummary::new(&input, &breakdown, "$", date)
            .with_title("Print Quote")
            .to_string();
        assert!(text.starts_with("Print Quote\n"));
        assert!(text.contains("Printer: Not selected\n"));
        assert!(text.contains("Accessories: None\n"));
        assert!(text.contains("Total Cost: $0.00\n"));
    }
}
