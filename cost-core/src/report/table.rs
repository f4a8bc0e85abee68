use crate::config::ComponentToggles;
use crate::cost::{CostBreakdown, CostComponent};
use serde::Serialize;

pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostRow {
    pub component: CostComponent,
    pub label: &'static str,
    pub amount: f64,
    pub visible: bool,
}

/// All five rows in summation order, flagged with their visibility.
pub fn cost_rows(breakdown: &CostBreakdown, toggles: &ComponentToggles) -> Vec<CostRow> {
    breakdown
        .components()
        .map(|(component, amount)| CostRow {
            component,
            label: component.label(),
            amount,
            visible: toggles.is_visible(component),
        })
        .collect()
}

/// Plain-text table of the visible rows followed by the total.
pub fn render_table(breakdown: &CostBreakdown, toggles: &ComponentToggles, symbol: &str) -> String {
    let rows: Vec<(&str, String)> = cost_rows(breakdown, toggles)
        .into_iter()
        .filter(|row| row.visible)
        .map(|row| (row.label, format_currency(symbol, row.amount)))
        .chain(std::iter::once(("Total cost", format_currency(symbol, breakdown.total))))
        .collect();

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!(
            "{:<label_width$}  {:>value_width$}\n",
            label,
            value,
            label_width = label_width,
            value_width = value_width
        ));
    }
    out
}
