pub mod export;
pub mod specs;
pub mod table;

pub use export::ExportSummary;
pub use specs::{accessory_spec_line, display_name, printer_spec_line, NO_PRINTER_SPECS};
pub use table::{cost_rows, format_currency, render_table, CostRow};
