use crate::cost::FilamentType;
use crate::reference::{AccessoryProfile, PrinterProfile, Voltage};

pub const NO_PRINTER_SPECS: &str = "Select a printer to view specs.";

/// Human-facing name for a reference id, e.g. `A1_mini` -> `A1 mini`.
pub fn display_name(id: &str) -> String {
    id.replacen('_', " ", 1)
}

pub fn printer_spec_line(printer: Option<&PrinterProfile>, voltage: Voltage) -> String {
    let Some(printer) = printer else {
        return NO_PRINTER_SPECS.to_string();
    };

    format!(
        "Max: {}W ({}) | Standby: {}W | PLA: {}W | ABS/PETG: {}W | PC: {}W",
        printer.rated_watts.at(voltage),
        voltage,
        printer.standby_watts,
        printer.power_for(FilamentType::Pla),
        printer.power_for(FilamentType::Abs),
        printer.power_for(FilamentType::Pc),
    )
}

pub fn accessory_spec_line(accessory: &AccessoryProfile) -> String {
    let mut line = format!(
        "Standby: {}W | Working: {}W",
        accessory.standby_watts, accessory.working_watts
    );
    if let Some(drying) = accessory.drying_watts {
        line.push_str(&format!(" | Drying: {}W", drying));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("A1_mini"), "A1 mini");
        assert_eq!(display_name("AMS_2_Pro"), "AMS 2_Pro");
        assert_eq!(display_name("X1C"), "X1C");
    }

    #[test]
    fn test_printer_spec_line() {
        let data = ReferenceData::bambu_lab().unwrap();
        assert_eq!(
            printer_spec_line(data.printer("X1C"), Voltage::V220),
            "Max: 1100W (220V) | Standby: 9W | PLA: 105W | ABS/PETG: 150W | PC: 135W"
        );
        assert_eq!(printer_spec_line(None, Voltage::V110), NO_PRINTER_SPECS);
    }

    #[test]
    fn test_accessory_spec_line() {
        let data = ReferenceData::bambu_lab().unwrap();
        assert_eq!(
            accessory_spec_line(data.accessory("AMS").unwrap()),
            "Standby: 0.96W | Working: 5.78W"
        );
        assert_eq!(
            accessory_spec_line(data.accessory("AMS_HT").unwrap()),
            "Standby: 2.5W | Working: 12W | Drying: 170W"
        );
    }
}
