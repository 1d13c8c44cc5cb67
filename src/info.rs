//! Static chip and driver metadata.

/// Descriptive metadata for the chip and this driver. No bus access is needed
/// to obtain it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Info {
    /// Chip name.
    pub chip_name: &'static str,
    /// Manufacturer name.
    pub manufacturer_name: &'static str,
    /// Bus interface.
    pub interface: &'static str,
    /// Minimum supply voltage in volts.
    pub supply_voltage_min_v: f32,
    /// Maximum supply voltage in volts.
    pub supply_voltage_max_v: f32,
    /// Maximum supply current in milliamperes.
    pub max_current_ma: f32,
    /// Minimum operating temperature in degrees Celsius.
    pub temperature_min: f32,
    /// Maximum operating temperature in degrees Celsius.
    pub temperature_max: f32,
    /// Driver version, `major * 1000 + minor * 100 + patch`.
    pub driver_version: u32,
}

/// Metadata for the MMA7660FC.
pub const INFO: Info = Info {
    chip_name: "NXP MMA7660FC",
    manufacturer_name: "NXP",
    interface: "IIC",
    supply_voltage_min_v: 2.4,
    supply_voltage_max_v: 3.6,
    max_current_ma: 0.294,
    temperature_min: -40.0,
    temperature_max: 85.0,
    driver_version: 1000,
};

/// Returns the chip and driver metadata.
pub const fn info() -> Info {
    INFO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_describes_the_part() {
        let info = info();
        assert_eq!(info.chip_name, "NXP MMA7660FC");
        assert_eq!(info.interface, "IIC");
        assert!(info.supply_voltage_min_v < info.supply_voltage_max_v);
        assert!(info.temperature_min < info.temperature_max);
        assert_eq!(info.driver_version, 1000);
    }
}
