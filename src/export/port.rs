//! Touchstone file extensions

use crate::error::ConfigError;

/// `.s{n}p` for an n-port network, n in 1..=99
pub fn touchstone_extension(num_ports: u32) -> Result<String, ConfigError> {
    if !(1..=99).contains(&num_ports) {
        return Err(ConfigError::PortsOutOfRange {
            ports: i64::from(num_ports),
        });
    }
    Ok(format!(".s{}p", num_ports))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_encodes_port_count() {
        assert_eq!(touchstone_extension(1).unwrap(), ".s1p");
        assert_eq!(touchstone_extension(4).unwrap(), ".s4p");
        assert_eq!(touchstone_extension(99).unwrap(), ".s99p");
    }

    #[test]
    fn out_of_range_ports_fail() {
        assert_eq!(
            touchstone_extension(0),
            Err(ConfigError::PortsOutOfRange { ports: 0 })
        );
        assert_eq!(
            touchstone_extension(100),
            Err(ConfigError::PortsOutOfRange { ports: 100 })
        );
    }
}
