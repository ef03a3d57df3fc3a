use std::env;

/// Board bring-up settings and their defaults
///
/// Values are forwarded to the crate as `cargo:rustc-env` and parsed at compile
/// time by `platform::config`.
const BOARD_SETTINGS: &[(&str, &str)] = &[
    // Console / debug UART (UART0)
    ("CONSOLE_BAUD_RATE", "115200"),
    // Radio transport UART (UART1, XBee in transparent mode)
    ("RADIO_BAUD_RATE", "38400"),
    // Sensor I2C bus clock in Hz
    ("SENSOR_I2C_FREQUENCY", "100000"),
];

fn main() {
    for (name, default) in BOARD_SETTINGS {
        match env::var(name) {
            Ok(value) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                println!("cargo:rustc-env={}={}", name, value);
                println!("cargo:warning=Using {} from environment: {}", name, value);
            }
            Ok(value) => {
                println!(
                    "cargo:warning=Ignoring invalid {}={:?}, using default {}",
                    name, value, default
                );
                println!("cargo:rustc-env={}={}", name, default);
            }
            Err(_) => {
                println!("cargo:rustc-env={}={}", name, default);
            }
        }
        println!("cargo:rerun-if-env-changed={}", name);
    }
}
