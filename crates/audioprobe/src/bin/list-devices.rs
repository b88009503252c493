use audioprobe::{
    default_input_device, default_output_device, fetch_devices, DeviceError, DeviceInfo,
    DeviceMode,
};

fn main() {
    tracing_subscriber::fmt::init();

    let default_input = default_input_device();
    let default_output = default_output_device();

    let input_devices = fetch_devices(DeviceMode::Input).unwrap_or_else(|e| {
        tracing::warn!("Failed to list input devices: {}", e);
        Vec::new()
    });
    let output_devices = fetch_devices(DeviceMode::Output).unwrap_or_else(|e| {
        tracing::warn!("Failed to list output devices: {}", e);
        Vec::new()
    });

    if std::env::args().any(|a| a == "--json") {
        let report = serde_json::json!({
            "default_input_device": default_input.as_ref().ok(),
            "default_output_device": default_output.as_ref().ok(),
            "input_devices": input_devices,
            "output_devices": output_devices,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report is serializable")
        );
        return;
    }

    print_default("Default input device", &default_input);
    print_default("Default output device", &default_output);
    print_list("Input devices", &input_devices, default_input.as_ref().ok());
    print_list(
        "Output devices",
        &output_devices,
        default_output.as_ref().ok(),
    );
}

fn print_default(label: &str, result: &Result<DeviceInfo, DeviceError>) {
    match result {
        Ok(d) => {
            println!("{label}:");
            println!("\tname={}", d.name);
            println!("\treadable name={}", d.readable_name);
        }
        Err(e) => println!("{label}: {e}"),
    }
}

fn print_list(label: &str, devices: &[DeviceInfo], default: Option<&DeviceInfo>) {
    println!("{label}:");
    for (index, device) in devices.iter().enumerate() {
        // Defaults are matched by raw name equality.
        let is_default = default.map(|d| d.name == device.name).unwrap_or(false);
        let prefix = if is_default { "  (*)" } else { "     " };
        println!("{prefix}{:2}. {}", index + 1, device.readable_name);
        println!("          name: {}", device.name);
    }
}
