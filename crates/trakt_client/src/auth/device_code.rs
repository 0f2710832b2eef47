use serde::Deserialize;

/// Device code response from Trakt
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceCodeGrant {
    pub device_code: String,
    pub user_code: String,
    pub verification_url: String,
    /// Seconds to wait between token polls.
    pub interval: u64,
    /// Seconds until the device code stops being accepted.
    pub expires_in: u64,
}

/// Present device code to user
pub fn present_device_code(grant: &DeviceCodeGrant) {
    println!();
    println!(
        "Go to {} on your web browser and enter the below user code there:",
        grant.verification_url
    );
    println!();
    println!("{}", grant.user_code);
    println!();
    println!("After you have authenticated and given permission; come back here to continue.");
    println!();
}
