#![no_main]

use libfuzzer_sys::fuzz_target;
use pacsmith::domain::entities::AppSettings;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Stored settings documents are JSON text
        let _ = serde_json::from_str::<AppSettings>(content);
    }
});
