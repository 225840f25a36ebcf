#![no_main]

use libfuzzer_sys::fuzz_target;
use pacsmith::domain::value_objects::EntityKind;
use pacsmith::infrastructure::store::Tables;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // A loaded store document must be queryable without panicking
        if let Ok(tables) = toml::from_str::<Tables>(content) {
            let _ = tables.proxies();
            for kind in EntityKind::ALL {
                let _ = tables.entities(kind);
            }
        }
    }
});
