#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(parts) = tedb::core::split_cn_code(s) {
            // A successful split must survive its own canonical form.
            let canonical = parts.join(" ");
            assert_eq!(tedb::core::split_cn_code(&canonical).ok(), Some(parts));
        }
    }
});
