use chrono::Local;
use tedb::core::*;

fn main() {
    println!("=== CN Code Splitting ===\n");

    let codes = [
        "3304",
        "33049900",
        "0402 29 11",
        "0402 2911", // wrong grouping
        "123",       // odd length
        "12AB",      // not numeric
    ];

    for code in &codes {
        match split_cn_code(code) {
            Ok(parts) => println!("  {code:>12} => {parts:?}"),
            Err(e) => println!("  {code:>12} => INVALID: {e}"),
        }
    }

    println!("\n=== Request Payload ===\n");

    let criteria = SearchCriteria::new()
        .country("ES")
        .country("FR")
        .category("foodstuffs")
        .category("not_a_category")
        .commodity_code("33049900")
        .commodity_code("0402 29 11");

    let today = Local::now().date_naive();
    match validate_at(&criteria, today).and_then(|v| build_request(&v)) {
        Ok(payload) => match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("  cannot serialize payload: {e}"),
        },
        Err(e) => println!("  INVALID: {e}"),
    }
}
