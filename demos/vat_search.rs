use tedb::core::*;
use tedb::search::Tedb;

fn main() -> Result<(), TedbError> {
    let config = TedbConfig::new()
        .cache_dir("./tedb_cache")
        .create_cache_dir(true);
    let tedb = Tedb::new(config)?;

    let criteria = SearchCriteria::new()
        .country("ES")
        .category("foodstuffs")
        .commodity_code("33049900")
        .commodity_code("0402 29 11");

    println!("=== VAT Search ===\n");

    match tedb.search(&criteria) {
        Ok(result) => {
            for country in result.countries() {
                println!(
                    "  {} ({}) {}{}",
                    country.member_state.name,
                    country.member_state.iso_code,
                    country.vat_type,
                    if country.historized { " [historized]" } else { "" }
                );
                for rate in &country.rates {
                    let codes: Vec<&str> = rate.cn_codes.iter().map(|c| c.code.as_str()).collect();
                    let on = rate
                        .situation_date()
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "?".into());
                    println!(
                        "    {:>6}% {:<20} on {on} codes={codes:?} category={}",
                        rate.rate.value,
                        rate.rate.kind,
                        rate.category.as_deref().unwrap_or("-"),
                    );
                }
            }
        }
        Err(e) => println!("  search failed ({:?}): {e}", e.kind()),
    }

    println!("\n=== CN Code Ids ===\n");

    for code in ["0402 29 11", "33049900"] {
        match tedb.commodity_code_id(code) {
            Ok(Some(id)) => println!("  {code} => {id}"),
            Ok(None) => println!("  {code} => not listed"),
            Err(e) => println!("  {code} => error: {e}"),
        }
    }

    Ok(())
}
