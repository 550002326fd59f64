use kw_gen_core::export::{copy_all_text, export_to_dir, ExportFormat};
use kw_gen_core::model::generator::KeywordGenerator;
use kw_gen_core::model::request::{parse_count, GenerationRequest, DEMO_DESCRIPTION, DEMO_TOPIC};
use kw_gen_core::model::stats::KeywordStats;
use kw_gen_core::model::template_table::TemplateTable;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Built-in categories; `TemplateTable::load("templates.toml")` reads a custom table
    let app = KeywordGenerator::new(TemplateTable::default());

    // A seeded rng gives the same sample on every run, `rand::rng()` does not
    let mut rng = StdRng::seed_from_u64(2024);

    // Categories are checked in this order, the first one found in the topic wins
    println!("Categories: {}", app.table().categories().collect::<Vec<_>>().join(", "));

    // Known category, no description, count above the 31 candidates: nothing is dropped
    let keywords = app.generate("digital marketing", "", 50, &mut rng)?;
    println!("'digital marketing' -> {} keywords", keywords.len());

    // Unknown topic: generic modifiers ("best", "top", ...) and a random sample of 5
    for keyword in app.generate("xyz123", "", 5, &mut rng)? {
        println!("  {keyword}");
    }

    // Description words longer than 3 characters ("dddd", "eeeee") add long-tail phrases
    let request = GenerationRequest::new("technology", "a bb ccc dddd eeeee", 100)?;
    println!("'technology' + description -> {} candidates", app.candidates(&request).len());

    // Invalid counts are refused before anything is generated
    for count in ["0", "-5", "twenty"] {
        match parse_count(count) {
            Ok(_) => println!("Should not happen"),
            Err(e) => println!("Count '{count}' refused: {e}"),
        }
    }
    match app.generate("   ", "", 10, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Blank topic refused: {e}"),
    }

    // Same input as the demo front ends, with statistics
    let request = GenerationRequest::new(DEMO_TOPIC, DEMO_DESCRIPTION, 20)?;
    let result = app.generate_with_stats(&request, &mut rng);
    let KeywordStats { total, long_tail, avg_length } = result.stats;
    println!(
        "Demo: {total} keywords out of {} candidates, {long_tail} long-tail, average length {avg_length}",
        result.candidates
    );

    // What "copy all" would put on the clipboard
    println!("{}", copy_all_text(&result.keywords)?);

    // Nothing generated yet: copy and export report it instead of failing
    let nothing: Vec<String> = Vec::new();
    if let Err(e) = copy_all_text(&nothing) {
        println!("{e}");
    }

    // Write keywords.csv and keywords.txt in the working directory
    for format in [ExportFormat::Csv, ExportFormat::Txt] {
        let path = export_to_dir(".", format, &result.keywords)?;
        println!("Exported {} keywords as {format} to {}", result.keywords.len(), path.display());
    }

    Ok(())
}
