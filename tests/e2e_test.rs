// Test complete flow of the number builder
// Run with `cargo test --test e2e_test`

use std::fs;

use re101::{NumberBuilder, NumberConfig, Span, TokenClass};
use serde::Deserialize;

/// The content of a json file in the data directory.
#[derive(Debug, Deserialize)]
struct NumberCase {
    class: TokenClass,
    #[serde(default)]
    config: NumberConfig,
}

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    // Iterate over all json files in the data directory that contain number configurations
    for entry in fs::read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().unwrap() != "json" {
            continue;
        }

        println!("--------------------------------------------------");
        println!("Entry: {:?}", entry.file_name());
        println!("--------------------------------------------------");

        // Read the json file
        let file = fs::File::open(&path).unwrap();
        let number_case: NumberCase = serde_json::from_reader(file)
            .unwrap_or_else(|e| panic!("**** Failed to read json file {}: {}", path.display(), e));

        // Create a matcher from the number builder
        let matcher = NumberBuilder::new(number_case.class)
            .config(number_case.config)
            .build()
            .unwrap();
        println!("{} ({}): {}", number_case.class, number_case.config, matcher);

        // Open the input file which has the same base name as the json file but with a .input
        // extension. The input is a single line without a line ending, because a token must be
        // followed by a space or the end of the text.
        let input_path = path.with_extension("input");
        let input = fs::read_to_string(&input_path).unwrap();
        let input = input.trim_end_matches(['\r', '\n']);

        // Collect all matches
        let spans: Vec<Span> = matcher.find_iter(input).map(|m| m.span()).collect();

        println!("Matches:\n{}\n", serde_json::to_string(&spans).unwrap());
        for span in &spans {
            println!("{} at {}", &input[span.range()], span);
        }
        println!("Matches count: {}", spans.len());

        // Open the expected output file which has the same base name as the json file but with a
        // .tokens extension.
        let token_file_path = path.with_extension("tokens");
        let token_file = fs::File::open(&token_file_path).unwrap();
        let expected_spans: Vec<Span> = serde_json::from_reader(&token_file).unwrap();

        // Compare the matches
        assert_eq!(spans, expected_spans);
    }
}
