//! Build script to generate the embedded dictionary
//!
//! Reads the tab-separated dictionary file and generates Rust source code with a const array
//! of `(word, senses)` entries.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        "data/dictionary.tsv",
        &Path::new(&out_dir).join("dictionary.rs"),
        "ENTRIES",
        "Embedded dictionary entries as (word, senses)",
    );

    // Rebuild if the dictionary changes
    println!("cargo:rerun-if-changed=data/dictionary.tsv");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Group senses per word, keeping first-seen order of both words and senses
    let mut entries: Vec<(String, Vec<String>)> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (word, sense) = match line.split_once('\t') {
            Some((word, sense)) => (word.trim().to_lowercase(), Some(sense.trim().to_string())),
            None => (trimmed.to_lowercase(), None),
        };
        assert!(
            !word.is_empty(),
            "{input_path}: definition without a word: {trimmed}"
        );

        let index = match entries.iter().position(|(w, _)| *w == word) {
            Some(index) => index,
            None => {
                entries.push((word, Vec::new()));
                entries.len() - 1
            }
        };
        if let Some(sense) = sense.filter(|s| !s.is_empty()) {
            entries[index].1.push(sense);
        }
    }

    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &[&str])] = &[").unwrap();

    for (word, senses) in &entries {
        write!(output, "    ({word:?}, &[").unwrap();
        for sense in senses {
            write!(output, "{sense:?}, ").unwrap();
        }
        writeln!(output, "]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
