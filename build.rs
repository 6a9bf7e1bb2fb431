//! Build script to embed the word sets
//!
//! Reads the plain-text word files and emits Rust const arrays, normalized to
//! lowercase and deduplicated.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

struct WordFile {
    input: &'static str,
    output: &'static str,
    const_name: &'static str,
    doc_comment: &'static str,
}

const WORD_FILES: &[WordFile] = &[
    WordFile {
        input: "data/answers.txt",
        output: "answers.rs",
        const_name: "ANSWERS",
        doc_comment: "Words that can be drawn as the hidden target",
    },
    WordFile {
        input: "data/allowed.txt",
        output: "allowed.rs",
        const_name: "ALLOWED",
        doc_comment: "Every word accepted as a guess (superset of ANSWERS)",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for file in WORD_FILES {
        emit_word_list(file, &Path::new(&out_dir).join(file.output));
        println!("cargo:rerun-if-changed={}", file.input);
    }
}

fn emit_word_list(file: &WordFile, output_path: &Path) {
    let content = fs::read_to_string(file.input)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", file.input));

    let words: BTreeSet<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()))
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {}", file.input).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {} ({} words)", file.doc_comment, words.len()).unwrap();
    writeln!(output, "pub const {}: &[&str] = &[", file.const_name).unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {}", file.const_name).unwrap();
    writeln!(
        output,
        "pub const {}_COUNT: usize = {};",
        file.const_name,
        words.len()
    )
    .unwrap();
}
