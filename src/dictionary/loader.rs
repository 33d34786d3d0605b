//! Dictionary file loading
//!
//! Files use one entry per line: `word<TAB>definition`. A line holding only a word adds it
//! without a meaning, a repeated word gains another sense, and blank lines or lines starting
//! with `#` are skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::Lexicon;
use crate::error::DictionaryError;

/// Load a lexicon from a dictionary file
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read, and the errors of
/// [`parse_lexicon`] for its contents.
///
/// # Examples
/// ```no_run
/// use word_guess::dictionary::loader::load_from_file;
///
/// let lexicon = load_from_file("data/dictionary.tsv").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, DictionaryError> {
    let path = path.as_ref();
    info!("Loading dictionary from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon = parse_lexicon(&content)?;
    info!("Loaded {} words from dictionary", lexicon.len());
    Ok(lexicon)
}

/// Parse dictionary file contents
///
/// # Errors
///
/// Returns [`DictionaryError::MissingWord`] for a definition line with an empty word and
/// [`DictionaryError::Empty`] when no word was found.
pub fn parse_lexicon(content: &str) -> Result<Lexicon, DictionaryError> {
    let mut lexicon = Lexicon::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match line.split_once('\t') {
            Some((word, sense)) => {
                let word = word.trim();
                if word.is_empty() {
                    return Err(DictionaryError::MissingWord { line: index + 1 });
                }
                let sense = sense.trim();
                if sense.is_empty() {
                    lexicon.insert(word);
                } else {
                    lexicon.add_sense(word, sense);
                }
            }
            None => lexicon.insert(trimmed),
        }
    }

    if lexicon.is_empty() {
        return Err(DictionaryError::Empty);
    }

    debug!(words = lexicon.len(), "parsed dictionary");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_lexicon_reads_words_and_senses() {
        let lexicon = parse_lexicon("cat\ta small feline\ndog\tman's best friend\nzzz\n").unwrap();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.senses("cat"), &["a small feline"]);
        assert!(lexicon.senses("zzz").is_empty());
    }

    #[test]
    fn parse_lexicon_skips_comments_and_blank_lines() {
        let lexicon = parse_lexicon("# header\n\n   \ncat\tfeline\n# cow\tbovine\n").unwrap();
        assert_eq!(lexicon.words(), &["cat".to_string()]);
    }

    #[test]
    fn parse_lexicon_repeated_word_adds_senses() {
        let lexicon = parse_lexicon("bat\tflying mammal\nBat\tclub\n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.senses("bat"), &["flying mammal", "club"]);
    }

    #[test]
    fn parse_lexicon_empty_definition_is_no_sense() {
        let lexicon = parse_lexicon("cat\t   \n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.senses("cat").is_empty());
    }

    #[test]
    fn parse_lexicon_rejects_definition_without_word() {
        let result = parse_lexicon("cat\tfeline\n\torphan definition\n");
        assert!(matches!(result, Err(DictionaryError::MissingWord { line: 2 })));
    }

    #[test]
    fn parse_lexicon_rejects_empty_content() {
        assert!(matches!(parse_lexicon(""), Err(DictionaryError::Empty)));
        assert!(matches!(
            parse_lexicon("# only comments\n"),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn load_from_file_reads_temp_file() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "kissa\tcat in Finnish")?;
        writeln!(file, "koira")?;

        let lexicon = load_from_file(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.senses("kissa"), &["cat in Finnish"]);

        Ok(())
    }

    #[test]
    fn load_from_file_missing_path_is_io_error() {
        let result = load_from_file("/definitely/not/here.tsv");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }
}
