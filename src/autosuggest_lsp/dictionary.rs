use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use simple_log::error;

fn resolve_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home_dir) = home::home_dir() {
            return home_dir.join(rest);
        }
    }
    PathBuf::from(path)
}

fn read_word_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_string())
            .collect(),
        Err(e) => {
            error!("failed to read word list {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Words from a dictionary path: either a single word-list file (one word
/// per line, `#` comments allowed) or a folder of `*.txt` word lists.
pub fn load_dictionary(path: &str) -> Vec<String> {
    let resolved = resolve_path(path);
    if resolved.is_file() {
        return read_word_file(&resolved);
    }

    let target = format!("{}/*.txt", resolved.display());
    let mut words = Vec::new();
    if let Ok(paths) = glob(&target) {
        for entry in paths {
            match entry {
                Ok(path) => words.extend(read_word_file(&path)),
                Err(e) => {
                    error!("{:?}", e);
                }
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn fixture_dir(name: &str) -> PathBuf {
        let mut dir = env::temp_dir();
        dir.push(format!("autosuggest-lsp-test-{}-{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_dictionary_file() {
        let dir = fixture_dir("file");
        let file = dir.join("words.txt");
        fs::write(&file, "pizza\n\n# comment\n  piano  \ndog\n").unwrap();

        let words = load_dictionary(file.to_str().unwrap());
        assert_eq!(vec!["pizza", "piano", "dog"], words);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_dictionary_folder() {
        let dir = fixture_dir("folder");
        fs::write(dir.join("a.txt"), "apple\navocado\n").unwrap();
        fs::write(dir.join("b.txt"), "banana\n").unwrap();
        fs::write(dir.join("ignored.snippets"), "not a word list\n").unwrap();

        let words = load_dictionary(dir.to_str().unwrap());
        // glob yields files in alphabetical order
        assert_eq!(vec!["apple", "avocado", "banana"], words);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_dictionary_missing_path() {
        let words = load_dictionary("/path/that/does/not/exist");
        assert_eq!(0, words.len());
    }
}
