//! Word and word-pair streams over buffered text.
//!
//! A word is a maximal run of alphanumeric characters and apostrophes,
//! lowercased, with leading and trailing apostrophes trimmed. Every word and
//! every pair is a freshly owned `String` that can be moved into a table.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the words of a reader.
pub struct Words<R> {
    reader: R,
    line: Vec<u8>,
    pending: VecDeque<String>,
    done: bool,
}

pub fn words<R: BufRead>(reader: R) -> Words<R> {
    Words {
        reader,
        line: Vec::new(),
        pending: VecDeque::new(),
        done: false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

impl<R: BufRead> Words<R> {
    fn split_line(&mut self) {
        let text = String::from_utf8_lossy(&self.line);
        let mut word = String::new();
        for c in text.chars() {
            if is_word_char(c) {
                word.extend(c.to_lowercase());
            } else if !word.is_empty() {
                push_word(&mut self.pending, &mut word);
            }
        }
        if !word.is_empty() {
            push_word(&mut self.pending, &mut word);
        }
    }
}

fn push_word(pending: &mut VecDeque<String>, word: &mut String) {
    let trimmed = word.trim_matches('\'');
    if !trimmed.is_empty() {
        if trimmed.len() == word.len() {
            pending.push_back(std::mem::take(word));
            return;
        }
        pending.push_back(trimmed.to_owned());
    }
    word.clear();
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(w) = self.pending.pop_front() {
                return Some(Ok(w));
            }
            if self.done {
                return None;
            }
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => self.done = true,
                Ok(_) => self.split_line(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Iterator over adjacent word pairs, joined by a single space.
pub struct Pairs<I> {
    words: I,
    prev: Option<String>,
}

/// `w1 w2 w3 ...` becomes `"w1 w2"`, `"w2 w3"`, ... A stream with fewer than
/// two words yields nothing. Read errors are passed through.
pub fn pairs<I>(words: I) -> Pairs<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    Pairs { words, prev: None }
}

impl<I> Iterator for Pairs<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cur = match self.words.next()? {
                Ok(w) => w,
                Err(e) => return Some(Err(e)),
            };
            let Some(prev) = self.prev.take() else {
                self.prev = Some(cur);
                continue;
            };
            let mut pair = String::with_capacity(prev.len() + 1 + cur.len());
            pair.push_str(&prev);
            pair.push(' ');
            pair.push_str(&cur);
            self.prev = Some(cur);
            return Some(Ok(pair));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_words(text: &str) -> Vec<String> {
        words(Cursor::new(text.as_bytes()))
            .collect::<io::Result<_>>()
            .unwrap()
    }

    fn collect_pairs(text: &str) -> Vec<String> {
        pairs(words(Cursor::new(text.as_bytes())))
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        assert_eq!(
            collect_words("The quick, brown FOX!\n  jumped--over\tthe dog."),
            vec!["the", "quick", "brown", "fox", "jumped", "over", "the", "dog"]
        );
    }

    #[test]
    fn keeps_inner_apostrophes_only() {
        assert_eq!(
            collect_words("don't 'quoted' ' rock'n'roll"),
            vec!["don't", "quoted", "rock'n'roll"]
        );
    }

    #[test]
    fn digits_are_word_characters() {
        assert_eq!(collect_words("route 66, 2nd"), vec!["route", "66", "2nd"]);
    }

    #[test]
    fn handles_unicode_and_invalid_utf8() {
        assert_eq!(collect_words("Ärger über"), vec!["ärger", "über"]);
        let bytes: &[u8] = b"ab\xffcd ef";
        let got: Vec<String> = words(Cursor::new(bytes)).map(Result::unwrap).collect();
        assert_eq!(got, vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn empty_input_has_no_words() {
        assert!(collect_words("").is_empty());
        assert!(collect_words(" \n\n ... \n").is_empty());
    }

    #[test]
    fn pairs_span_lines() {
        assert_eq!(
            collect_pairs("one two\nthree\n\nfour"),
            vec!["one two", "two three", "three four"]
        );
    }

    #[test]
    fn fewer_than_two_words_yield_no_pairs() {
        assert!(collect_pairs("").is_empty());
        assert!(collect_pairs("lonely").is_empty());
    }

    #[test]
    fn read_errors_pass_through() {
        struct Failing;
        impl io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }
        let mut it = pairs(words(io::BufReader::new(Failing)));
        let err = it.next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(it.next().is_none());
    }
}
