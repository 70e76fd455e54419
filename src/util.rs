use crate::source_loc::SourceLoc;

pub fn error(source_loc: &SourceLoc, message: &str) {
    eprintln!("[{}] Error: {}", source_loc, message);
}

pub fn is_digit(grapheme: &str) -> bool {
    // Note: built-in is_numeric() uses a more complicated unicode definition of
    // numeric.
    matches!(grapheme, "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9")
}

pub fn is_whitespace(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(char::is_whitespace)
}

pub fn is_newline(grapheme: &str) -> bool {
    grapheme.contains('\n')
}
