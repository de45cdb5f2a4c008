//! Slug generation with Cyrillic transliteration.
//!
//! Titles may be written in Russian; slugs must be URL-safe ASCII. Each
//! Cyrillic letter maps to a fixed Latin sequence before the usual
//! lowercase-and-hyphenate pass.

/// Latin rendering of a lowercase Cyrillic letter, if it has one.
fn translit_char(c: char) -> Option<&'static str> {
    let out = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "ju",
        'я' => "ja",
        _ => return None,
    };
    Some(out)
}

/// Slugify a title for use in note URLs
/// (e.g. "Новая заметка" -> "novaja-zametka", "Hello World!" -> "hello-world")
pub fn slugify(title: &str) -> String {
    let mut ascii = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if let Some(t) = translit_char(c) {
            ascii.push_str(t);
        } else if c.is_ascii_alphanumeric() {
            ascii.push(c);
        } else {
            ascii.push('-');
        }
    }

    ascii
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}
