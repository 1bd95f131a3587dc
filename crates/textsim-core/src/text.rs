//! Text normalization for tokenization and n-gram extraction

/// Simple word-based tokenizer splitting on non-alphanumeric characters
///
/// Lowercases the input and drops empty tokens. Punctuation never survives
/// because every non-alphanumeric character is a token boundary.
/// Empty or whitespace-only input yields an empty token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text with optional diacritic folding
///
/// When `fold` is true, common Latin diacritics are folded to their base
/// letters so that accented and unaccented spellings compare equal.
pub fn tokenize_with_folding(text: &str, fold: bool) -> Vec<String> {
    if !fold {
        return tokenize(text);
    }

    tokenize(text)
        .into_iter()
        .map(|t| fold_diacritics(&t))
        .collect()
}

/// Fold common Latin diacritics to their base letters
///
/// Covers the Latin-1 supplement and the Latin Extended-A characters seen in
/// western and central European text. Characters without a mapping pass
/// through unchanged.
pub fn fold_diacritics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match fold_char(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

fn fold_char(c: char) -> Option<&'static str> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'ř' => "r",
        'ś' | 'ş' | 'š' => "s",
        'ť' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        _ => return None,
    })
}
