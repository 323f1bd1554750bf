const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Integers longer than this are read digit by digit.
const MAX_GROUPED_DIGITS: usize = 12;

/// Reads a decimal integer string aloud. Leading zeros are ignored and a
/// leading `-` is read as "âm". Strings that are not integers come back
/// unchanged.
pub fn number_to_words(number: &str) -> String {
    let trimmed = number.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };
    if let Some(rest) = digits.strip_prefix('-') {
        return format!("âm {}", number_to_words(rest));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    if digits.len() > MAX_GROUPED_DIGITS {
        return spell_digits(digits);
    }
    match digits.parse::<u64>() {
        Ok(value) => convert_integer(value),
        Err(_) => spell_digits(digits),
    }
}

/// One word per digit, e.g. for phone numbers. Non-digits are kept as-is.
pub fn spell_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => DIGITS[d as usize].to_string(),
            None => ch.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn digit(value: u64) -> &'static str {
    DIGITS[(value % 10) as usize]
}

fn convert_integer(value: u64) -> String {
    match value {
        0..=9 => digit(value).to_string(),
        10 => "mười".to_string(),
        11..=19 => format!("mười {}", unit_word(value % 10)),
        20..=99 => convert_tens(value),
        100..=999 => {
            let head = format!("{} trăm", digit(value / 100));
            with_remainder(head, value % 100, true)
        }
        1_000..=999_999 => {
            let head = format!("{} nghìn", convert_integer(value / 1_000));
            with_remainder(head, value % 1_000, true)
        }
        1_000_000..=999_999_999 => {
            let head = format!("{} triệu", convert_integer(value / 1_000_000));
            with_remainder(head, value % 1_000_000, false)
        }
        _ => {
            let head = format!("{} tỷ", convert_integer(value / 1_000_000_000));
            with_remainder(head, value % 1_000_000_000, false)
        }
    }
}

fn convert_tens(value: u64) -> String {
    let tens = format!("{} mươi", digit(value / 10));
    match value % 10 {
        0 => tens,
        1 => format!("{tens} mốt"),
        4 => format!("{tens} tư"),
        units => format!("{tens} {}", unit_word(units)),
    }
}

/// Unit digit after "mười"/"mươi": 5 is read "lăm".
fn unit_word(units: u64) -> &'static str {
    match units {
        5 => "lăm",
        _ => digit(units),
    }
}

fn with_remainder(head: String, remainder: u64, odd_units: bool) -> String {
    match remainder {
        0 => head,
        1..=9 if odd_units => format!("{head} lẻ {}", digit(remainder)),
        _ => format!("{head} {}", convert_integer(remainder)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_small_numbers() {
        assert_eq!(number_to_words("0"), "không");
        assert_eq!(number_to_words("7"), "bảy");
        assert_eq!(number_to_words("10"), "mười");
        assert_eq!(number_to_words("14"), "mười bốn");
        assert_eq!(number_to_words("15"), "mười lăm");
    }

    #[test]
    fn uses_irregular_units_after_tens() {
        assert_eq!(number_to_words("20"), "hai mươi");
        assert_eq!(number_to_words("21"), "hai mươi mốt");
        assert_eq!(number_to_words("44"), "bốn mươi tư");
        assert_eq!(number_to_words("25"), "hai mươi lăm");
        assert_eq!(number_to_words("99"), "chín mươi chín");
    }

    #[test]
    fn reads_hundreds_and_thousands() {
        assert_eq!(number_to_words("100"), "một trăm");
        assert_eq!(number_to_words("105"), "một trăm lẻ năm");
        assert_eq!(number_to_words("1873"), "một nghìn tám trăm bảy mươi ba");
        assert_eq!(number_to_words("1907"), "một nghìn chín trăm lẻ bảy");
        assert_eq!(number_to_words("1005"), "một nghìn lẻ năm");
        assert_eq!(number_to_words("2050"), "hai nghìn năm mươi");
        assert_eq!(number_to_words("100000"), "một trăm nghìn");
    }

    #[test]
    fn reads_millions_and_billions() {
        assert_eq!(number_to_words("1000000"), "một triệu");
        assert_eq!(number_to_words("1000005"), "một triệu năm");
        assert_eq!(number_to_words("3000000000"), "ba tỷ");
        assert_eq!(
            number_to_words("2500000000"),
            "hai tỷ năm trăm triệu"
        );
    }

    #[test]
    fn handles_zeros_signs_and_garbage() {
        assert_eq!(number_to_words("007"), "bảy");
        assert_eq!(number_to_words("000"), "không");
        assert_eq!(number_to_words("-5"), "âm năm");
        assert_eq!(number_to_words("12a"), "12a");
    }

    #[test]
    fn falls_back_to_digits_for_long_numbers() {
        assert_eq!(
            number_to_words("1234567890123"),
            "một hai ba bốn năm sáu bảy tám chín không một hai ba"
        );
        assert_eq!(spell_digits("090"), "không chín không");
    }
}
