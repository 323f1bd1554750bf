//! Rewrites written Vietnamese into speakable words before phonemization:
//! numbers, dates, times, money, symbols and punctuation variants.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use super::numbers::{number_to_words, spell_digits};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid pattern {pattern}: {err}"))
}

static URL_RE: Lazy<Regex> = Lazy::new(|| compile(r"https?://\S+|www\.\S+"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| compile(r"\S+@\S+\.\S+"));

static DOUBLE_QUOTE_RE: Lazy<Regex> = Lazy::new(|| compile(r"[“”„‟]"));
static SINGLE_QUOTE_RE: Lazy<Regex> = Lazy::new(|| compile(r"[‘’‚‛]"));
static DASH_RE: Lazy<Regex> = Lazy::new(|| compile(r"[–—−]"));
static DOTS_RE: Lazy<Regex> = Lazy::new(|| compile(r"\.{3,}"));
static REPEATED_MARK_RE: Lazy<Regex> = Lazy::new(|| compile(r"([!?.]){2,}"));

static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d{4})\s*[-–—]\s*(\d{4})"));

static BIRTH_DATE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(Sinh|sinh)\s+ngày\s+(\d{1,2})[/-](\d{1,2})[/-](\d{4})"));
static FULL_DATE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})"));
static DAY_MONTH_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)\s*tháng\s*(\d+)"));
static MONTH_RE: Lazy<Regex> = Lazy::new(|| compile(r"tháng\s*(\d+)"));
static DAY_RE: Lazy<Regex> = Lazy::new(|| compile(r"ngày\s*(\d+)"));

static CLOCK_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d{1,2}):(\d{2})(?::(\d{2}))?"));
static HOUR_MINUTE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)\s*giờ\s*(\d+)\s*phút"));
static HOUR_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)\s*giờ"));

static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(thứ|lần|bước|phần|chương|tập|số)\s*(\d+)"));

static DONG_WORD_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(\d+(?:[.,]\d+)*)\s*(?:đồng|VND|vnđ)\b"));
static DONG_SIGN_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(\d+(?:[.,]\d+)*)đ"));
static DOLLAR_PREFIX_RE: Lazy<Regex> = Lazy::new(|| compile(r"\$\s*(\d+(?:[.,]\d+)*)"));
static DOLLAR_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(\d+(?:[.,]\d+)*)\s*(?:USD|\$)"));

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+(?:[.,]\d+)?)\s*%"));
static WIFI_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bwi-?fi\b"));

static LOCAL_PHONE_RE: Lazy<Regex> = Lazy::new(|| compile(r"0\d{9,10}"));
static INTL_PHONE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\+84\d{9,10}"));

static GROUPED_RE: Lazy<Regex> = Lazy::new(|| compile(r"\d{1,3}(?:[.,]\d{3})+"));
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\d+)[.,](\d{1,2})"));
static STANDALONE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b\d+\b"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));

const ORDINALS: [(&str, &str); 10] = [
    ("1", "nhất"),
    ("2", "hai"),
    ("3", "ba"),
    ("4", "tư"),
    ("5", "năm"),
    ("6", "sáu"),
    ("7", "bảy"),
    ("8", "tám"),
    ("9", "chín"),
    ("10", "mười"),
];

/// Full normalization pipeline. Pass order matters: ranges and dates must
/// see their digits before the generic number passes consume them.
pub fn normalize_text(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = remove_special_chars(&text);
    let text = normalize_punctuation(&text);
    let text = convert_year_range(&text);
    let text = convert_date(&text);
    let text = convert_time(&text);
    let text = convert_ordinal(&text);
    let text = convert_currency(&text);
    let text = convert_percentage(&text);
    let text = replace_common_terms(&text);
    let text = convert_phone_number(&text);
    let text = convert_grouped_numbers(&text);
    let text = convert_decimal(&text);
    let text = convert_standalone_numbers(&text);
    clean_whitespace(&text)
}

/// Like `Regex::replace_all`, but a match is only rewritten when `rewrite`
/// accepts it given the text on either side. A rejected match lets the
/// search resume one character later.
fn replace_checked<F>(re: &Regex, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures, &str, &str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut start = 0;
    while start <= text.len() {
        let Some(caps) = re.captures_at(text, start) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        let (before, after) = (&text[..whole.start()], &text[whole.end()..]);
        match rewrite(&caps, before, after) {
            Some(replacement) => {
                out.push_str(&text[copied..whole.start()]);
                out.push_str(&replacement);
                copied = whole.end();
                start = if whole.end() > whole.start() {
                    whole.end()
                } else {
                    next_boundary(text, whole.end())
                };
            }
            None => start = next_boundary(text, whole.start()),
        }
    }
    out.push_str(&text[copied..]);
    out
}

fn next_boundary(text: &str, idx: usize) -> usize {
    text[idx..]
        .chars()
        .next()
        .map(|ch| idx + ch.len_utf8())
        .unwrap_or(text.len() + 1)
}

fn words(caps: &Captures, group: usize) -> String {
    number_to_words(&caps[group])
}

fn strip_separators(number: &str) -> String {
    number.chars().filter(|ch| !matches!(ch, '.' | ',')).collect()
}

/// URLs and e-mail addresses are dropped before `@` is spelled out, so the
/// address pattern still sees the `@`.
pub fn remove_special_chars(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    text.replace('&', " và ")
        .replace('@', " a còng ")
        .replace('#', " thăng ")
        .replace('_', " ")
        .replace(['*', '~', '`', '^'], "")
}

pub fn normalize_punctuation(text: &str) -> String {
    let text = DOUBLE_QUOTE_RE.replace_all(text, "\"");
    let text = SINGLE_QUOTE_RE.replace_all(&text, "'");
    let text = DASH_RE.replace_all(&text, "-");
    let text = DOTS_RE.replace_all(&text, "...");
    let text = text.replace('…', "...");
    REPEATED_MARK_RE.replace_all(&text, "$1").into_owned()
}

fn convert_year_range(text: &str) -> String {
    YEAR_RANGE_RE
        .replace_all(text, |caps: &Captures| {
            format!("{} đến {}", words(caps, 1), words(caps, 2))
        })
        .into_owned()
}

fn convert_date(text: &str) -> String {
    let text = BIRTH_DATE_RE.replace_all(text, |caps: &Captures| {
        format!(
            "{} ngày {} tháng {} năm {}",
            &caps[1],
            words(caps, 2),
            words(caps, 3),
            words(caps, 4)
        )
    });
    let text = FULL_DATE_RE.replace_all(&text, |caps: &Captures| {
        format!(
            "ngày {} tháng {} năm {}",
            words(caps, 1),
            words(caps, 2),
            words(caps, 3)
        )
    });
    let text = DAY_MONTH_RE.replace_all(&text, |caps: &Captures| {
        format!("ngày {} tháng {}", words(caps, 1), words(caps, 2))
    });
    let text = MONTH_RE.replace_all(&text, |caps: &Captures| {
        format!("tháng {}", words(caps, 1))
    });
    DAY_RE
        .replace_all(&text, |caps: &Captures| format!("ngày {}", words(caps, 1)))
        .into_owned()
}

fn convert_time(text: &str) -> String {
    let text = CLOCK_RE.replace_all(text, |caps: &Captures| {
        let mut out = format!("{} giờ {} phút", words(caps, 1), words(caps, 2));
        if let Some(second) = caps.get(3) {
            out.push(' ');
            out.push_str(&number_to_words(second.as_str()));
            out.push_str(" giây");
        }
        out
    });
    let text = HOUR_MINUTE_RE.replace_all(&text, |caps: &Captures| {
        format!("{} giờ {} phút", words(caps, 1), words(caps, 2))
    });
    replace_checked(&HOUR_RE, &text, |caps, _, after| {
        let followed_by_digit = after
            .trim_start()
            .starts_with(|ch: char| ch.is_numeric());
        (!followed_by_digit).then(|| format!("{} giờ", words(caps, 1)))
    })
}

fn convert_ordinal(text: &str) -> String {
    ORDINAL_RE
        .replace_all(text, |caps: &Captures| {
            let number = &caps[2];
            let spoken = ORDINALS
                .iter()
                .find(|(digits, _)| *digits == number)
                .map(|(_, word)| word.to_string())
                .unwrap_or_else(|| number_to_words(number));
            format!("{} {spoken}", &caps[1])
        })
        .into_owned()
}

fn is_word_letter(ch: char) -> bool {
    ch.to_lowercase()
        .any(|lower| lower.is_ascii_lowercase() || ('à'..='ỹ').contains(&lower))
}

fn dong_words(caps: &Captures) -> String {
    format!("{} đồng", number_to_words(&strip_separators(&caps[1])))
}

fn dollar_words(caps: &Captures) -> String {
    format!("{} đô la", number_to_words(&strip_separators(&caps[1])))
}

fn convert_currency(text: &str) -> String {
    let text = DONG_WORD_RE.replace_all(text, dong_words);
    let text = replace_checked(&DONG_SIGN_RE, &text, |caps, _, after| {
        let glued_to_word = after.chars().next().is_some_and(is_word_letter);
        (!glued_to_word).then(|| dong_words(caps))
    });
    let text = DOLLAR_PREFIX_RE.replace_all(&text, dollar_words);
    DOLLAR_SUFFIX_RE.replace_all(&text, dollar_words).into_owned()
}

fn convert_percentage(text: &str) -> String {
    PERCENT_RE
        .replace_all(text, |caps: &Captures| {
            format!("{} phần trăm", words(caps, 1))
        })
        .into_owned()
}

fn replace_common_terms(text: &str) -> String {
    WIFI_RE.replace_all(text, "oai phai").into_owned()
}

fn spell_phone(caps: &Captures) -> String {
    let digits: String = caps[0].chars().filter(char::is_ascii_digit).collect();
    spell_digits(&digits)
}

/// Phone numbers are read digit by digit; `+84` drops the plus sign.
fn convert_phone_number(text: &str) -> String {
    let text = LOCAL_PHONE_RE.replace_all(text, spell_phone);
    INTL_PHONE_RE.replace_all(&text, spell_phone).into_owned()
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ','
}

/// `1.000.000` or `1,000` read as one integer. Groups touching more digits
/// or separators are left for the decimal pass.
fn convert_grouped_numbers(text: &str) -> String {
    replace_checked(&GROUPED_RE, text, |caps, before, after| {
        let isolated = !before.chars().next_back().is_some_and(is_number_char)
            && !after.chars().next().is_some_and(is_number_char);
        isolated.then(|| number_to_words(&strip_separators(&caps[0])))
    })
}

/// `3,14` → "ba phẩy mười bốn". Only one or two fractional digits qualify.
fn convert_decimal(text: &str) -> String {
    replace_checked(&DECIMAL_RE, text, |caps, _, after| {
        if after.chars().next().is_some_and(|ch| ch.is_numeric()) {
            return None;
        }
        Some(format!("{} phẩy {}", words(caps, 1), words(caps, 2)))
    })
}

fn convert_standalone_numbers(text: &str) -> String {
    STANDALONE_RE
        .replace_all(text, |caps: &Captures| number_to_words(&caps[0]))
        .into_owned()
}

fn clean_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_time_and_day_month() {
        assert_eq!(
            normalize_text("Lúc khoảng 2 giờ 20 phút sáng ngày thứ Bảy hay 8 tháng 11"),
            "Lúc khoảng hai giờ hai mươi phút sáng ngày thứ Bảy hay ngày tám tháng mười một"
        );
        assert_eq!(
            normalize_text("Họp lúc 14:30"),
            "Họp lúc mười bốn giờ ba mươi phút"
        );
        assert_eq!(normalize_text("đúng 7 giờ"), "đúng bảy giờ");
    }

    #[test]
    fn reads_year_ranges_and_full_dates() {
        assert_eq!(
            normalize_text("Alfred Jarry 1873-1907 hợp những nhà văn"),
            "Alfred Jarry một nghìn tám trăm bảy mươi ba đến một nghìn chín trăm lẻ bảy hợp những nhà văn"
        );
        assert_eq!(
            normalize_text("Sinh ngày 15/08/1990"),
            "Sinh ngày mười lăm tháng tám năm một nghìn chín trăm chín mươi"
        );
    }

    #[test]
    fn reads_money_and_percentages() {
        assert_eq!(
            normalize_text("Giá sản phẩm là 100.000đ"),
            "Giá sản phẩm là một trăm nghìn đồng"
        );
        assert_eq!(normalize_text("giá $20"), "giá hai mươi đô la");
        assert_eq!(
            normalize_text("Tỷ lệ thành công đạt 85%"),
            "Tỷ lệ thành công đạt tám mươi lăm phần trăm"
        );
    }

    #[test]
    fn dong_sign_must_not_be_glued_to_a_word() {
        assert_eq!(normalize_text("5đi"), "5đi");
    }

    #[test]
    fn reads_ordinals_and_phone_numbers() {
        assert_eq!(
            normalize_text("Chương 3: Hành trình mới"),
            "Chương ba: Hành trình mới"
        );
        assert_eq!(normalize_text("lần 12"), "lần mười hai");
        assert_eq!(
            normalize_text("Số điện thoại: 0912345678"),
            "Số điện thoại: không chín một hai ba bốn năm sáu bảy tám"
        );
    }

    #[test]
    fn reads_grouped_decimal_and_plain_numbers() {
        assert_eq!(normalize_text("có 1.500.000 người"), "có một triệu năm trăm nghìn người");
        assert_eq!(
            normalize_text("Nhiệt độ 25.5 độ C"),
            "Nhiệt độ hai mươi lăm phẩy năm độ C"
        );
        assert_eq!(
            normalize_text("Công ty XYZ có 1500 nhân viên"),
            "Công ty XYZ có một nghìn năm trăm nhân viên"
        );
    }

    #[test]
    fn cleans_symbols_and_punctuation() {
        assert_eq!(normalize_text("A & B"), "A và B");
        assert_eq!(normalize_text("xem https://example.com ngay"), "xem ngay");
        assert_eq!(normalize_text("gửi a@b.vn nhé"), "gửi nhé");
        assert_eq!(normalize_text("“chào”…"), "\"chào\".");
        assert_eq!(normalize_text("thật sao?!?"), "thật sao?");
        assert_eq!(normalize_text("bật wifi lên"), "bật oai phai lên");
    }

    #[test]
    fn reads_clock_seconds_and_bare_day_month() {
        assert_eq!(
            normalize_text("lúc 10:30:15 sáng"),
            "lúc mười giờ ba mươi phút mười lăm giây sáng"
        );
        assert_eq!(
            normalize_text("ngày 5 và tháng 12"),
            "ngày năm và tháng mười hai"
        );
    }

    #[test]
    fn reads_currency_words_and_suffixes() {
        assert_eq!(normalize_text("giá 10 USD hôm nay"), "giá mười đô la hôm nay");
        assert_eq!(normalize_text("5$"), "năm đô la");
        assert_eq!(normalize_text("giá 50.000 VND"), "giá năm mươi nghìn đồng");
        assert_eq!(normalize_text("20 vnđ"), "hai mươi đồng");
        assert_eq!(
            normalize_text("vé 1.234,56 đồng"),
            "vé một trăm hai mươi ba nghìn bốn trăm năm mươi sáu đồng"
        );
    }

    #[test]
    fn spells_international_phone_numbers() {
        assert_eq!(
            normalize_text("Gọi +84912345678 ngay"),
            "Gọi tám bốn chín một hai ba bốn năm sáu bảy tám ngay"
        );
    }

    #[test]
    fn spells_hash_and_at_signs() {
        assert_eq!(normalize_text("số #1"), "số thăng một");
        assert_eq!(normalize_text("a@b"), "a a còng b");
    }

    #[test]
    fn minus_sign_stays_before_the_number() {
        assert_eq!(normalize_text("nhiệt độ -5 độ"), "nhiệt độ -năm độ");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_text("  xin \n\t chào  "), "xin chào");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn checked_replacement_retries_later_positions() {
        let re = compile(r"\d");
        let out = replace_checked(&re, "a1b2", |caps, before, _| {
            before.ends_with('b').then(|| format!("<{}>", &caps[0]))
        });
        assert_eq!(out, "a1b<2>");
    }
}
