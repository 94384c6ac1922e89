//! Indonesian stopword list with protected negation words.

use std::collections::HashSet;

/// High-frequency, low-information Indonesian words excluded from feature
/// extraction. Mirrors the list the classifier was trained with.
const STOPWORDS: &[&str] = &[
    "ada", "adalah", "agar", "akan", "aku", "anda", "antara", "apa", "apakah",
    "atau", "bagaimana", "bagi", "bahwa", "banget", "begitu", "belum", "biar",
    "bisa", "bukan", "dalam", "dan", "dapat", "dari", "daripada", "demi",
    "dengan", "di", "dia", "dong", "dulu", "hanya", "harus", "hingga", "ia",
    "ini", "itu", "jadi", "jika", "juga", "kalau", "kami", "kamu", "karena",
    "ke", "kenapa", "kepada", "ketika", "kita", "kok", "kurang", "lagi",
    "lah", "lain", "lebih", "maka", "malah", "mari", "masih", "mau",
    "melainkan", "mereka", "mengapa", "menurut", "namun", "nanti", "oleh",
    "pada", "para", "pun", "saat", "saja", "sama", "sambil", "sampai",
    "sangat", "saya", "se", "sebab", "sebagai", "sebelum", "sedang",
    "sedangkan", "segera", "seharusnya", "sehingga", "sekali", "sekarang",
    "selain", "selalu", "seluruh", "sementara", "semua", "seperti", "serta",
    "sesudah", "setelah", "setiap", "sih", "sudah", "supaya", "tak", "tanpa",
    "tapi", "telah", "tentang", "terhadap", "tersebut", "tetapi", "tidak",
    "untuk", "walau", "walaupun", "ya", "yaitu", "yakni", "yang",
];

/// Negation and modifier words that must survive preprocessing even though
/// the base stopword list contains them; dropping them flips sentiment.
pub const NEGATION_WORDS: &[&str] = &["tidak", "bukan", "kurang", "belum", "tak"];

/// Build the effective stopword set: the base list minus protected negation
/// words.
pub fn stopword_set() -> HashSet<&'static str> {
    let mut set: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
    for negation in NEGATION_WORDS {
        set.remove(negation);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_words_are_protected() {
        let set = stopword_set();
        for negation in NEGATION_WORDS {
            assert!(!set.contains(negation), "{negation} must not be filtered");
        }
    }

    #[test]
    fn common_function_words_are_filtered() {
        let set = stopword_set();
        for word in ["yang", "di", "dan", "ini", "sangat"] {
            assert!(set.contains(word), "{word} should be a stopword");
        }
    }
}
