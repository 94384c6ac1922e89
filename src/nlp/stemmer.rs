//! Dictionary-gated affix stripping for Indonesian review text.
//!
//! Indonesian derives words by stacking prefixes and suffixes on a root
//! ("membantu" = "mem" + "bantu"). Stripping is only accepted when it lands
//! on a known root word; anything else passes through unchanged, which is
//! also how the training-time stemmer treats out-of-dictionary words.

use std::collections::HashSet;

/// Root-word dictionary covering the review vocabulary the classifier was
/// trained on plus common Indonesian roots.
const ROOT_WORDS: &[&str] = &[
    "adil", "ajar", "akses", "akun", "akurat", "aman", "ambil", "angka",
    "aplikasi", "atur", "baca", "bagus", "baik", "bantu", "baru", "batal",
    "baterai", "belum", "benar", "benci", "berat", "biasa", "bintang",
    "bodoh", "buat", "buka", "bukan", "buruk", "cantik", "cari", "cepat",
    "cerdas", "coba", "crash", "cukup", "daftar", "data", "dengar", "dukung",
    "eror", "error", "fitur", "foto", "fungsi", "gagal", "gambar", "ganggu",
    "ganti", "guna", "hapus", "harap", "hasil", "hebat", "henti", "hilang",
    "hitung", "hubung", "indah", "ingat", "instal", "internet", "isi",
    "jalan", "jaringan", "jelek", "jujur", "kadang", "kata", "kecewa",
    "keluar", "keluh", "kembang", "kenal", "keren", "kerja", "kirim",
    "kurang", "lama", "lambat", "lancar", "lapor", "layan", "layar", "lemot",
    "lengkap", "lihat", "login", "lumayan", "lupa", "macet", "main", "makan",
    "mantap", "masalah", "masuk", "menu", "mohon", "muat", "mudah", "mulai",
    "netral", "nilai", "nyaman", "paham", "pakai", "panas", "parah",
    "pasang", "perintah", "pilih", "pintar", "proses", "puas", "pukul",
    "putus", "rekap", "respon", "ribet", "ringan", "rusak", "salah", "sandi",
    "senang", "sering", "server", "simpan", "sinyal", "sistem", "standar",
    "suara", "suka", "sukses", "sulit", "susah", "tahu", "tak", "tambah",
    "tampil", "tarik", "temu", "tepat", "terima", "terus", "tidak",
    "tingkat", "tolong", "tombol", "tulis", "tunggu", "tutup", "ubah",
    "ulang", "unduh", "unggah", "urus", "versi",
];

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

/// Derivational prefixes with morphophonemic recodings: stripping "mem"
/// from "memukul" must also try restoring the elided "p" ("pukul").
const PREFIX_RULES: &[(&str, &[&str])] = &[
    ("meny", &["s"]),
    ("meng", &["", "k"]),
    ("mem", &["", "p"]),
    ("men", &["", "t"]),
    ("me", &[""]),
    ("peny", &["s"]),
    ("peng", &["", "k"]),
    ("pem", &["", "p"]),
    ("pen", &["", "t"]),
    ("per", &[""]),
    ("pel", &[""]),
    ("pe", &[""]),
    ("ber", &[""]),
    ("bel", &[""]),
    ("be", &[""]),
    ("ter", &[""]),
    ("te", &[""]),
    ("di", &[""]),
    ("ke", &[""]),
    ("se", &[""]),
];

/// Minimum length a candidate stem must keep after stripping an affix.
const MIN_STEM_LEN: usize = 3;

/// Affix-stripping stemmer over an embedded root-word dictionary.
pub struct Stemmer {
    roots: HashSet<&'static str>,
}

impl Stemmer {
    pub fn new() -> Self {
        Self {
            roots: ROOT_WORDS.iter().copied().collect(),
        }
    }

    fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    /// Reduce a token to its root form. Tokens that cannot be resolved to a
    /// dictionary root are returned unchanged.
    pub fn stem(&self, word: &str) -> String {
        if word.len() < 4 || self.is_root(word) {
            return word.to_string();
        }
        self.resolve_suffix_first(word)
            .or_else(|| self.resolve_prefix_first(word))
            .unwrap_or_else(|| word.to_string())
    }

    /// Standard order: particle, possessive, derivational suffix, then
    /// prefixes on whatever is left.
    fn resolve_suffix_first(&self, word: &str) -> Option<String> {
        let (trimmed, hit) = self.drop_suffixes(word);
        if hit.is_some() {
            return hit;
        }
        self.search_prefixes(&trimmed, false)
    }

    /// Confix fallback: words like "berjalan" or "dipakai" only resolve when
    /// the prefix comes off before (or instead of) the suffix.
    fn resolve_prefix_first(&self, word: &str) -> Option<String> {
        self.search_prefixes(word, true)
    }

    /// Strip one affix per suffix group, checking the dictionary after each
    /// removal. Returns the fully trimmed form and the dictionary hit, if
    /// any.
    fn drop_suffixes(&self, word: &str) -> (String, Option<String>) {
        let mut current = word.to_string();
        for group in [PARTICLES, POSSESSIVES, DERIVATIONAL_SUFFIXES] {
            if let Some(stripped) = strip_suffix_group(&current, group) {
                if self.is_root(&stripped) {
                    return (stripped.clone(), Some(stripped));
                }
                current = stripped;
            }
        }
        (current, None)
    }

    /// Peel up to three prefixes, trying every matching rule and recoding at
    /// each layer. With `retry_suffixes`, each intermediate form also gets a
    /// suffix pass, covering confixes like "pe-…-an".
    fn search_prefixes(&self, word: &str, retry_suffixes: bool) -> Option<String> {
        let mut frontier = vec![word.to_string()];
        for _ in 0..3 {
            let mut next = Vec::new();
            for form in &frontier {
                for candidate in prefix_splits(form) {
                    if self.is_root(&candidate) {
                        return Some(candidate);
                    }
                    if retry_suffixes {
                        if let (_, Some(hit)) = self.drop_suffixes(&candidate) {
                            return Some(hit);
                        }
                    }
                    next.push(candidate);
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        None
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_suffix_group(word: &str, group: &[&str]) -> Option<String> {
    for suffix in group {
        if let Some(rest) = word.strip_suffix(suffix) {
            if rest.len() >= MIN_STEM_LEN {
                return Some(rest.to_string());
            }
        }
    }
    None
}

/// All candidate stems reachable by removing a single leading prefix,
/// including recoded variants.
fn prefix_splits(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (prefix, recodings) in PREFIX_RULES {
        if let Some(rest) = word.strip_prefix(prefix) {
            for recode in *recodings {
                let candidate = format!("{recode}{rest}");
                if candidate.len() >= MIN_STEM_LEN && !out.contains(&candidate) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}
