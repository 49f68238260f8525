use std::str::FromStr;

use crate::error::DumpError;

/// Server character encodings, grouped by how they size multibyte characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF8.
    #[default]
    Utf8,
    /// EUC_JP and EUC_JIS_2004.
    EucJp,
    /// EUC_CN.
    EucCn,
    /// EUC_KR.
    EucKr,
    /// EUC_TW.
    EucTw,
    /// JOHAB.
    Johab,
    /// SJIS and SHIFT_JIS_2004.
    Sjis,
    /// BIG5.
    Big5,
    /// GBK.
    Gbk,
    /// UHC.
    Uhc,
    /// GB18030.
    Gb18030,
    /// MULE_INTERNAL.
    MuleInternal,
    /// SQL_ASCII and every single-byte encoding (LATINn, WINnnnn, KOI8, ISO_8859_n).
    SingleByte,
}

const SS2: u8 = 0x8e;
const SS3: u8 = 0x8f;

impl Encoding {
    /// Byte length of the character starting at `bytes[0]`, as the server
    /// would compute it. The slice may be shorter than the result.
    pub fn char_len(self, bytes: &[u8]) -> usize {
        let Some(&lead) = bytes.first() else {
            return 0;
        };
        let high = lead & 0x80 != 0;
        match self {
            Encoding::Utf8 => {
                if lead & 0x80 == 0 {
                    1
                } else if lead & 0xe0 == 0xc0 {
                    2
                } else if lead & 0xf0 == 0xe0 {
                    3
                } else if lead & 0xf8 == 0xf0 {
                    4
                } else {
                    1
                }
            }
            Encoding::EucJp | Encoding::Johab => match lead {
                SS2 => 2,
                SS3 => 3,
                _ if high => 2,
                _ => 1,
            },
            Encoding::EucTw => match lead {
                SS2 => 4,
                SS3 => 3,
                _ if high => 2,
                _ => 1,
            },
            Encoding::EucCn | Encoding::EucKr | Encoding::Big5 | Encoding::Gbk | Encoding::Uhc => {
                if high {
                    2
                } else {
                    1
                }
            }
            Encoding::Sjis => match lead {
                // half-width katakana
                0xa1..=0xdf => 1,
                _ if high => 2,
                _ => 1,
            },
            Encoding::Gb18030 => {
                if !high {
                    1
                } else if bytes.get(1).is_some_and(|b| (0x30..=0x39).contains(b)) {
                    4
                } else {
                    2
                }
            }
            Encoding::MuleInternal => match lead {
                0x81..=0x8d => 2,
                0x9a | 0x9b => 3,
                0x90..=0x99 => 3,
                0x9c | 0x9d => 4,
                _ => 1,
            },
            Encoding::SingleByte => 1,
        }
    }
}

impl FromStr for Encoding {
    type Err = DumpError;

    /// Accepts server encoding names and their common aliases, ignoring case
    /// and punctuation (`utf-8`, `UTF8`, `euc_jp`, `Windows-1252`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        let encoding = match key.as_str() {
            "utf8" | "unicode" => Encoding::Utf8,
            "eucjp" | "eucjis2004" => Encoding::EucJp,
            "euccn" => Encoding::EucCn,
            "euckr" => Encoding::EucKr,
            "euctw" => Encoding::EucTw,
            "johab" => Encoding::Johab,
            "sjis" | "shiftjis" | "shiftjis2004" | "mskanji" | "win932" | "windows932" => {
                Encoding::Sjis
            }
            "big5" | "win950" | "windows950" => Encoding::Big5,
            "gbk" | "win936" | "windows936" => Encoding::Gbk,
            "uhc" | "win949" | "windows949" => Encoding::Uhc,
            "gb18030" => Encoding::Gb18030,
            "muleinternal" => Encoding::MuleInternal,
            "sqlascii" | "koi8" | "koi8r" | "koi8u" | "alt" | "tcvn" | "tcvn5712" | "vscii"
            | "abc" => Encoding::SingleByte,
            _ if is_single_byte_family(&key) => Encoding::SingleByte,
            _ => return Err(DumpError::UnknownEncoding(s.to_string())),
        };
        Ok(encoding)
    }
}

const LATIN_SUFFIXES: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
const ISO_8859_SUFFIXES: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "13", "14", "15", "16",
];
const WINDOWS_SUFFIXES: &[&str] = &[
    "866", "874", "1250", "1251", "1252", "1253", "1254", "1255", "1256", "1257", "1258",
];

fn is_single_byte_family(key: &str) -> bool {
    let numbered = |prefix: &str, allowed: &[&str]| {
        key.strip_prefix(prefix)
            .is_some_and(|suffix| allowed.contains(&suffix))
    };
    numbered("latin", LATIN_SUFFIXES)
        || numbered("iso8859", ISO_8859_SUFFIXES)
        || numbered("windows", WINDOWS_SUFFIXES)
        || numbered("win", WINDOWS_SUFFIXES)
}
