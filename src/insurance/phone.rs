/// A phone number split into calling code and national number, as the
/// partner API wants them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPhone {
    pub country_code: Option<String>,
    pub number: String,
}

// ITU calling codes, grouped by length. Matching tries three digits, then
// two, then one, so e.g. 673 wins over 67 and 852 over 85.
const CODES_3: &[&str] = &[
    "212", "213", "216", "218", "220", "230", "234", "254", "255", "256", "260", "263", "264",
    "351", "352", "353", "354", "355", "356", "357", "358", "359", "370", "371", "372", "373",
    "374", "375", "376", "377", "380", "381", "385", "386", "387", "389", "420", "421", "423",
    "670", "673", "674", "675", "676", "677", "678", "679", "680", "685", "686", "687", "688",
    "689", "690", "691", "692", "850", "852", "853", "855", "856", "880", "886", "960", "961",
    "962", "963", "964", "965", "966", "967", "968", "971", "972", "973", "974", "975", "976",
    "977", "992", "993", "994", "995", "996", "998",
];
const CODES_2: &[&str] = &[
    "20", "27", "30", "31", "32", "33", "34", "36", "39", "40", "41", "43", "44", "45", "46",
    "47", "48", "49", "51", "52", "53", "54", "55", "56", "57", "58", "60", "61", "62", "63",
    "64", "65", "66", "81", "82", "84", "86", "90", "91", "92", "93", "94", "95", "98",
];
const CODES_1: &[&str] = &["1", "7"];

/// Split a full international number into calling code + national number.
/// Numbers without a `+` prefix or with an unrecognized code are passed
/// through whole with no calling code.
pub fn split(full: &str) -> SplitPhone {
    let cleaned: String = full
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let Some(digits) = cleaned.strip_prefix('+') else {
        return SplitPhone {
            country_code: None,
            number: full.to_string(),
        };
    };

    for (len, codes) in [(3, CODES_3), (2, CODES_2), (1, CODES_1)] {
        if let Some(prefix) = digits.get(..len) {
            if codes.contains(&prefix) && digits.len() > len {
                return SplitPhone {
                    country_code: Some(prefix.to_string()),
                    number: digits[len..].to_string(),
                };
            }
        }
    }

    SplitPhone {
        country_code: None,
        number: full.to_string(),
    }
}
