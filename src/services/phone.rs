const TRUNK_PREFIX: char = '0';

/// Formats a local or international number as E.164 for the WhatsApp
/// channel. Numbers already carrying a `+` are only stripped of punctuation.
pub fn to_e164(raw: &str, country_code: &str) -> String {
    let number: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect();

    if number.starts_with('+') {
        return number;
    }

    let country_code = country_code.trim().trim_start_matches('+');
    let national = number.strip_prefix(TRUNK_PREFIX).unwrap_or(&number);
    format!("+{country_code}{national}")
}

pub fn whatsapp_address(e164: &str) -> String {
    format!("whatsapp:{e164}")
}
