/// Placeholder transform substituted whenever the remote provider is
/// unavailable. Deliberately not a translation: the marker makes degraded
/// mode observably distinct from normal mode.
pub fn fake_translate(text: &str, target_lang: &str) -> String {
    match target_lang {
        "en" => format!("[EN] {}", text),
        "fr" => format!("[FR] {}", text),
        "de" => format!("[DE] {}", text),
        _ => text.to_string(),
    }
}
