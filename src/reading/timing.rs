use crate::reading::orp::calculate_orp;
use crate::reading::punctuation::extract_punctuation;
use crate::reading::ReadingUnit;
use std::time::Duration;

const SENTENCE_END: &[char] = &['.', '!', '/', '?'];
const CLAUSE_BREAK: &[char] = &['—', '–', '-', ';', ':'];
const QUOTATION: &[char] = &['"', '“', '”', '„', '«', '»'];
const BRACKET: &[char] = &['(', ')', '[', ']', '{', '}'];
const COMMA: &[char] = &[','];
const BYTE_ORDER_MARK: char = '\u{FEFF}';

const SENTENCE_END_PAUSE_MS: u64 = 300;
const CLAUSE_BREAK_PAUSE_MS: u64 = 200;
const QUOTATION_PAUSE_MS: u64 = 200;
const BRACKET_PAUSE_MS: u64 = 100;
const COMMA_PAUSE_MS: u64 = 150;
const LONG_WORD_PAUSE_MS: u64 = 50;

const LONG_WORD_CHARS: usize = 8;
const VERY_LONG_WORD_CHARS: usize = 12;

/// Ease-up starts playback at this share of the configured rate.
const EASE_UP_START_PERCENT: f64 = 70.0;

pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

/// Additive hold after a word, in milliseconds.
///
/// Every rule is checked independently and the results are summed; there is
/// no cap. Unpunctuated words shorter than eight characters get no pause.
pub fn calculate_pause_duration(word: &str, leading: &str, trailing: &str) -> u64 {
    let word_len = word.chars().count();
    if leading.is_empty() && trailing.is_empty() && word_len < LONG_WORD_CHARS {
        return 0;
    }

    let any = |set: &[char]| leading.contains(set) || trailing.contains(set);
    let mut pause = 0;

    // '/' counts as a sentence end.
    if trailing.contains(SENTENCE_END) {
        pause += SENTENCE_END_PAUSE_MS;
    }
    if any(CLAUSE_BREAK) {
        pause += CLAUSE_BREAK_PAUSE_MS;
    }
    if any(QUOTATION) {
        pause += QUOTATION_PAUSE_MS;
    }
    if any(BRACKET) {
        pause += BRACKET_PAUSE_MS;
    }
    if any(COMMA) {
        pause += COMMA_PAUSE_MS;
    }
    if word_len >= LONG_WORD_CHARS {
        pause += LONG_WORD_PAUSE_MS;
    }
    if word_len >= VERY_LONG_WORD_CHARS {
        pause += LONG_WORD_PAUSE_MS;
    }

    pause
}

/// Splits text on whitespace and annotates every token with its ORP and
/// pause. Output order matches input order; empty input gives no units.
pub fn tokenize_text(text: &str) -> Vec<ReadingUnit> {
    text.split(is_separator)
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            let fragments = extract_punctuation(raw);
            ReadingUnit {
                text: raw.to_string(),
                orp: calculate_orp(raw),
                pause_after: calculate_pause_duration(
                    fragments.clean_word,
                    fragments.leading,
                    fragments.trailing,
                ),
                punctuation: fragments.trailing.to_string(),
            }
        })
        .collect()
}

/// Whitespace, plus the byte-order mark, which editors leave at the start of
/// UTF-8 files.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Effective reading rate `elapsed` into playback.
///
/// With a non-zero `window` the rate climbs linearly from 70% of `wpm` to
/// the full rate; once the window has passed it is `wpm` unchanged.
pub fn ease_up_wpm(wpm: u32, elapsed: Duration, window: Duration) -> u32 {
    if window.is_zero() || elapsed >= window {
        return wpm.max(1);
    }
    let progress = elapsed.as_secs_f64() / window.as_secs_f64();
    let percent = EASE_UP_START_PERCENT + (100.0 - EASE_UP_START_PERCENT) * progress;
    ((wpm as f64 * percent / 100.0).round() as u32).max(1)
}

/// Total time a unit stays on screen at the given rate.
pub fn unit_delay(unit: &ReadingUnit, wpm: u32) -> Duration {
    Duration::from_millis(wpm_to_milliseconds(wpm) + unit.pause_after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_milliseconds_precision_350() {
        // 60,000 / 350 = 171.428... → 171
        assert_eq!(wpm_to_milliseconds(350), 171);
    }

    #[test]
    fn test_wpm_to_milliseconds_precision_165() {
        // 60,000 / 165 = 363.636... → rounds to 364, truncation would give 363
        assert_eq!(wpm_to_milliseconds(165), 364);
    }

    #[test]
    fn test_wpm_to_milliseconds_400() {
        assert_eq!(wpm_to_milliseconds(400), 150);
    }

    #[test]
    fn test_wpm_to_milliseconds_zero_guard() {
        assert_eq!(wpm_to_milliseconds(0), 60_000);
    }

    #[test]
    fn test_pause_short_unpunctuated_word() {
        assert_eq!(calculate_pause_duration("word", "", ""), 0);
    }

    #[test]
    fn test_pause_sentence_end() {
        assert_eq!(calculate_pause_duration("hello", "", "."), 300);
        assert_eq!(calculate_pause_duration("hello", "", "?"), 300);
        assert_eq!(calculate_pause_duration("hello", "", "!"), 300);
    }

    #[test]
    fn test_pause_sentence_end_only_counts_trailing() {
        // a leading '.' never reaches this function from the tokenizer, but
        // the rule itself only inspects the trailing fragment
        assert_eq!(calculate_pause_duration("hello", ".", ""), 0);
    }

    #[test]
    fn test_pause_slash_counts_as_sentence_end() {
        assert_eq!(calculate_pause_duration("and", "", "/"), 300);
    }

    #[test]
    fn test_pause_comma_and_long_word() {
        assert_eq!(calculate_pause_duration("elephant", "", ","), 200);
    }

    #[test]
    fn test_pause_long_word_without_punctuation() {
        assert_eq!(calculate_pause_duration("elephant", "", ""), 50);
        assert_eq!(calculate_pause_duration("extraordinary", "", ""), 100);
    }

    #[test]
    fn test_pause_clause_breaks() {
        assert_eq!(calculate_pause_duration("then", "", ";"), 200);
        assert_eq!(calculate_pause_duration("then", "", ":"), 200);
        assert_eq!(calculate_pause_duration("then", "", "—"), 200);
        assert_eq!(calculate_pause_duration("then", "", "-"), 200);
    }

    #[test]
    fn test_pause_quotes_and_brackets_stack() {
        // quote +200, bracket +100, period +300
        assert_eq!(calculate_pause_duration("end", "", "”)."), 600);
        // leading quote and bracket also count
        assert_eq!(calculate_pause_duration("start", "(“", ""), 300);
    }

    #[test]
    fn test_pause_every_rule() {
        // period 300 + dash 200 + quote 200 + bracket 100 + comma 150 + 50 + 50
        assert_eq!(
            calculate_pause_duration("extraordinary", "(\"", ",-.)"),
            1050
        );
    }

    #[test]
    fn test_tokenize_hello_world() {
        let units = tokenize_text("Hello, world!");
        assert_eq!(units.len(), 2);

        assert_eq!(units[0].text, "Hello,");
        assert_eq!(units[0].punctuation, ",");
        assert_eq!(units[0].orp, 1);
        assert_eq!(units[0].pause_after, 150);

        assert_eq!(units[1].text, "world!");
        assert_eq!(units[1].punctuation, "!");
        assert_eq!(units[1].orp, 1);
        assert_eq!(units[1].pause_after, 300);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize_text("").is_empty());
        assert!(tokenize_text("   ").is_empty());
        assert!(tokenize_text("\n\t \r\n").is_empty());
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        let units = tokenize_text("  one \n\n two\tthree  ");
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tokenize_keeps_raw_text() {
        let units = tokenize_text("(“Really?”)");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "(“Really?”)");
        assert_eq!(units[0].punctuation, "?”)");
        // span "Really" starts at 2, length 6 → 2 + 2
        assert_eq!(units[0].orp, 4);
        // sentence 300 + quote 200 + bracket 100
        assert_eq!(units[0].pause_after, 600);
    }

    #[test]
    fn test_tokenize_pause_uses_clean_word_length() {
        // "elephant," is nine characters raw but the word is eight
        let units = tokenize_text("elephant,");
        assert_eq!(units[0].pause_after, 200);
    }

    #[test]
    fn test_tokenize_punctuation_only_token() {
        let units = tokenize_text("wait — what");
        assert_eq!(units.len(), 3);
        assert_eq!(units[1].text, "—");
        assert_eq!(units[1].orp, 0);
        assert_eq!(units[1].punctuation, "—");
        assert_eq!(units[1].pause_after, 200);
    }

    #[test]
    fn test_tokenize_ignores_byte_order_mark() {
        let units = tokenize_text("\u{FEFF}Hello world");
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].text, "Hello");
        assert_eq!(units[0].orp, 1);

        assert!(tokenize_text("\u{FEFF}").is_empty());
        assert_eq!(tokenize_text("\u{FEFF}\nword").len(), 1);
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let text = "It was the best of times, it was the worst of times.";
        assert_eq!(tokenize_text(text), tokenize_text(text));
    }

    #[test]
    fn test_ease_up_ramp() {
        let window = Duration::from_secs(3);
        assert_eq!(ease_up_wpm(400, Duration::ZERO, window), 280);
        assert_eq!(ease_up_wpm(400, Duration::from_millis(1500), window), 340);
        assert_eq!(ease_up_wpm(400, window, window), 400);
        assert_eq!(ease_up_wpm(400, Duration::from_secs(10), window), 400);
    }

    #[test]
    fn test_ease_up_zero_window_disabled() {
        assert_eq!(ease_up_wpm(400, Duration::ZERO, Duration::ZERO), 400);
    }

    #[test]
    fn test_ease_up_never_zero() {
        assert_eq!(ease_up_wpm(1, Duration::ZERO, Duration::from_secs(3)), 1);
    }

    #[test]
    fn test_unit_delay_adds_pause() {
        let units = tokenize_text("world.");
        // 400 wpm = 150ms, plus 300ms sentence pause
        assert_eq!(unit_delay(&units[0], 400), Duration::from_millis(450));
    }
}
