use orp_reader::reading::{calculate_orp, tokenize_text, Playback};
use proptest::prelude::*;

fn prose() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"[A-Za-z0-9 .,;:!?'"()\-—«»é\n\t]{0,200}"#).unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Seek(usize),
    Back,
    Forward,
    Reset,
    NextSentence,
    PreviousSentence,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..400).prop_map(Op::Seek),
        Just(Op::Back),
        Just(Op::Forward),
        Just(Op::Reset),
        Just(Op::NextSentence),
        Just(Op::PreviousSentence),
    ]
}

proptest! {
    #[test]
    fn orp_is_inside_every_unit(text in prose()) {
        for unit in tokenize_text(&text) {
            prop_assert!(unit.orp < unit.text.chars().count(), "{:?}", unit);
        }
    }

    #[test]
    fn orp_for_any_token_is_in_bounds(token in "\\PC{1,40}") {
        prop_assert!(calculate_orp(&token) < token.chars().count());
    }

    #[test]
    fn tokenizing_is_deterministic(text in prose()) {
        prop_assert_eq!(tokenize_text(&text), tokenize_text(&text));
    }

    #[test]
    fn tokens_keep_input_order(text in prose()) {
        let units = tokenize_text(&text);
        let words: Vec<&str> = text.split_whitespace().collect();
        let texts: Vec<&str> = units.iter().map(|unit| unit.text.as_str()).collect();
        prop_assert_eq!(texts, words);
    }

    #[test]
    fn punctuation_is_a_suffix(text in prose()) {
        for unit in tokenize_text(&text) {
            prop_assert!(unit.text.ends_with(&unit.punctuation));
        }
    }

    #[test]
    fn whitespace_only_yields_nothing(text in "[ \t\n\r]{0,30}") {
        prop_assert!(tokenize_text(&text).is_empty());
    }

    #[test]
    fn navigation_keeps_index_in_range(text in prose(), ops in prop::collection::vec(op(), 0..40)) {
        let mut playback = Playback::new(tokenize_text(&text));
        for op in ops {
            match op {
                Op::Seek(index) => playback.seek(index),
                Op::Back => playback.back(),
                Op::Forward => playback.forward(),
                Op::Reset => playback.reset(),
                Op::NextSentence => {
                    playback.jump_to_next_sentence();
                }
                Op::PreviousSentence => {
                    playback.jump_to_previous_sentence();
                }
            }
            let (index, len) = playback.progress();
            prop_assert!(len == 0 && index == 0 || index < len);
        }
    }
}
