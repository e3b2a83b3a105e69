use serde::Serialize;

/// One annotated token in the reading sequence.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingUnit {
    /// The raw token as it appeared in the input, punctuation included.
    pub text: String,
    /// Character index into `text` of the fixation letter.
    pub orp: usize,
    /// Extra hold in milliseconds after this unit is shown.
    pub pause_after: u64,
    /// Trailing punctuation cluster, possibly empty.
    pub punctuation: String,
}

impl ReadingUnit {
    /// Splits `text` around the ORP character: (before, anchor, after).
    pub fn split_at_orp(&self) -> (String, Option<char>, String) {
        let mut before = String::new();
        let mut anchor = None;
        let mut after = String::new();
        for (i, c) in self.text.chars().enumerate() {
            if i < self.orp {
                before.push(c);
            } else if i == self.orp {
                anchor = Some(c);
            } else {
                after.push(c);
            }
        }
        (before, anchor, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(text: &str, orp: usize) -> ReadingUnit {
        ReadingUnit {
            text: text.to_string(),
            orp,
            pause_after: 0,
            punctuation: String::new(),
        }
    }

    #[test]
    fn test_split_at_orp() {
        let (before, anchor, after) = unit("reading", 2).split_at_orp();
        assert_eq!(before, "re");
        assert_eq!(anchor, Some('a'));
        assert_eq!(after, "ding");
    }

    #[test]
    fn test_split_at_orp_multibyte() {
        let (before, anchor, after) = unit("«déjà»", 2).split_at_orp();
        assert_eq!(before, "«d");
        assert_eq!(anchor, Some('é'));
        assert_eq!(after, "jà»");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&unit("cat", 1)).unwrap();
        assert_eq!(
            json,
            r#"{"text":"cat","orp":1,"pauseAfter":0,"punctuation":""}"#
        );
    }
}
