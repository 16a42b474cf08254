use proptest::prelude::*;
use projrun::project::template::{substitute, Placeholder};

// A token spelled with an arbitrary mix of upper and lower case letters.
fn cased_token(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        let body: String = word
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        format!("<{body}>")
    })
}

// Filler text that can never form a placeholder on its own.
fn filler() -> impl Strategy<Value = String> {
    "[a-z0-9 ./:-]{0,8}"
}

proptest! {
    #[test]
    fn every_url_occurrence_is_replaced(
        parts in proptest::collection::vec((filler(), cased_token("url")), 0..6),
        tail in filler(),
        value in "[a-z0-9:/.@-]{1,24}",
    ) {
        let mut template = String::new();
        let mut expected = String::new();
        for (text, token) in &parts {
            template.push_str(text);
            template.push_str(token);
            expected.push_str(text);
            expected.push_str(&value);
        }
        template.push_str(&tail);
        expected.push_str(&tail);

        let rendered = substitute(&template, Placeholder::Url, &value);
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn rendering_twice_gives_identical_bytes(
        template in "[a-z <>]{0,32}",
        value in "[a-z0-9]{0,12}",
    ) {
        let first = substitute(&template, Placeholder::Branch, &value);
        let second = substitute(&template, Placeholder::Branch, &value);
        prop_assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
