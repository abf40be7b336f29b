//! Property-based tests for message resolution and tag substitution.

#[cfg(test)]
mod property_tests {
    use crate::config::ErrorFormatConfig;
    use crate::error::ValidationError;
    use crate::field::{Field, FormField};
    use crate::formatter::ErrorFormatter;
    use crate::i18n::{Catalog, Localizer};
    use crate::tags::replace_tags;
    use crate::value::Param;
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Localizer that records every key it is asked for.
    #[derive(Default)]
    struct KeyRecorder {
        catalog: Catalog,
        keys: Mutex<Vec<String>>,
    }

    impl Localizer for KeyRecorder {
        fn translate(&self, key: &str) -> Option<String> {
            self.keys.lock().unwrap().push(key.to_string());
            self.catalog.translate(key)
        }
    }

    fn rule_name_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z_]{0,20}"
    }

    fn label_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,30}"
    }

    fn error(label: &str, value: Value, rule: &str, params: Vec<Param>) -> ValidationError {
        let field: Arc<dyn Field> = Arc::new(FormField::new("field", label));
        ValidationError::new(field, value, rule, params)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // A rule without arguments is looked up exactly once, under
        // `validation.<rule>`.
        #[test]
        fn plain_rule_lookup_key(rule in rule_name_strategy()) {
            let recorder = Arc::new(KeyRecorder::default());
            let formatter = ErrorFormatter::builder().localizer_arc(recorder.clone()).build();

            formatter.message(&error("Name", json!(""), &rule, vec![]));

            let keys = recorder.keys.lock().unwrap().clone();
            prop_assert_eq!(keys, vec![format!("validation.{}", rule)]);
        }

        // A rule with arguments falls back to its base name when the full
        // name has no message.
        #[test]
        fn argument_rule_falls_back_to_base(
            base in rule_name_strategy(),
            args in "[0-9,]{1,10}",
        ) {
            let rule = format!("{}:{}", base, args);
            let recorder = Arc::new(KeyRecorder {
                catalog: Catalog::new().with(format!("validation.{}", base), "base message"),
                keys: Mutex::default(),
            });
            let formatter = ErrorFormatter::builder().localizer_arc(recorder.clone()).build();

            let message = formatter.message(&error("Name", json!(""), &rule, vec![]));

            prop_assert_eq!(message, "base message");
            let keys = recorder.keys.lock().unwrap().clone();
            prop_assert_eq!(
                keys,
                vec![format!("validation.{}", rule), format!("validation.{}", base)]
            );
        }

        // Without any message source the default names the rule and label.
        #[test]
        fn default_message_names_rule_and_label(
            rule in rule_name_strategy(),
            label in label_strategy(),
            open in "[<\\[]{0,2}",
            close in "[>\\]]{0,2}",
        ) {
            let formatter = ErrorFormatter::new();
            let err = error(&label, json!(""), &rule, vec![]);
            let message = formatter.format(&err, None, &open, &close);

            prop_assert_eq!(
                message,
                format!("{}Validation rule {} failed for {}{}", open, rule, label, close)
            );
        }

        // Messages without a colon come back unchanged.
        #[test]
        fn message_without_colon_is_unchanged(template in "[A-Za-z .!?]{0,60}") {
            prop_assume!(!template.is_empty());
            let formatter = ErrorFormatter::new();
            let message = formatter.format(
                &error("Name", json!(""), "required", vec![]),
                Some(&template),
                "",
                "",
            );
            prop_assert_eq!(message, template);
        }

        // Sequence values are joined with ", ".
        #[test]
        fn sequence_value_joined(items in prop::collection::vec("[a-z0-9]{0,8}", 0..6)) {
            let err = error("Name", json!(items.clone()), "in_list", vec![]);
            prop_assert_eq!(replace_tags(":value", &err, false), items.join(", "));
        }

        // Labels are quoted only when quoting is on and they contain a space.
        #[test]
        fn label_quoting(label in label_strategy(), quote in proptest::bool::ANY) {
            let err = error(&label, json!(""), "required", vec![]);
            let config = ErrorFormatConfig::new().quote_labels(quote);
            let formatter = ErrorFormatter::builder().config(config).build();

            let expected = if quote && label.contains(' ') {
                format!("\"{}\"", label)
            } else {
                label.clone()
            };
            prop_assert_eq!(formatter.format(&err, Some(":label"), "", ""), expected);
        }

        // Structured params render as "(array)" wherever they sit.
        #[test]
        fn structured_param_placeholder(
            before in prop::collection::vec(0i64..100, 0..5),
            after in prop::collection::vec(0i64..100, 0..5),
        ) {
            let mut params: Vec<Param> = before.iter().map(|n| Param::from(*n)).collect();
            params.push(Param::value(json!({"min": 1, "max": 2})));
            params.extend(after.iter().map(|n| Param::from(*n)));

            let position = before.len() + 1;
            let err = error("Name", json!(""), "custom", params);
            let template = format!("[:param:{}]", position);

            prop_assert_eq!(replace_tags(&template, &err, false), "[(array)]");
        }
    }
}
