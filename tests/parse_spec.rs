use std::collections::BTreeMap;

use model_validations::{
    ensure_valid, parse_spec_str, Attributes, Model, ParseError, RangeSpec, RuleEntry, SpecFormat,
    ValidationSpec,
};
use serde_json::Value;

struct SpecModel {
    attrs: BTreeMap<String, Value>,
    validations: ValidationSpec,
}

impl SpecModel {
    fn new(attrs: Value, validations: ValidationSpec) -> Self {
        let Value::Object(map) = attrs else {
            panic!("attrs fixture must be an object");
        };
        Self {
            attrs: map.into_iter().collect(),
            validations,
        }
    }
}

impl Attributes for SpecModel {
    fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }
}

impl Model for SpecModel {
    fn validations(&self) -> &ValidationSpec {
        &self.validations
    }
}

fn user_spec_yaml() -> &'static str {
    r#"
name:
  type: blank
  msg: Name cannot be empty
email:
  - type: blank
  - type: email
    altName: Email Address
age:
  range: [18, 25]
child.email:
  type: email
"#
}

#[test]
fn parse_yaml_and_evaluate() {
    let parsed = parse_spec_str(user_spec_yaml(), SpecFormat::Yaml).unwrap();

    let model = SpecModel::new(
        serde_json::json!({
            "name": "Steve",
            "email": "steve@example.com",
            "age": 21,
            "child": { "email": "kid@example.com" }
        }),
        parsed.spec,
    );
    assert_eq!(ensure_valid(&model).unwrap(), vec![]);
}

#[test]
fn parsed_spec_reports_failures_with_overrides() {
    let parsed = parse_spec_str(user_spec_yaml(), SpecFormat::Auto).unwrap();
    assert_eq!(parsed.format, SpecFormat::Yaml);

    let model = SpecModel::new(
        serde_json::json!({
            "name": "",
            "email": "not-an-email",
            "age": 17,
            "child": { "email": "kid@example.com" }
        }),
        parsed.spec,
    );

    let fails = ensure_valid(&model).unwrap();
    assert_eq!(fails.len(), 3);
    assert!(fails.iter().any(|f| f.key == "name" && f.msg == "Name cannot be empty"));
    assert!(fails.iter().any(|f| f.key == "Email Address"));
    assert!(fails.iter().any(|f| f.key == "age"));
}

#[test]
fn parse_auto_detects_json() {
    let json = r#"
{
  "email": { "type": "email" },
  "age": { "range": 18, "depends": { "name": "email" } }
}
"#;
    let parsed = parse_spec_str(json, SpecFormat::Auto).unwrap();
    assert_eq!(parsed.format, SpecFormat::Json);

    let RuleEntry::One(age) = &parsed.spec["age"] else {
        panic!("age should be a single definition");
    };
    assert_eq!(age.range, Some(RangeSpec::Min(18.0)));
    assert_eq!(age.depends.as_ref().unwrap().name, "email");
}

#[test]
fn unknown_rule_type_is_rejected() {
    let err = parse_spec_str(r#"{ "name": { "type": "phone" } }"#, SpecFormat::Json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn malformed_input_reports_the_resembled_format() {
    let err = parse_spec_str("{ not json", SpecFormat::Auto).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));

    let err = parse_spec_str("name: [unclosed", SpecFormat::Auto).unwrap_err();
    assert!(matches!(err, ParseError::Yaml(_)));
}
