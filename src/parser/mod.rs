use crate::error::ParseError;
use crate::types::ValidationSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedSpec {
    pub spec: ValidationSpec,
    pub format: SpecFormat,
}

/// Parse a validation spec authored as JSON or YAML. Custom predicates
/// cannot be expressed on the wire; an unrecognized rule `type` is a
/// parse error.
pub fn parse_spec_str(input: &str, format: SpecFormat) -> Result<ParsedSpec, ParseError> {
    match format {
        SpecFormat::Json => Ok(ParsedSpec {
            spec: serde_json::from_str(input)?,
            format,
        }),
        SpecFormat::Yaml => Ok(ParsedSpec {
            spec: serde_yaml::from_str(input)?,
            format,
        }),
        SpecFormat::Auto => parse_spec_auto(input),
    }
}

fn parse_spec_auto(input: &str) -> Result<ParsedSpec, ParseError> {
    // Heuristic: a JSON spec starts with `{` after trimming.
    let looks_like_json = input.trim_start().starts_with('{');

    match serde_json::from_str::<ValidationSpec>(input) {
        Ok(spec) => Ok(ParsedSpec {
            spec,
            format: SpecFormat::Json,
        }),
        Err(json_err) => match serde_yaml::from_str::<ValidationSpec>(input) {
            Ok(spec) => Ok(ParsedSpec {
                spec,
                format: SpecFormat::Yaml,
            }),
            // Report the error from the format the input resembled.
            Err(_) if looks_like_json => Err(ParseError::Json(json_err)),
            Err(yaml_err) => Err(ParseError::Yaml(yaml_err)),
        },
    }
}
