use schemars::{schema_for, JsonSchema};

use crate::error::{ErrorVerbosity, InternalServerError};

pub mod api_key;
pub mod json;
pub mod path;
pub mod query;
pub mod valid_api_key;

/// Renders the JSON schema of `T` as YAML for rejection messages.
///
/// Only rendered when the verbosity exposes error reasons.
fn expected_schema<T: JsonSchema>(verbosity: ErrorVerbosity) -> Result<String, InternalServerError> {
    if !verbosity.should_generate_error_reason() {
        return Ok(String::new());
    }

    serde_yaml::to_string(&schema_for!(T))
        .map_err(|err| InternalServerError::from_generic_error(verbosity, err))
}
