use std::collections::HashSet;
use crate::models::endpoint_descriptor::EndpointDescriptor;
use crate::models::error::BuildError;

pub(crate) fn check_endpoints_names(endpoints: &[EndpointDescriptor]) -> Result<(), BuildError> {
    let mut names_set = HashSet::new();
    for endpoint in endpoints {
        if endpoint.name.trim().is_empty() {
            return Err(BuildError::InvalidTable("endpoint name must not be empty".to_string()));
        }
        if !names_set.insert(endpoint.name.as_str()) {
            return Err(BuildError::InvalidTable(format!("duplicate name: {}", endpoint.name)));
        }
    }
    Ok(())
}
