use prettytable::{format, row, Table};
use crate::models::endpoint_descriptor::EndpointDescriptor;

pub fn endpoint_table(endpoints: &[EndpointDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["#", "Name", "Method", "Path", "Body"]);
    for (index, endpoint) in endpoints.iter().enumerate() {
        table.add_row(row![
            index + 1,
            endpoint.name,
            endpoint.method,
            endpoint.path,
            endpoint.body.to_string()
        ]);
    }
    table
}

pub fn show_endpoint_table(endpoints: &[EndpointDescriptor]) {
    endpoint_table(endpoints).printstd();
}
